// Copyright (c) 2025 Yakyunavi Project
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm_migration::prelude::*;

/// Migration CLI entry point.
#[async_std::main]
async fn main() {
    cli::run_cli(migration::Migrator).await;
}
