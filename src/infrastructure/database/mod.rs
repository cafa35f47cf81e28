// Copyright (c) 2025 Yakyunavi Project
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Database module.
///
/// Connection pooling and entity definitions for the managed Postgres
/// datastore.
pub mod connection;
pub mod entities;
