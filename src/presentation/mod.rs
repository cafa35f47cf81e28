// Copyright (c) 2025 Yakyunavi Project
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod errors;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod routes;
