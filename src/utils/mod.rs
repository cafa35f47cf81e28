// Copyright (c) 2025 Yakyunavi Project
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Utility module.
///
/// Telemetry setup shared by the binary and the integration tests.
pub mod telemetry;
