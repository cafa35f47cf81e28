// Copyright (c) 2025 Yakyunavi Project
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Domain service module.
///
/// - directory: faceted filtering over the embedded team dataset
/// - submission_gate: IP-block and duplicate-review checks in front of the
///   feedbacks table
pub mod directory;
pub mod submission_gate;
