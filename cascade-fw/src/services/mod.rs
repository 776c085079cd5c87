// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Cascade contributors

//! Services run by the main loop.

pub mod report;
pub mod watch;

pub use report::StatusReportService;
pub use watch::SequenceWatchService;
