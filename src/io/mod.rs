// Copyright (c) 2026, Filmroom Contributors
// SPDX-License-Identifier: BSD-3-Clause

//! I/O operations: persistence, project files, and roster CSV.

pub mod csv;
pub mod serialization;
pub mod store;
