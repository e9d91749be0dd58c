// Copyright (c) 2026, Filmroom Contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Small shared utilities.

pub mod format;
pub mod geometry;
