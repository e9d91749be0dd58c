// Copyright (c) 2026, Filmroom Contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Data model for the Filmroom application.

pub mod annotation;
pub mod athlete;
pub mod project;
