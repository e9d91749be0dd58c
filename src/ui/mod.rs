// Copyright (c) 2026, Filmroom Contributors
// SPDX-License-Identifier: BSD-3-Clause

//! UI components for the Filmroom application.

pub mod canvas;
pub mod playback;
pub mod roster;
pub mod timestamps;
pub mod toolbar;
