// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Metazoom-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Metazoom and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Metazoom — terminal focus visualizer for genome-scale metabolic models.
//!
//! The crate is a single-crate layout: `format` parses SBML into the typed
//! `model`, `layout` computes a focus-centered plan for one frame, `render`
//! writes the plan onto a character canvas, `ops` applies focus commands,
//! and `tui` is the interactive shell.

pub mod format;
pub mod layout;
pub mod model;
pub mod ops;
pub mod render;
pub mod tui;
