// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Metazoom-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Metazoom and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Pure layout of focus frames.

pub mod focus;
pub mod label;

pub use focus::{
    aligned_dx, layout_focus, Align, Column, ColumnGeometry, FocusLayout, FocusLayoutError,
    Placement, Viewport, COLUMN_GAP,
};
pub use label::{decorate_label, LabelMode};
