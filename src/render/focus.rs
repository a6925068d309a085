// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Metazoom-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Metazoom and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::layout::{FocusLayout, Viewport};

use super::text::canvas_to_frame_string;
use super::{Canvas, CanvasError};

/// Renders a focus layout to plain text, one line per viewport row.
///
/// Placements whose row falls below the column area are dropped; labels that
/// overhang the right edge are clipped. The bottom row carries the status
/// line, truncated to the viewport width.
pub fn render_focus_frame(
    layout: &FocusLayout,
    status: &str,
    viewport: Viewport,
) -> Result<String, CanvasError> {
    let mut canvas = Canvas::new(viewport.width(), viewport.height())?;
    if canvas.width() == 0 || canvas.height() == 0 {
        return Ok(canvas_to_frame_string(&canvas));
    }

    let geometry = layout.geometry();
    for placement in layout.placements() {
        if placement.row() >= geometry.col_height() {
            continue;
        }
        let x = geometry.base_x(placement.column()) + placement.dx();
        if x >= canvas.width() {
            continue;
        }
        canvas.write_str(x, placement.row(), placement.label())?;
    }

    canvas.write_str(0, canvas.height() - 1, status)?;
    Ok(canvas_to_frame_string(&canvas))
}
