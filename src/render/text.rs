// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Metazoom-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Metazoom and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::Canvas;

/// Serializes a canvas to one line per row, trailing spaces removed.
///
/// Unlike a free-form drawing, a focus frame keeps its full row count so the
/// frame stays viewport-shaped; blank rows are preserved as empty lines.
pub(crate) fn canvas_to_frame_string(canvas: &Canvas) -> String {
    let mut lines = Vec::<String>::with_capacity(canvas.height());
    for y in 0..canvas.height() {
        let mut line = String::with_capacity(canvas.width());
        for x in 0..canvas.width() {
            // (x, y) is in bounds by construction.
            let ch = canvas.get(x, y).expect("in bounds");
            line.push(ch);
        }

        lines.push(line.trim_end_matches(' ').to_owned());
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::canvas_to_frame_string;
    use crate::render::Canvas;

    #[test]
    fn frame_string_trims_right_but_keeps_blank_rows() {
        let mut canvas = Canvas::new(4, 3).expect("canvas");
        canvas.set(0, 0, 'A').expect("set");
        canvas.set(1, 2, 'B').expect("set");
        assert_eq!(canvas_to_frame_string(&canvas), "A\n\n B");
    }
}
