// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Metazoom-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Metazoom and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::NodeRef;

/// Whether labels show the entity id or its display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelMode {
    #[default]
    Id,
    Name,
}

impl LabelMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Id => Self::Name,
            Self::Name => Self::Id,
        }
    }
}

/// Resolves the text for a node under the given mode.
///
/// An unset display name falls back to the id, so Name mode never produces an
/// empty label.
pub(crate) fn node_text<'a>(node: &NodeRef<'a>, mode: LabelMode) -> &'a str {
    match mode {
        LabelMode::Id => node.raw_id(),
        LabelMode::Name => node.display_name().unwrap_or_else(|| node.raw_id()),
    }
}

/// Decorates a node label with its kind's bracket style, truncating against
/// `max_width`.
///
/// Reactions render as `[text]`, species as `(text)`. A label longer than
/// `max_width` keeps the first `max_width - 1` chars of the raw text and a
/// `…` continuation marker inside the brackets; the canvas clips whatever
/// still overhangs the column.
pub fn decorate_label(node: &NodeRef<'_>, mode: LabelMode, max_width: usize) -> String {
    let (open, close) = match node {
        NodeRef::Reaction(_) => ('[', ']'),
        NodeRef::Species(_) => ('(', ')'),
    };
    let text = node_text(node, mode);

    let decorated_len = text.chars().count() + 2;
    if decorated_len <= max_width {
        return format!("{open}{text}{close}");
    }
    if max_width == 0 {
        return String::new();
    }

    let keep = max_width - 1;
    let mut out = String::with_capacity(max_width + 2);
    out.push(open);
    out.extend(text.chars().take(keep));
    out.push('…');
    out.push(close);
    out
}
