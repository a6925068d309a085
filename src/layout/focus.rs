// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Metazoom-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Metazoom and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Focus layout engine.
//!
//! Computes the five-column neighborhood view around a focused node: the
//! focus in the center column, its immediate neighbors in the near columns,
//! and their neighbors in the far columns. The computation is a pure
//! function of the network, the focus key, the viewport, and the label
//! mode; it is rerun from scratch on every frame.

use std::fmt;

use crate::model::{Network, NodeKey, NodeRef, Reaction, Species};

use super::label::{decorate_label, LabelMode};

/// Blank cells between adjacent columns.
pub const COLUMN_GAP: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    width: usize,
    height: usize,
}

impl Viewport {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }
}

/// The five columns of a focus frame, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    LeftFar,
    LeftNear,
    Center,
    RightNear,
    RightFar,
}

impl Column {
    pub fn index(self) -> usize {
        match self {
            Self::LeftFar => 0,
            Self::LeftNear => 1,
            Self::Center => 2,
            Self::RightNear => 3,
            Self::RightFar => 4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// Horizontal offset of a label inside its column.
pub fn aligned_dx(align: Align, col_width: usize, label_width: usize) -> usize {
    match align {
        Align::Left => 0,
        Align::Center => col_width.saturating_sub(label_width) / 2,
        Align::Right => col_width.saturating_sub(label_width),
    }
}

/// Column grid derived from the viewport.
///
/// The bottom row of the viewport is reserved for the status line and is
/// not part of any column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnGeometry {
    col_width: usize,
    col_height: usize,
    v_center: usize,
}

impl ColumnGeometry {
    pub fn from_viewport(viewport: Viewport) -> Self {
        let col_width = viewport.width().saturating_sub(4 * COLUMN_GAP) / 5;
        let col_height = viewport.height().saturating_sub(1);
        Self {
            col_width,
            col_height,
            v_center: col_height / 2,
        }
    }

    pub fn col_width(&self) -> usize {
        self.col_width
    }

    pub fn col_height(&self) -> usize {
        self.col_height
    }

    pub fn v_center(&self) -> usize {
        self.v_center
    }

    /// Leftmost cell of a column.
    ///
    /// With zero-width columns the grid collapses and everything starts at
    /// the left edge.
    pub fn base_x(&self, column: Column) -> usize {
        if self.col_width == 0 {
            return 0;
        }
        column.index() * (self.col_width + COLUMN_GAP)
    }
}

/// One label placed on the grid.
///
/// `row` is relative to the top of the columns; `dx` is relative to the
/// column's base x. Rows past the column height may occur when a crowded
/// spacious block overflows; the renderer clips them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    key: NodeKey,
    column: Column,
    row: usize,
    dx: usize,
    label: String,
}

impl Placement {
    pub fn key(&self) -> &NodeKey {
        &self.key
    }

    pub fn column(&self) -> Column {
        self.column
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn dx(&self) -> usize {
        self.dx
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

/// The complete plan for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusLayout {
    geometry: ColumnGeometry,
    placements: Vec<Placement>,
}

impl FocusLayout {
    pub fn geometry(&self) -> &ColumnGeometry {
        &self.geometry
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// The focus placement. Always present; it is pushed first.
    pub fn center(&self) -> Option<&Placement> {
        self.placements
            .iter()
            .find(|placement| placement.column() == Column::Center)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FocusLayoutError {
    UnknownNode { key: NodeKey },
}

impl fmt::Display for FocusLayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownNode { key } => write!(f, "focus references unknown {key}"),
        }
    }
}

impl std::error::Error for FocusLayoutError {}

#[derive(Debug, Clone, Copy)]
enum Side {
    Left,
    Right,
}

impl Side {
    fn near_column(self) -> Column {
        match self {
            Self::Left => Column::LeftNear,
            Self::Right => Column::RightNear,
        }
    }

    fn far_column(self) -> Column {
        match self {
            Self::Left => Column::LeftFar,
            Self::Right => Column::RightFar,
        }
    }
}

/// Lays out the neighborhood of `focus` for one frame.
///
/// Fails only when `focus` names a node the network does not contain.
pub fn layout_focus(
    network: &Network,
    focus: &NodeKey,
    viewport: Viewport,
    mode: LabelMode,
) -> Result<FocusLayout, FocusLayoutError> {
    let node = network
        .resolve(focus)
        .ok_or_else(|| FocusLayoutError::UnknownNode { key: focus.clone() })?;
    let geometry = ColumnGeometry::from_viewport(viewport);
    let mut placements = Vec::new();

    if geometry.col_width() == 0 {
        // Too narrow for five columns; show only the focus against the
        // full viewport width.
        placements.push(make_placement(
            &node,
            Column::Center,
            geometry.v_center(),
            viewport.width(),
            Align::Center,
            mode,
        ));
        return Ok(FocusLayout { geometry, placements });
    }

    placements.push(make_placement(
        &node,
        Column::Center,
        geometry.v_center(),
        geometry.col_width(),
        Align::Center,
        mode,
    ));
    layout_side(network, &geometry, &node, Side::Left, mode, &mut placements);
    layout_side(network, &geometry, &node, Side::Right, mode, &mut placements);

    Ok(FocusLayout { geometry, placements })
}

fn make_placement(
    node: &NodeRef<'_>,
    column: Column,
    row: usize,
    col_width: usize,
    align: Align,
    mode: LabelMode,
) -> Placement {
    let label = decorate_label(node, mode, col_width);
    let dx = aligned_dx(align, col_width, label.chars().count());
    Placement {
        key: node.key(),
        column,
        row,
        dx,
        label,
    }
}

/// Near and far neighbors for one side of the focus.
///
/// The direction of travel determines which query runs: moving left from a
/// reaction reaches its reactants, moving right its products; moving left
/// from a species reaches the reactions producing it, moving right those
/// consuming it.
fn near_neighbors<'a>(network: &'a Network, node: &NodeRef<'a>, side: Side) -> Vec<NodeRef<'a>> {
    match (node, side) {
        (NodeRef::Reaction(reaction), Side::Left) => species_refs(network.reactants_of(reaction)),
        (NodeRef::Reaction(reaction), Side::Right) => species_refs(network.products_of(reaction)),
        (NodeRef::Species(species), Side::Left) => {
            reaction_refs(network.reactions_producing(species))
        }
        (NodeRef::Species(species), Side::Right) => {
            reaction_refs(network.reactions_consuming(species))
        }
    }
}

fn species_refs(species: Vec<&Species>) -> Vec<NodeRef<'_>> {
    species.into_iter().map(NodeRef::Species).collect()
}

fn reaction_refs(reactions: Vec<&Reaction>) -> Vec<NodeRef<'_>> {
    reactions.into_iter().map(NodeRef::Reaction).collect()
}

fn layout_side(
    network: &Network,
    geometry: &ColumnGeometry,
    focus: &NodeRef<'_>,
    side: Side,
    mode: LabelMode,
    placements: &mut Vec<Placement>,
) {
    let col_height = geometry.col_height();
    if col_height == 0 {
        return;
    }

    let mut near = near_neighbors(network, focus, side);
    near.truncate(col_height);
    if near.is_empty() {
        return;
    }

    // Far lists continue outward in the same direction.
    let far_lists: Vec<Vec<NodeRef<'_>>> = near
        .iter()
        .map(|node| near_neighbors(network, node, side))
        .collect();
    let total_far: usize = far_lists.iter().map(Vec::len).sum();

    // When the far column cannot hold everything, each near group gets an
    // equal share of the rows and groups pack back to back. Otherwise every
    // far neighbor is shown, groups are separated by a blank row, and the
    // block is centered vertically.
    let packed = total_far > col_height;
    let shown: Vec<usize> = if packed {
        let quota = col_height / near.len();
        far_lists.iter().map(|list| list.len().min(quota)).collect()
    } else {
        far_lists.iter().map(Vec::len).collect()
    };

    let mut cursor = if packed {
        0
    } else {
        let block_height: usize =
            shown.iter().map(|&s| s.max(1)).sum::<usize>() + (near.len() - 1);
        col_height.saturating_sub(block_height) / 2
    };

    for (idx, node) in near.iter().enumerate() {
        let group = shown[idx];
        if group > 0 {
            // The near label sits beside the middle of its far group.
            let near_row = cursor + (group - 1) / 2;
            placements.push(make_placement(
                node,
                side.near_column(),
                near_row,
                geometry.col_width(),
                Align::Left,
                mode,
            ));
            for far_node in far_lists[idx].iter().take(group) {
                placements.push(make_placement(
                    far_node,
                    side.far_column(),
                    cursor,
                    geometry.col_width(),
                    Align::Left,
                    mode,
                ));
                cursor += 1;
            }
        } else {
            placements.push(make_placement(
                node,
                side.near_column(),
                cursor,
                geometry.col_width(),
                Align::Left,
                mode,
            ));
            cursor += 1;
        }
        if !packed && idx + 1 < near.len() {
            cursor += 1;
        }
    }
}
