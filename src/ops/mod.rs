// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Metazoom-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Metazoom and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Focus-state transitions.
//!
//! Key presses decode to `FocusCommand`s; applying a command mutates the
//! `FocusState` that the next frame is laid out from. Random node selection
//! draws from a caller-supplied `Rng` so tests can seed it.

use std::fmt;

use rand::Rng;

use crate::layout::{LabelMode, Viewport};
use crate::model::{Network, NodeKey, NodeKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusCommand {
    CenterRandomReaction,
    CenterRandomSpecies,
    ToggleLabelMode,
    Resize { width: usize, height: usize },
    Noop,
}

/// The model has no node of the requested kind to center on.
///
/// Non-fatal: the caller reports it on the status line and keeps running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyGraphError {
    kind: NodeKind,
}

impl EmptyGraphError {
    pub fn new(kind: NodeKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }
}

impl fmt::Display for EmptyGraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "model contains no {} nodes", self.kind)
    }
}

impl std::error::Error for EmptyGraphError {}

/// What the next frame is computed from: the focused node, the label mode,
/// and the viewport, plus a one-shot status message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusState {
    focus: Option<NodeKey>,
    label_mode: LabelMode,
    viewport: Viewport,
    status: Option<String>,
}

impl FocusState {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            focus: None,
            label_mode: LabelMode::default(),
            viewport,
            status: None,
        }
    }

    pub fn focus(&self) -> Option<&NodeKey> {
        self.focus.as_ref()
    }

    pub fn label_mode(&self) -> LabelMode {
        self.label_mode
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = Some(status.into());
    }

    /// Takes the pending status message, leaving none. A message set by one
    /// command shows for exactly one frame.
    pub fn take_status(&mut self) -> Option<String> {
        self.status.take()
    }

    pub fn center_on(&mut self, key: NodeKey) {
        self.focus = Some(key);
    }

    pub fn center_on_random_reaction(
        &mut self,
        network: &Network,
        rng: &mut impl Rng,
    ) -> Result<(), EmptyGraphError> {
        let reactions = network.reactions();
        if reactions.is_empty() {
            return Err(EmptyGraphError::new(NodeKind::Reaction));
        }
        let pick = &reactions[rng.gen_range(0..reactions.len())];
        self.focus = Some(NodeKey::Reaction(pick.reaction_id().clone()));
        Ok(())
    }

    pub fn center_on_random_species(
        &mut self,
        network: &Network,
        rng: &mut impl Rng,
    ) -> Result<(), EmptyGraphError> {
        let species = network.species();
        if species.is_empty() {
            return Err(EmptyGraphError::new(NodeKind::Species));
        }
        let pick = &species[rng.gen_range(0..species.len())];
        self.focus = Some(NodeKey::Species(pick.species_id().clone()));
        Ok(())
    }

    /// Applies one command.
    ///
    /// An `EmptyGraphError` leaves the previous focus untouched.
    pub fn apply(
        &mut self,
        network: &Network,
        command: FocusCommand,
        rng: &mut impl Rng,
    ) -> Result<(), EmptyGraphError> {
        match command {
            FocusCommand::CenterRandomReaction => self.center_on_random_reaction(network, rng),
            FocusCommand::CenterRandomSpecies => self.center_on_random_species(network, rng),
            FocusCommand::ToggleLabelMode => {
                self.label_mode = self.label_mode.toggled();
                Ok(())
            }
            FocusCommand::Resize { width, height } => {
                self.viewport = Viewport::new(width, height);
                Ok(())
            }
            FocusCommand::Noop => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests;
