// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Metazoom-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Metazoom and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::layout::{LabelMode, Viewport};
use crate::model::fixtures::glycolysis_fragment;
use crate::model::{Network, NodeKey, NodeKind};

use super::{EmptyGraphError, FocusCommand, FocusState};

fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

#[test]
fn center_random_reaction_picks_a_known_reaction() {
    let network = glycolysis_fragment();
    let mut state = FocusState::new(Viewport::new(80, 24));

    state
        .center_on_random_reaction(&network, &mut rng(7))
        .expect("non-empty model");

    let key = state.focus().expect("focus set").clone();
    assert_eq!(key.kind(), NodeKind::Reaction);
    assert!(network.resolve(&key).is_some());
}

#[test]
fn seeded_selection_is_reproducible() {
    let network = glycolysis_fragment();

    let mut first = FocusState::new(Viewport::new(80, 24));
    let mut second = FocusState::new(Viewport::new(80, 24));
    first
        .center_on_random_species(&network, &mut rng(42))
        .expect("non-empty model");
    second
        .center_on_random_species(&network, &mut rng(42))
        .expect("non-empty model");

    assert_eq!(first.focus(), second.focus());
}

#[test]
fn empty_model_reports_and_keeps_previous_focus() {
    let network = Network::new(Vec::new(), Vec::new(), Vec::new()).expect("empty network");
    let mut state = FocusState::new(Viewport::new(80, 24));

    let err = state
        .center_on_random_reaction(&network, &mut rng(1))
        .unwrap_err();
    assert_eq!(err, EmptyGraphError::new(NodeKind::Reaction));
    assert_eq!(err.to_string(), "model contains no reaction nodes");
    assert_eq!(state.focus(), None);

    let err = state
        .center_on_random_species(&network, &mut rng(1))
        .unwrap_err();
    assert_eq!(err.kind(), NodeKind::Species);
}

#[test]
fn failed_selection_does_not_clear_an_existing_focus() {
    let full = glycolysis_fragment();
    let empty = Network::new(Vec::new(), Vec::new(), Vec::new()).expect("empty network");
    let mut state = FocusState::new(Viewport::new(80, 24));

    state
        .center_on_random_reaction(&full, &mut rng(3))
        .expect("non-empty model");
    let before = state.focus().cloned();

    assert!(state
        .apply(&empty, FocusCommand::CenterRandomSpecies, &mut rng(3))
        .is_err());
    assert_eq!(state.focus().cloned(), before);
}

#[test]
fn toggle_label_mode_flips_and_flips_back() {
    let network = glycolysis_fragment();
    let mut state = FocusState::new(Viewport::new(80, 24));
    assert_eq!(state.label_mode(), LabelMode::Id);

    state
        .apply(&network, FocusCommand::ToggleLabelMode, &mut rng(0))
        .expect("toggle");
    assert_eq!(state.label_mode(), LabelMode::Name);

    state
        .apply(&network, FocusCommand::ToggleLabelMode, &mut rng(0))
        .expect("toggle");
    assert_eq!(state.label_mode(), LabelMode::Id);
}

#[test]
fn resize_updates_the_viewport_and_keeps_focus() {
    let network = glycolysis_fragment();
    let mut state = FocusState::new(Viewport::new(80, 24));
    state
        .center_on_random_reaction(&network, &mut rng(5))
        .expect("non-empty model");
    let focus = state.focus().cloned();

    state
        .apply(
            &network,
            FocusCommand::Resize {
                width: 40,
                height: 10,
            },
            &mut rng(5),
        )
        .expect("resize");
    assert_eq!(state.viewport(), Viewport::new(40, 10));
    assert_eq!(state.focus().cloned(), focus);
}

#[test]
fn status_is_one_shot() {
    let mut state = FocusState::new(Viewport::new(80, 24));
    assert_eq!(state.take_status(), None);

    state.set_status("Welcome to MetaZoom");
    assert_eq!(state.take_status().as_deref(), Some("Welcome to MetaZoom"));
    assert_eq!(state.take_status(), None);
}

#[test]
fn center_on_accepts_an_explicit_key() {
    let network = glycolysis_fragment();
    let mut state = FocusState::new(Viewport::new(80, 24));

    let key = NodeKey::Species(
        network
            .species_by_id("g6p")
            .expect("fixture species")
            .species_id()
            .clone(),
    );
    state.center_on(key.clone());
    assert_eq!(state.focus(), Some(&key));
}
