// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Metazoom-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Metazoom and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::ids::{CompartmentId, ReactionId, SpeciesId};
use super::network::{Compartment, Network, Reaction, Species};

fn sid(value: &str) -> SpeciesId {
    SpeciesId::new(value).expect("species id")
}

fn rid(value: &str) -> ReactionId {
    ReactionId::new(value).expect("reaction id")
}

/// A hand-built fragment of upper glycolysis, small enough to eyeball.
pub(crate) fn glycolysis_fragment() -> Network {
    let cytosol = CompartmentId::new("c").expect("compartment id");
    let compartments = vec![Compartment::new_with(
        cytosol.clone(),
        Some("cytosol".to_owned()),
        1,
    )];

    let species = vec![
        Species::new_with(sid("glc"), Some("D-Glucose".to_owned()), Some(cytosol.clone())),
        Species::new_with(sid("atp"), Some("ATP".to_owned()), Some(cytosol.clone())),
        Species::new_with(sid("g6p"), Some("Glucose 6-phosphate".to_owned()), Some(cytosol.clone())),
        Species::new_with(sid("adp"), Some("ADP".to_owned()), Some(cytosol.clone())),
        Species::new_with(sid("f6p"), Some("Fructose 6-phosphate".to_owned()), Some(cytosol.clone())),
        Species::new_with(sid("fbp"), Some("Fructose 1,6-bisphosphate".to_owned()), Some(cytosol)),
    ];

    let reactions = vec![
        Reaction::new_with(
            rid("HEX1"),
            Some("Hexokinase".to_owned()),
            false,
            vec![sid("glc"), sid("atp")],
            vec![sid("g6p"), sid("adp")],
        ),
        Reaction::new_with(
            rid("PGI"),
            Some("Glucose-6-phosphate isomerase".to_owned()),
            true,
            vec![sid("g6p")],
            vec![sid("f6p")],
        ),
        Reaction::new_with(
            rid("PFK"),
            Some("Phosphofructokinase".to_owned()),
            false,
            vec![sid("f6p"), sid("atp")],
            vec![sid("fbp"), sid("adp")],
        ),
    ];

    Network::new(compartments, species, reactions).expect("fixture network")
}

/// A network with reactions but no species at all (every list empty).
#[cfg(test)]
pub(crate) fn speciesless() -> Network {
    let reactions = vec![Reaction::new(rid("R_void"))];
    Network::new(Vec::new(), Vec::new(), reactions).expect("fixture network")
}

#[cfg(test)]
mod tests {
    #[test]
    fn glycolysis_fragment_is_wired_both_ways() {
        let network = super::glycolysis_fragment();
        let g6p = network.species_by_id("g6p").expect("g6p");
        let producing: Vec<&str> = network
            .reactions_producing(g6p)
            .iter()
            .map(|r| r.reaction_id().as_str())
            .collect();
        assert_eq!(producing, ["HEX1"]);
        let consuming: Vec<&str> = network
            .reactions_consuming(g6p)
            .iter()
            .map(|r| r.reaction_id().as_str())
            .collect();
        assert_eq!(consuming, ["PGI"]);
    }
}
