// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Metazoom-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Metazoom and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use super::ids::{ReactionId, SpeciesId};
use super::network::{Reaction, Species};

/// The two node kinds of the bipartite network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Reaction,
    Species,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reaction => f.write_str("reaction"),
            Self::Species => f.write_str("species"),
        }
    }
}

/// A borrowed node. The closed variant set is what lets neighbor selection be
/// an exhaustive `match` instead of run-time type inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeRef<'a> {
    Reaction(&'a Reaction),
    Species(&'a Species),
}

impl<'a> NodeRef<'a> {
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Reaction(_) => NodeKind::Reaction,
            Self::Species(_) => NodeKind::Species,
        }
    }

    pub fn raw_id(&self) -> &'a str {
        match self {
            Self::Reaction(reaction) => reaction.reaction_id().as_str(),
            Self::Species(species) => species.species_id().as_str(),
        }
    }

    pub fn display_name(&self) -> Option<&'a str> {
        match self {
            Self::Reaction(reaction) => reaction.name(),
            Self::Species(species) => species.name(),
        }
    }

    pub fn key(&self) -> NodeKey {
        match self {
            Self::Reaction(reaction) => NodeKey::Reaction(reaction.reaction_id().clone()),
            Self::Species(species) => NodeKey::Species(species.species_id().clone()),
        }
    }
}

/// An owned handle to a node, held across frames by the focus state.
///
/// Carrying the kind and the id in one variant keeps the centering mode and
/// the focused entity's kind consistent by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKey {
    Reaction(ReactionId),
    Species(SpeciesId),
}

impl NodeKey {
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Reaction(_) => NodeKind::Reaction,
            Self::Species(_) => NodeKind::Species,
        }
    }

    pub fn id_str(&self) -> &str {
        match self {
            Self::Reaction(reaction_id) => reaction_id.as_str(),
            Self::Species(species_id) => species_id.as_str(),
        }
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind(), self.id_str())
    }
}

#[cfg(test)]
mod tests {
    use super::{NodeKey, NodeKind, NodeRef};
    use crate::model::ids::{ReactionId, SpeciesId};
    use crate::model::network::{Reaction, Species};

    #[test]
    fn node_ref_reports_kind_and_id() {
        let species = Species::new(SpeciesId::new("S1").expect("id"));
        let node = NodeRef::Species(&species);
        assert_eq!(node.kind(), NodeKind::Species);
        assert_eq!(node.raw_id(), "S1");
        assert_eq!(node.display_name(), None);
        assert_eq!(node.key(), NodeKey::Species(SpeciesId::new("S1").expect("id")));
    }

    #[test]
    fn node_key_matches_entity_kind() {
        let reaction = Reaction::new(ReactionId::new("R1").expect("id"));
        let key = NodeRef::Reaction(&reaction).key();
        assert_eq!(key.kind(), NodeKind::Reaction);
        assert_eq!(key.id_str(), "R1");
        assert_eq!(key.to_string(), "reaction R1");
    }
}
