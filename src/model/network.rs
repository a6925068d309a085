// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Metazoom-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Metazoom and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;
use std::fmt;

use super::ids::{CompartmentId, ReactionId, SpeciesId};
use super::node::NodeKey;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compartment {
    compartment_id: CompartmentId,
    name: Option<String>,
    size: u32,
}

impl Compartment {
    pub fn new(compartment_id: CompartmentId) -> Self {
        Self {
            compartment_id,
            name: None,
            size: 1,
        }
    }

    pub fn new_with(compartment_id: CompartmentId, name: Option<String>, size: u32) -> Self {
        Self {
            compartment_id,
            name,
            size,
        }
    }

    pub fn compartment_id(&self) -> &CompartmentId {
        &self.compartment_id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn size(&self) -> u32 {
        self.size
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Species {
    species_id: SpeciesId,
    name: Option<String>,
    compartment_id: Option<CompartmentId>,
}

impl Species {
    pub fn new(species_id: SpeciesId) -> Self {
        Self {
            species_id,
            name: None,
            compartment_id: None,
        }
    }

    pub fn new_with(
        species_id: SpeciesId,
        name: Option<String>,
        compartment_id: Option<CompartmentId>,
    ) -> Self {
        Self {
            species_id,
            name,
            compartment_id,
        }
    }

    pub fn species_id(&self) -> &SpeciesId {
        &self.species_id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn compartment_id(&self) -> Option<&CompartmentId> {
        self.compartment_id.as_ref()
    }
}

/// A reaction with ordered reactant and product references.
///
/// The reference order is the model-file document order; the layout engine
/// relies on it for deterministic truncation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    reaction_id: ReactionId,
    name: Option<String>,
    reversible: bool,
    reactants: Vec<SpeciesId>,
    products: Vec<SpeciesId>,
}

impl Reaction {
    pub fn new(reaction_id: ReactionId) -> Self {
        Self {
            reaction_id,
            name: None,
            // SBML Level 2 default.
            reversible: true,
            reactants: Vec::new(),
            products: Vec::new(),
        }
    }

    pub fn new_with(
        reaction_id: ReactionId,
        name: Option<String>,
        reversible: bool,
        reactants: Vec<SpeciesId>,
        products: Vec<SpeciesId>,
    ) -> Self {
        Self {
            reaction_id,
            name,
            reversible,
            reactants,
            products,
        }
    }

    pub fn reaction_id(&self) -> &ReactionId {
        &self.reaction_id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn reversible(&self) -> bool {
        self.reversible
    }

    pub fn reactants(&self) -> &[SpeciesId] {
        &self.reactants
    }

    pub fn products(&self) -> &[SpeciesId] {
        &self.products
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    DuplicateCompartmentId { compartment_id: CompartmentId },
    DuplicateSpeciesId { species_id: SpeciesId },
    DuplicateReactionId { reaction_id: ReactionId },
    UnknownCompartment { species_id: SpeciesId, compartment_id: CompartmentId },
    UnknownReactant { reaction_id: ReactionId, species_id: SpeciesId },
    UnknownProduct { reaction_id: ReactionId, species_id: SpeciesId },
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateCompartmentId { compartment_id } => {
                write!(f, "duplicate compartment id: {compartment_id}")
            }
            Self::DuplicateSpeciesId { species_id } => {
                write!(f, "duplicate species id: {species_id}")
            }
            Self::DuplicateReactionId { reaction_id } => {
                write!(f, "duplicate reaction id: {reaction_id}")
            }
            Self::UnknownCompartment {
                species_id,
                compartment_id,
            } => write!(
                f,
                "species {species_id} references unknown compartment {compartment_id}"
            ),
            Self::UnknownReactant {
                reaction_id,
                species_id,
            } => write!(
                f,
                "reaction {reaction_id} references unknown reactant species {species_id}"
            ),
            Self::UnknownProduct {
                reaction_id,
                species_id,
            } => write!(
                f,
                "reaction {reaction_id} references unknown product species {species_id}"
            ),
        }
    }
}

impl std::error::Error for NetworkError {}

/// The parsed bipartite metabolic network.
///
/// Built once at startup and never mutated afterwards. All cross-entity
/// references are validated during construction, so the neighbor queries can
/// resolve ids unconditionally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Network {
    compartments: Vec<Compartment>,
    species: Vec<Species>,
    reactions: Vec<Reaction>,
    species_index: BTreeMap<SpeciesId, usize>,
    reaction_index: BTreeMap<ReactionId, usize>,
    // Reaction indices in document order, keyed by the species they touch.
    producing: BTreeMap<SpeciesId, Vec<usize>>,
    consuming: BTreeMap<SpeciesId, Vec<usize>>,
}

impl Network {
    pub fn new(
        compartments: Vec<Compartment>,
        species: Vec<Species>,
        reactions: Vec<Reaction>,
    ) -> Result<Self, NetworkError> {
        let mut compartment_index = BTreeMap::<CompartmentId, usize>::new();
        for (idx, compartment) in compartments.iter().enumerate() {
            if compartment_index
                .insert(compartment.compartment_id().clone(), idx)
                .is_some()
            {
                return Err(NetworkError::DuplicateCompartmentId {
                    compartment_id: compartment.compartment_id().clone(),
                });
            }
        }

        let mut species_index = BTreeMap::<SpeciesId, usize>::new();
        for (idx, one) in species.iter().enumerate() {
            if species_index.insert(one.species_id().clone(), idx).is_some() {
                return Err(NetworkError::DuplicateSpeciesId {
                    species_id: one.species_id().clone(),
                });
            }
            if let Some(compartment_id) = one.compartment_id() {
                if !compartment_index.contains_key(compartment_id) {
                    return Err(NetworkError::UnknownCompartment {
                        species_id: one.species_id().clone(),
                        compartment_id: compartment_id.clone(),
                    });
                }
            }
        }

        let mut reaction_index = BTreeMap::<ReactionId, usize>::new();
        let mut producing = BTreeMap::<SpeciesId, Vec<usize>>::new();
        let mut consuming = BTreeMap::<SpeciesId, Vec<usize>>::new();
        for (idx, reaction) in reactions.iter().enumerate() {
            if reaction_index
                .insert(reaction.reaction_id().clone(), idx)
                .is_some()
            {
                return Err(NetworkError::DuplicateReactionId {
                    reaction_id: reaction.reaction_id().clone(),
                });
            }
            for species_id in reaction.reactants() {
                if !species_index.contains_key(species_id) {
                    return Err(NetworkError::UnknownReactant {
                        reaction_id: reaction.reaction_id().clone(),
                        species_id: species_id.clone(),
                    });
                }
                consuming.entry(species_id.clone()).or_default().push(idx);
            }
            for species_id in reaction.products() {
                if !species_index.contains_key(species_id) {
                    return Err(NetworkError::UnknownProduct {
                        reaction_id: reaction.reaction_id().clone(),
                        species_id: species_id.clone(),
                    });
                }
                producing.entry(species_id.clone()).or_default().push(idx);
            }
        }

        Ok(Self {
            compartments,
            species,
            reactions,
            species_index,
            reaction_index,
            producing,
            consuming,
        })
    }

    pub fn compartments(&self) -> &[Compartment] {
        &self.compartments
    }

    pub fn species(&self) -> &[Species] {
        &self.species
    }

    pub fn reactions(&self) -> &[Reaction] {
        &self.reactions
    }

    pub fn species_by_id(&self, species_id: &str) -> Option<&Species> {
        let idx = *self.species_index.get(species_id)?;
        Some(&self.species[idx])
    }

    pub fn reaction_by_id(&self, reaction_id: &str) -> Option<&Reaction> {
        let idx = *self.reaction_index.get(reaction_id)?;
        Some(&self.reactions[idx])
    }

    /// Reactant species of `reaction`, in document order.
    pub fn reactants_of(&self, reaction: &Reaction) -> Vec<&Species> {
        self.species_refs(reaction.reactants())
    }

    /// Product species of `reaction`, in document order.
    pub fn products_of(&self, reaction: &Reaction) -> Vec<&Species> {
        self.species_refs(reaction.products())
    }

    /// Reactions that produce `species`, in document order.
    pub fn reactions_producing(&self, species: &Species) -> Vec<&Reaction> {
        self.reaction_refs(self.producing.get(species.species_id().as_str()))
    }

    /// Reactions that consume `species`, in document order.
    pub fn reactions_consuming(&self, species: &Species) -> Vec<&Reaction> {
        self.reaction_refs(self.consuming.get(species.species_id().as_str()))
    }

    pub fn resolve(&self, key: &NodeKey) -> Option<super::node::NodeRef<'_>> {
        match key {
            NodeKey::Reaction(reaction_id) => self
                .reaction_by_id(reaction_id.as_str())
                .map(super::node::NodeRef::Reaction),
            NodeKey::Species(species_id) => self
                .species_by_id(species_id.as_str())
                .map(super::node::NodeRef::Species),
        }
    }

    fn species_refs(&self, ids: &[SpeciesId]) -> Vec<&Species> {
        ids.iter()
            .map(|species_id| {
                let idx = *self
                    .species_index
                    .get(species_id)
                    .expect("species id validated at construction");
                &self.species[idx]
            })
            .collect()
    }

    fn reaction_refs(&self, indices: Option<&Vec<usize>>) -> Vec<&Reaction> {
        indices
            .map(|indices| indices.iter().map(|&idx| &self.reactions[idx]).collect())
            .unwrap_or_default()
    }
}
