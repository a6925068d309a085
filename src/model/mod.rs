// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Metazoom-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Metazoom and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! A `Network` owns the parsed species, reactions, and compartments and
//! answers the four neighbor queries the layout engine runs on.

pub(crate) mod fixtures;
pub mod ids;
pub mod network;
pub mod node;

pub use ids::{CompartmentId, Id, IdError, ReactionId, SpeciesId};
pub use network::{Compartment, Network, NetworkError, Reaction, Species};
pub use node::{NodeKey, NodeKind, NodeRef};
