// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Metazoom-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Metazoom and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! SBML model-file parsing.
//!
//! `parse_model` walks `sbml > model > listOf{Compartments,Species,Reactions}`
//! and builds a validated [`Network`]. Namespace prefixes declared on the root
//! element are carried in an explicit [`ParseContext`] value threaded through
//! the walk; nothing is stored globally.

use std::fmt;

use crate::model::{
    Compartment, CompartmentId, IdError, Network, NetworkError, Reaction, ReactionId, Species,
    SpeciesId,
};

mod xml;

pub use xml::XmlError;

use xml::{split_name, StartTag, XmlEvent, XmlScanner};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SbmlParseError {
    Xml(XmlError),
    MissingSbmlRoot,
    UnexpectedClose { name: String },
    MismatchedClose { expected: String, found: String },
    UnclosedElement { name: String },
    UnexpectedElement { element: String },
    MissingAttribute { element: String, attribute: &'static str },
    InvalidId { element: String, value: String, reason: IdError },
    InvalidAttributeValue { element: String, attribute: &'static str, value: String },
    Model(NetworkError),
}

impl fmt::Display for SbmlParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Xml(err) => write!(f, "invalid XML: {err}"),
            Self::MissingSbmlRoot => f.write_str("expected an <sbml> root element"),
            Self::UnexpectedClose { name } => {
                write!(f, "closing tag </{name}> without a matching opening tag")
            }
            Self::MismatchedClose { expected, found } => {
                write!(f, "expected closing tag </{expected}>, found </{found}>")
            }
            Self::UnclosedElement { name } => write!(f, "element <{name}> is never closed"),
            Self::UnexpectedElement { element } => {
                write!(f, "element <{element}> is not allowed here")
            }
            Self::MissingAttribute { element, attribute } => {
                write!(f, "<{element}> is missing the required '{attribute}' attribute")
            }
            Self::InvalidId {
                element,
                value,
                reason,
            } => write!(f, "invalid id {value:?} on <{element}>: {reason}"),
            Self::InvalidAttributeValue {
                element,
                attribute,
                value,
            } => write!(f, "invalid '{attribute}' value {value:?} on <{element}>"),
            Self::Model(err) => write!(f, "invalid model: {err}"),
        }
    }
}

impl std::error::Error for SbmlParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Xml(err) => Some(err),
            Self::Model(err) => Some(err),
            _ => None,
        }
    }
}

impl From<XmlError> for SbmlParseError {
    fn from(err: XmlError) -> Self {
        Self::Xml(err)
    }
}

impl From<NetworkError> for SbmlParseError {
    fn from(err: NetworkError) -> Self {
        Self::Model(err)
    }
}

/// Namespace context collected from the root element.
///
/// SBML documents either use a default namespace or a prefix; element matching
/// goes through `local`, which strips any prefix declared on the root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseContext {
    default_namespace: Option<String>,
    declared_prefixes: Vec<String>,
}

impl ParseContext {
    fn from_root(root: &StartTag<'_>) -> Self {
        let mut context = Self::default();
        for (name, value) in root.attrs() {
            if *name == "xmlns" {
                context.default_namespace = Some(value.clone());
            } else if let ("xmlns", prefix) = split_name(name) {
                if !prefix.is_empty() {
                    context.declared_prefixes.push(prefix.to_owned());
                }
            }
        }
        context
    }

    pub fn default_namespace(&self) -> Option<&str> {
        self.default_namespace.as_deref()
    }

    /// Resolves a possibly-prefixed element name to its local part, as long
    /// as the prefix was declared on the root element.
    fn local<'b>(&self, name: &'b str) -> &'b str {
        let (prefix, local) = split_name(name);
        if prefix.is_empty() || self.declared_prefixes.iter().any(|p| p == prefix) {
            local
        } else {
            name
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RefSide {
    Reactants,
    Products,
}

struct PendingReaction {
    reaction_id: ReactionId,
    name: Option<String>,
    reversible: bool,
    reactants: Vec<SpeciesId>,
    products: Vec<SpeciesId>,
}

impl PendingReaction {
    fn into_reaction(self) -> Reaction {
        Reaction::new_with(
            self.reaction_id,
            self.name,
            self.reversible,
            self.reactants,
            self.products,
        )
    }
}

/// Parses an SBML document into a validated network.
pub fn parse_model(input: &str) -> Result<Network, SbmlParseError> {
    let mut scanner = XmlScanner::new(input);

    let root = match scanner.next_event()? {
        Some(XmlEvent::Start(tag)) => tag,
        Some(XmlEvent::End(name)) => {
            return Err(SbmlParseError::UnexpectedClose { name: name.to_owned() })
        }
        None => return Err(SbmlParseError::MissingSbmlRoot),
    };
    let context = ParseContext::from_root(&root);
    if context.local(root.name()) != "sbml" {
        return Err(SbmlParseError::MissingSbmlRoot);
    }

    let mut compartments = Vec::<Compartment>::new();
    let mut species = Vec::<Species>::new();
    let mut reactions = Vec::<Reaction>::new();

    if root.self_closing() {
        return Ok(Network::new(compartments, species, reactions)?);
    }

    let mut open_stack = vec![root.name().to_owned()];
    let mut pending: Option<PendingReaction> = None;
    let mut ref_side: Option<RefSide> = None;

    while let Some(event) = scanner.next_event()? {
        match event {
            XmlEvent::Start(tag) => {
                let local = context.local(tag.name());
                match local {
                    "compartment" => compartments.push(parse_compartment(&tag, local)?),
                    "species" => species.push(parse_species(&tag, local)?),
                    "reaction" => {
                        if pending.is_some() {
                            return Err(SbmlParseError::UnexpectedElement {
                                element: local.to_owned(),
                            });
                        }
                        pending = Some(parse_reaction_open(&tag, local)?);
                    }
                    "listOfReactants" if pending.is_some() => ref_side = Some(RefSide::Reactants),
                    "listOfProducts" if pending.is_some() => ref_side = Some(RefSide::Products),
                    "speciesReference" => {
                        if let (Some(pending), Some(side)) = (pending.as_mut(), ref_side) {
                            let species_id = required_id::<crate::model::ids::SpeciesIdTag>(
                                &tag, local, "species",
                            )?;
                            match side {
                                RefSide::Reactants => pending.reactants.push(species_id),
                                RefSide::Products => pending.products.push(species_id),
                            }
                        }
                    }
                    // notes, annotations, kineticLaw, units, modifiers: skipped.
                    _ => {}
                }

                if !tag.self_closing() {
                    open_stack.push(tag.name().to_owned());
                } else if local == "reaction" {
                    let done = pending.take().expect("pending reaction just set");
                    reactions.push(done.into_reaction());
                    ref_side = None;
                }
            }
            XmlEvent::End(name) => {
                let expected = open_stack
                    .pop()
                    .ok_or_else(|| SbmlParseError::UnexpectedClose { name: name.to_owned() })?;
                if expected != name {
                    return Err(SbmlParseError::MismatchedClose {
                        expected,
                        found: name.to_owned(),
                    });
                }
                match context.local(name) {
                    "reaction" => {
                        if let Some(done) = pending.take() {
                            reactions.push(done.into_reaction());
                        }
                        ref_side = None;
                    }
                    "listOfReactants" | "listOfProducts" => ref_side = None,
                    _ => {}
                }
            }
        }
    }

    if let Some(name) = open_stack.pop() {
        return Err(SbmlParseError::UnclosedElement { name });
    }

    Ok(Network::new(compartments, species, reactions)?)
}

fn required_id<T>(
    tag: &StartTag<'_>,
    element: &str,
    attribute: &'static str,
) -> Result<crate::model::Id<T>, SbmlParseError> {
    let value = tag
        .attr(attribute)
        .ok_or_else(|| SbmlParseError::MissingAttribute {
            element: element.to_owned(),
            attribute,
        })?;
    crate::model::Id::new(value).map_err(|reason| SbmlParseError::InvalidId {
        element: element.to_owned(),
        value: value.to_owned(),
        reason,
    })
}

fn optional_name(tag: &StartTag<'_>) -> Option<String> {
    tag.attr("name")
        .filter(|name| !name.is_empty())
        .map(str::to_owned)
}

fn parse_compartment(tag: &StartTag<'_>, element: &str) -> Result<Compartment, SbmlParseError> {
    let compartment_id = required_id::<crate::model::ids::CompartmentIdTag>(tag, element, "id")?;
    let size = match tag.attr("size") {
        Some(raw) => raw
            .parse::<u32>()
            .map_err(|_| SbmlParseError::InvalidAttributeValue {
                element: element.to_owned(),
                attribute: "size",
                value: raw.to_owned(),
            })?,
        None => 1,
    };
    Ok(Compartment::new_with(compartment_id, optional_name(tag), size))
}

fn parse_species(tag: &StartTag<'_>, element: &str) -> Result<Species, SbmlParseError> {
    let species_id = required_id::<crate::model::ids::SpeciesIdTag>(tag, element, "id")?;
    let compartment_id = match tag.attr("compartment") {
        Some(value) => Some(CompartmentId::new(value).map_err(|reason| {
            SbmlParseError::InvalidId {
                element: element.to_owned(),
                value: value.to_owned(),
                reason,
            }
        })?),
        None => None,
    };
    Ok(Species::new_with(species_id, optional_name(tag), compartment_id))
}

fn parse_reaction_open(
    tag: &StartTag<'_>,
    element: &str,
) -> Result<PendingReaction, SbmlParseError> {
    let reaction_id = required_id::<crate::model::ids::ReactionIdTag>(tag, element, "id")?;
    let reversible = match tag.attr("reversible") {
        Some("true") | Some("1") => true,
        Some("false") | Some("0") => false,
        // SBML Level 2 default.
        None => true,
        Some(other) => {
            return Err(SbmlParseError::InvalidAttributeValue {
                element: element.to_owned(),
                attribute: "reversible",
                value: other.to_owned(),
            })
        }
    };
    Ok(PendingReaction {
        reaction_id,
        name: optional_name(tag),
        reversible,
        reactants: Vec::new(),
        products: Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::{parse_model, SbmlParseError};
    use crate::model::NetworkError;

    const SMALL_MODEL: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<sbml xmlns="http://www.sbml.org/sbml/level2" level="2" version="1">
  <model id="toy">
    <listOfCompartments>
      <compartment id="c" name="cytosol" size="1"/>
    </listOfCompartments>
    <listOfSpecies>
      <species id="S1" name="Glucose" compartment="c"/>
      <species id="S2" compartment="c"/>
      <species id="S3" name="Pyruvate" compartment="c"/>
    </listOfSpecies>
    <listOfReactions>
      <reaction id="R1" name="Upper glycolysis" reversible="false">
        <listOfReactants>
          <speciesReference species="S1"/>
          <speciesReference species="S2"/>
        </listOfReactants>
        <listOfProducts>
          <speciesReference species="S3"/>
        </listOfProducts>
      </reaction>
    </listOfReactions>
  </model>
</sbml>
"#;

    #[test]
    fn parses_a_small_model() {
        let network = parse_model(SMALL_MODEL).expect("parse");
        assert_eq!(network.compartments().len(), 1);
        assert_eq!(network.species().len(), 3);
        assert_eq!(network.reactions().len(), 1);

        let r1 = network.reaction_by_id("R1").expect("R1");
        assert_eq!(r1.name(), Some("Upper glycolysis"));
        assert!(!r1.reversible());
        let reactants: Vec<&str> = network
            .reactants_of(r1)
            .iter()
            .map(|s| s.species_id().as_str())
            .collect();
        assert_eq!(reactants, ["S1", "S2"]);
        let products: Vec<&str> = network
            .products_of(r1)
            .iter()
            .map(|s| s.species_id().as_str())
            .collect();
        assert_eq!(products, ["S3"]);

        let s2 = network.species_by_id("S2").expect("S2");
        assert_eq!(s2.name(), None);
    }

    #[test]
    fn parses_prefixed_elements_with_declared_namespace() {
        let input = r#"<sbml:sbml xmlns:sbml="http://www.sbml.org/sbml/level2">
  <sbml:model>
    <sbml:listOfSpecies>
      <sbml:species id="S1"/>
    </sbml:listOfSpecies>
  </sbml:model>
</sbml:sbml>"#;
        let network = parse_model(input).expect("parse");
        assert_eq!(network.species().len(), 1);
    }

    #[test]
    fn rejects_non_sbml_root() {
        let err = parse_model("<html></html>").unwrap_err();
        assert_eq!(err, SbmlParseError::MissingSbmlRoot);
    }

    #[test]
    fn rejects_missing_species_id() {
        let input = r#"<sbml><model><listOfSpecies><species name="x"/></listOfSpecies></model></sbml>"#;
        let err = parse_model(input).unwrap_err();
        assert_eq!(
            err,
            SbmlParseError::MissingAttribute {
                element: "species".to_owned(),
                attribute: "id",
            }
        );
    }

    #[test]
    fn rejects_unknown_species_reference() {
        let input = r#"<sbml><model><listOfReactions>
          <reaction id="R1"><listOfReactants><speciesReference species="nope"/></listOfReactants></reaction>
        </listOfReactions></model></sbml>"#;
        let err = parse_model(input).unwrap_err();
        assert!(matches!(
            err,
            SbmlParseError::Model(NetworkError::UnknownReactant { .. })
        ));
    }

    #[test]
    fn rejects_mismatched_close_tags() {
        let input = "<sbml><model></sbml></model>";
        let err = parse_model(input).unwrap_err();
        assert_eq!(
            err,
            SbmlParseError::MismatchedClose {
                expected: "model".to_owned(),
                found: "sbml".to_owned(),
            }
        );
    }

    #[test]
    fn rejects_unclosed_document() {
        let err = parse_model("<sbml><model>").unwrap_err();
        assert_eq!(err, SbmlParseError::UnclosedElement { name: "model".to_owned() });
    }

    #[test]
    fn rejects_invalid_reversible_flag() {
        let input = r#"<sbml><model><listOfReactions><reaction id="R1" reversible="maybe"/></listOfReactions></model></sbml>"#;
        let err = parse_model(input).unwrap_err();
        assert_eq!(
            err,
            SbmlParseError::InvalidAttributeValue {
                element: "reaction".to_owned(),
                attribute: "reversible",
                value: "maybe".to_owned(),
            }
        );
    }

    #[test]
    fn reversible_defaults_to_true() {
        let input = r#"<sbml><model><listOfReactions><reaction id="R1"/></listOfReactions></model></sbml>"#;
        let network = parse_model(input).expect("parse");
        assert!(network.reaction_by_id("R1").expect("R1").reversible());
    }

    #[test]
    fn speciesreference_outside_reaction_is_ignored() {
        let input = r#"<sbml><model><speciesReference species="ghost"/></model></sbml>"#;
        let network = parse_model(input).expect("parse");
        assert!(network.reactions().is_empty());
        assert!(network.species().is_empty());
    }

    #[test]
    fn modifier_references_are_ignored() {
        let input = r#"<sbml><model><listOfSpecies><species id="S1"/></listOfSpecies>
          <listOfReactions><reaction id="R1">
            <listOfModifiers><modifierSpeciesReference species="S1"/></listOfModifiers>
          </reaction></listOfReactions></model></sbml>"#;
        let network = parse_model(input).expect("parse");
        let r1 = network.reaction_by_id("R1").expect("R1");
        assert!(r1.reactants().is_empty());
        assert!(r1.products().is_empty());
    }

    #[test]
    fn empty_model_parses_to_empty_network() {
        let network = parse_model("<sbml><model/></sbml>").expect("parse");
        assert!(network.reactions().is_empty());
        assert!(network.species().is_empty());
    }
}
