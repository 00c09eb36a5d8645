//! Model loader: builds linked record lists from a source snapshot.
//!
//! Loading and linking happen in one pass over the source collections.
//! Supports and elements reference nodes by position in the node list; both
//! are resolved here against the already-built records, so no dangling
//! reference ever reaches the emitter.

use sofdat_model::StructuralModel;

use crate::error::ConvertError;
use crate::records::{Beam, Constraint, CrossSection, Load, Material, Node};

/// Flat, ordered record lists produced by one conversion call.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConvertedModel {
    pub materials: Vec<Material>,
    pub cross_sections: Vec<CrossSection>,
    pub nodes: Vec<Node>,
    pub beams: Vec<Beam>,
    /// Left empty by the loader; callers may fill it before rendering.
    pub loads: Vec<Load>,
}

impl ConvertedModel {
    /// Convert a source snapshot into linked records.
    ///
    /// Materials, cross sections and nodes convert 1:1 in order with ids
    /// assigned from position. Support fixities are merged into a fresh
    /// node list in a second phase; a node targeted by several supports
    /// keeps the union of their fixities. Each element becomes one beam
    /// whose endpoint, cross-section and material references are resolved
    /// to record ids.
    ///
    /// The first dangling or malformed reference aborts the conversion;
    /// no partial record lists are returned.
    pub fn from_model(model: &StructuralModel) -> Result<Self, ConvertError> {
        let materials: Vec<Material> = model
            .materials
            .iter()
            .enumerate()
            .map(|(pos, m)| Material {
                id: pos + 1,
                name: m.name.clone(),
                elastic_modulus: m.elastic_modulus,
                shear_modulus: m.shear_modulus,
                specific_weight: m.specific_weight,
            })
            .collect();

        let cross_sections: Vec<CrossSection> = model
            .cross_sections
            .iter()
            .enumerate()
            .map(|(pos, cs)| CrossSection {
                id: pos + 1,
                name: cs.name.clone(),
                area: cs.area,
                iyy: cs.iyy,
                izz: cs.izz,
                it: cs.it,
            })
            .collect();

        // Phase one: plain node records.
        let nodes: Vec<Node> = model
            .nodes
            .iter()
            .enumerate()
            .map(|(pos, n)| Node::new(pos + 1, n.position))
            .collect();

        // Phase two: merge support fixities into a rebuilt node list.
        let mut constraints: Vec<Option<Constraint>> = vec![None; nodes.len()];
        for (pos, support) in model.supports.iter().enumerate() {
            let slot = constraints.get_mut(support.node_index).ok_or(
                ConvertError::DanglingSupportNode {
                    support: pos + 1,
                    node_index: support.node_index,
                    node_count: model.nodes.len(),
                },
            )?;
            let constraint = Constraint::from(&support.fixity);
            *slot = Some(match *slot {
                Some(existing) => existing.union(constraint),
                None => constraint,
            });
        }
        let nodes: Vec<Node> = nodes
            .into_iter()
            .zip(constraints)
            .map(|(node, constraint)| node.with_constraint(constraint))
            .collect();

        let mut beams = Vec::with_capacity(model.elements.len());
        for (pos, element) in model.elements.iter().enumerate() {
            let element_no = pos + 1;
            if element.node_indices.len() < 2 {
                return Err(ConvertError::BeamEndpoints {
                    element: element_no,
                    found: element.node_indices.len(),
                });
            }
            let start_node = resolve_node(&nodes, element.node_indices[0], element_no)?;
            let end_node = resolve_node(&nodes, element.node_indices[1], element_no)?;
            let cross_section = cross_sections
                .get(element.cross_section_index)
                .map(|cs| cs.id)
                .ok_or(ConvertError::DanglingCrossSection {
                    element: element_no,
                    index: element.cross_section_index,
                    count: cross_sections.len(),
                })?;
            let material = materials.get(element.material_index).map(|m| m.id).ok_or(
                ConvertError::DanglingMaterial {
                    element: element_no,
                    index: element.material_index,
                    count: materials.len(),
                },
            )?;
            beams.push(Beam {
                id: element_no,
                start_node,
                end_node,
                cross_section,
                material,
                rotation_deg: element.rotation_deg,
            });
        }

        Ok(Self {
            materials,
            cross_sections,
            nodes,
            beams,
            loads: Vec::new(),
        })
    }
}

fn resolve_node(nodes: &[Node], index: usize, element: usize) -> Result<usize, ConvertError> {
    nodes
        .get(index)
        .map(|n| n.id)
        .ok_or(ConvertError::DanglingBeamNode {
            element,
            node_index: index,
            node_count: nodes.len(),
        })
}
