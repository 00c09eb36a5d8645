//! Source-model snapshot types for the .dat conversion pipeline.
//!
//! A host application (a structural modeling tool, or a JSON file fed to
//! `sofdat-cli`) populates a [`StructuralModel`] and hands it to the
//! `sofdat` pipeline. All cross-references between the collections are by
//! 0-based position, the way the originating modeling tool indexes them:
//! supports point at nodes, elements point at nodes, cross sections and
//! materials.

use serde::{Deserialize, Serialize};

/// In-memory structural model as supplied by the host.
///
/// The collections are ordered; record identifiers in the generated deck
/// are assigned from these positions.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StructuralModel {
    pub materials: Vec<MaterialDef>,
    pub cross_sections: Vec<CrossSectionDef>,
    pub nodes: Vec<NodeDef>,
    pub elements: Vec<ElementDef>,
    pub supports: Vec<SupportDef>,
}

/// Mechanical material properties copied verbatim from the host model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialDef {
    /// Material name or strength class (e.g. "S 235").
    pub name: String,
    /// Young's modulus (E).
    pub elastic_modulus: f64,
    /// Shear modulus (G).
    pub shear_modulus: f64,
    /// Specific weight (gamma).
    pub specific_weight: f64,
}

/// Section values of a beam profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossSectionDef {
    /// Profile name (e.g. "IPE 200").
    pub name: String,
    /// Cross-sectional area (A).
    pub area: f64,
    /// Moment of inertia about the local y axis.
    pub iyy: f64,
    /// Moment of inertia about the local z axis.
    pub izz: f64,
    /// Torsional moment of inertia.
    pub it: f64,
}

/// A node in global coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeDef {
    /// Position [x, y, z].
    pub position: [f64; 3],
}

impl NodeDef {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            position: [x, y, z],
        }
    }
}

/// A beam element referencing nodes, cross section and material by position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementDef {
    /// Node indices; the first two are the start and end node.
    pub node_indices: Vec<usize>,
    pub cross_section_index: usize,
    pub material_index: usize,
    /// Rotation of the element's local coordinate system in degrees.
    #[serde(default)]
    pub rotation_deg: f64,
}

/// A support restraining a node's degrees of freedom.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportDef {
    /// Position of the targeted node in the node list.
    pub node_index: usize,
    pub fixity: Fixity,
}

/// Restrained degrees of freedom: three translations, three rotations.
///
/// `true` means the degree of freedom is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Fixity {
    #[serde(default)]
    pub tx: bool,
    #[serde(default)]
    pub ty: bool,
    #[serde(default)]
    pub tz: bool,
    #[serde(default)]
    pub rx: bool,
    #[serde(default)]
    pub ry: bool,
    #[serde(default)]
    pub rz: bool,
}

impl Fixity {
    /// All translations held, rotations free (a pinned support).
    pub fn translations() -> Self {
        Self {
            tx: true,
            ty: true,
            tz: true,
            ..Self::default()
        }
    }

    /// All six degrees of freedom held (a fully fixed support).
    pub fn all() -> Self {
        Self {
            tx: true,
            ty: true,
            tz: true,
            rx: true,
            ry: true,
            rz: true,
        }
    }

    /// True when no degree of freedom is held.
    pub fn is_free(&self) -> bool {
        !(self.tx || self.ty || self.tz || self.rx || self.ry || self.rz)
    }
}
