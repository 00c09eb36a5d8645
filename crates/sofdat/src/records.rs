//! Converted record types consumed by the emitter.
//!
//! Records are immutable snapshots built once per conversion call.
//! Identifiers are 1-based and assigned from list position, matching the
//! numbering the target format expects.

use sofdat_model::Fixity;

/// A material record.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub id: usize,
    pub name: String,
    pub elastic_modulus: f64,
    pub shear_modulus: f64,
    pub specific_weight: f64,
}

/// A cross-section record.
#[derive(Debug, Clone, PartialEq)]
pub struct CrossSection {
    pub id: usize,
    pub name: String,
    pub area: f64,
    pub iyy: f64,
    pub izz: f64,
    pub it: f64,
}

/// A node record with an optional support constraint.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: usize,
    pub position: [f64; 3],
    pub constraint: Option<Constraint>,
}

impl Node {
    pub fn new(id: usize, position: [f64; 3]) -> Self {
        Self {
            id,
            position,
            constraint: None,
        }
    }

    pub(crate) fn with_constraint(self, constraint: Option<Constraint>) -> Self {
        Self { constraint, ..self }
    }
}

/// Restrained degrees of freedom attached to a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Constraint {
    pub tx: bool,
    pub ty: bool,
    pub tz: bool,
    pub rx: bool,
    pub ry: bool,
    pub rz: bool,
}

impl From<&Fixity> for Constraint {
    fn from(fixity: &Fixity) -> Self {
        Self {
            tx: fixity.tx,
            ty: fixity.ty,
            tz: fixity.tz,
            rx: fixity.rx,
            ry: fixity.ry,
            rz: fixity.rz,
        }
    }
}

impl Constraint {
    /// Union of two constraints: a degree of freedom is held when either
    /// constraint holds it.
    pub fn union(self, other: Self) -> Self {
        Self {
            tx: self.tx || other.tx,
            ty: self.ty || other.ty,
            tz: self.tz || other.tz,
            rx: self.rx || other.rx,
            ry: self.ry || other.ry,
            rz: self.rz || other.rz,
        }
    }

    /// Fixity literal in the target format.
    ///
    /// All six DOFs held yields `F`. Otherwise the translation part (`PP`
    /// when all three are held, else `PX`/`PY`/`PZ` concatenated) is
    /// followed by the rotation part (`MM`, else `MX`/`MY`/`MZ`). A free
    /// constraint yields the empty string.
    pub fn code(&self) -> String {
        let translations = self.tx && self.ty && self.tz;
        let rotations = self.rx && self.ry && self.rz;
        if translations && rotations {
            return "F".to_string();
        }

        let mut code = String::new();
        if translations {
            code.push_str("PP");
        } else {
            if self.tx {
                code.push_str("PX");
            }
            if self.ty {
                code.push_str("PY");
            }
            if self.tz {
                code.push_str("PZ");
            }
        }
        if rotations {
            code.push_str("MM");
        } else {
            if self.rx {
                code.push_str("MX");
            }
            if self.ry {
                code.push_str("MY");
            }
            if self.rz {
                code.push_str("MZ");
            }
        }
        code
    }
}

/// A beam record with resolved node, cross-section and material ids.
///
/// The ids are guaranteed to exist in the corresponding record lists; the
/// loader refuses to build a beam with a dangling reference.
#[derive(Debug, Clone, PartialEq)]
pub struct Beam {
    pub id: usize,
    pub start_node: usize,
    pub end_node: usize,
    pub cross_section: usize,
    pub material: usize,
    pub rotation_deg: f64,
}

/// Load direction, as the target format's load type codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadDirection {
    Px,
    Py,
    Pz,
    Mx,
    My,
    Mz,
}

impl LoadDirection {
    pub fn code(self) -> &'static str {
        match self {
            LoadDirection::Px => "PX",
            LoadDirection::Py => "PY",
            LoadDirection::Pz => "PZ",
            LoadDirection::Mx => "MX",
            LoadDirection::My => "MY",
            LoadDirection::Mz => "MZ",
        }
    }
}

/// A nodal load line in a load case.
#[derive(Debug, Clone, PartialEq)]
pub struct Load {
    pub case: usize,
    pub node: usize,
    pub direction: LoadDirection,
    pub magnitude: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constraint(dofs: [bool; 6]) -> Constraint {
        Constraint {
            tx: dofs[0],
            ty: dofs[1],
            tz: dofs[2],
            rx: dofs[3],
            ry: dofs[4],
            rz: dofs[5],
        }
    }

    #[test]
    fn fully_fixed_code_is_f() {
        assert_eq!(constraint([true; 6]).code(), "F");
    }

    #[test]
    fn pinned_code_is_pp() {
        assert_eq!(constraint([true, true, true, false, false, false]).code(), "PP");
    }

    #[test]
    fn rotations_only_code_is_mm() {
        assert_eq!(constraint([false, false, false, true, true, true]).code(), "MM");
    }

    #[test]
    fn mixed_code_concatenates_single_dofs() {
        assert_eq!(constraint([true, false, true, false, false, true]).code(), "PXPZMZ");
        assert_eq!(constraint([true, true, true, true, false, false]).code(), "PPMX");
    }

    #[test]
    fn free_code_is_empty() {
        assert_eq!(constraint([false; 6]).code(), "");
    }

    #[test]
    fn union_holds_dofs_from_both_sides() {
        let a = constraint([true, false, false, false, true, false]);
        let b = constraint([false, true, false, false, true, false]);
        let merged = a.union(b);
        assert!(merged.tx && merged.ty && merged.ry);
        assert!(!merged.tz && !merged.rx && !merged.rz);
    }

    #[test]
    fn load_direction_codes() {
        assert_eq!(LoadDirection::Pz.code(), "PZ");
        assert_eq!(LoadDirection::Mx.code(), "MX");
    }
}
