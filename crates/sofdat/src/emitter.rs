//! Deck emitter: renders converted records into the .dat text layout.
//!
//! The output is deterministic: one entity, one fixed-layout line; blocks
//! in a fixed order (materials and cross sections, nodes and beams, loads);
//! no reordering, no deduplication.

use std::fs;
use std::io;
use std::path::Path;

use crate::loader::ConvertedModel;

/// Render the complete deck.
///
/// Three program blocks are always present, each opened with `+PROG`,
/// titled with `HEAD` and closed with `END`. An empty model yields the
/// block skeletons with no entity lines.
pub fn render(model: &ConvertedModel) -> String {
    let mut out = String::new();

    out.push_str("$ generated by sofdat\n");
    out.push_str("+PROG AQUA\n");
    out.push_str("HEAD Materials and cross sections\n");
    for material in &model.materials {
        out.push_str(&format!(
            "MAT NO {} E {} G {} GAM {} TITL '{}'\n",
            material.id,
            material.elastic_modulus,
            material.shear_modulus,
            material.specific_weight,
            material.name
        ));
    }
    for section in &model.cross_sections {
        out.push_str(&format!(
            "SVAL NO {} A {} IY {} IZ {} IT {} TITL '{}'\n",
            section.id, section.area, section.iyy, section.izz, section.it, section.name
        ));
    }
    out.push_str("END\n\n");

    out.push_str("+PROG SOFIMSHA\n");
    out.push_str("HEAD Nodes and beam elements\n");
    out.push_str("SYST 3D GDIR NEGZ\n");
    for node in &model.nodes {
        let [x, y, z] = node.position;
        out.push_str(&format!("NODE NO {} X {} Y {} Z {}", node.id, x, y, z));
        if let Some(constraint) = &node.constraint {
            let code = constraint.code();
            if !code.is_empty() {
                out.push_str(&format!(" FIX {code}"));
            }
        }
        out.push('\n');
    }
    for beam in &model.beams {
        out.push_str(&format!(
            "BEAM NO {} NA {} NE {} NCS {} MNO {}",
            beam.id, beam.start_node, beam.end_node, beam.cross_section, beam.material
        ));
        if beam.rotation_deg != 0.0 {
            out.push_str(&format!(" DREH {}", beam.rotation_deg));
        }
        out.push('\n');
    }
    out.push_str("END\n\n");

    out.push_str("+PROG SOFILOAD\n");
    out.push_str("HEAD Loads\n");
    let mut current_case = None;
    for load in &model.loads {
        if current_case != Some(load.case) {
            out.push_str(&format!("LC {}\n", load.case));
            current_case = Some(load.case);
        }
        out.push_str(&format!(
            "NODE NO {} TYPE {} P {}\n",
            load.node,
            load.direction.code(),
            load.magnitude
        ));
    }
    out.push_str("END\n");

    out
}

/// Render the deck and write it to `path`, overwriting any existing file.
pub fn write_dat(path: impl AsRef<Path>, model: &ConvertedModel) -> io::Result<()> {
    fs::write(path, render(model))
}
