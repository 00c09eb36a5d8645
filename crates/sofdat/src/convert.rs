//! Top-level conversion entry: pipeline plus human-readable status log.
//!
//! The typed pipeline (`ConvertedModel::from_model`, `emitter::render`)
//! stays available for callers that want results; this module is for hosts
//! that want one call returning a deck string and a status string, with
//! errors reported inline instead of propagated.

use std::fs;
use std::path::Path;

use sofdat_model::StructuralModel;

use crate::emitter;
use crate::error::ConvertError;
use crate::loader::ConvertedModel;

/// Outcome of one conversion call.
///
/// `output` holds the rendered deck, empty when loading failed. `status`
/// holds the accumulated log. `error` carries the typed failure, if any;
/// after a persistence failure `output` still carries the full deck.
#[derive(Debug)]
pub struct Conversion {
    pub output: String,
    pub status: String,
    pub error: Option<ConvertError>,
}

impl Conversion {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Convert a model and optionally persist the deck to `path`.
///
/// Never panics and never returns `Err`; every failure is folded into the
/// returned [`Conversion`].
pub fn convert(model: &StructuralModel, path: Option<&Path>) -> Conversion {
    let mut status = Vec::new();
    if path.is_none() {
        status.push("No file path specified. Will not save data to a .dat file.".to_string());
    }

    let converted = match ConvertedModel::from_model(model) {
        Ok(converted) => converted,
        Err(err) => {
            status.push(format!("ERROR!\n{err}"));
            return Conversion {
                output: String::new(),
                status: join(status),
                error: Some(err),
            };
        }
    };

    status.push(format!("{} materials loaded...", converted.materials.len()));
    status.push(format!(
        "{} cross sections loaded...",
        converted.cross_sections.len()
    ));
    status.push(format!("{} nodes loaded...", converted.nodes.len()));
    status.push(format!(
        "Support constraints added to {} nodes.",
        model.supports.len()
    ));
    status.push(format!("{} beams loaded...", converted.beams.len()));

    let output = emitter::render(&converted);

    let mut error = None;
    if let Some(path) = path {
        status.push(format!("Saving file to {}", path.display()));
        match fs::write(path, &output) {
            Ok(()) => status.push("File saved!".to_string()),
            Err(err) => {
                let err = ConvertError::from(err);
                status.push(format!("ERROR!\n{err}"));
                error = Some(err);
            }
        }
    }

    Conversion {
        output,
        status: join(status),
        error,
    }
}

fn join(lines: Vec<String>) -> String {
    let mut status = lines.join("\n");
    status.push('\n');
    status
}

#[cfg(test)]
mod tests {
    use sofdat_model::{
        CrossSectionDef, ElementDef, Fixity, MaterialDef, NodeDef, StructuralModel, SupportDef,
    };

    use super::convert;
    use crate::error::ConvertError;

    fn two_node_beam_model() -> StructuralModel {
        StructuralModel {
            materials: vec![MaterialDef {
                name: "S 235".to_string(),
                elastic_modulus: 210000.0,
                shear_modulus: 81000.0,
                specific_weight: 78.5,
            }],
            cross_sections: vec![CrossSectionDef {
                name: "IPE 100".to_string(),
                area: 100.0,
                iyy: 171.0,
                izz: 15.9,
                it: 1.2,
            }],
            nodes: vec![NodeDef::new(0.0, 0.0, 0.0), NodeDef::new(5.0, 0.0, 0.0)],
            elements: vec![ElementDef {
                node_indices: vec![0, 1],
                cross_section_index: 0,
                material_index: 0,
                rotation_deg: 0.0,
            }],
            supports: vec![SupportDef {
                node_index: 0,
                fixity: Fixity::translations(),
            }],
        }
    }

    #[test]
    fn status_reports_record_counts_in_order() {
        let conversion = convert(&two_node_beam_model(), None);
        assert!(conversion.is_success());

        let status = &conversion.status;
        let fragments = [
            "No file path specified. Will not save data to a .dat file.",
            "1 materials loaded...",
            "1 cross sections loaded...",
            "2 nodes loaded...",
            "Support constraints added to 1 nodes.",
            "1 beams loaded...",
        ];
        let mut last = 0;
        for fragment in fragments {
            let at = status[last..]
                .find(fragment)
                .unwrap_or_else(|| panic!("status should contain {fragment:?}: {status}"));
            last += at + fragment.len();
        }
    }

    #[test]
    fn loader_error_yields_empty_output_and_error_status() {
        let mut model = two_node_beam_model();
        model.supports[0].node_index = 9;

        let conversion = convert(&model, None);
        assert!(conversion.output.is_empty());
        assert!(conversion.status.contains("ERROR!"));
        assert!(conversion.status.contains("references node index 9"));
        assert!(matches!(
            conversion.error,
            Some(ConvertError::DanglingSupportNode { .. })
        ));
        // Counts are never reported for an aborted conversion.
        assert!(!conversion.status.contains("materials loaded"));
    }

    #[test]
    fn persisting_writes_the_output_verbatim() {
        let dir = tempfile::tempdir().expect("temp dir should be created");
        let path = dir.path().join("frame.dat");

        let conversion = convert(&two_node_beam_model(), Some(&path));
        assert!(conversion.is_success());
        assert!(conversion.status.contains("Saving file to"));
        assert!(conversion.status.contains("File saved!"));

        let on_disk = std::fs::read_to_string(&path).expect("file should be readable");
        assert_eq!(on_disk, conversion.output);
    }

    #[test]
    fn persistence_failure_keeps_output_and_reports_error() {
        let dir = tempfile::tempdir().expect("temp dir should be created");
        // The destination is a directory, so the write itself must fail.
        let conversion = convert(&two_node_beam_model(), Some(dir.path()));

        assert!(!conversion.output.is_empty());
        assert!(conversion.output.contains("BEAM NO 1 NA 1 NE 2"));
        assert!(conversion.status.contains("1 beams loaded..."));
        assert!(conversion.status.contains("ERROR!"));
        assert!(matches!(conversion.error, Some(ConvertError::Io(_))));
    }
}
