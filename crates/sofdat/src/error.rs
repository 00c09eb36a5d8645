//! Error types for the conversion pipeline.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConvertError>;

/// Everything that can go wrong between receiving a model and writing the
/// deck. Reference errors carry the 1-based position of the offending
/// support or element in its source collection.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("support {support} references node index {node_index} but the model has {node_count} nodes")]
    DanglingSupportNode {
        support: usize,
        node_index: usize,
        node_count: usize,
    },

    #[error("element {element} defines {found} node indices but a beam needs two")]
    BeamEndpoints { element: usize, found: usize },

    #[error("element {element} references node index {node_index} but the model has {node_count} nodes")]
    DanglingBeamNode {
        element: usize,
        node_index: usize,
        node_count: usize,
    },

    #[error("element {element} references cross section index {index} but the model has {count} cross sections")]
    DanglingCrossSection {
        element: usize,
        index: usize,
        count: usize,
    },

    #[error("element {element} references material index {index} but the model has {count} materials")]
    DanglingMaterial {
        element: usize,
        index: usize,
        count: usize,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
