//! Conversion pipeline from a structural model snapshot to a .dat deck.
//!
//! This crate provides:
//! - **Converted records** with the 1-based identifiers of the target format
//! - **Loader/linker** turning a [`sofdat_model::StructuralModel`] into
//!   linked record lists, with typed dangling-reference errors
//! - **Emitter** rendering the fixed line-oriented deck layout and
//!   optionally persisting it
//! - **Orchestration** ([`convert`]) returning the deck text together with
//!   a human-readable status log

pub mod convert;
pub mod emitter;
pub mod error;
pub mod loader;
pub mod records;

pub use convert::{Conversion, convert};
pub use emitter::{render, write_dat};
pub use error::ConvertError;
pub use loader::ConvertedModel;
pub use records::{Beam, Constraint, CrossSection, Load, LoadDirection, Material, Node};
