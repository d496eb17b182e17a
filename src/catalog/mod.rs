//! Algorithm catalog
//!
//! Typed registry of algorithm capability descriptors:
//! - [`AlgorithmDescriptor`] with a validating builder
//! - [`AlgorithmCatalog`], a case-insensitive, order-preserving registry
//! - the built-in descriptor set ([`AlgorithmCatalog::standard`])

mod descriptor;
mod registry;
mod standard;

pub use descriptor::{
    normalize_name, AlgorithmDescriptor, DescriptorBuilder, ProblemType, DEFAULT_MIN_SAMPLES,
};
pub use registry::{AlgorithmCatalog, CandidateResolution};
pub use standard::standard_descriptors;
