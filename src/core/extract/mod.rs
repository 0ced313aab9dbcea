//! Extraction: service descriptors from marked interfaces.
//!
//! ## Module Structure
//!
//! - `type_ref`: closed set of understood type shapes and their resolver
//! - `signature`: per-method parameter/result extraction

pub mod signature;
pub mod type_ref;

pub use signature::{MethodSignature, ServiceDescriptor, SignatureExtractor, UnsupportedPolicy};
pub use type_ref::TypeRef;
