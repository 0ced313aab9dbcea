//! Core generation pipeline.
//!
//! ## Pipeline
//!
//! 1. **Parse**: Go sources to syntax trees (`parsers`)
//! 2. **Collect**: marked interfaces and declared imports (`collect`)
//! 3. **Extract**: service descriptors, marking used imports (`extract`)
//! 4. **Merge**: one sorted, deduplicated registry model (`model`)
//! 5. **Render**: code model printed as Go (`render`)
//! 6. **Format**: validate and canonicalize the text (`format`)
//! 7. **Write**: persist the result (`writer`)
//!
//! `generate` wires steps 1 through 6 together.

pub mod collect;
pub mod error;
pub mod extract;
pub mod format;
pub mod generate;
pub mod model;
pub mod parsers;
pub mod render;
pub mod writer;

pub use error::{ErrorKind, GenerateError, GenerateResult};
pub use generate::{GenerateOptions, GeneratedOutput, Generator};
pub use writer::{FileWriter, WriteResult};
