//! Collection: which declarations and imports a file contributes.
//!
//! ## Module Structure
//!
//! - `markers`: marker scanning over `type` declaration groups
//! - `imports`: declared imports and their usage tracking

pub mod imports;
pub mod markers;

pub use imports::{ImportRef, ImportSet};
pub use markers::{DEFAULT_MARKER, MarkedInterface, MarkerScanner};
