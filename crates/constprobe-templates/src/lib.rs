//! # constprobe-templates
//!
//! **Purpose**: Source templates and variant expansion for attribute probing
//!
//! Templates are C++ snippets with `{fn…}` and `{ret…}` placeholders. Each
//! placeholder family carries a fixed list of candidate qualifiers, and a
//! template expands into the cartesian product of its placeholders'
//! candidates.
//!
//! ## Usage
//!
//! ```rust
//! use constprobe_templates::{VariantGenerator, CATALOG};
//!
//! # fn main() -> Result<(), constprobe_templates::TemplateError> {
//! let generator = VariantGenerator::default();
//! for plan in generator.plan(&CATALOG)? {
//!     for variant in plan.variants() {
//!         println!("{}", variant.source);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod error;
pub mod family;
pub mod parser;
pub mod variants;

pub use catalog::CATALOG;
pub use error::{Result, TemplateError};
pub use family::{CandidateTable, PlaceholderFamily, CONSTEXPR_QUALIFIER, MSVC_CONSTEXPR_ATTRIBUTE};
pub use parser::{ParsedTemplate, TemplateElement, TemplateParser};
pub use variants::{Slot, TemplatePlan, Variant, VariantGenerator};
