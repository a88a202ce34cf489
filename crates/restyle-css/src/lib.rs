//! CSS generation for the Restyle engine.
//!
//! Settings flow through the validator (`sanitize`), the property table and
//! the specificity engine inside the [`Emitter`], which appends rules to a
//! [`DocumentBuilder`]. [`StyleCompiler`] walks the region catalog and
//! caches committed output.

pub mod color_math;
pub mod compiler;
pub mod document;
pub mod emit;
pub mod property;
pub mod regions;
pub mod sanitize;
pub mod specificity;
mod syntax;

pub use compiler::{CompileReport, StyleCompiler, CSS_CACHE_GROUP};
pub use document::{DocumentBuilder, DocumentStats};
pub use emit::{Emitter, SkipReason};
pub use regions::{Region, RegionError, REGIONS};
pub use sanitize::{validate, KeywordSet, ValueKind};
pub use specificity::{enhance, specificity_score, target_for};
