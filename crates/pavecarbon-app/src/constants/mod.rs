//! Canonical reference data: material table and base compositions

pub mod materials;
pub mod templates;

pub use materials::{standard_materials, UNDEFINED_MATERIAL};
pub use templates::{standard_templates, Template};
