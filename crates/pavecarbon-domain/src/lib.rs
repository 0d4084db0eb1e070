//! Domain layer for pavement embodied-carbon estimation
//!
//! Holds the model types (materials, layers, compositions), the fixed process
//! constants, and the pure footprint services built on top of them.

pub mod model;
pub mod repository;
pub mod service;

pub use model::*;
pub use repository::MaterialRepository;

#[cfg(test)]
mod testing;
