//! Domain model types

pub mod composition;
pub mod factors;
pub mod layer;
pub mod material;

pub use composition::Composition;
pub use factors::{CementFamily, JointType, OverrideDefaults, StoneOrigin};
pub use layer::Layer;
pub use material::{JointedFamily, Material, MaterialKind};
