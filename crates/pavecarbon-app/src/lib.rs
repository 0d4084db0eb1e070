//! Application service layer - catalog, session, config, export

pub mod catalog;
pub mod config;
pub mod constants;
pub mod export;
pub mod project;
pub mod session;

pub use catalog::MaterialCatalog;
pub use config::Config;
pub use session::{CompositionSession, LayerUpdate, SessionSettings};
