//! Infrastructure layer - project file loader, report writer

pub mod project_loader;
pub mod report_writer;

pub use project_loader::{ProjectComposition, ProjectFile};
pub use report_writer::{write_report_json, ReportDocument};
