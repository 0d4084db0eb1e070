//! Build a session from a project file

use std::path::Path;

use pavecarbon_infra::{ProjectComposition, ProjectFile};
use pavecarbon_types::{InputError, Result};

use crate::config::Config;
use crate::session::CompositionSession;

/// Open a project file into a new session configured by `config`
pub fn load_project(path: &Path, config: &Config) -> Result<CompositionSession> {
    let project = ProjectFile::load_from_file(path)?;
    let mut session = CompositionSession::new(config.session_settings());
    apply_project(&mut session, &project)?;
    Ok(session)
}

/// Append every composition of a project to a session
pub fn apply_project(session: &mut CompositionSession, project: &ProjectFile) -> Result<()> {
    for (index, entry) in project.compositions.iter().enumerate() {
        apply_entry(session, index, entry)?;
    }
    Ok(())
}

fn apply_entry(session: &mut CompositionSession, index: usize, entry: &ProjectComposition) -> Result<()> {
    if let Some(ref template) = entry.template {
        if session.template(template).is_none() {
            return Err(InputError::UnknownTemplate(template.clone()).into());
        }
    }

    match (&entry.layers, &entry.template) {
        (Some(layers), template) => {
            let name = entry
                .name
                .clone()
                .or_else(|| template.clone())
                .unwrap_or_else(|| format!("Composition {}", index + 1));
            let area = entry
                .surface_area
                .unwrap_or(session.settings().default_surface_area);
            session.insert_composition(&name, area, layers.clone())?;
        }
        (None, Some(template)) => {
            let id = session.create_composition(template)?.id.clone();
            if let Some(ref name) = entry.name {
                session.rename_composition(&id, name)?;
            }
            if let Some(area) = entry.surface_area {
                session.set_surface_area(&id, area)?;
            }
        }
        (None, None) => {
            return Err(pavecarbon_types::Error::ProjectFile(format!(
                "composition #{} needs a template or layers",
                index + 1
            )));
        }
    }
    Ok(())
}
