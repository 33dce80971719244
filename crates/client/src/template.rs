//! Dashboard template rendering.
//!
//! Templates are Jinja-style JSON documents with three substitution
//! variables: `cluster_name`, `project_name` and `datasource`. The template
//! is reloaded from disk on every call, so edits take effect between
//! dashboard uploads without restarting a run.

use minijinja::{Environment, context, path_loader};
use std::path::Path;

use crate::error::{ClientError, Result};

/// Render the dashboard template at `template_path` with the given variables.
///
/// The path is split into directory and file name; a template environment is
/// scoped to that directory and the named file is loaded from it. Returns
/// `TemplateNotFound` if the file does not exist, `Template` for any other
/// load or render failure.
pub fn render_dashboard(
    template_path: &Path,
    cluster: &str,
    project: &str,
    data_source: &str,
) -> Result<String> {
    match std::fs::metadata(template_path) {
        Ok(meta) if meta.is_file() => {}
        Ok(_) => return Err(ClientError::TemplateNotFound(template_path.to_path_buf())),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ClientError::TemplateNotFound(template_path.to_path_buf()));
        }
        Err(e) => {
            return Err(ClientError::Io {
                path: template_path.to_path_buf(),
                source: e,
            });
        }
    }

    let template_dir = template_path.parent().unwrap_or(Path::new("."));
    let template_name = template_path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| ClientError::TemplateNotFound(template_path.to_path_buf()))?;

    let mut env = Environment::new();
    env.set_loader(path_loader(template_dir));

    let template = env.get_template(template_name)?;
    let rendered = template.render(context! {
        cluster_name => cluster,
        project_name => project,
        datasource => data_source,
    })?;

    Ok(rendered)
}
