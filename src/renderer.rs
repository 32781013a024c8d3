//! Template rendering for promptforge content files.
//! Include directives are resolved against an ordered list of root
//! directories, consulted in priority order (templates first, then the
//! base content tree).

use crate::error::{Error, Result};
use minijinja::Environment;
use std::fs;
use std::path::PathBuf;

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a content string, resolving any include directives.
    ///
    /// The renderer only reports success or failure; the caller decides
    /// what to do with a failure (promptforge falls back to the original
    /// content and logs a warning).
    fn render(&self, content: &str) -> Result<String>;
}

/// Builds a minijinja loader that searches an ordered list of root
/// directories for a template name, returning the first hit.
fn search_path_loader(
    roots: Vec<PathBuf>,
) -> impl Fn(&str) -> std::result::Result<Option<String>, minijinja::Error> + Send + Sync + 'static
{
    move |name| {
        if name.split(['/', '\\']).any(|segment| segment == "..") {
            return Err(minijinja::Error::new(
                minijinja::ErrorKind::InvalidOperation,
                "template name must not traverse out of the search path",
            ));
        }

        for root in &roots {
            let candidate = root.join(name);
            if candidate.is_file() {
                return match fs::read_to_string(&candidate) {
                    Ok(contents) => Ok(Some(contents)),
                    Err(err) => Err(minijinja::Error::new(
                        minijinja::ErrorKind::InvalidOperation,
                        "could not read template",
                    )
                    .with_source(err)),
                };
            }
        }

        Ok(None)
    }
}

/// MiniJinja-based template rendering engine with a multi-root include
/// search path.
pub struct MiniJinjaRenderer {
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a renderer whose includes resolve against `search_path`
    /// roots in order, so `{% include "prompts/shared.md" %}` falls back
    /// to the base content tree when no dedicated template exists.
    pub fn new(search_path: Vec<PathBuf>) -> Self {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.set_loader(search_path_loader(search_path));
        Self { env }
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    fn render(&self, content: &str) -> Result<String> {
        // Content files carry no variables of their own; rendering exists
        // solely to expand include directives.
        self.env
            .render_str(content, minijinja::context! {})
            .map_err(Error::TemplateError)
    }
}
