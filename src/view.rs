//! HTML rendering of the panel page.
//!
//! The page is a single template rendered with two flags, `PrimaryOn` and
//! `SecondaryOn`, plus the button captions as globals.  The built-in
//! template is compiled into the binary; a file can replace it.

use crate::config::Labels;
use crate::workspace::Visibility;
use minijinja::{context, Environment};
use std::path::{Path, PathBuf};

const INDEX: &str = "index.html";

/// The built-in page.
pub const INDEX_TEMPLATE: &str = include_str!("../templates/index.html");

/// Errors from loading or rendering the page template.
#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    #[error("failed to read template {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
}

/// A compiled page template.
///
/// Cheap to share between requests; rendering never mutates it.
pub struct View {
    env: Environment<'static>,
}

impl View {
    /// Use the built-in template.
    pub fn new(labels: &Labels) -> Result<Self, ViewError> {
        Self::with_source(INDEX_TEMPLATE.to_string(), labels)
    }

    /// Load the template from `path`, or use the built-in one if `None`.
    pub fn load(path: Option<&Path>, labels: &Labels) -> Result<Self, ViewError> {
        match path {
            Some(path) => {
                let source = std::fs::read_to_string(path).map_err(|source| ViewError::Read {
                    path: path.to_path_buf(),
                    source,
                })?;
                Self::with_source(source, labels)
            }
            None => Self::new(labels),
        }
    }

    /// Compile `source` as the page template.
    ///
    /// The template is registered as `index.html`, so HTML auto-escaping
    /// applies regardless of where it came from.
    pub fn with_source(source: String, labels: &Labels) -> Result<Self, ViewError> {
        let mut env = Environment::new();
        env.add_template_owned(INDEX, source)?;
        env.add_global("primary_label", labels.primary.clone());
        env.add_global("secondary_label", labels.secondary.clone());
        Ok(Self { env })
    }

    /// Render the page for the given visibility.
    pub fn render(&self, vis: Visibility) -> Result<String, ViewError> {
        let tmpl = self.env.get_template(INDEX)?;
        Ok(tmpl.render(context! {
            PrimaryOn => vis.primary_on,
            SecondaryOn => vis.secondary_on,
        })?)
    }
}
