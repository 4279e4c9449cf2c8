//! Template parsing engines
//!
//! The resolver validates sources and hands the ordered set to an engine. The
//! default engine is Tera; each source is registered under its file name so
//! pages can `{% extends "main.html" %}` and `{% include %}` components.

use super::TemplateSet;
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use tera::{Context, Tera};

/// Parses an ordered set of existing template files into one renderable unit
pub trait TemplateEngine {
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    fn parse_files(&self, set: &TemplateSet) -> std::result::Result<Self::Output, Self::Error>;
}

/// Name a source is registered under: its file name
pub fn template_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.to_string_lossy().into_owned(),
        |name| name.to_string_lossy().into_owned(),
    )
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TeraEngine;

impl TemplateEngine for TeraEngine {
    type Output = ComposedTemplate;
    type Error = tera::Error;

    fn parse_files(&self, set: &TemplateSet) -> tera::Result<ComposedTemplate> {
        let names: Vec<String> = set.sources().iter().map(|p| template_name(p)).collect();

        // Files are added in order; a later file replaces an earlier one with the same name
        let mut tera = Tera::default();
        tera.add_template_files(
            set.sources()
                .iter()
                .zip(&names)
                .map(|(path, name)| (path.as_path(), Some(name.as_str())))
                .collect::<Vec<_>>(),
        )?;

        Ok(ComposedTemplate {
            tera,
            sources: set.sources().to_vec(),
            names,
        })
    }
}

/// Layout plus caller templates, parsed and ready to render
#[derive(Debug)]
pub struct ComposedTemplate {
    tera: Tera,
    sources: Vec<PathBuf>,
    names: Vec<String>,
}

impl ComposedTemplate {
    /// Registered names in composition order, layout first; duplicates kept
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn sources(&self) -> &[PathBuf] {
        &self.sources
    }

    pub fn layout_name(&self) -> &str {
        &self.names[0]
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tera.get_template_names().any(|n| n == name)
    }

    pub fn render(&self, name: &str, context: &Context) -> Result<String> {
        self.tera.render(name, context).map_err(|e| Error::Render {
            name: name.to_string(),
            source: Box::new(e),
        })
    }

    pub fn render_layout(&self, context: &Context) -> Result<String> {
        self.render(self.layout_name(), context)
    }

    pub const fn tera(&self) -> &Tera {
        &self.tera
    }
}
