//! Template composition module
//!
//! Builds page templates on top of a shared layout. Every call validates and
//! parses from scratch; nothing is cached between calls.
//!
//! # Example
//!
//! ```rust,no_run
//! use web_helpers::template::compose_templates;
//! use web_helpers::Context;
//!
//! # fn main() -> web_helpers::Result<()> {
//! let tmpl = compose_templates(&[
//!     "templates/pages/index.html",
//!     "templates/components/login-form.html",
//! ])?;
//! let html = tmpl.render("index.html", &Context::new())?;
//! # Ok(())
//! # }
//! ```

mod engine;

pub use engine::{template_name, ComposedTemplate, TemplateEngine, TeraEngine};

use crate::config::TemplatesConfig;
use crate::error::{Error, Result};
use crate::fs::{probe, EntryKind};
use std::path::{Path, PathBuf};

/// Layout used when the caller does not supply one
pub const DEFAULT_LAYOUT: &str = "templates/main.html";

/// Ordered template sources: the layout, then caller templates in caller order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSet {
    sources: Vec<PathBuf>,
}

impl TemplateSet {
    pub fn new<P: AsRef<Path>>(extra: &[P]) -> Self {
        Self::with_layout(DEFAULT_LAYOUT, extra)
    }

    pub fn with_layout<L: AsRef<Path>, P: AsRef<Path>>(layout: L, extra: &[P]) -> Self {
        let mut sources = Vec::with_capacity(extra.len() + 1);
        sources.push(layout.as_ref().to_path_buf());
        sources.extend(extra.iter().map(|p| p.as_ref().to_path_buf()));
        Self { sources }
    }

    pub fn layout(&self) -> &Path {
        &self.sources[0]
    }

    pub fn extras(&self) -> &[PathBuf] {
        &self.sources[1..]
    }

    /// All sources, layout first
    pub fn sources(&self) -> &[PathBuf] {
        &self.sources
    }

    /// Check that every caller template is an existing file
    ///
    /// The layout is not checked. Stops at the first failing path.
    pub fn validate(&self) -> Result<()> {
        match self.extras().iter().find(|p| !probe(p, EntryKind::File)) {
            Some(missing) => Err(Error::path_not_found(missing)),
            None => Ok(()),
        }
    }
}

/// Validate `set`, then parse it with `engine`
pub fn compose_with<E: TemplateEngine>(engine: &E, set: &TemplateSet) -> Result<E::Output> {
    set.validate()?;
    engine.parse_files(set).map_err(Error::engine_parse)
}

/// Compose `extra` templates on top of [`DEFAULT_LAYOUT`]
pub fn compose_templates<P: AsRef<Path>>(extra: &[P]) -> Result<ComposedTemplate> {
    compose_with(&TeraEngine, &TemplateSet::new(extra))
}

/// Compose `extra` templates on top of a caller-provided layout
///
/// The layout itself is assumed to exist; if it does not, the engine reports it.
pub fn compose_templates_with_layout<L, P>(layout: L, extra: &[P]) -> Result<ComposedTemplate>
where
    L: AsRef<Path>,
    P: AsRef<Path>,
{
    compose_with(&TeraEngine, &TemplateSet::with_layout(layout, extra))
}

/// Composes templates on a configured layout
#[derive(Debug, Clone)]
pub struct TemplateResolver {
    layout: PathBuf,
}

impl Default for TemplateResolver {
    fn default() -> Self {
        Self::new(DEFAULT_LAYOUT)
    }
}

impl TemplateResolver {
    pub fn new(layout: impl Into<PathBuf>) -> Self {
        Self {
            layout: layout.into(),
        }
    }

    pub fn from_config(config: &TemplatesConfig) -> Self {
        Self::new(&config.layout)
    }

    pub fn layout(&self) -> &Path {
        &self.layout
    }

    pub fn compose<P: AsRef<Path>>(&self, extra: &[P]) -> Result<ComposedTemplate> {
        self.compose_with(&TeraEngine, extra)
    }

    pub fn compose_with<E: TemplateEngine, P: AsRef<Path>>(
        &self,
        engine: &E,
        extra: &[P],
    ) -> Result<E::Output> {
        compose_with(engine, &TemplateSet::with_layout(&self.layout, extra))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::cell::Cell;
    use std::fs;
    use tera::Context;

    const LAYOUT: &str = r#"<html><title>{% block title %}Site{% endblock title %}</title><body>{% block content %}{% endblock content %}</body></html>"#;

    struct Fixture {
        dir: tempfile::TempDir,
    }

    impl Fixture {
        fn new() -> Self {
            let fixture = Self {
                dir: tempfile::tempdir().unwrap(),
            };
            fixture.write("main.html", LAYOUT);
            fixture.write(
                "pages/index.html",
                r#"{% extends "main.html" %}{% block content %}<h1>{{ greeting }}</h1>{% include "login.html" ignore missing %}{% endblock content %}"#,
            );
            fixture.write("components/login.html", "<form>login</form>");
            fs::create_dir_all(fixture.path("folder")).unwrap();
            fixture
        }

        fn path(&self, rel: &str) -> PathBuf {
            self.dir.path().join(rel)
        }

        fn write(&self, rel: &str, content: &str) -> PathBuf {
            let path = self.path(rel);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(&path, content).unwrap();
            path
        }
    }

    /// Records whether parsing was attempted
    #[derive(Default)]
    struct SpyEngine {
        calls: Cell<usize>,
    }

    impl TemplateEngine for SpyEngine {
        type Output = Vec<PathBuf>;
        type Error = std::io::Error;

        fn parse_files(&self, set: &TemplateSet) -> std::io::Result<Vec<PathBuf>> {
            self.calls.set(self.calls.get() + 1);
            Ok(set.sources().to_vec())
        }
    }

    #[test]
    fn test_set_order() {
        let set = TemplateSet::new(&["pages/index", "components/login"]);
        assert_eq!(set.layout(), Path::new(DEFAULT_LAYOUT));
        assert_eq!(
            set.sources(),
            &[
                PathBuf::from(DEFAULT_LAYOUT),
                PathBuf::from("pages/index"),
                PathBuf::from("components/login"),
            ]
        );
    }

    #[test]
    fn test_compose_in_order() {
        let fx = Fixture::new();
        let index = fx.path("pages/index.html");
        let login = fx.path("components/login.html");

        let tmpl = compose_templates_with_layout(fx.path("main.html"), &[&index, &login]).unwrap();

        assert_eq!(tmpl.names(), &["main.html", "index.html", "login.html"]);
        assert_eq!(tmpl.sources(), &[fx.path("main.html"), index, login]);
        assert_eq!(tmpl.layout_name(), "main.html");
    }

    #[test]
    fn test_render_page_on_layout() {
        let fx = Fixture::new();
        let tmpl = compose_templates_with_layout(
            fx.path("main.html"),
            &[fx.path("pages/index.html"), fx.path("components/login.html")],
        )
        .unwrap();

        let mut ctx = Context::new();
        ctx.insert("greeting", "Hello");
        let html = tmpl.render("index.html", &ctx).unwrap();
        assert_eq!(
            html,
            "<html><title>Site</title><body><h1>Hello</h1><form>login</form></body></html>"
        );
    }

    #[test]
    fn test_missing_template_fails_fast() {
        let fx = Fixture::new();
        let engine = SpyEngine::default();
        let set = TemplateSet::with_layout(
            fx.path("main.html"),
            &[fx.path("pages/index.html"), fx.path("missing"), fx.path("also-missing")],
        );

        let err = compose_with(&engine, &set).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::PathNotFound);
        assert_eq!(err.path(), Some(fx.path("missing").as_path()));
        assert_eq!(engine.calls.get(), 0);
    }

    #[test]
    fn test_directory_is_not_a_template() {
        let fx = Fixture::new();
        let err = compose_templates_with_layout(fx.path("main.html"), &[fx.path("folder")]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PathNotFound);
        assert!(err.to_string().contains("folder"));
    }

    #[test]
    fn test_missing_default_extra() {
        let err = compose_templates(&["missing"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PathNotFound);
        assert_eq!(err.to_string(), "template 'missing' is not found");
    }

    #[test]
    fn test_layout_not_probed() {
        let fx = Fixture::new();
        let engine = SpyEngine::default();
        let set = TemplateSet::with_layout(fx.path("no-layout.html"), &[fx.path("components/login.html")]);

        let sources = compose_with(&engine, &set).unwrap();
        assert_eq!(engine.calls.get(), 1);
        assert_eq!(sources[0], fx.path("no-layout.html"));

        // The default engine reports the missing layout itself
        let err = compose_templates_with_layout(fx.path("no-layout.html"), &[fx.path("components/login.html")])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EngineParse);
    }

    #[test]
    fn test_empty_extras() {
        let fx = Fixture::new();
        let tmpl = compose_templates_with_layout(fx.path("main.html"), &[] as &[PathBuf]).unwrap();
        assert_eq!(tmpl.names(), &["main.html"]);
        assert_eq!(
            tmpl.render_layout(&Context::new()).unwrap(),
            "<html><title>Site</title><body></body></html>"
        );
    }

    #[test]
    fn test_empty_extras_default_layout() {
        // Uses the layout shipped in the crate's templates/ directory
        let tmpl = compose_templates(&[] as &[&str]).unwrap();
        assert_eq!(tmpl.sources(), &[PathBuf::from(DEFAULT_LAYOUT)]);
    }

    #[test]
    fn test_shipped_index_page() {
        let tmpl = compose_templates(&[
            "templates/pages/index.html",
            "templates/components/login-form.html",
        ])
        .unwrap();
        assert_eq!(tmpl.names(), &["main.html", "index.html", "login-form.html"]);

        let mut ctx = Context::new();
        ctx.insert("greeting", "Welcome");
        assert!(tmpl.render("index.html", &ctx).unwrap().contains("Welcome"));
    }

    #[test]
    fn test_duplicates_kept_in_order() {
        let fx = Fixture::new();
        let login = fx.path("components/login.html");
        let tmpl = compose_templates_with_layout(fx.path("main.html"), &[&login, &login]).unwrap();
        assert_eq!(tmpl.names(), &["main.html", "login.html", "login.html"]);
        assert_eq!(tmpl.sources().len(), 3);
    }

    #[test]
    fn test_last_definition_wins() {
        let fx = Fixture::new();
        let first = fx.write("a/card.html", "first");
        let second = fx.write("b/card.html", "second");

        let tmpl = compose_templates_with_layout(fx.path("main.html"), &[first, second]).unwrap();
        assert_eq!(tmpl.render("card.html", &Context::new()).unwrap(), "second");
    }

    #[test]
    fn test_parse_error_propagates() {
        let fx = Fixture::new();
        let broken = fx.write("broken.html", "{% if %}");
        let err = compose_templates_with_layout(fx.path("main.html"), &[broken]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EngineParse);
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_render_unknown_template() {
        let fx = Fixture::new();
        let tmpl = compose_templates_with_layout(fx.path("main.html"), &[] as &[PathBuf]).unwrap();
        assert!(!tmpl.contains("nope.html"));
        let err = tmpl.render("nope.html", &Context::new()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Render);
    }

    #[test]
    fn test_resolver_uses_configured_layout() {
        let fx = Fixture::new();
        let resolver = TemplateResolver::new(fx.path("main.html"));
        let tmpl = resolver.compose(&[fx.path("pages/index.html")]).unwrap();
        assert_eq!(tmpl.sources()[0], fx.path("main.html"));
        assert_eq!(TemplateResolver::default().layout(), Path::new(DEFAULT_LAYOUT));
    }
}
