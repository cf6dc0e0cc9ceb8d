//! Host collaborator surface.
//!
//! The engine consumes exactly two capabilities from its surrounding
//! application: loading the raw, unrendered source of a named template
//! resource, and rendering templates through the base templating language.
//! [`Host`] bundles both behind one seam so independent render requests can
//! each carry their own binding.
//!
//! Two reference hosts ship with the crate: [`MemoryHost`] (an in-memory
//! name → source map) and [`DirHost`] (a multi-root filesystem loader).
//! Their renderer only strips `{# ... #}` comments and substitutes
//! `{{ ident }}` placeholders; expression evaluation belongs to whatever
//! templating engine the application binds here.

use crate::ValueMap;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// Failure reported by a host renderer.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct RenderFailure(pub String);

/// The template loader and renderer an application supplies to the engine.
///
/// Implementations must be safe for concurrent read access: the engine
/// itself shares nothing across top-level renders, so host safety is the
/// only requirement for rendering concurrent requests.
pub trait Host: Send + Sync {
    /// Raw, unrendered source text for the named resource, or `None` if the
    /// resource does not exist in any searched location.
    fn load_raw_source(&self, name: &str) -> Option<String>;

    /// Render the named resource through the base templating language,
    /// substituting `values`.
    fn render_named(&self, name: &str, values: &ValueMap) -> Result<String, RenderFailure>;

    /// Render raw template text rather than a named resource. Used for the
    /// final pass over fully expanded output.
    fn render_str(&self, source: &str, values: &ValueMap) -> Result<String, RenderFailure>;
}

// Reference rendering shared by the bundled hosts: strip `{# ... #}` comment
// blocks (each takes one trailing newline with it), then substitute
// `{{ ident }}` with the bound value. Names without a binding render empty.
fn substitute(source: &str, values: &ValueMap) -> String {
    let stripped = regex!(r"(?s)\{#.*?#\}\n?").replace_all(source, "");
    regex!(r"\{\{\s*([A-Za-z_]\w*)\s*\}\}")
        .replace_all(&stripped, |caps: &regex::Captures<'_>| {
            values.get(&caps[1]).map(ToString::to_string).unwrap_or_default()
        })
        .into_owned()
}

/// An in-memory [`Host`] backed by a name → source map.
///
/// Intended for tests and embedding; there is no filesystem involved.
#[derive(Debug, Clone, Default)]
pub struct MemoryHost {
    templates: HashMap<String, String>,
}

impl MemoryHost {
    /// Create an empty host.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) a template source under `name`.
    pub fn insert(&mut self, name: impl Into<String>, source: impl Into<String>) {
        self.templates.insert(name.into(), source.into());
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, name: impl Into<String>, source: impl Into<String>) -> Self {
        self.insert(name, source);
        self
    }
}

impl Host for MemoryHost {
    fn load_raw_source(&self, name: &str) -> Option<String> {
        self.templates.get(name).cloned()
    }

    fn render_named(&self, name: &str, values: &ValueMap) -> Result<String, RenderFailure> {
        let source = self
            .load_raw_source(name)
            .ok_or_else(|| RenderFailure(format!("template '{name}' is not registered")))?;
        self.render_str(&source, values)
    }

    fn render_str(&self, source: &str, values: &ValueMap) -> Result<String, RenderFailure> {
        Ok(substitute(source, values))
    }
}

/// A [`Host`] that loads template resources from one or more root
/// directories, searched in order. The first root containing the named file
/// wins.
#[derive(Debug, Clone)]
pub struct DirHost {
    roots: Vec<PathBuf>,
}

impl DirHost {
    /// Create a host over `roots`, searched in the given order.
    pub fn new(roots: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        DirHost { roots: roots.into_iter().map(Into::into).collect() }
    }
}

impl Host for DirHost {
    fn load_raw_source(&self, name: &str) -> Option<String> {
        self.roots.iter().find_map(|root| fs::read_to_string(root.join(name)).ok())
    }

    fn render_named(&self, name: &str, values: &ValueMap) -> Result<String, RenderFailure> {
        let source = self
            .load_raw_source(name)
            .ok_or_else(|| RenderFailure(format!("template '{name}' not found in any root")))?;
        self.render_str(&source, values)
    }

    fn render_str(&self, source: &str, values: &ValueMap) -> Result<String, RenderFailure> {
        Ok(substitute(source, values))
    }
}
