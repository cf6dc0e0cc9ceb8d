use crate::ValueMap;
use crate::engine::Expander;
use crate::error::Error;
use crate::host::Host;

/// Options that affect expansion behavior.
#[derive(Debug, Clone)]
pub struct Options {
    /// File-name suffix appended to a component name when resolving its
    /// backing resource, e.g. `Card` → `Card.jinja`.
    pub template_extension: String,
    /// Maximum component nesting depth before expansion fails with
    /// [`Error::ExpansionTooDeep`].
    pub max_depth: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self { template_extension: ".jinja".to_string(), max_depth: 64 }
    }
}

/// The component-expansion entry point.
///
/// A `Processor` pairs a [`Host`] (the application's template loader and
/// renderer) with [`Options`]. It can be constructed unbound and bound
/// later, mirroring two-phase application setup; rendering through an
/// unbound processor fails with [`Error::Configuration`]. Each `Processor`
/// carries its own binding, so independent render pipelines never share
/// state.
///
/// # Example
/// ```
/// use tessera::{MemoryHost, Processor, ValueMap};
///
/// let host = MemoryHost::new()
///     .with("page.html", "<Card title=\"Hello\">welcome</Card>")
///     .with("Card.jinja", "{# attributes title #}\n<div>{{ title }}: {{ content }}</div>");
///
/// let processor = Processor::with_host(host);
/// let out = processor.render_page("page.html", &ValueMap::new()).unwrap();
/// assert_eq!(out, "<div>Hello: welcome</div>");
/// ```
pub struct Processor {
    host: Option<Box<dyn Host>>,
    options: Options,
}

impl Processor {
    /// Create an unbound processor; call [`bind`](Self::bind) before
    /// rendering.
    pub fn new() -> Self {
        Self { host: None, options: Options::default() }
    }

    /// Create a processor bound to `host`.
    pub fn with_host(host: impl Host + 'static) -> Self {
        Self { host: Some(Box::new(host)), options: Options::default() }
    }

    /// Replace the expansion options.
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// Bind (or replace) the template host.
    pub fn bind(&mut self, host: impl Host + 'static) {
        self.host = Some(Box::new(host));
    }

    /// Render the named page: load its raw source, expand every component
    /// tag recursively, then run the base templating language once over the
    /// fully expanded text with `values`.
    pub fn render_page(&self, name: &str, values: &ValueMap) -> Result<String, Error> {
        let host = self.bound_host()?;
        let source = host
            .load_raw_source(name)
            .ok_or_else(|| Error::MissingComponent { name: name.to_string(), cause: None })?;

        let expanded = Expander { host, options: &self.options }.expand(&source, values)?;
        host.render_str(&expanded, values).map_err(|failure| Error::Render { source: failure })
    }

    /// Expand component tags in `source` without the final render pass.
    ///
    /// Literal text, including `{{ }}` expression syntax, passes through
    /// untouched; only component tags are replaced.
    pub fn expand_source(&self, source: &str, values: &ValueMap) -> Result<String, Error> {
        let host = self.bound_host()?;
        Expander { host, options: &self.options }.expand(source, values)
    }

    fn bound_host(&self) -> Result<&dyn Host, Error> {
        self.host.as_deref().ok_or(Error::Configuration)
    }
}

impl Default for Processor {
    fn default() -> Self {
        Self::new()
    }
}
