//! Recursive tag expansion.
//!
//! The driver walks the source once, splicing rendered component output in
//! place of each tag span:
//!
//! ```text
//! literal text ──────────────▶ accumulator ──▶ expanded text
//!                                   ▲
//! <Tag ...>body</Tag>               │
//!    │                              │ recursive expand on the
//!    └─ parse ─ contract ─ resolve ─┴─ render
//! ```
//!
//! The scan cursor advances monotonically; a consumed span is never
//! revisited. Each recursion level operates only on freshly rendered
//! component output, and a configurable depth limit turns self-referential
//! component sets into an error instead of unbounded recursion.

use super::{contract, resolve, scanner, tag};
use crate::ValueMap;
use crate::api::Options;
use crate::error::Error;
use crate::host::Host;

/// One expansion run over a source text. Holds the collaborators only; all
/// working state lives on the stack of the recursive walk.
pub(crate) struct Expander<'a> {
    pub host: &'a dyn Host,
    pub options: &'a Options,
}

impl Expander<'_> {
    /// Expand every component tag in `source`, recursively, and return the
    /// spliced result. Literal text, including `{{ }}` expression syntax,
    /// passes through untouched.
    pub fn expand(&self, source: &str, context: &ValueMap) -> Result<String, Error> {
        self.expand_at_depth(source, context, 0)
    }

    fn expand_at_depth(&self, source: &str, context: &ValueMap, depth: usize) -> Result<String, Error> {
        if depth > self.options.max_depth {
            return Err(Error::ExpansionTooDeep { limit: self.options.max_depth });
        }

        let mut out = String::with_capacity(source.len());
        let mut cursor = 0;

        while let Some(tag_match) = scanner::next_tag(source, cursor) {
            out.push_str(&source[cursor..tag_match.span.start]);

            let (component, mut arguments) = tag::parse_tag(source, &tag_match)?;
            let contract = contract::load_contract(self.host, self.options, &component)?;
            resolve::resolve_arguments(&component, &contract, &mut arguments)?;

            tracing::debug!(component = %component, depth, "expanding component tag");

            // Ambient context values are visible to the child render without
            // being declared in any contract; call-site arguments win on
            // collision.
            let mut values = context.clone();
            for (name, value) in arguments.iter() {
                values.insert(name.to_string(), value.clone());
            }

            let resource = format!("{component}{}", self.options.template_extension);
            let rendered = self.host.render_named(&resource, &values).map_err(|failure| {
                Error::MissingComponent { name: component.clone(), cause: Some(failure) }
            })?;

            let expanded = self.expand_at_depth(&rendered, context, depth + 1)?;
            out.push_str(&expanded);

            cursor = tag_match.span.end;
        }

        out.push_str(&source[cursor..]);
        Ok(out)
    }
}
