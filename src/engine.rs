//! Component-tag expansion engine.
//!
//! This module is the structural core of the crate. Expanding a template is
//! a pipeline over raw source text:
//!
//! ```text
//! source ── scanner::next_tag ────────────────── (scanner.rs)
//!              │        literal text is copied through verbatim
//!              v
//!        tag::parse_tag                          (tag.rs)
//!          - component name
//!          - attribute map + reserved `content` body
//!              │
//!              v
//!        contract::load_contract                 (contract.rs, literal.rs)
//!          - first-line `{# attributes ... #}` directive
//!              │
//!              v
//!        resolve::resolve_arguments              (resolve.rs)
//!          - defaults filled, required enforced
//!              │
//!              v
//!        Host::render_named ──▶ Expander::expand (expand.rs, recursion)
//! ```
//!
//! Rendered component output is re-scanned recursively until no component
//! tags remain, then spliced back into the surrounding literal text.
//!
//! ## Responsibilities by module
//!
//! - `scanner.rs`: cursor scan for top-level capitalized tag spans.
//! - `tag.rs`: one span → component name + attribute map.
//! - `literal.rs`: safe literal grammar for contract defaults.
//! - `contract.rs`: resource lookup + attribute-contract extraction.
//! - `resolve.rs`: contract/call-site merge.
//! - `expand.rs`: the recursive splice loop and depth guard.
//!
//! All working state is local to one expansion call; component sources are
//! re-read from the host on every render, with no caching in between.

mod contract;
mod expand;
mod literal;
mod resolve;
mod scanner;
mod tag;

pub(crate) use expand::Expander;
