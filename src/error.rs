//! Expansion error taxonomy.
//!
//! Every kind is fatal to the enclosing render: errors are raised at the
//! point of detection and propagate synchronously through all recursive
//! expansion calls to the top-level caller. Nothing is caught and retried
//! internally, and there is no partial-output recovery: a single malformed
//! or missing component anywhere in the tree aborts the whole render.
//!
//! Two kinds are coarse. A component whose render fails for
//! *any* reason reports as [`Error::MissingComponent`], and any failure while
//! extracting an attribute contract reports as
//! [`Error::MissingAttributeList`]. The concrete cause travels on the error
//! source chain instead of widening the reported surface.

use crate::host::RenderFailure;

/// Errors raised while expanding component tags.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The named component resource could not be located, or its render
    /// failed for any reason.
    #[error("component '{name}' not found at render time in any available template roots")]
    MissingComponent {
        name: String,
        #[source]
        cause: Option<RenderFailure>,
    },

    /// The component resource exists but its first line is not a valid
    /// `{# attributes ... #}` directive.
    #[error("component '{name}' is missing an attribute list in the required format")]
    MissingAttributeList {
        name: String,
        #[source]
        cause: ContractCause,
    },

    /// A call site omitted a required (no-default) attribute declared by the
    /// component's contract.
    #[error("component '{component}' requires attribute '{attribute}' when it is called")]
    MissingAttributeInCall { component: String, attribute: String },

    /// A call site passed an attribute literally named `content`, which is
    /// reserved for the tag body.
    #[error(
        "reserved attribute name 'content' used when calling '{component}'; try 'text', 'material', or 'contents'"
    )]
    ReservedAttribute { component: String },

    /// The processor was asked to render before a host was bound.
    #[error("no template host bound; call `Processor::bind` (or construct with `Processor::with_host`) first")]
    Configuration,

    /// Component expansion exceeded the configured depth limit.
    #[error("component expansion exceeded the maximum depth of {limit}; check for self-referential components")]
    ExpansionTooDeep { limit: usize },

    /// The final render pass over the fully expanded text failed.
    #[error("final template render failed")]
    Render {
        #[source]
        source: RenderFailure,
    },
}

/// The underlying reason a component's attribute contract could not be
/// extracted. Reported under the single [`Error::MissingAttributeList`]
/// kind; kept on the source chain for diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum ContractCause {
    #[error("component source is empty")]
    EmptySource,

    #[error("first line is not a `{{# attributes ... #}}` directive")]
    MissingDirective,

    #[error("attribute list contains an empty entry")]
    EmptyEntry,

    #[error("invalid default literal for attribute '{attribute}': {detail}")]
    BadDefault { attribute: String, detail: String },
}
