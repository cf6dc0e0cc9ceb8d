//! Attribute-contract extraction.
//!
//! Every component template declares its attribute contract in a directive
//! that must be the literal first line of the file:
//!
//! ```text
//! {# attributes title, level=2, footer="" #}
//! ```
//!
//! Entries are comma-separated: a bare `name` is required at every call
//! site; `name=<literal>` declares a default. The contract is re-read from
//! the component's raw source on every resolution; there is no cache.
//!
//! Extraction failures of any kind (empty source, missing or malformed
//! directive, bad default literal) are reported as the single
//! [`Error::MissingAttributeList`] kind; the concrete cause travels on the
//! error source chain.

use super::literal;
use crate::Value;
use crate::api::Options;
use crate::error::{ContractCause, Error};
use crate::host::Host;

/// One declared attribute: its name, and a default when the attribute is
/// optional. `None` means the attribute is required at every call site.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ContractEntry {
    pub name: String,
    pub default: Option<Value>,
}

/// A component's declared attributes, in declaration order.
pub(crate) type AttributeContract = Vec<ContractEntry>;

/// Load `component`'s backing resource and extract its attribute contract.
pub(crate) fn load_contract(host: &dyn Host, options: &Options, component: &str) -> Result<AttributeContract, Error> {
    let resource = format!("{component}{}", options.template_extension);
    let source = host
        .load_raw_source(&resource)
        .ok_or_else(|| Error::MissingComponent { name: component.to_string(), cause: None })?;

    let contract = parse_directive(&source)
        .map_err(|cause| Error::MissingAttributeList { name: component.to_string(), cause })?;

    tracing::debug!(component, declared = contract.len(), "loaded attribute contract");
    Ok(contract)
}

fn parse_directive(source: &str) -> Result<AttributeContract, ContractCause> {
    let first_line = source.lines().next().ok_or(ContractCause::EmptySource)?.trim();
    let caps = regex!(r"^\{# attributes (.*?) #\}$")
        .captures(first_line)
        .ok_or(ContractCause::MissingDirective)?;

    let mut contract = AttributeContract::new();
    for entry in caps[1].split(',') {
        let entry = entry.trim();
        if entry.is_empty() {
            return Err(ContractCause::EmptyEntry);
        }
        match entry.split_once('=') {
            Some((name, default)) => {
                let name = name.trim().to_string();
                if name.is_empty() {
                    return Err(ContractCause::EmptyEntry);
                }
                let default = literal::parse_literal(default)
                    .map_err(|detail| ContractCause::BadDefault { attribute: name.clone(), detail })?;
                contract.push(ContractEntry { name, default: Some(default) });
            }
            None => contract.push(ContractEntry { name: entry.to_string(), default: None }),
        }
    }

    Ok(contract)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MemoryHost;

    fn load(source: &str) -> Result<AttributeContract, Error> {
        let host = MemoryHost::new().with("Card.jinja", source);
        load_contract(&host, &Options::default(), "Card")
    }

    #[test]
    fn parses_required_and_defaulted_entries_in_order() {
        let contract = load("{# attributes title, level=2, footer=\"none\" #}\nbody").unwrap();
        assert_eq!(
            contract,
            vec![
                ContractEntry { name: "title".into(), default: None },
                ContractEntry { name: "level".into(), default: Some(Value::Int(2)) },
                ContractEntry { name: "footer".into(), default: Some(Value::Str("none".into())) },
            ]
        );
    }

    #[test]
    fn whitespace_around_entries_is_tolerated() {
        let contract = load("{# attributes  a ,  b = \"x\"  #}\nbody").unwrap();
        assert_eq!(contract[0], ContractEntry { name: "a".into(), default: None });
        assert_eq!(contract[1], ContractEntry { name: "b".into(), default: Some(Value::Str("x".into())) });
    }

    #[test]
    fn unknown_component_is_missing_component() {
        let host = MemoryHost::new();
        let err = load_contract(&host, &Options::default(), "Ghost").unwrap_err();
        assert!(matches!(err, Error::MissingComponent { name, .. } if name == "Ghost"));
    }

    #[test]
    fn missing_or_malformed_directive_is_missing_attribute_list() {
        let sources = [
            "<div>plain</div>",
            "",
            "{# attribute title #}\nx",
            "  \n{# attributes title #}\nx",
            "{# attributes a #} trailing\nx",
        ];
        for source in sources {
            let err = load(source).unwrap_err();
            assert!(
                matches!(err, Error::MissingAttributeList { ref name, .. } if name == "Card"),
                "source: {source:?}"
            );
        }
    }

    #[test]
    fn bad_default_literal_collapses_to_missing_attribute_list() {
        let err = load("{# attributes a=open( #}\nx").unwrap_err();
        match err {
            Error::MissingAttributeList { cause: ContractCause::BadDefault { attribute, .. }, .. } => {
                assert_eq!(attribute, "a");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_entries_are_malformed() {
        let err = load("{# attributes a, #}\nx").unwrap_err();
        assert!(matches!(err, Error::MissingAttributeList { cause: ContractCause::EmptyEntry, .. }));
    }
}
