//! Argument resolution.
//!
//! Merges a component's declared contract into the call-site attribute map:
//! declared defaults fill in missing attributes, required attributes must be
//! present, and undeclared call-site attributes pass through unchanged. The
//! contract is a minimum requirement, not an allow-list.

use super::contract::AttributeContract;
use crate::ValueMap;
use crate::error::Error;

/// Complete `arguments` in place against the component's contract.
///
/// Contract entries are checked in declaration order, so the first missing
/// required attribute is the one reported.
pub(crate) fn resolve_arguments(
    component: &str,
    contract: &AttributeContract,
    arguments: &mut ValueMap,
) -> Result<(), Error> {
    for entry in contract {
        if arguments.contains(&entry.name) {
            continue;
        }
        match &entry.default {
            Some(default) => arguments.insert(entry.name.clone(), default.clone()),
            None => {
                return Err(Error::MissingAttributeInCall {
                    component: component.to_string(),
                    attribute: entry.name.clone(),
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Value;
    use crate::engine::contract::ContractEntry;

    fn contract() -> AttributeContract {
        vec![
            ContractEntry { name: "title".into(), default: None },
            ContractEntry { name: "level".into(), default: Some(Value::Int(2)) },
        ]
    }

    #[test]
    fn fills_defaults_and_passes_undeclared_attributes_through() {
        let mut arguments = ValueMap::new();
        arguments.insert("title", Value::from("T"));
        arguments.insert("extra", Value::from("kept"));

        resolve_arguments("Card", &contract(), &mut arguments).unwrap();

        assert_eq!(arguments.get("title"), Some(&Value::Str("T".into())));
        assert_eq!(arguments.get("level"), Some(&Value::Int(2)));
        assert_eq!(arguments.get("extra"), Some(&Value::Str("kept".into())));
    }

    #[test]
    fn call_site_values_are_not_overwritten_by_defaults() {
        let mut arguments = ValueMap::new();
        arguments.insert("title", Value::from("T"));
        arguments.insert("level", Value::from("9"));

        resolve_arguments("Card", &contract(), &mut arguments).unwrap();

        assert_eq!(arguments.get("level"), Some(&Value::Str("9".into())));
    }

    #[test]
    fn the_first_missing_required_attribute_is_reported() {
        let contract = vec![
            ContractEntry { name: "first".into(), default: None },
            ContractEntry { name: "second".into(), default: None },
        ];
        let err = resolve_arguments("Card", &contract, &mut ValueMap::new()).unwrap_err();
        assert!(matches!(
            err,
            Error::MissingAttributeInCall { component, attribute }
                if component == "Card" && attribute == "first"
        ));
    }
}
