//! Tag parsing.
//!
//! Splits one scanned tag span into its component name, an attribute map,
//! and the literal body. Attribute tokenization accepts `name="value"` and
//! bare `name` tokens; values are double-quoted and unescaped, so an
//! embedded `"` ends the value. Hyphenated attribute names normalize to
//! underscores because the renderer's identifier namespace disallows
//! hyphens (`active-link` becomes `active_link`).

use super::scanner::TagMatch;
use crate::error::Error;
use crate::{Value, ValueMap};

/// The attribute key reserved for the text between a tag's opening and
/// closing markers.
pub(crate) const CONTENT_KEY: &str = "content";

/// Parse one matched tag span into `(component_name, attribute_map)`.
///
/// The body, whitespace-trimmed, is stored under the reserved `content`
/// key. Passing `content` as an explicit attribute is rejected up front with
/// a substring check on the raw attribute text, before tokenization.
pub(crate) fn parse_tag(source: &str, tag: &TagMatch) -> Result<(String, ValueMap), Error> {
    let component = tag.name.slice(source).to_string();
    let attr_text = tag.attributes.slice(source);

    if attr_text.contains(CONTENT_KEY) {
        return Err(Error::ReservedAttribute { component });
    }

    let mut arguments = ValueMap::new();
    for caps in regex!(r#"([-\w]+)(?:="([^"]*)")?"#).captures_iter(attr_text) {
        let name = caps[1].replace('-', "_");
        let value = match caps.get(2) {
            Some(v) if !v.as_str().is_empty() => Value::Str(v.as_str().to_string()),
            // Bare attributes (and explicit empty values) read as flags.
            _ => Value::Bool(true),
        };
        arguments.insert(name, value);
    }

    arguments.insert(CONTENT_KEY, Value::Str(tag.content.slice(source).trim().to_string()));

    Ok((component, arguments))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::scanner;

    fn parse(source: &str) -> Result<(String, ValueMap), Error> {
        let tag = scanner::next_tag(source, 0).expect("expected a tag match");
        parse_tag(source, &tag)
    }

    #[test]
    fn splits_name_attributes_and_body() {
        let (name, args) = parse("<Card title=\"Hi\" count=\"3\"> body </Card>").unwrap();
        assert_eq!(name, "Card");
        assert_eq!(args.get("title"), Some(&Value::Str("Hi".into())));
        assert_eq!(args.get("count"), Some(&Value::Str("3".into())));
        assert_eq!(args.get("content"), Some(&Value::Str("body".into())));
    }

    #[test]
    fn bare_attributes_read_as_true() {
        let (_, args) = parse("<Button disabled>Go</Button>").unwrap();
        assert_eq!(args.get("disabled"), Some(&Value::Bool(true)));
    }

    #[test]
    fn empty_values_read_as_true() {
        let (_, args) = parse("<Button active=\"\">Go</Button>").unwrap();
        assert_eq!(args.get("active"), Some(&Value::Bool(true)));
    }

    #[test]
    fn hyphens_normalize_to_underscores() {
        let (_, args) = parse("<Nav active-link=\"true\">x</Nav>").unwrap();
        assert_eq!(args.get("active_link"), Some(&Value::Str("true".into())));
        assert_eq!(args.get("active-link"), None);
    }

    #[test]
    fn body_is_whitespace_trimmed() {
        let (_, args) = parse("<Card>\n  text  \n</Card>").unwrap();
        assert_eq!(args.get("content"), Some(&Value::Str("text".into())));
    }

    #[test]
    fn explicit_content_attribute_is_reserved() {
        let err = parse("<Card content=\"x\">y</Card>").unwrap_err();
        assert!(matches!(err, Error::ReservedAttribute { component } if component == "Card"));
    }

    #[test]
    fn reserved_check_is_a_plain_substring_test() {
        // Longer attribute names that contain `content` trip the check too.
        assert!(parse("<Card contents=\"x\">y</Card>").is_err());
    }
}
