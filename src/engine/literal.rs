//! Literal parsing for contract defaults.
//!
//! Default values in an attribute directive are restricted to a fixed
//! grammar of literals: quoted strings, integers, floats, booleans, and
//! null. Nothing is evaluated: component files are data, not code.
//! Booleans and null accept both the lowercase and the Python-style
//! capitalized spellings (`true`/`True`, `null`/`None`) so existing
//! component files keep working.

use crate::Value;

/// Parse a single default-value literal.
pub(crate) fn parse_literal(text: &str) -> Result<Value, String> {
    let text = text.trim();
    if text.is_empty() {
        return Err("empty literal".to_string());
    }

    if let Some(quote) = text.chars().next().filter(|c| *c == '"' || *c == '\'') {
        return parse_quoted(text, quote);
    }

    match text {
        "true" | "True" => return Ok(Value::Bool(true)),
        "false" | "False" => return Ok(Value::Bool(false)),
        "null" | "None" => return Ok(Value::Null),
        _ => {}
    }

    if let Ok(n) = text.parse::<i64>() {
        return Ok(Value::Int(n));
    }
    if let Ok(x) = text.parse::<f64>() {
        return Ok(Value::Float(x));
    }

    Err(format!("unrecognized literal `{text}`"))
}

fn parse_quoted(text: &str, quote: char) -> Result<Value, String> {
    let mut chars = text.chars();
    chars.next();

    let mut out = String::new();
    loop {
        match chars.next() {
            None => return Err("unterminated string literal".to_string()),
            Some('\\') => match chars.next() {
                Some('n') => out.push('\n'),
                Some('t') => out.push('\t'),
                Some('r') => out.push('\r'),
                Some(c @ ('\\' | '"' | '\'')) => out.push(c),
                Some(c) => return Err(format!("unsupported escape `\\{c}`")),
                None => return Err("unterminated string literal".to_string()),
            },
            Some(c) if c == quote => break,
            Some(c) => out.push(c),
        }
    }
    if chars.next().is_some() {
        return Err("trailing characters after string literal".to_string());
    }
    Ok(Value::Str(out))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_examples() {
        let cases: Vec<(&str, Value)> = vec![
            ("\"text\"", Value::Str("text".into())),
            ("'text'", Value::Str("text".into())),
            ("\"\"", Value::Str(String::new())),
            ("\"it's\"", Value::Str("it's".into())),
            (r#""a \"quoted\" word""#, Value::Str("a \"quoted\" word".into())),
            (r#""line\nbreak""#, Value::Str("line\nbreak".into())),
            ("0", Value::Int(0)),
            ("-12", Value::Int(-12)),
            ("3.5", Value::Float(3.5)),
            ("1e3", Value::Float(1000.0)),
            ("true", Value::Bool(true)),
            ("True", Value::Bool(true)),
            ("false", Value::Bool(false)),
            ("False", Value::Bool(false)),
            ("null", Value::Null),
            ("None", Value::Null),
            ("  42  ", Value::Int(42)),
        ];
        for (input, expected) in cases {
            assert_eq!(parse_literal(input).unwrap(), expected, "input: {input:?}");
        }
    }

    #[test]
    fn rejects_non_literals() {
        let cases = ["", "'unterminated", "\"a\" trailing", "__import__('os')", "1 + 1", "[1, 2]", "\"bad \\q escape\""];
        for input in cases {
            assert!(parse_literal(input).is_err(), "input: {input:?}");
        }
    }
}
