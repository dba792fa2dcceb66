use crate::error::{EmbedError, Result};
use crate::header::PRAGMA_ONCE;
use crate::ident::MacroIdent;
use crate::transcode::SENTINEL;

/// Parse a literal list back into the bytes it encodes.
///
/// Accepts the list with or without its surrounding braces. The sentinel
/// must appear exactly once, as the final literal, and is not returned.
pub fn decode_body(body: &str) -> Result<Vec<u8>> {
    let body = body.trim();
    let inner = match (body.strip_prefix('{'), body.ends_with('}')) {
        (Some(rest), true) => &rest[..rest.len() - 1],
        (None, false) => body,
        _ => {
            return Err(EmbedError::MalformedBody(
                "unbalanced braces around literal list".to_string(),
            ));
        }
    };

    let literals: Vec<&str> = inner.split(',').map(str::trim).collect();
    let Some((last, data)) = literals.split_last() else {
        return Err(EmbedError::MalformedBody("empty literal list".to_string()));
    };

    if *last != SENTINEL {
        return Err(EmbedError::MalformedBody(format!(
            "expected trailing sentinel '{}', found '{}'",
            SENTINEL, last
        )));
    }

    data.iter()
        .enumerate()
        .map(|(idx, literal)| {
            parse_literal(literal).ok_or_else(|| {
                EmbedError::MalformedBody(format!(
                    "invalid byte literal '{}' at index {}",
                    literal, idx
                ))
            })
        })
        .collect()
}

/// Split a generated header into its identifier and data bytes
pub fn parse_header(text: &str) -> Result<(MacroIdent, Vec<u8>)> {
    let (pragma, define) = text.split_once('\n').ok_or_else(|| {
        EmbedError::MalformedHeader("expected two lines".to_string())
    })?;

    if pragma.trim_end() != PRAGMA_ONCE {
        return Err(EmbedError::MalformedHeader(format!(
            "first line must be '{}'",
            PRAGMA_ONCE
        )));
    }

    let rest = define
        .strip_prefix("#define ")
        .ok_or_else(|| EmbedError::MalformedHeader("missing #define directive".to_string()))?;
    let (name, body) = rest
        .split_once(' ')
        .ok_or_else(|| EmbedError::MalformedHeader("missing macro body".to_string()))?;
    let ident = MacroIdent::from_raw(name).ok_or_else(|| {
        EmbedError::MalformedHeader(format!("'{}' is not a generated identifier", name))
    })?;

    let body = body.trim_end();
    if !body.starts_with('{') || !body.ends_with('}') {
        return Err(EmbedError::MalformedHeader(
            "macro body must be brace-delimited".to_string(),
        ));
    }

    Ok((ident, decode_body(body)?))
}

fn parse_literal(literal: &str) -> Option<u8> {
    let digits = literal.strip_prefix("0x")?;
    if digits.len() != 2 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u8::from_str_radix(digits, 16).ok()
}
