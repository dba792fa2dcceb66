use std::fmt;

/// Prefix shared by every generated macro name
pub const MACRO_PREFIX: &str = "EMBED_";

/// Name of the macro bound to the embedded byte array
///
/// Always starts with [`MACRO_PREFIX`] and contains only `[A-Z0-9_]`.
/// Two inputs whose base names sanitize to the same string get the same
/// identifier; nothing here detects that.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MacroIdent(String);

impl MacroIdent {
    /// Derive the identifier from an input path string
    pub fn from_path(path: &str) -> Self {
        let base = base_name(path);
        let mut ident = String::with_capacity(MACRO_PREFIX.len() + base.len());
        ident.push_str(MACRO_PREFIX);
        ident.extend(base.chars().map(sanitize_char));
        Self(ident)
    }

    /// Wrap an identifier read back from a generated header
    pub(crate) fn from_raw(raw: &str) -> Option<Self> {
        let valid = raw.starts_with(MACRO_PREFIX)
            && raw
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_');
        valid.then(|| Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for MacroIdent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for MacroIdent {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Shorthand for [`MacroIdent::from_path`] returning the plain string
pub fn derive_identifier(path: &str) -> String {
    MacroIdent::from_path(path).into_string()
}

/// Everything after the last `/`, or the whole string when there is none
pub fn base_name(path: &str) -> &str {
    match path.rfind('/') {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}

fn sanitize_char(c: char) -> char {
    if c.is_ascii_alphanumeric() || c == '_' {
        c.to_ascii_uppercase()
    } else {
        '_'
    }
}
