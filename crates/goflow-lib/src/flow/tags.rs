//! Struct-tag interpretation.
//!
//! Go struct tags are space-separated `key:"value"` pairs by convention.
//! Only the `json` key is semantically recognized: its first
//! comma-separated segment names the field on the wire, and a later
//! `omitempty` segment marks the field optional. Other keys and
//! unrecognized options are ignored, not rejected.

use indexmap::IndexMap;

/// What a field's tag says about its external name and presence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct TagInfo {
    /// Wire name. Empty or `"-"` means the field is never exposed.
    pub(crate) name: String,
    pub(crate) optional: bool,
}

impl TagInfo {
    /// Interpret a field's tag. Absent or malformed tags, and tags without
    /// a `json` key, degrade to the empty name rather than failing.
    pub(crate) fn from_field(tag: Option<&str>) -> Self {
        let Some(tag) = tag else {
            return Self::default();
        };
        let pairs = tag_pairs(tag);
        let Some(value) = pairs.get("json") else {
            return Self::default();
        };
        let mut segments = value.split(',');
        let name = segments.next().unwrap_or("").to_string();
        let optional = segments.any(|segment| segment == "omitempty");
        Self { name, optional }
    }

    /// True when the tag directs the field to be dropped from output.
    pub(crate) fn skipped(&self) -> bool {
        self.name.is_empty() || self.name == "-"
    }
}

/// Scan a tag string into its `key:"value"` pairs, in source order. The
/// first occurrence of a key wins. Malformed trailing syntax ends the
/// scan rather than failing it.
pub(crate) fn tag_pairs(tag: &str) -> IndexMap<&str, String> {
    let mut pairs = IndexMap::new();
    let mut rest = tag;

    loop {
        rest = rest.trim_start_matches(' ');
        let key_end = rest
            .find(|c: char| c <= ' ' || c == ':' || c == '"')
            .unwrap_or(rest.len());
        if key_end == 0 {
            break;
        }
        let (key, tail) = rest.split_at(key_end);
        let Some(tail) = tail.strip_prefix(":\"") else {
            break;
        };
        let Some((value, remainder)) = scan_quoted(tail) else {
            break;
        };
        pairs.entry(key).or_insert(value);
        rest = remainder;
    }

    pairs
}

// Scan up to the closing quote, resolving backslash escapes. Returns the
// value and the text after the closing quote.
fn scan_quoted(text: &str) -> Option<(String, &str)> {
    let mut value = String::new();
    let mut chars = text.char_indices();
    while let Some((i, c)) = chars.next() {
        match c {
            '"' => return Some((value, &text[i + 1..])),
            '\\' => {
                let (_, escaped) = chars.next()?;
                value.push(escaped);
            }
            _ => value.push(c),
        }
    }
    None
}
