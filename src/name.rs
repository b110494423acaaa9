use std::path::MAIN_SEPARATOR;

/// A user-supplied name split into its directory and base parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedName {
    /// Directory portion, `"."` when the name has no directory.
    pub dirname: String,
    pub basename: String,
}

/// Split `raw` on its last separator, capitalizing the base when `format` is set.
pub fn parse_name(raw: &str, format: bool) -> ParsedName {
    let is_sep = |c: char| c == '/' || c == MAIN_SEPARATOR;

    let trimmed = raw.trim_end_matches(is_sep);
    let trimmed = if trimmed.is_empty() && !raw.is_empty() {
        &raw[..1]
    } else {
        trimmed
    };

    let (dirname, basename) = match trimmed.rfind(is_sep) {
        Some(0) => (trimmed[..1].to_string(), &trimmed[1..]),
        Some(idx) => (
            trimmed[..idx].trim_end_matches(is_sep).to_string(),
            &trimmed[idx + 1..],
        ),
        None => (".".to_string(), trimmed),
    };

    let basename = if format {
        capitalize(basename)
    } else {
        basename.to_string()
    };

    ParsedName { dirname, basename }
}

/// Uppercase the first character, leaving the rest untouched.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
