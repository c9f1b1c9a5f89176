//! Turning token path segments into SCSS identifiers.

use deunicode::deunicode;

/// Splits camelCase into dash-separated lowercase: `fontFamily` → `font-family`.
///
/// A dash is inserted before an uppercase letter that follows a lowercase
/// letter or a digit; runs of capitals stay together.
pub fn kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev: Option<char> = None;
    for c in name.chars() {
        if c.is_uppercase() && prev.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit()) {
            out.push('-');
        }
        out.extend(c.to_lowercase());
        prev = Some(c);
    }
    out
}

/// Sanitizes one path segment into an identifier fragment.
///
/// Non-ASCII text is transliterated, camelCase is split, whitespace becomes a
/// dash, anything outside `[a-z0-9_-]` is dropped, and dashes are collapsed
/// and trimmed.
pub fn sanitize_segment(segment: &str) -> String {
    let transliterated = deunicode(segment);
    let kebab = kebab_case(&transliterated);
    let mut slug: String = kebab
        .chars()
        .map(|c| if c.is_whitespace() { '-' } else { c })
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_' || *c == '-')
        .collect();
    while slug.contains("--") {
        slug = slug.replace("--", "-");
    }
    slug.trim_matches('-').to_string()
}

/// Builds a variable name from a full token path.
///
/// Segments that sanitize to nothing are dropped.
///
/// ```rust
/// use token_sass::naming::variable_name;
///
/// let path = vec!["color".to_string(), "brandPrimary".to_string()];
/// assert_eq!(variable_name(&path), "color-brand-primary");
/// ```
pub fn variable_name(path: &[String]) -> String {
    path.iter()
        .map(|segment| sanitize_segment(segment))
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}
