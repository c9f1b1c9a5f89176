//! The fixed token type catalog.

use std::fmt;

/// Category tag of a token.
///
/// The catalog is closed: any tag that is not recognised becomes
/// [`TokenType::Unknown`], which renders its value verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TokenType {
    Color,
    Dimension,
    FontFamily,
    FontWeight,
    Duration,
    CubicBezier,
    Number,
    Typography,
    Shadow,
    Border,
    #[default]
    Unknown,
}

/// Tokens Studio type names that map onto a catalog entry.
///
/// Applied once at extraction time, before resolution.
const TOKENS_STUDIO_ALIASES: &[(&str, TokenType)] = &[
    ("size", TokenType::Dimension),
    ("sizing", TokenType::Dimension),
    ("spacing", TokenType::Dimension),
    ("borderRadius", TokenType::Dimension),
    ("borderWidth", TokenType::Dimension),
    ("fontSizes", TokenType::Dimension),
    ("letterSpacing", TokenType::Dimension),
    ("paragraphSpacing", TokenType::Dimension),
    ("opacity", TokenType::Number),
    ("lineHeights", TokenType::Number),
    ("fontFamilies", TokenType::FontFamily),
    ("fontWeights", TokenType::FontWeight),
    ("boxShadow", TokenType::Shadow),
];

impl TokenType {
    /// Parses a catalog tag. Unrecognised tags yield [`TokenType::Unknown`].
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "color" => TokenType::Color,
            "dimension" => TokenType::Dimension,
            "fontFamily" => TokenType::FontFamily,
            "fontWeight" => TokenType::FontWeight,
            "duration" => TokenType::Duration,
            "cubicBezier" => TokenType::CubicBezier,
            "number" => TokenType::Number,
            "typography" => TokenType::Typography,
            "shadow" => TokenType::Shadow,
            "border" => TokenType::Border,
            _ => TokenType::Unknown,
        }
    }

    /// Parses a Tokens Studio type tag, applying its alias table first.
    pub fn from_tokens_studio_tag(tag: &str) -> Self {
        TOKENS_STUDIO_ALIASES
            .iter()
            .find(|(alias, _)| *alias == tag)
            .map(|(_, kind)| *kind)
            .unwrap_or_else(|| Self::from_tag(tag))
    }

    /// Returns the catalog tag for this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenType::Color => "color",
            TokenType::Dimension => "dimension",
            TokenType::FontFamily => "fontFamily",
            TokenType::FontWeight => "fontWeight",
            TokenType::Duration => "duration",
            TokenType::CubicBezier => "cubicBezier",
            TokenType::Number => "number",
            TokenType::Typography => "typography",
            TokenType::Shadow => "shadow",
            TokenType::Border => "border",
            TokenType::Unknown => "unknown",
        }
    }

    /// Returns true for types whose value is a bundle of named sub-fields.
    pub fn is_composite(&self) -> bool {
        matches!(
            self,
            TokenType::Typography | TokenType::Shadow | TokenType::Border
        )
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
