//! Render style: parameter placeholder format and keyword casing.
//!
//! A [`QueryStyle`] is an immutable value chosen once per render. The
//! effective keyword casing is resolved against the target vendor's accepted
//! set when the render context is built, never mid-render.

/// Keyword casing applied to every SQL keyword in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum KeywordStyle {
    Upper,
    Lower,
}

impl KeywordStyle {
    /// Apply the casing to a canonical (uppercase) keyword.
    pub fn apply(self, keyword: &str) -> String {
        match self {
            Self::Upper => keyword.to_string(),
            Self::Lower => keyword.to_ascii_lowercase(),
        }
    }
}

/// Parameter placeholder format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ParameterStyle {
    /// `?`
    Sequential,
    /// `?1`, `?2`, ...
    Numbered,
    /// `:name`
    ColonNamed,
    /// `$name`
    DollarNamed,
    /// `@name`
    AtNamed,
}

impl ParameterStyle {
    /// Render one placeholder.
    ///
    /// `index` is the 1-based position of the parameter within the statement.
    /// Under a named style an unnamed parameter falls back to the numbered
    /// positional marker so numbering stays consistent when named and
    /// unnamed parameters are mixed.
    pub(crate) fn marker(self, name: Option<&str>, index: u32) -> String {
        match (self, name) {
            (Self::Sequential, _) => "?".to_string(),
            (Self::Numbered, _) => format!("?{index}"),
            (Self::ColonNamed, Some(name)) => format!(":{name}"),
            (Self::DollarNamed, Some(name)) => format!("${name}"),
            (Self::AtNamed, Some(name)) => format!("@{name}"),
            (_, None) => format!("?{index}"),
        }
    }
}

/// The chosen placeholder format and keyword casing for one render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueryStyle {
    pub parameters: ParameterStyle,
    pub keywords: KeywordStyle,
}

impl QueryStyle {
    pub fn new(parameters: ParameterStyle, keywords: KeywordStyle) -> Self {
        Self {
            parameters,
            keywords,
        }
    }
}

impl Default for QueryStyle {
    fn default() -> Self {
        Self {
            parameters: ParameterStyle::AtNamed,
            keywords: KeywordStyle::Upper,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_casing() {
        assert_eq!(KeywordStyle::Upper.apply("GROUP BY"), "GROUP BY");
        assert_eq!(KeywordStyle::Lower.apply("GROUP BY"), "group by");
    }

    #[test]
    fn named_markers() {
        assert_eq!(ParameterStyle::AtNamed.marker(Some("email"), 1), "@email");
        assert_eq!(ParameterStyle::ColonNamed.marker(Some("email"), 1), ":email");
        assert_eq!(ParameterStyle::DollarNamed.marker(Some("email"), 1), "$email");
    }

    #[test]
    fn positional_markers_ignore_names() {
        assert_eq!(ParameterStyle::Sequential.marker(Some("email"), 3), "?");
        assert_eq!(ParameterStyle::Numbered.marker(Some("email"), 3), "?3");
    }

    #[test]
    fn unnamed_falls_back_to_numbered() {
        assert_eq!(ParameterStyle::AtNamed.marker(None, 2), "?2");
        assert_eq!(ParameterStyle::ColonNamed.marker(None, 5), "?5");
    }
}
