//! Vendor descriptors.
//!
//! A vendor is a named target dialect limited to which keyword casings it
//! accepts. When the requested style's casing is not accepted, rendering
//! silently downgrades to the vendor's first accepted casing.

use crate::error::{SqlError, SqlResult};
use crate::style::KeywordStyle;

/// A target SQL dialect descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vendor {
    name: String,
    accepted_keyword_casing: Vec<KeywordStyle>,
}

impl Vendor {
    /// Create a vendor descriptor.
    ///
    /// The accepted-casing list is de-duplicated preserving order; its first
    /// entry is the fallback casing. An empty list fails with
    /// [`SqlError::InvalidVendor`].
    pub fn new(name: impl Into<String>, accepted: &[KeywordStyle]) -> SqlResult<Self> {
        let name = name.into();
        let mut casings = Vec::new();
        for &style in accepted {
            if !casings.contains(&style) {
                casings.push(style);
            }
        }
        if casings.is_empty() {
            return Err(SqlError::InvalidVendor(format!(
                "vendor '{name}' accepts no keyword casing"
            )));
        }
        Ok(Self {
            name,
            accepted_keyword_casing: casings,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Check whether the vendor accepts a keyword casing.
    pub fn accepts(&self, style: KeywordStyle) -> bool {
        self.accepted_keyword_casing.contains(&style)
    }

    /// Resolve the casing actually used for a render: the requested one when
    /// accepted, the vendor's first accepted casing otherwise.
    pub(crate) fn effective_casing(&self, requested: KeywordStyle) -> KeywordStyle {
        if self.accepts(requested) {
            requested
        } else {
            self.accepted_keyword_casing[0]
        }
    }
}

impl Default for Vendor {
    fn default() -> Self {
        Self {
            name: "generic".to_string(),
            accepted_keyword_casing: vec![KeywordStyle::Upper, KeywordStyle::Lower],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_accepts_both_casings() {
        let vendor = Vendor::default();
        assert!(vendor.accepts(KeywordStyle::Upper));
        assert!(vendor.accepts(KeywordStyle::Lower));
        assert_eq!(vendor.effective_casing(KeywordStyle::Lower), KeywordStyle::Lower);
    }

    #[test]
    fn mismatch_downgrades_to_first_accepted() {
        let vendor = Vendor::new("shouty", &[KeywordStyle::Upper]).unwrap();
        assert_eq!(vendor.effective_casing(KeywordStyle::Lower), KeywordStyle::Upper);
    }

    #[test]
    fn duplicate_casings_collapse() {
        let vendor =
            Vendor::new("v", &[KeywordStyle::Lower, KeywordStyle::Lower, KeywordStyle::Upper])
                .unwrap();
        assert_eq!(vendor.effective_casing(KeywordStyle::Upper), KeywordStyle::Upper);
    }

    #[test]
    fn empty_casing_set_is_rejected() {
        assert_eq!(
            Vendor::new("broken", &[]),
            Err(SqlError::InvalidVendor(
                "vendor 'broken' accepts no keyword casing".to_string()
            ))
        );
    }
}
