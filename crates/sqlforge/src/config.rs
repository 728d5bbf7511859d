//! Builder configuration: target vendor plus render style.
//!
//! Defaults are explicit immutable values threaded through construction.
//! There is no ambient mutable global; `SqlConfig::default()` is the frozen
//! process-wide default.

use crate::clause::select::{SelectClause, SelectExpr};
use crate::query::{QueryContext, SelectStep};
use crate::style::QueryStyle;
use crate::vendor::Vendor;

/// Immutable vendor + style pair for one or more statements.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SqlConfig {
    pub vendor: Vendor,
    pub style: QueryStyle,
}

impl SqlConfig {
    pub fn new(vendor: Vendor, style: QueryStyle) -> Self {
        Self { vendor, style }
    }

    /// Copy of the configuration with another vendor.
    pub fn with_vendor(mut self, vendor: Vendor) -> Self {
        self.vendor = vendor;
        self
    }

    /// Copy of the configuration with another style.
    pub fn with_style(mut self, style: QueryStyle) -> Self {
        self.style = style;
        self
    }

    /// Start a SELECT statement under this configuration.
    ///
    /// An empty item list renders as `SELECT *`.
    pub fn select<I>(&self, items: I) -> SelectStep
    where
        I: IntoIterator,
        I::Item: Into<SelectExpr>,
    {
        let clause = SelectClause::new(items.into_iter().map(Into::into).collect());
        SelectStep::new(QueryContext::new(self.clone(), clause))
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use crate::style::{KeywordStyle, ParameterStyle};
    use crate::vendor::Vendor;

    #[test]
    fn config_round_trips_through_json() {
        let config = SqlConfig::new(
            Vendor::new("pg", &[KeywordStyle::Lower, KeywordStyle::Upper]).unwrap(),
            QueryStyle::new(ParameterStyle::ColonNamed, KeywordStyle::Lower),
        );
        let json = serde_json::to_string(&config).unwrap();
        let back: SqlConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
