//! Display/format hints carried in the query string.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Result, UrlError};
use crate::query;

/// Device-pixel-ratio hint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDpr", into = "RawDpr")]
pub enum Dpr {
    /// Let the CDN pick the ratio (`dpr=auto`).
    Auto,
    /// Explicit ratio; valid range is [0.1, 5.0].
    Ratio(f64),
}

impl fmt::Display for Dpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dpr::Auto => f.write_str("auto"),
            Dpr::Ratio(v) => write!(f, "{:.1}", v),
        }
    }
}

/// JSON form of [`Dpr`]: either the string `"auto"`/a numeric string, or a number.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawDpr {
    Number(f64),
    Text(String),
}

impl TryFrom<RawDpr> for Dpr {
    type Error = UrlError;

    fn try_from(raw: RawDpr) -> Result<Self> {
        match raw {
            RawDpr::Number(v) => query::validate_dpr_ratio(v),
            RawDpr::Text(s) => query::parse_dpr(&s),
        }
    }
}

impl From<Dpr> for RawDpr {
    fn from(dpr: Dpr) -> Self {
        match dpr {
            Dpr::Auto => RawDpr::Text("auto".to_string()),
            Dpr::Ratio(v) => RawDpr::Number(v),
        }
    }
}

/// The recognized query options. New options are added as fields here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dpr: Option<Dpr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub f_auto: Option<bool>,
}

impl QueryOptions {
    /// Set `dpr` from its textual form (`auto` or a number in [0.1, 5.0]).
    pub fn with_dpr(mut self, raw: &str) -> Result<Self> {
        self.dpr = Some(query::parse_dpr(raw)?);
        Ok(self)
    }

    /// Set `f_auto` from `true/false/1/0/yes/no` (any case).
    pub fn with_f_auto(mut self, raw: &str) -> Result<Self> {
        self.f_auto = Some(query::parse_f_auto(raw)?);
        Ok(self)
    }

    pub fn is_empty(&self) -> bool {
        self.dpr.is_none() && self.f_auto.is_none()
    }
}

impl fmt::Display for QueryOptions {
    /// Query text in fixed order without the leading `?` and without validation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        if let Some(dpr) = self.dpr {
            write!(f, "dpr={}", dpr)?;
            first = false;
        }
        if let Some(f_auto) = self.f_auto {
            if !first {
                f.write_str("&")?;
            }
            write!(f, "f_auto={}", f_auto)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dpr_display_one_fraction_digit() {
        assert_eq!(Dpr::Auto.to_string(), "auto");
        assert_eq!(Dpr::Ratio(2.5).to_string(), "2.5");
        assert_eq!(Dpr::Ratio(2.0).to_string(), "2.0");
        assert_eq!(Dpr::Ratio(1.25).to_string().len(), 3);
    }

    #[test]
    fn options_display_fixed_order() {
        let opts = QueryOptions {
            dpr: Some(Dpr::Ratio(2.5)),
            f_auto: Some(true),
        };
        assert_eq!(opts.to_string(), "dpr=2.5&f_auto=true");
        let only_f_auto = QueryOptions {
            dpr: None,
            f_auto: Some(false),
        };
        assert_eq!(only_f_auto.to_string(), "f_auto=false");
        assert_eq!(QueryOptions::default().to_string(), "");
    }

    #[test]
    fn builders_validate() {
        let opts = QueryOptions::default()
            .with_dpr("auto")
            .unwrap()
            .with_f_auto("YES")
            .unwrap();
        assert_eq!(opts.dpr, Some(Dpr::Auto));
        assert_eq!(opts.f_auto, Some(true));

        let err = QueryOptions::default().with_f_auto("abc").unwrap_err();
        assert_eq!(err.to_string(), "F_auto value should be boolean");
        let err = QueryOptions::default().with_dpr("5.5").unwrap_err();
        assert!(matches!(err, UrlError::IllegalQueryParameter(_)));
    }

    #[test]
    fn dpr_json_forms() {
        let opts: QueryOptions = serde_json::from_str(r#"{"dpr":"auto","f_auto":true}"#).unwrap();
        assert_eq!(opts.dpr, Some(Dpr::Auto));
        let opts: QueryOptions = serde_json::from_str(r#"{"dpr":2.5}"#).unwrap();
        assert_eq!(opts.dpr, Some(Dpr::Ratio(2.5)));
        let opts: QueryOptions = serde_json::from_str(r#"{"dpr":"1.5"}"#).unwrap();
        assert_eq!(opts.dpr, Some(Dpr::Ratio(1.5)));
        assert!(serde_json::from_str::<QueryOptions>(r#"{"dpr":9}"#).is_err());

        let json = serde_json::to_string(&QueryOptions {
            dpr: Some(Dpr::Auto),
            f_auto: None,
        })
        .unwrap();
        assert_eq!(json, r#"{"dpr":"auto"}"#);
    }
}
