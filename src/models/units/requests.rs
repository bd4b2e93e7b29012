use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 单元过滤条件
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitFilter {
    #[default]
    All,
    Translated,
    Untranslated,
    Fuzzy,
    Incomplete,
    Suggestions,
    Critical,
}

impl UnitFilter {
    pub const ALL: [UnitFilter; 7] = [
        UnitFilter::All,
        UnitFilter::Translated,
        UnitFilter::Untranslated,
        UnitFilter::Fuzzy,
        UnitFilter::Incomplete,
        UnitFilter::Suggestions,
        UnitFilter::Critical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UnitFilter::All => "all",
            UnitFilter::Translated => "translated",
            UnitFilter::Untranslated => "untranslated",
            UnitFilter::Fuzzy => "fuzzy",
            UnitFilter::Incomplete => "incomplete",
            UnitFilter::Suggestions => "suggestions",
            UnitFilter::Critical => "critical",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UnitFilter::All => "All",
            UnitFilter::Translated => "Translated",
            UnitFilter::Untranslated => "Untranslated",
            UnitFilter::Fuzzy => "Needs work",
            UnitFilter::Incomplete => "Incomplete",
            UnitFilter::Suggestions => "Unreviewed suggestions",
            UnitFilter::Critical => "Critical errors",
        }
    }
}

impl fmt::Display for UnitFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnitFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|f| f.as_str() == s)
            .copied()
            .ok_or_else(|| format!("Invalid filter: {s}"))
    }
}

/// 导出视图查询参数
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExportViewQuery {
    #[serde(default)]
    pub filter: Option<String>,
}

impl ExportViewQuery {
    /// 未知过滤条件退回 all
    pub fn filter(&self) -> UnitFilter {
        self.filter
            .as_deref()
            .and_then(|f| f.parse().ok())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_parse() {
        assert_eq!("fuzzy".parse::<UnitFilter>().unwrap(), UnitFilter::Fuzzy);
        assert!("bogus".parse::<UnitFilter>().is_err());
        let query = ExportViewQuery {
            filter: Some("bogus".into()),
        };
        assert_eq!(query.filter(), UnitFilter::All);
        assert_eq!(ExportViewQuery::default().filter(), UnitFilter::All);
    }
}
