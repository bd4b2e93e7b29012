use serde::Serialize;
use std::collections::BTreeMap;

/// 某个路径下的最近一次提交
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LastAction {
    pub id: i64,
    pub mtime: i64,
    pub username: Option<String>,
    pub display_name: Option<String>,
    pub unit_id: Option<i64>,
}

/// pootle_path 前缀下的统计数据（字数）
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct Stats {
    pub total: i64,
    pub translated: i64,
    pub fuzzy: i64,
    pub suggestions: i64,
    pub critical: i64,
    pub lastupdated: Option<i64>,
    pub lastaction: Option<LastAction>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub children: BTreeMap<String, Stats>,
}

impl Stats {
    /// 未翻译 + 模糊
    pub fn need_translation(&self) -> i64 {
        (self.total - self.translated).max(0)
    }

    pub fn untranslated(&self) -> i64 {
        (self.total - self.translated - self.fuzzy).max(0)
    }

    /// 翻译进度百分比，0 - 100
    pub fn progress(&self) -> u8 {
        if self.total <= 0 {
            return 0;
        }
        ((self.translated as f64 / self.total as f64) * 100.0).floor() as u8
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TopScorer {
    pub user_id: i64,
    pub username: String,
    pub display_name: String,
    pub total_score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress() {
        let stats = Stats {
            total: 200,
            translated: 150,
            fuzzy: 20,
            ..Default::default()
        };
        assert_eq!(stats.progress(), 75);
        assert_eq!(stats.need_translation(), 50);
        assert_eq!(stats.untranslated(), 30);
        assert_eq!(Stats::default().progress(), 0);
    }

    #[test]
    fn test_children_omitted_when_empty() {
        let json = serde_json::to_value(Stats::default()).unwrap();
        assert!(json.get("children").is_none());
        assert_eq!(json["lastaction"], serde_json::Value::Null);
    }
}
