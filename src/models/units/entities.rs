use serde::Serialize;

/// 翻译单元状态，数值与数据库中 state 列一致
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitState {
    Obsolete,
    Untranslated,
    Fuzzy,
    Translated,
}

impl UnitState {
    pub const OBSOLETE: i32 = -100;
    pub const UNTRANSLATED: i32 = 0;
    pub const FUZZY: i32 = 50;
    pub const TRANSLATED: i32 = 200;

    pub fn from_db(value: i32) -> Self {
        match value {
            v if v <= Self::OBSOLETE => UnitState::Obsolete,
            v if v >= Self::TRANSLATED => UnitState::Translated,
            v if v >= Self::FUZZY => UnitState::Fuzzy,
            _ => UnitState::Untranslated,
        }
    }

    pub fn to_db(self) -> i32 {
        match self {
            UnitState::Obsolete => Self::OBSOLETE,
            UnitState::Untranslated => Self::UNTRANSLATED,
            UnitState::Fuzzy => Self::FUZZY,
            UnitState::Translated => Self::TRANSLATED,
        }
    }
}

/// 导出视图中的一个单元
#[derive(Debug, Clone, Serialize)]
pub struct ExportUnit {
    pub id: i64,
    pub index: i32,
    pub source: String,
    pub target: String,
    pub state: UnitState,
}

/// 按 store 分组
#[derive(Debug, Clone, Serialize)]
pub struct UnitGroup {
    pub path: String,
    pub units: Vec<ExportUnit>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_from_db() {
        assert_eq!(UnitState::from_db(-100), UnitState::Obsolete);
        assert_eq!(UnitState::from_db(0), UnitState::Untranslated);
        assert_eq!(UnitState::from_db(50), UnitState::Fuzzy);
        assert_eq!(UnitState::from_db(200), UnitState::Translated);
        assert_eq!(UnitState::Fuzzy.to_db(), 50);
    }
}
