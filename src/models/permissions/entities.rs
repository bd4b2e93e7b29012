//! 权限位
//!
//! 以 BIGINT 存储在 pootle_app_permissionset.capabilities 中。

use bitflags::bitflags;
use serde::{Serialize, Serializer};

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Capabilities: u64 {
        /// 浏览
        const VIEW         = 1 << 0;
        /// 提交建议
        const SUGGEST      = 1 << 1;
        /// 直接翻译
        const TRANSLATE    = 1 << 2;
        /// 审核建议
        const REVIEW       = 1 << 3;
        /// 管理，隐含其他所有权限
        const ADMINISTRATE = 1 << 4;
    }
}

impl Capabilities {
    /// (权限, 代码, 显示名)
    pub const CHOICES: [(Capabilities, &'static str, &'static str); 5] = [
        (Capabilities::VIEW, "view", "Can access a project"),
        (Capabilities::SUGGEST, "suggest", "Can make a suggestion for a translation"),
        (Capabilities::TRANSLATE, "translate", "Can submit a translation"),
        (Capabilities::REVIEW, "review", "Can review suggestions"),
        (
            Capabilities::ADMINISTRATE,
            "administrate",
            "Can administrate a translation project",
        ),
    ];

    #[inline]
    pub fn has(&self, capability: Capabilities) -> bool {
        if self.contains(Capabilities::ADMINISTRATE) {
            return true;
        }
        self.contains(capability)
    }

    pub fn codes(&self) -> Vec<&'static str> {
        Self::CHOICES
            .iter()
            .filter(|(cap, _, _)| self.contains(*cap))
            .map(|(_, code, _)| *code)
            .collect()
    }

    pub fn from_db(value: i64) -> Self {
        Self::from_bits_truncate(value as u64)
    }

    pub fn to_db(self) -> i64 {
        self.bits() as i64
    }
}

// 模板中以代码列表展示
impl Serialize for Capabilities {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.codes())
    }
}

impl std::fmt::Display for Capabilities {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.codes().join(", "))
    }
}

/// 目录上为某个用户设置的权限
#[derive(Debug, Clone, Serialize)]
pub struct PermissionSet {
    pub id: i64,
    pub user_id: i64,
    pub directory_id: i64,
    pub capabilities: Capabilities,
}

/// 管理页面展示用
#[derive(Debug, Clone, Serialize)]
pub struct PermissionSetEntry {
    pub id: i64,
    pub user_id: i64,
    pub username: String,
    pub capabilities: Capabilities,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_administrate_implies_all() {
        let admin = Capabilities::ADMINISTRATE;
        assert!(admin.has(Capabilities::VIEW));
        assert!(admin.has(Capabilities::REVIEW));

        let viewer = Capabilities::VIEW;
        assert!(viewer.has(Capabilities::VIEW));
        assert!(!viewer.has(Capabilities::ADMINISTRATE));
        assert!(!Capabilities::empty().has(Capabilities::VIEW));
    }

    #[test]
    fn test_codes() {
        let caps = Capabilities::VIEW | Capabilities::TRANSLATE;
        assert_eq!(caps.codes(), vec!["view", "translate"]);
        assert_eq!(caps.to_string(), "view, translate");
        assert!(Capabilities::empty().codes().is_empty());
    }

    #[test]
    fn test_db_round_trip_ignores_unknown_bits() {
        let caps = Capabilities::from_db((1 << 40) | 1);
        assert_eq!(caps, Capabilities::VIEW);
    }

    #[test]
    fn test_serialize_as_codes() {
        let json = serde_json::to_string(&(Capabilities::VIEW | Capabilities::SUGGEST)).unwrap();
        assert_eq!(json, r#"["view","suggest"]"#);
    }
}
