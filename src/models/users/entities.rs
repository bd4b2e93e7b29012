use serde::{Deserialize, Serialize};

/// 匿名访问者对应的系统用户
pub const NOBODY_USERNAME: &str = "nobody";
/// 已登录用户的默认权限来源
pub const DEFAULT_USERNAME: &str = "default";

pub const SYSTEM_USERNAMES: [&str; 2] = [NOBODY_USERNAME, DEFAULT_USERNAME];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing, default)] // 不输出到模板
    pub password_hash: String,
    pub full_name: String,
    pub is_superuser: bool,
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

impl User {
    pub fn display_name(&self) -> &str {
        if self.full_name.trim().is_empty() {
            &self.username
        } else {
            &self.full_name
        }
    }

    pub fn is_system_user(&self) -> bool {
        SYSTEM_USERNAMES.contains(&self.username.as_str())
    }
}

/// 发起请求的用户
#[derive(Debug, Clone, PartialEq)]
pub enum RequestUser {
    Anonymous,
    Authenticated(User),
}

impl RequestUser {
    pub fn user(&self) -> Option<&User> {
        match self {
            RequestUser::Anonymous => None,
            RequestUser::Authenticated(user) => Some(user),
        }
    }

    pub fn id(&self) -> Option<i64> {
        self.user().map(|u| u.id)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, RequestUser::Authenticated(_))
    }

    pub fn is_superuser(&self) -> bool {
        self.user().is_some_and(|u| u.is_superuser)
    }

    /// 权限回退时使用的系统用户名
    pub fn fallback_username(&self) -> &'static str {
        if self.is_authenticated() {
            DEFAULT_USERNAME
        } else {
            NOBODY_USERNAME
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(username: &str, superuser: bool) -> User {
        User {
            id: 7,
            username: username.to_string(),
            email: format!("{username}@example.com"),
            password_hash: String::new(),
            full_name: String::new(),
            is_superuser: superuser,
            is_active: true,
            created_at: 0,
            updated_at: 0,
        }
    }

    #[test]
    fn test_request_user_fallback() {
        assert_eq!(RequestUser::Anonymous.fallback_username(), "nobody");
        let alice = RequestUser::Authenticated(user("alice", false));
        assert_eq!(alice.fallback_username(), "default");
        assert_eq!(alice.id(), Some(7));
        assert!(!alice.is_superuser());
    }

    #[test]
    fn test_display_name() {
        let mut u = user("bob", false);
        assert_eq!(u.display_name(), "bob");
        u.full_name = "Bob Builder".into();
        assert_eq!(u.display_name(), "Bob Builder");
        assert!(user("nobody", false).is_system_user());
    }
}
