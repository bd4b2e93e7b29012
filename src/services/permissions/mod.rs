//! 权限解析
//!
//! 有效权限按目录树自下而上查找：
//! 1. 超级用户拥有全部权限
//! 2. 用户自身在最近的祖先目录上的权限集
//! 3. 找不到时，已登录用户回退到 `default`，匿名用户回退到 `nobody`

pub mod admin;

use crate::errors::Result;
use crate::models::languages::entities::TranslationProject;
use crate::models::permissions::entities::Capabilities;
use crate::models::users::entities::RequestUser;
use crate::storage::Storage;

/// `/fr/tutorial/` -> [`/fr/tutorial/`, `/fr/`, `/`]
pub fn ancestor_paths(pootle_path: &str) -> Vec<String> {
    let segments: Vec<&str> = pootle_path.split('/').filter(|s| !s.is_empty()).collect();
    (0..=segments.len())
        .rev()
        .map(|n| {
            if n == 0 {
                "/".to_string()
            } else {
                format!("/{}/", segments[..n].join("/"))
            }
        })
        .collect()
}

/// 用户在路径上的有效权限
pub async fn effective_capabilities(
    storage: &dyn Storage,
    user: &RequestUser,
    pootle_path: &str,
) -> Result<Capabilities> {
    if user.is_superuser() {
        return Ok(Capabilities::all());
    }

    let paths = ancestor_paths(pootle_path);

    if let Some(user_id) = user.id()
        && let Some(capabilities) = nearest_capabilities(storage, user_id, &paths).await?
    {
        return Ok(capabilities);
    }

    let fallback = user.fallback_username();
    match storage.get_user_by_username(fallback).await? {
        Some(system_user) => Ok(nearest_capabilities(storage, system_user.id, &paths)
            .await?
            .unwrap_or_default()),
        None => {
            tracing::warn!("System user `{}` is missing, denying access", fallback);
            Ok(Capabilities::empty())
        }
    }
}

async fn nearest_capabilities(
    storage: &dyn Storage,
    user_id: i64,
    paths: &[String],
) -> Result<Option<Capabilities>> {
    let found = storage.get_permissions_for_paths(user_id, paths).await?;
    // paths 已按由近到远排列
    Ok(paths.iter().find_map(|path| {
        found
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, capabilities)| *capabilities)
    }))
}

/// 翻译项目是否对用户可见
pub async fn is_accessible_by(
    storage: &dyn Storage,
    tp: &TranslationProject,
    user: &RequestUser,
) -> Result<bool> {
    if user.is_superuser() {
        return Ok(true);
    }
    if tp.project.disabled {
        return Ok(false);
    }
    Ok(effective_capabilities(storage, user, &tp.pootle_path)
        .await?
        .has(Capabilities::VIEW))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ancestor_paths() {
        assert_eq!(
            ancestor_paths("/fr/tutorial/"),
            vec!["/fr/tutorial/", "/fr/", "/"]
        );
        assert_eq!(ancestor_paths("/fr/"), vec!["/fr/", "/"]);
        assert_eq!(ancestor_paths("/"), vec!["/"]);
    }
}
