use crate::config::AppConfig;
use crate::errors::Result;
use crate::models::users::entities::SYSTEM_USERNAMES;
use crate::models::users::requests::CreateUserRequest;
use crate::render::Templates;
use crate::routes::languages::RESERVED_CODES;
use crate::storage::Storage;
use crate::utils::password::{UNUSABLE_PASSWORD, hash_password};
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
}

/// 生成随机密码
fn generate_random_password(length: usize) -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%";
    let mut rng = rand::rng();
    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

/// 确保权限回退用的系统用户存在
///
/// `nobody` 承载匿名用户的权限，`default` 承载已登录用户的默认权限。
pub async fn seed_system_users(storage: &Arc<dyn Storage>) -> Result<()> {
    for username in SYSTEM_USERNAMES {
        if storage.get_user_by_username(username).await?.is_some() {
            continue;
        }
        storage
            .create_user(CreateUserRequest {
                username: username.to_string(),
                email: String::new(),
                password: UNUSABLE_PASSWORD.to_string(),
                full_name: String::new(),
                is_superuser: false,
            })
            .await?;
        info!("Created system user {}", username);
    }
    Ok(())
}

/// 初始化默认管理员账号
/// 除系统用户外没有任何用户时，创建一个 admin 超级用户
async fn seed_admin(storage: &Arc<dyn Storage>) -> Result<()> {
    let count = storage.count_users().await?;
    if count > SYSTEM_USERNAMES.len() as u64 {
        debug!(
            "Database already has {} user(s), skipping admin seed",
            count
        );
        return Ok(());
    }
    if storage.get_user_by_username("admin").await?.is_some() {
        return Ok(());
    }

    info!("No users found in database, creating default admin account...");

    // 获取密码：优先从环境变量，否则生成随机密码
    let password = std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| {
        let pwd = generate_random_password(16);
        warn!("==========================================================");
        warn!("  ADMIN PASSWORD NOT SET - USING GENERATED PASSWORD");
        warn!("  Generated admin password: {}", pwd);
        warn!("  Please save this password or set ADMIN_PASSWORD env var");
        warn!("==========================================================");
        pwd
    });

    let user = storage
        .create_user(CreateUserRequest {
            username: "admin".to_string(),
            email: "admin@localhost".to_string(),
            password: hash_password(&password)?,
            full_name: "Administrator".to_string(),
            is_superuser: true,
        })
        .await?;
    info!(
        "Default admin account created successfully (ID: {}, username: {})",
        user.id, user.username
    );
    Ok(())
}

/// 代码与保留路径冲突的语言，这些语言的页面无法访问
pub async fn find_reserved_languages(storage: &Arc<dyn Storage>) -> Result<Vec<String>> {
    let mut found = Vec::new();
    for code in RESERVED_CODES {
        if storage.get_language_by_code(code).await?.is_some() {
            found.push(code.to_string());
        }
    }
    Ok(found)
}

/// 准备服务器启动的上下文
/// 包括存储、系统用户和模板
pub async fn prepare_server_startup() -> Result<StartupContext> {
    if rustls::crypto::ring::default_provider()
        .install_default()
        .is_err()
    {
        debug!("rustls crypto provider already installed");
    }

    let storage = crate::storage::create_storage().await?;
    warn!("Storage backend initialized and migrations completed");

    seed_system_users(&storage).await?;
    if let Err(e) = seed_admin(&storage).await {
        warn!("Failed to create admin account: {}", e);
    }
    for code in find_reserved_languages(&storage).await? {
        warn!("Language code `{}` is a reserved path, its pages are unreachable", code);
    }

    Templates::init(&AppConfig::get().templates.override_dir)?;
    debug!("Templates loaded");

    Ok(StartupContext { storage })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_random_password() {
        let pwd = generate_random_password(16);
        assert_eq!(pwd.chars().count(), 16);
        assert_ne!(pwd, generate_random_password(16));
    }
}
