//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod languages;
mod permissions;
mod statistics;
mod stats;
mod units;
mod users;

use crate::config::AppConfig;
use crate::errors::{PootleError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| PootleError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// 使用已有连接（迁移由调用方负责）
    pub fn from_connection(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| PootleError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| PootleError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| PootleError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(PootleError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
use crate::models::{
    languages::entities::{Language, TranslationProject},
    permissions::entities::{Capabilities, PermissionSetEntry},
    statistics::{
        entities::{ScoreLog, Submission},
        requests::{NewScoreLog, NewSubmission},
    },
    stats::responses::{Stats, TopScorer},
    units::{entities::UnitGroup, requests::UnitFilter},
    users::{entities::User, requests::CreateUserRequest},
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.get_user_by_username_impl(username).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    // 语言模块
    async fn get_language_by_code(&self, code: &str) -> Result<Option<Language>> {
        self.get_language_by_code_impl(code).await
    }

    async fn list_languages(&self) -> Result<Vec<Language>> {
        self.list_languages_impl().await
    }

    async fn list_translation_projects(&self, language_id: i64) -> Result<Vec<TranslationProject>> {
        self.list_translation_projects_impl(language_id).await
    }

    // 权限模块
    async fn get_permissions_for_paths(
        &self,
        user_id: i64,
        pootle_paths: &[String],
    ) -> Result<Vec<(String, Capabilities)>> {
        self.get_permissions_for_paths_impl(user_id, pootle_paths)
            .await
    }

    async fn list_permission_sets(&self, directory_id: i64) -> Result<Vec<PermissionSetEntry>> {
        self.list_permission_sets_impl(directory_id).await
    }

    async fn save_permission_set(
        &self,
        user_id: i64,
        directory_id: i64,
        capabilities: Capabilities,
    ) -> Result<()> {
        self.save_permission_set_impl(user_id, directory_id, capabilities)
            .await
    }

    // 统计模块
    async fn get_stats(&self, pootle_path: &str) -> Result<Stats> {
        self.get_stats_impl(pootle_path).await
    }

    async fn get_top_scorers(
        &self,
        pootle_path: &str,
        since: i64,
        limit: u64,
    ) -> Result<Vec<TopScorer>> {
        self.get_top_scorers_impl(pootle_path, since, limit).await
    }

    // 翻译单元模块
    async fn list_units(&self, pootle_path: &str, filter: UnitFilter) -> Result<Vec<UnitGroup>> {
        self.list_units_impl(pootle_path, filter).await
    }

    // 提交与记分模块
    async fn create_submission(&self, submission: NewSubmission) -> Result<Submission> {
        self.create_submission_impl(submission).await
    }

    async fn create_score_log(&self, score_log: NewScoreLog) -> Result<ScoreLog> {
        self.create_score_log_impl(score_log).await
    }

    async fn get_latest_submission(&self, pootle_path: &str) -> Result<Option<Submission>> {
        self.get_latest_submission_impl(pootle_path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_database_url() {
        assert_eq!(
            SeaOrmStorage::build_database_url("pootle.db").unwrap(),
            "sqlite://pootle.db?mode=rwc"
        );
        assert_eq!(
            SeaOrmStorage::build_database_url("postgres://u:p@localhost/pootle").unwrap(),
            "postgres://u:p@localhost/pootle"
        );
        assert!(SeaOrmStorage::build_database_url("ftp://nowhere").is_err());
    }
}
