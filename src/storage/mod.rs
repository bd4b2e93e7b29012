use std::sync::Arc;

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

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过用户名获取用户信息
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    // 统计用户数量
    async fn count_users(&self) -> Result<u64>;

    /// 语言与翻译项目
    // 通过代码获取语言（包含其目录）
    async fn get_language_by_code(&self, code: &str) -> Result<Option<Language>>;
    // 列出所有语言，按代码排序
    async fn list_languages(&self) -> Result<Vec<Language>>;
    // 列出语言下的翻译项目，按项目全名升序
    async fn list_translation_projects(&self, language_id: i64) -> Result<Vec<TranslationProject>>;

    /// 权限
    // 获取用户在给定路径上直接设置的权限，返回 (pootle_path, 权限)
    async fn get_permissions_for_paths(
        &self,
        user_id: i64,
        pootle_paths: &[String],
    ) -> Result<Vec<(String, Capabilities)>>;
    // 列出目录上直接设置的权限集
    async fn list_permission_sets(&self, directory_id: i64) -> Result<Vec<PermissionSetEntry>>;
    // 创建或更新权限集，权限为空时删除
    async fn save_permission_set(
        &self,
        user_id: i64,
        directory_id: i64,
        capabilities: Capabilities,
    ) -> Result<()>;

    /// 统计
    // pootle_path 前缀下的统计，children 按翻译项目分组，以其 pootle_path 为键
    async fn get_stats(&self, pootle_path: &str) -> Result<Stats>;
    // 最近一段时间的得分排行
    async fn get_top_scorers(
        &self,
        pootle_path: &str,
        since: i64,
        limit: u64,
    ) -> Result<Vec<TopScorer>>;

    /// 翻译单元
    // 列出路径下符合条件的单元，按 store 分组
    async fn list_units(&self, pootle_path: &str, filter: UnitFilter) -> Result<Vec<UnitGroup>>;

    /// 提交与记分
    // 统计表的写入端，页面只读取，由记录翻译动作的调用方写入
    async fn create_submission(&self, submission: NewSubmission) -> Result<Submission>;
    async fn create_score_log(&self, score_log: NewScoreLog) -> Result<ScoreLog>;
    // 路径下最近一次提交
    async fn get_latest_submission(&self, pootle_path: &str) -> Result<Option<Submission>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
