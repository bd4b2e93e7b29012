//! SeaORM 实体定义
//!
//! 这些实体用于数据库操作，与 models 模块中的业务实体分离。
//! Storage 层使用这些实体查询，然后转换为 models 中的业务实体。

pub mod prelude;

pub mod directories;
pub mod languages;
pub mod permission_sets;
pub mod projects;
pub mod quality_checks;
pub mod score_logs;
pub mod stores;
pub mod submissions;
pub mod suggestions;
pub mod translation_projects;
pub mod units;
pub mod users;
