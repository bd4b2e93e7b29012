pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_accounts;
mod m20250301_000002_create_translation_projects;
mod m20250301_000003_create_stores;
mod m20250301_000004_create_statistics;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        // 顺序即依赖关系：统计表引用用户、翻译项目和 store 相关表
        vec![
            Box::new(m20250301_000001_create_accounts::Migration),
            Box::new(m20250301_000002_create_translation_projects::Migration),
            Box::new(m20250301_000003_create_stores::Migration),
            Box::new(m20250301_000004_create_statistics::Migration),
        ]
    }
}
