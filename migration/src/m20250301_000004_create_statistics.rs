//! 提交记录与积分日志表
//!
//! ScoreLog 引用 Submission，而 Submission 在 ScoreLog 之后创建，
//! 所以 ScoreLog 的两个外键在两张表都建好之后再单独添加。

use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::DatabaseBackend;

/// 本迁移引用的外部表，必须已由前面的迁移创建
const DEPENDENCIES: [&str; 6] = [
    "accounts_user",
    "pootle_app_translationproject",
    "pootle_store_store",
    "pootle_store_unit",
    "pootle_store_suggestion",
    "pootle_store_qualitycheck",
];

const SCORE_LOG_TABLE: &str = "pootle_statistics_scorelog";
const SCORE_LOG_REBUILD_TABLE: &str = "pootle_statistics_scorelog__new";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        ensure_dependencies(manager).await?;

        // 1. 创建积分日志表（暂不含外键）
        manager
            .create_table(score_log_table(SCORE_LOG_TABLE, &[]))
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_scorelog_creation_time")
                    .table(ScoreLogs::Table)
                    .col(ScoreLogs::CreationTime)
                    .to_owned(),
            )
            .await?;

        // 2. 创建提交记录表
        manager
            .create_table(
                Table::create()
                    .table(Submissions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Submissions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Submissions::CreationTime)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Submissions::Field).integer().null())
                    .col(ColumnDef::new(Submissions::Type).integer().null())
                    .col(
                        ColumnDef::new(Submissions::OldValue)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Submissions::NewValue)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Submissions::Similarity).double().null())
                    .col(ColumnDef::new(Submissions::MtSimilarity).double().null())
                    .col(
                        ColumnDef::new(Submissions::QualityCheckId)
                            .big_integer()
                            .null(),
                    )
                    .col(ColumnDef::new(Submissions::StoreId).big_integer().null())
                    .col(ColumnDef::new(Submissions::SubmitterId).big_integer().null())
                    .col(
                        ColumnDef::new(Submissions::SuggestionId)
                            .big_integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Submissions::TranslationProjectId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Submissions::UnitId).big_integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_submission_quality_check")
                            .from(Submissions::Table, Submissions::QualityCheckId)
                            .to(QualityChecks::Table, QualityChecks::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_submission_store")
                            .from(Submissions::Table, Submissions::StoreId)
                            .to(Stores::Table, Stores::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_submission_submitter")
                            .from(Submissions::Table, Submissions::SubmitterId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_submission_suggestion")
                            .from(Submissions::Table, Submissions::SuggestionId)
                            .to(Suggestions::Table, Suggestions::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_submission_translation_project")
                            .from(Submissions::Table, Submissions::TranslationProjectId)
                            .to(TranslationProjects::Table, TranslationProjects::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_submission_unit")
                            .from(Submissions::Table, Submissions::UnitId)
                            .to(Units::Table, Units::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        for (name, column) in [
            ("idx_submission_creation_time", Submissions::CreationTime),
            ("idx_submission_field", Submissions::Field),
            ("idx_submission_type", Submissions::Type),
            (
                "idx_submission_translation_project_id",
                Submissions::TranslationProjectId,
            ),
            ("idx_submission_submitter_id", Submissions::SubmitterId),
        ] {
            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name(name)
                        .table(Submissions::Table)
                        .col(column)
                        .to_owned(),
                )
                .await?;
        }

        // 3. 为积分日志添加必填的 submission 外键
        add_required_key(manager, RequiredKey::Submission, &[]).await?;

        // 4. 为积分日志添加必填的 user 外键
        add_required_key(manager, RequiredKey::User, &[RequiredKey::Submission]).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按照创建的相反顺序删除
        manager
            .drop_table(Table::drop().table(ScoreLogs::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Submissions::Table).to_owned())
            .await?;
        Ok(())
    }
}

/// ScoreLog 上后加的必填外键
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RequiredKey {
    Submission,
    User,
}

impl RequiredKey {
    fn column(self) -> ScoreLogs {
        match self {
            RequiredKey::Submission => ScoreLogs::SubmissionId,
            RequiredKey::User => ScoreLogs::UserId,
        }
    }

    fn constraint_name(self) -> &'static str {
        match self {
            RequiredKey::Submission => "fk_scorelog_submission",
            RequiredKey::User => "fk_scorelog_user",
        }
    }

    fn index_name(self) -> &'static str {
        match self {
            RequiredKey::Submission => "idx_scorelog_submission_id",
            RequiredKey::User => "idx_scorelog_user_id",
        }
    }

    fn column_def(self) -> ColumnDef {
        ColumnDef::new(self.column()).big_integer().not_null().to_owned()
    }

    fn foreign_key(self, table: &str) -> ForeignKeyCreateStatement {
        let mut fk = ForeignKey::create();
        fk.name(self.constraint_name())
            .on_delete(ForeignKeyAction::Cascade);
        match self {
            RequiredKey::Submission => fk
                .from(Alias::new(table), self.column())
                .to(Submissions::Table, Submissions::Id),
            RequiredKey::User => fk
                .from(Alias::new(table), self.column())
                .to(Users::Table, Users::Id),
        };
        fk
    }
}

/// 迁移依赖检查：外键目标表不存在时直接失败
async fn ensure_dependencies(manager: &SchemaManager<'_>) -> Result<(), DbErr> {
    for table in DEPENDENCIES {
        if !manager.has_table(table).await? {
            return Err(DbErr::Migration(format!(
                "unresolved foreign-key target: table `{table}` does not exist, \
                 apply its migration first"
            )));
        }
    }
    Ok(())
}

/// ScoreLog 的建表语句，`keys` 为已经存在的外键列
fn score_log_table(table: &str, keys: &[RequiredKey]) -> TableCreateStatement {
    let mut statement = Table::create();
    statement
        .table(Alias::new(table))
        .if_not_exists()
        .col(
            ColumnDef::new(ScoreLogs::Id)
                .big_integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(ScoreLogs::CreationTime)
                .big_integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(ScoreLogs::Rate)
                .double()
                .not_null()
                .default(0.0),
        )
        .col(
            ColumnDef::new(ScoreLogs::ReviewRate)
                .double()
                .not_null()
                .default(0.0),
        )
        .col(
            ColumnDef::new(ScoreLogs::Wordcount)
                .unsigned()
                .not_null(),
        )
        .col(ColumnDef::new(ScoreLogs::Similarity).double().not_null())
        .col(ColumnDef::new(ScoreLogs::ScoreDelta).double().not_null())
        .col(ColumnDef::new(ScoreLogs::ActionCode).integer().not_null());

    for key in keys {
        statement
            .col(&mut key.column_def())
            .foreign_key(&mut key.foreign_key(table));
    }

    statement.to_owned()
}

/// ScoreLog 中已有的普通列（重建表时用于复制数据）
fn score_log_scalar_columns() -> Vec<ScoreLogs> {
    vec![
        ScoreLogs::Id,
        ScoreLogs::CreationTime,
        ScoreLogs::Rate,
        ScoreLogs::ReviewRate,
        ScoreLogs::Wordcount,
        ScoreLogs::Similarity,
        ScoreLogs::ScoreDelta,
        ScoreLogs::ActionCode,
    ]
}

/// 给 ScoreLog 添加一个必填外键列
///
/// PostgreSQL / MySQL 直接 ALTER TABLE；SQLite 不支持给已有表追加带约束的
/// NOT NULL 列，只能重建：建新表 → 复制数据 → 删旧表 → 改名 → 重建索引。
async fn add_required_key(
    manager: &SchemaManager<'_>,
    key: RequiredKey,
    existing: &[RequiredKey],
) -> Result<(), DbErr> {
    match manager.get_database_backend() {
        DatabaseBackend::Sqlite => {
            let mut keys = existing.to_vec();
            keys.push(key);
            rebuild_score_log_sqlite(manager, existing, &keys).await?;
        }
        _ => {
            manager
                .alter_table(
                    Table::alter()
                        .table(ScoreLogs::Table)
                        .add_column(&mut key.column_def())
                        .add_foreign_key(key.foreign_key(SCORE_LOG_TABLE).get_foreign_key())
                        .to_owned(),
                )
                .await?;
        }
    }

    manager
        .create_index(
            Index::create()
                .if_not_exists()
                .name(key.index_name())
                .table(ScoreLogs::Table)
                .col(key.column())
                .to_owned(),
        )
        .await
}

async fn rebuild_score_log_sqlite(
    manager: &SchemaManager<'_>,
    existing: &[RequiredKey],
    keys: &[RequiredKey],
) -> Result<(), DbErr> {
    manager
        .create_table(score_log_table(SCORE_LOG_REBUILD_TABLE, keys))
        .await?;

    // 只复制旧表已有的列；旧表中有数据时新列的 NOT NULL 约束会使复制失败
    let mut copied = score_log_scalar_columns();
    copied.extend(existing.iter().map(|k| k.column()));

    let mut insert = Query::insert();
    insert
        .into_table(Alias::new(SCORE_LOG_REBUILD_TABLE))
        .columns(copied.clone())
        .select_from(
            Query::select()
                .columns(copied)
                .from(ScoreLogs::Table)
                .to_owned(),
        )
        .map_err(|e| DbErr::Migration(format!("failed to build ScoreLog copy statement: {e}")))?;
    manager.exec_stmt(insert).await?;

    manager
        .drop_table(Table::drop().table(ScoreLogs::Table).to_owned())
        .await?;
    manager
        .rename_table(
            Table::rename()
                .table(Alias::new(SCORE_LOG_REBUILD_TABLE), ScoreLogs::Table)
                .to_owned(),
        )
        .await?;

    // 旧表的索引随旧表一起被删除
    manager
        .create_index(
            Index::create()
                .if_not_exists()
                .name("idx_scorelog_creation_time")
                .table(ScoreLogs::Table)
                .col(ScoreLogs::CreationTime)
                .to_owned(),
        )
        .await?;
    for k in existing {
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name(k.index_name())
                    .table(ScoreLogs::Table)
                    .col(k.column())
                    .to_owned(),
            )
            .await?;
    }

    Ok(())
}

#[derive(DeriveIden, Clone, Copy)]
enum ScoreLogs {
    #[sea_orm(iden = "pootle_statistics_scorelog")]
    Table,
    Id,
    CreationTime,
    Rate,
    ReviewRate,
    Wordcount,
    Similarity,
    ScoreDelta,
    ActionCode,
    SubmissionId,
    UserId,
}

#[derive(DeriveIden, Clone, Copy)]
enum Submissions {
    #[sea_orm(iden = "pootle_app_submission")]
    Table,
    Id,
    CreationTime,
    Field,
    Type,
    OldValue,
    NewValue,
    Similarity,
    MtSimilarity,
    QualityCheckId,
    StoreId,
    SubmitterId,
    SuggestionId,
    TranslationProjectId,
    UnitId,
}

#[derive(DeriveIden)]
enum Users {
    #[sea_orm(iden = "accounts_user")]
    Table,
    Id,
}

#[derive(DeriveIden)]
enum TranslationProjects {
    #[sea_orm(iden = "pootle_app_translationproject")]
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Stores {
    #[sea_orm(iden = "pootle_store_store")]
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Units {
    #[sea_orm(iden = "pootle_store_unit")]
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Suggestions {
    #[sea_orm(iden = "pootle_store_suggestion")]
    Table,
    Id,
}

#[derive(DeriveIden)]
enum QualityChecks {
    #[sea_orm(iden = "pootle_store_qualitycheck")]
    Table,
    Id,
}
