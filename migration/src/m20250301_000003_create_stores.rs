use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建文件（store）表
        manager
            .create_table(
                Table::create()
                    .table(Stores::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Stores::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Stores::TranslationProjectId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Stores::Name).string().not_null())
                    .col(
                        ColumnDef::new(Stores::PootlePath)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Stores::Table, Stores::TranslationProjectId)
                            .to(TranslationProjects::Table, TranslationProjects::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建翻译单元表
        manager
            .create_table(
                Table::create()
                    .table(Units::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Units::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Units::StoreId).big_integer().not_null())
                    .col(ColumnDef::new(Units::Index).integer().not_null())
                    .col(ColumnDef::new(Units::Source).text().not_null())
                    .col(ColumnDef::new(Units::Target).text().not_null().default(""))
                    .col(ColumnDef::new(Units::State).integer().not_null().default(0))
                    .col(
                        ColumnDef::new(Units::SourceWordcount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Units::Mtime).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Units::Table, Units::StoreId)
                            .to(Stores::Table, Stores::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建建议表
        manager
            .create_table(
                Table::create()
                    .table(Suggestions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Suggestions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Suggestions::UnitId).big_integer().not_null())
                    .col(ColumnDef::new(Suggestions::UserId).big_integer().null())
                    .col(ColumnDef::new(Suggestions::Target).text().not_null())
                    .col(
                        ColumnDef::new(Suggestions::State)
                            .string()
                            .not_null()
                            .default("pending"),
                    )
                    .col(
                        ColumnDef::new(Suggestions::CreationTime)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Suggestions::Table, Suggestions::UnitId)
                            .to(Units::Table, Units::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Suggestions::Table, Suggestions::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建质量检查表
        manager
            .create_table(
                Table::create()
                    .table(QualityChecks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(QualityChecks::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(QualityChecks::UnitId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(QualityChecks::Name).string().not_null())
                    .col(
                        ColumnDef::new(QualityChecks::Category)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(QualityChecks::FalsePositive)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(QualityChecks::Table, QualityChecks::UnitId)
                            .to(Units::Table, Units::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_store_translation_project_id")
                    .table(Stores::Table)
                    .col(Stores::TranslationProjectId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_unit_store_id")
                    .table(Units::Table)
                    .col(Units::StoreId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_suggestion_unit_id")
                    .table(Suggestions::Table)
                    .col(Suggestions::UnitId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_qualitycheck_unit_id")
                    .table(QualityChecks::Table)
                    .col(QualityChecks::UnitId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(QualityChecks::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Suggestions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Units::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Stores::Table).to_owned())
            .await?;
        Ok(())
    }
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
    TranslationProjectId,
    Name,
    PootlePath,
}

#[derive(DeriveIden)]
enum Units {
    #[sea_orm(iden = "pootle_store_unit")]
    Table,
    Id,
    StoreId,
    Index,
    Source,
    Target,
    State,
    SourceWordcount,
    Mtime,
}

#[derive(DeriveIden)]
enum Suggestions {
    #[sea_orm(iden = "pootle_store_suggestion")]
    Table,
    Id,
    UnitId,
    UserId,
    Target,
    State,
    CreationTime,
}

#[derive(DeriveIden)]
enum QualityChecks {
    #[sea_orm(iden = "pootle_store_qualitycheck")]
    Table,
    Id,
    UnitId,
    Name,
    Category,
    FalsePositive,
}
