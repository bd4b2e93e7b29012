use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建目录表（资源树）
        manager
            .create_table(
                Table::create()
                    .table(Directories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Directories::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Directories::Name).string().not_null())
                    .col(
                        ColumnDef::new(Directories::PootlePath)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Directories::ParentId).big_integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Directories::Table, Directories::ParentId)
                            .to(Directories::Table, Directories::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建语言表
        manager
            .create_table(
                Table::create()
                    .table(Languages::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Languages::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Languages::Code)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Languages::Fullname).string().not_null())
                    .col(
                        ColumnDef::new(Languages::DirectoryId)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Languages::Table, Languages::DirectoryId)
                            .to(Directories::Table, Directories::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建项目表
        manager
            .create_table(
                Table::create()
                    .table(Projects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Projects::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Projects::Code)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Projects::Fullname).string().not_null())
                    .col(
                        ColumnDef::new(Projects::Disabled)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建翻译项目表（语言 × 项目）
        manager
            .create_table(
                Table::create()
                    .table(TranslationProjects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TranslationProjects::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(TranslationProjects::LanguageId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TranslationProjects::ProjectId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TranslationProjects::DirectoryId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TranslationProjects::PootlePath)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(TranslationProjects::Table, TranslationProjects::LanguageId)
                            .to(Languages::Table, Languages::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(TranslationProjects::Table, TranslationProjects::ProjectId)
                            .to(Projects::Table, Projects::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(TranslationProjects::Table, TranslationProjects::DirectoryId)
                            .to(Directories::Table, Directories::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建权限集表
        manager
            .create_table(
                Table::create()
                    .table(PermissionSets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PermissionSets::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(PermissionSets::UserId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PermissionSets::DirectoryId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PermissionSets::Capabilities)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(PermissionSets::Table, PermissionSets::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(PermissionSets::Table, PermissionSets::DirectoryId)
                            .to(Directories::Table, Directories::Id)
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
                    .name("idx_directory_parent_id")
                    .table(Directories::Table)
                    .col(Directories::ParentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .unique()
                    .name("idx_translationproject_language_project")
                    .table(TranslationProjects::Table)
                    .col(TranslationProjects::LanguageId)
                    .col(TranslationProjects::ProjectId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .unique()
                    .name("idx_permissionset_user_directory")
                    .table(PermissionSets::Table)
                    .col(PermissionSets::UserId)
                    .col(PermissionSets::DirectoryId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按照创建的相反顺序删除
        manager
            .drop_table(Table::drop().table(PermissionSets::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TranslationProjects::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Projects::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Languages::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Directories::Table).to_owned())
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
enum Directories {
    #[sea_orm(iden = "pootle_app_directory")]
    Table,
    Id,
    Name,
    PootlePath,
    ParentId,
}

#[derive(DeriveIden)]
enum Languages {
    #[sea_orm(iden = "pootle_app_language")]
    Table,
    Id,
    Code,
    Fullname,
    DirectoryId,
}

#[derive(DeriveIden)]
enum Projects {
    #[sea_orm(iden = "pootle_app_project")]
    Table,
    Id,
    Code,
    Fullname,
    Disabled,
}

#[derive(DeriveIden)]
enum TranslationProjects {
    #[sea_orm(iden = "pootle_app_translationproject")]
    Table,
    Id,
    LanguageId,
    ProjectId,
    DirectoryId,
    PootlePath,
}

#[derive(DeriveIden)]
enum PermissionSets {
    #[sea_orm(iden = "pootle_app_permissionset")]
    Table,
    Id,
    UserId,
    DirectoryId,
    Capabilities,
}
