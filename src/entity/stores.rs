//! 翻译文件实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "pootle_store_store")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub translation_project_id: i64,
    pub name: String,
    #[sea_orm(unique)]
    pub pootle_path: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::translation_projects::Entity",
        from = "Column::TranslationProjectId",
        to = "super::translation_projects::Column::Id"
    )]
    TranslationProject,
    #[sea_orm(has_many = "super::units::Entity")]
    Units,
}

impl Related<super::translation_projects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TranslationProject.def()
    }
}

impl Related<super::units::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Units.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
