//! 语言实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "pootle_app_language")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub code: String,
    pub fullname: String,
    pub directory_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::directories::Entity",
        from = "Column::DirectoryId",
        to = "super::directories::Column::Id"
    )]
    Directory,
    #[sea_orm(has_many = "super::translation_projects::Entity")]
    TranslationProjects,
}

impl Related<super::directories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Directory.def()
    }
}

impl Related<super::translation_projects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TranslationProjects.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_language(
        self,
        directory: super::directories::Model,
    ) -> crate::models::languages::entities::Language {
        crate::models::languages::entities::Language {
            id: self.id,
            code: self.code,
            fullname: self.fullname,
            directory: directory.into_directory(),
        }
    }
}
