//! 翻译项目实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "pootle_app_translationproject")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub language_id: i64,
    pub project_id: i64,
    pub directory_id: i64,
    #[sea_orm(unique)]
    pub pootle_path: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::languages::Entity",
        from = "Column::LanguageId",
        to = "super::languages::Column::Id"
    )]
    Language,
    #[sea_orm(
        belongs_to = "super::projects::Entity",
        from = "Column::ProjectId",
        to = "super::projects::Column::Id"
    )]
    Project,
    #[sea_orm(has_many = "super::stores::Entity")]
    Stores,
    #[sea_orm(has_many = "super::submissions::Entity")]
    Submissions,
}

impl Related<super::languages::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Language.def()
    }
}

impl Related<super::projects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Project.def()
    }
}

impl Related<super::stores::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Stores.def()
    }
}

impl Related<super::submissions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Submissions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_translation_project(
        self,
        project: super::projects::Model,
    ) -> crate::models::languages::entities::TranslationProject {
        crate::models::languages::entities::TranslationProject {
            id: self.id,
            language_id: self.language_id,
            directory_id: self.directory_id,
            pootle_path: self.pootle_path,
            project: project.into_project(),
        }
    }
}
