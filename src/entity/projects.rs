//! 项目实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "pootle_app_project")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub code: String,
    pub fullname: String,
    pub disabled: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::translation_projects::Entity")]
    TranslationProjects,
}

impl Related<super::translation_projects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TranslationProjects.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_project(self) -> crate::models::languages::entities::Project {
        crate::models::languages::entities::Project {
            id: self.id,
            code: self.code,
            fullname: self.fullname,
            disabled: self.disabled,
        }
    }
}
