//! 目录实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "pootle_app_directory")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(unique)]
    pub pootle_path: String,
    pub parent_id: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "Entity",
        from = "Column::ParentId",
        to = "Column::Id"
    )]
    Parent,
    #[sea_orm(has_many = "super::permission_sets::Entity")]
    PermissionSets,
}

impl Related<super::permission_sets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PermissionSets.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_directory(self) -> crate::models::languages::entities::Directory {
        crate::models::languages::entities::Directory {
            id: self.id,
            name: self.name,
            pootle_path: self.pootle_path,
            parent_id: self.parent_id,
        }
    }
}
