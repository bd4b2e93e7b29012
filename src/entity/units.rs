//! 翻译单元实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "pootle_store_unit")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub store_id: i64,
    pub index: i32,
    #[sea_orm(column_type = "Text")]
    pub source: String,
    #[sea_orm(column_type = "Text")]
    pub target: String,
    pub state: i32,
    pub source_wordcount: i32,
    pub mtime: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::stores::Entity",
        from = "Column::StoreId",
        to = "super::stores::Column::Id"
    )]
    Store,
    #[sea_orm(has_many = "super::suggestions::Entity")]
    Suggestions,
    #[sea_orm(has_many = "super::quality_checks::Entity")]
    QualityChecks,
}

impl Related<super::stores::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Store.def()
    }
}

impl Related<super::suggestions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Suggestions.def()
    }
}

impl Related<super::quality_checks::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::QualityChecks.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_export_unit(self) -> crate::models::units::entities::ExportUnit {
        use crate::models::units::entities::{ExportUnit, UnitState};

        ExportUnit {
            id: self.id,
            index: self.index,
            source: self.source,
            target: self.target,
            state: UnitState::from_db(self.state),
        }
    }
}
