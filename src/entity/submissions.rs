//! 提交记录实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "pootle_app_submission")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub creation_time: i64,
    pub field: Option<i32>,
    #[sea_orm(column_name = "type")]
    pub submission_type: Option<i32>,
    #[sea_orm(column_type = "Text")]
    pub old_value: String,
    #[sea_orm(column_type = "Text")]
    pub new_value: String,
    pub similarity: Option<f64>,
    pub mt_similarity: Option<f64>,
    pub quality_check_id: Option<i64>,
    pub store_id: Option<i64>,
    pub submitter_id: Option<i64>,
    pub suggestion_id: Option<i64>,
    pub translation_project_id: i64,
    pub unit_id: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::translation_projects::Entity",
        from = "Column::TranslationProjectId",
        to = "super::translation_projects::Column::Id"
    )]
    TranslationProject,
    #[sea_orm(
        belongs_to = "super::stores::Entity",
        from = "Column::StoreId",
        to = "super::stores::Column::Id"
    )]
    Store,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::SubmitterId",
        to = "super::users::Column::Id"
    )]
    Submitter,
    #[sea_orm(has_many = "super::score_logs::Entity")]
    ScoreLogs,
}

impl Related<super::translation_projects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TranslationProject.def()
    }
}

impl Related<super::stores::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Store.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Submitter.def()
    }
}

impl Related<super::score_logs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ScoreLogs.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_submission(self) -> crate::models::statistics::entities::Submission {
        use crate::models::statistics::entities::{Submission, SubmissionField, SubmissionType};

        Submission {
            id: self.id,
            creation_time: self.creation_time,
            field: self.field.and_then(SubmissionField::from_db),
            submission_type: self.submission_type.and_then(SubmissionType::from_db),
            old_value: self.old_value,
            new_value: self.new_value,
            similarity: self.similarity,
            mt_similarity: self.mt_similarity,
            quality_check_id: self.quality_check_id,
            store_id: self.store_id,
            submitter_id: self.submitter_id,
            suggestion_id: self.suggestion_id,
            translation_project_id: self.translation_project_id,
            unit_id: self.unit_id,
        }
    }
}
