//! 记分记录实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "pootle_statistics_scorelog")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub creation_time: i64,
    pub rate: f64,
    pub review_rate: f64,
    pub wordcount: u32,
    pub similarity: f64,
    pub score_delta: f64,
    pub action_code: i32,
    pub submission_id: i64,
    pub user_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::submissions::Entity",
        from = "Column::SubmissionId",
        to = "super::submissions::Column::Id"
    )]
    Submission,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
}

impl Related<super::submissions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Submission.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_score_log(self) -> crate::models::statistics::entities::ScoreLog {
        crate::models::statistics::entities::ScoreLog {
            id: self.id,
            creation_time: self.creation_time,
            rate: self.rate,
            review_rate: self.review_rate,
            wordcount: self.wordcount,
            similarity: self.similarity,
            score_delta: self.score_delta,
            action_code: self.action_code,
            submission_id: self.submission_id,
            user_id: self.user_id,
        }
    }
}
