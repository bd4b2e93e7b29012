//! 提交与记分记录

use super::SeaOrmStorage;
use crate::entity::score_logs::ActiveModel as ScoreLogActiveModel;
use crate::entity::stores::Column as StoreColumn;
use crate::entity::submissions::{ActiveModel, Column, Entity as Submissions, Relation};
use crate::entity::translation_projects::Column as TranslationProjectColumn;
use crate::errors::{PootleError, Result};
use crate::models::statistics::{
    entities::{ScoreLog, Submission},
    requests::{NewScoreLog, NewSubmission},
};
use crate::utils::sql::under_path;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, JoinType, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait, Select, Set,
};

impl SeaOrmStorage {
    /// 创建提交记录
    pub async fn create_submission_impl(&self, req: NewSubmission) -> Result<Submission> {
        let model = ActiveModel {
            creation_time: Set(req.creation_time),
            field: Set(req.field.map(|f| f.to_db())),
            submission_type: Set(req.submission_type.map(|t| t.to_db())),
            old_value: Set(req.old_value),
            new_value: Set(req.new_value),
            similarity: Set(None),
            mt_similarity: Set(None),
            quality_check_id: Set(None),
            store_id: Set(req.store_id),
            submitter_id: Set(req.submitter_id),
            suggestion_id: Set(None),
            translation_project_id: Set(req.translation_project_id),
            unit_id: Set(req.unit_id),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| PootleError::database_operation(format!("创建提交记录失败: {e}")))?;

        Ok(result.into_submission())
    }

    /// 创建记分记录
    pub async fn create_score_log_impl(&self, req: NewScoreLog) -> Result<ScoreLog> {
        let model = ScoreLogActiveModel {
            creation_time: Set(req.creation_time),
            rate: Set(0.0),
            review_rate: Set(0.0),
            wordcount: Set(req.wordcount),
            similarity: Set(req.similarity),
            score_delta: Set(req.score_delta),
            action_code: Set(req.action_code),
            submission_id: Set(req.submission_id),
            user_id: Set(req.user_id),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| PootleError::database_operation(format!("创建记分记录失败: {e}")))?;

        Ok(result.into_score_log())
    }

    /// 路径下最近一次提交
    pub async fn get_latest_submission_impl(
        &self,
        pootle_path: &str,
    ) -> Result<Option<Submission>> {
        let result = submissions_under(Submissions::find(), pootle_path)
            .order_by_desc(Column::CreationTime)
            .order_by_desc(Column::Id)
            .one(&self.db)
            .await
            .map_err(|e| PootleError::database_operation(format!("查询最近提交失败: {e}")))?;

        Ok(result.map(|m| m.into_submission()))
    }
}

/// 限定到 pootle_path 下的提交
///
/// 路径在翻译项目之上时按翻译项目匹配，更深的路径按 store 匹配。
pub(super) fn submissions_under<E>(select: Select<E>, pootle_path: &str) -> Select<E>
where
    E: EntityTrait,
{
    select
        .join(JoinType::InnerJoin, Relation::TranslationProject.def())
        .join(JoinType::LeftJoin, Relation::Store.def())
        .filter(
            Condition::any()
                .add(under_path(TranslationProjectColumn::PootlePath, pootle_path))
                .add(under_path(StoreColumn::PootlePath, pootle_path)),
        )
}
