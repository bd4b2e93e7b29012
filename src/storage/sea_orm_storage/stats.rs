//! 统计查询
//!
//! 字数、建议、严重错误和最近提交都在数据库中按翻译项目分组聚合，
//! 父路径的统计由各组累加得到。

use std::collections::{BTreeMap, HashMap};

use super::SeaOrmStorage;
use super::statistics::submissions_under;
use crate::entity::quality_checks::{
    CATEGORY_CRITICAL, Column as QualityCheckColumn, Entity as QualityChecks,
    Relation as QualityCheckRelation,
};
use crate::entity::score_logs::{
    Column as ScoreLogColumn, Entity as ScoreLogs, Relation as ScoreLogRelation,
};
use crate::entity::stores::{Column as StoreColumn, Relation as StoreRelation};
use crate::entity::submissions::{Column as SubmissionColumn, Entity as Submissions};
use crate::entity::suggestions::{
    Column as SuggestionColumn, Entity as Suggestions, Relation as SuggestionRelation,
    STATE_PENDING,
};
use crate::entity::translation_projects::Column as TranslationProjectColumn;
use crate::entity::units::{Column as UnitColumn, Entity as Units, Relation as UnitRelation};
use crate::entity::users::{Column as UserColumn, Entity as Users};
use crate::errors::{PootleError, Result};
use crate::models::stats::responses::{LastAction, Stats, TopScorer};
use crate::models::units::entities::UnitState;
use crate::models::users::entities::{SYSTEM_USERNAMES, User};
use crate::utils::sql::under_path;
use sea_orm::sea_query::{Expr, Order};
use sea_orm::{
    ColumnTrait, Condition, ConnectionTrait, DbBackend, EntityTrait, JoinType, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait,
};

impl SeaOrmStorage {
    /// pootle_path 前缀下的统计，过期单元不计入
    ///
    /// `children` 以翻译项目的 pootle_path 为键，只包含有单元或提交的翻译项目。
    pub async fn get_stats_impl(&self, pootle_path: &str) -> Result<Stats> {
        let mut children: BTreeMap<String, Stats> = BTreeMap::new();

        let units: Vec<(String, i64, i64, i64, Option<i64>)> = Units::find()
            .join(JoinType::InnerJoin, UnitRelation::Store.def())
            .join(JoinType::InnerJoin, StoreRelation::TranslationProject.def())
            .filter(under_path(StoreColumn::PootlePath, pootle_path))
            .filter(UnitColumn::State.gt(UnitState::OBSOLETE))
            .select_only()
            .column(TranslationProjectColumn::PootlePath)
            .column_as(Expr::cust(self.sum_wordcount("1 = 1")), "total")
            .column_as(
                Expr::cust(self.sum_wordcount(&format!(
                    "pootle_store_unit.state >= {}",
                    UnitState::TRANSLATED
                ))),
                "translated",
            )
            .column_as(
                Expr::cust(self.sum_wordcount(&format!(
                    "pootle_store_unit.state >= {} AND pootle_store_unit.state < {}",
                    UnitState::FUZZY,
                    UnitState::TRANSLATED
                ))),
                "fuzzy",
            )
            .column_as(UnitColumn::Mtime.max(), "lastupdated")
            .group_by(TranslationProjectColumn::PootlePath)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| PootleError::database_operation(format!("查询单元统计失败: {e}")))?;

        for (path, total, translated, fuzzy, lastupdated) in units {
            let child = children.entry(path).or_default();
            child.total = total;
            child.translated = translated;
            child.fuzzy = fuzzy;
            child.lastupdated = lastupdated;
        }

        let suggestions: Vec<(String, i64)> = Suggestions::find()
            .join(JoinType::InnerJoin, SuggestionRelation::Unit.def())
            .join(JoinType::InnerJoin, UnitRelation::Store.def())
            .join(JoinType::InnerJoin, StoreRelation::TranslationProject.def())
            .filter(under_path(StoreColumn::PootlePath, pootle_path))
            .filter(UnitColumn::State.gt(UnitState::OBSOLETE))
            .filter(SuggestionColumn::State.eq(STATE_PENDING))
            .select_only()
            .column(TranslationProjectColumn::PootlePath)
            .column_as(SuggestionColumn::Id.count(), "suggestions")
            .group_by(TranslationProjectColumn::PootlePath)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| PootleError::database_operation(format!("统计建议数量失败: {e}")))?;

        for (path, count) in suggestions {
            children.entry(path).or_default().suggestions = count;
        }

        let critical: Vec<(String, i64)> = QualityChecks::find()
            .join(JoinType::InnerJoin, QualityCheckRelation::Unit.def())
            .join(JoinType::InnerJoin, UnitRelation::Store.def())
            .join(JoinType::InnerJoin, StoreRelation::TranslationProject.def())
            .filter(under_path(StoreColumn::PootlePath, pootle_path))
            .filter(UnitColumn::State.gt(UnitState::OBSOLETE))
            .filter(QualityCheckColumn::Category.eq(CATEGORY_CRITICAL))
            .filter(QualityCheckColumn::FalsePositive.eq(false))
            .select_only()
            .column(TranslationProjectColumn::PootlePath)
            .column_as(QualityCheckColumn::Id.count(), "critical")
            .group_by(TranslationProjectColumn::PootlePath)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| PootleError::database_operation(format!("统计严重错误失败: {e}")))?;

        for (path, count) in critical {
            children.entry(path).or_default().critical = count;
        }

        for (path, lastaction) in self.latest_actions_by_translation_project(pootle_path).await? {
            children.entry(path).or_default().lastaction = Some(lastaction);
        }

        let mut stats = Stats::default();
        for child in children.values() {
            stats.total += child.total;
            stats.translated += child.translated;
            stats.fuzzy += child.fuzzy;
            stats.suggestions += child.suggestions;
            stats.critical += child.critical;
            stats.lastupdated = stats.lastupdated.max(child.lastupdated);
            if let Some(action) = &child.lastaction {
                let newer = stats
                    .lastaction
                    .as_ref()
                    .is_none_or(|current| (action.mtime, action.id) > (current.mtime, current.id));
                if newer {
                    stats.lastaction = Some(action.clone());
                }
            }
        }
        stats.children = children;

        Ok(stats)
    }

    /// 每个翻译项目最近一次提交，以翻译项目 pootle_path 为键
    async fn latest_actions_by_translation_project(
        &self,
        pootle_path: &str,
    ) -> Result<HashMap<String, LastAction>> {
        let latest: Vec<(i64, String, i64)> = submissions_under(Submissions::find(), pootle_path)
            .select_only()
            .column(SubmissionColumn::TranslationProjectId)
            .column(TranslationProjectColumn::PootlePath)
            .column_as(SubmissionColumn::CreationTime.max(), "latest")
            .group_by(SubmissionColumn::TranslationProjectId)
            .group_by(TranslationProjectColumn::PootlePath)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| PootleError::database_operation(format!("查询最近提交失败: {e}")))?;

        if latest.is_empty() {
            return Ok(HashMap::new());
        }

        let mut condition = Condition::any();
        for (tp_id, _, creation_time) in &latest {
            condition = condition.add(
                Condition::all()
                    .add(SubmissionColumn::TranslationProjectId.eq(*tp_id))
                    .add(SubmissionColumn::CreationTime.eq(*creation_time)),
            );
        }

        // 同一时刻的多条提交取 id 最大的一条
        let candidates = submissions_under(Submissions::find(), pootle_path)
            .filter(condition)
            .order_by_desc(SubmissionColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| PootleError::database_operation(format!("查询最近提交失败: {e}")))?;

        let mut by_tp = HashMap::new();
        for model in candidates {
            by_tp.entry(model.translation_project_id).or_insert(model);
        }

        let submitter_ids: Vec<i64> = by_tp.values().filter_map(|m| m.submitter_id).collect();
        let submitters: HashMap<i64, User> = if submitter_ids.is_empty() {
            HashMap::new()
        } else {
            Users::find()
                .filter(UserColumn::Id.is_in(submitter_ids))
                .all(&self.db)
                .await
                .map_err(|e| PootleError::database_operation(format!("查询用户失败: {e}")))?
                .into_iter()
                .map(|m| {
                    let user = m.into_user();
                    (user.id, user)
                })
                .collect()
        };

        let mut actions = HashMap::new();
        for (tp_id, path, _) in latest {
            let Some(model) = by_tp.remove(&tp_id) else {
                continue;
            };
            let submitter = model.submitter_id.and_then(|id| submitters.get(&id));
            actions.insert(
                path,
                LastAction {
                    id: model.id,
                    mtime: model.creation_time,
                    username: submitter.map(|u| u.username.clone()),
                    display_name: submitter.map(|u| u.display_name().to_string()),
                    unit_id: model.unit_id,
                },
            );
        }

        Ok(actions)
    }

    /// 得分排行，按得分降序，系统用户不参与
    pub async fn get_top_scorers_impl(
        &self,
        pootle_path: &str,
        since: i64,
        limit: u64,
    ) -> Result<Vec<TopScorer>> {
        let total_score = "SUM(pootle_statistics_scorelog.score_delta)";

        let scores: Vec<(i64, f64)> = submissions_under(
            ScoreLogs::find().join(JoinType::InnerJoin, ScoreLogRelation::Submission.def()),
            pootle_path,
        )
        .join(JoinType::InnerJoin, ScoreLogRelation::User.def())
        .filter(ScoreLogColumn::CreationTime.gte(since))
        .filter(UserColumn::Username.is_not_in(SYSTEM_USERNAMES))
        .select_only()
        .column(ScoreLogColumn::UserId)
        .column_as(Expr::cust(total_score), "total_score")
        .group_by(ScoreLogColumn::UserId)
        .order_by(Expr::cust(total_score), Order::Desc)
        .order_by_asc(ScoreLogColumn::UserId)
        .limit(limit)
        .into_tuple()
        .all(&self.db)
        .await
        .map_err(|e| PootleError::database_operation(format!("查询得分排行失败: {e}")))?;

        if scores.is_empty() {
            return Ok(Vec::new());
        }

        let mut users: HashMap<i64, User> = Users::find()
            .filter(UserColumn::Id.is_in(scores.iter().map(|(id, _)| *id)))
            .all(&self.db)
            .await
            .map_err(|e| PootleError::database_operation(format!("查询用户失败: {e}")))?
            .into_iter()
            .map(|m| {
                let user = m.into_user();
                (user.id, user)
            })
            .collect();

        Ok(scores
            .into_iter()
            .filter_map(|(user_id, total_score)| {
                users.remove(&user_id).map(|user| TopScorer {
                    user_id,
                    total_score,
                    display_name: user.display_name().to_string(),
                    username: user.username,
                })
            })
            .collect())
    }

    /// 满足条件的单元字数之和，转为 64 位整数以统一各数据库的 SUM 类型
    fn sum_wordcount(&self, condition: &str) -> String {
        let integer = match self.db.get_database_backend() {
            DbBackend::MySql => "SIGNED",
            _ => "BIGINT",
        };
        format!(
            "CAST(SUM(CASE WHEN {condition} AND pootle_store_unit.source_wordcount > 0 \
             THEN pootle_store_unit.source_wordcount ELSE 0 END) AS {integer})"
        )
    }
}
