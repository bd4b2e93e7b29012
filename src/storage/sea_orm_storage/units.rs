//! 翻译单元查询

use std::collections::HashSet;

use super::SeaOrmStorage;
use crate::entity::quality_checks::{
    CATEGORY_CRITICAL, Column as QualityCheckColumn, Entity as QualityChecks,
    Relation as QualityCheckRelation,
};
use crate::entity::stores::{Column as StoreColumn, Entity as Stores};
use crate::entity::suggestions::{
    Column as SuggestionColumn, Entity as Suggestions, Relation as SuggestionRelation,
    STATE_PENDING,
};
use crate::entity::units::{Column, Entity as Units, Relation as UnitRelation};
use crate::errors::{PootleError, Result};
use crate::models::units::{
    entities::{UnitGroup, UnitState},
    requests::UnitFilter,
};
use crate::utils::sql::under_path;
use sea_orm::{
    ColumnTrait, EntityTrait, JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

impl SeaOrmStorage {
    /// 列出路径下的单元，按 store 路径和单元序号排序后分组
    pub async fn list_units_impl(
        &self,
        pootle_path: &str,
        filter: UnitFilter,
    ) -> Result<Vec<UnitGroup>> {
        let mut select = Units::find()
            .find_also_related(Stores)
            .filter(under_path(StoreColumn::PootlePath, pootle_path))
            .filter(Column::State.gt(UnitState::OBSOLETE));

        select = match filter {
            UnitFilter::All => select,
            UnitFilter::Translated => select.filter(Column::State.gte(UnitState::TRANSLATED)),
            UnitFilter::Untranslated => select.filter(Column::State.lt(UnitState::FUZZY)),
            UnitFilter::Fuzzy => select
                .filter(Column::State.gte(UnitState::FUZZY))
                .filter(Column::State.lt(UnitState::TRANSLATED)),
            UnitFilter::Incomplete => select.filter(Column::State.lt(UnitState::TRANSLATED)),
            UnitFilter::Suggestions => {
                let ids = self.unit_ids_with_suggestions(pootle_path).await?;
                select.filter(Column::Id.is_in(ids))
            }
            UnitFilter::Critical => {
                let ids = self.unit_ids_with_critical_checks(pootle_path).await?;
                select.filter(Column::Id.is_in(ids))
            }
        };

        let rows = select
            .order_by_asc(StoreColumn::PootlePath)
            .order_by_asc(Column::Index)
            .all(&self.db)
            .await
            .map_err(|e| PootleError::database_operation(format!("查询翻译单元失败: {e}")))?;

        let mut groups: Vec<UnitGroup> = Vec::new();
        for (unit, store) in rows {
            let Some(store) = store else { continue };
            match groups.last_mut() {
                Some(group) if group.path == store.pootle_path => {
                    group.units.push(unit.into_export_unit());
                }
                _ => groups.push(UnitGroup {
                    path: store.pootle_path,
                    units: vec![unit.into_export_unit()],
                }),
            }
        }

        Ok(groups)
    }

    async fn unit_ids_with_suggestions(&self, pootle_path: &str) -> Result<Vec<i64>> {
        let ids: Vec<i64> = Suggestions::find()
            .join(JoinType::InnerJoin, SuggestionRelation::Unit.def())
            .join(JoinType::InnerJoin, UnitRelation::Store.def())
            .filter(under_path(StoreColumn::PootlePath, pootle_path))
            .filter(SuggestionColumn::State.eq(STATE_PENDING))
            .select_only()
            .column(SuggestionColumn::UnitId)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| PootleError::database_operation(format!("查询建议失败: {e}")))?;

        Ok(dedup(ids))
    }

    async fn unit_ids_with_critical_checks(&self, pootle_path: &str) -> Result<Vec<i64>> {
        let ids: Vec<i64> = QualityChecks::find()
            .join(JoinType::InnerJoin, QualityCheckRelation::Unit.def())
            .join(JoinType::InnerJoin, UnitRelation::Store.def())
            .filter(under_path(StoreColumn::PootlePath, pootle_path))
            .filter(QualityCheckColumn::Category.eq(CATEGORY_CRITICAL))
            .filter(QualityCheckColumn::FalsePositive.eq(false))
            .select_only()
            .column(QualityCheckColumn::UnitId)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| PootleError::database_operation(format!("查询质量检查失败: {e}")))?;

        Ok(dedup(ids))
    }
}

fn dedup(ids: Vec<i64>) -> Vec<i64> {
    let mut seen = HashSet::new();
    ids.into_iter().filter(|id| seen.insert(*id)).collect()
}
