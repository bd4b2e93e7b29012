//! 页面上下文构建
//!
//! 各页面共享的上下文由这里生成，作用范围通过 [`EditorScope`] 显式传入。

use tera::Context;

use crate::config::AppConfig;
use crate::errors::Result;
use crate::models::languages::entities::EditorScope;
use crate::models::permissions::entities::Capabilities;
use crate::models::units::requests::UnitFilter;
use crate::models::users::entities::RequestUser;
use crate::storage::Storage;
use crate::utils::time::now_timestamp;

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// 编辑器地址，`filter` 为空时不带片段
pub fn translate_url(pootle_path: &str, filter: Option<UnitFilter>) -> String {
    match filter {
        Some(filter) => format!("{pootle_path}translate/#filter={filter}"),
        None => format!("{pootle_path}translate/"),
    }
}

/// 所有页面共有的上下文
pub fn base_context(user: &RequestUser) -> Context {
    let mut ctx = Context::new();
    ctx.insert("system_name", &AppConfig::get().app.system_name);
    ctx.insert("user", &user.user());
    ctx.insert("is_authenticated", &user.is_authenticated());
    ctx.insert(
        "user_display_name",
        &user.user().map(|u| u.display_name()).unwrap_or_default(),
    );
    ctx
}

/// 浏览概览页
pub async fn get_overview_context(
    storage: &dyn Storage,
    user: &RequestUser,
    capabilities: Capabilities,
    scope: &EditorScope,
) -> Result<Context> {
    let config = &AppConfig::get().stats;
    let since = now_timestamp() - config.top_scorers_days * SECONDS_PER_DAY;
    let top_scorers = storage
        .get_top_scorers(&scope.pootle_path, since, config.top_scorers_limit as u64)
        .await?;

    let mut ctx = base_context(user);
    ctx.insert("page", "overview");
    ctx.insert("pootle_path", &scope.pootle_path);
    ctx.insert("resource_path", &scope.resource_path);
    ctx.insert("directory", &scope.directory);
    ctx.insert("can_translate", &capabilities.has(Capabilities::TRANSLATE));
    ctx.insert("is_admin", &capabilities.has(Capabilities::ADMINISTRATE));
    ctx.insert(
        "url_action_continue",
        &translate_url(&scope.pootle_path, Some(UnitFilter::Incomplete)),
    );
    ctx.insert(
        "url_action_fixcritical",
        &translate_url(&scope.pootle_path, Some(UnitFilter::Critical)),
    );
    ctx.insert(
        "url_action_review",
        &translate_url(&scope.pootle_path, Some(UnitFilter::Suggestions)),
    );
    ctx.insert("url_action_view_all", &translate_url(&scope.pootle_path, None));
    ctx.insert("top_scorers", &top_scorers);
    ctx.insert("top_scorers_days", &config.top_scorers_days);
    Ok(ctx)
}

/// 编辑器页面
pub fn get_translation_context(
    user: &RequestUser,
    capabilities: Capabilities,
    scope: &EditorScope,
    previous_url: Option<&str>,
) -> Context {
    let filters: Vec<(&str, &str)> = UnitFilter::ALL
        .iter()
        .map(|f| (f.as_str(), f.label()))
        .collect();

    let mut ctx = base_context(user);
    ctx.insert("page", "translate");
    ctx.insert("pootle_path", &scope.pootle_path);
    ctx.insert("ctx_path", &scope.ctx_path);
    ctx.insert("resource_path", &scope.resource_path);
    ctx.insert("store", &scope.store);
    ctx.insert("directory", &scope.directory);
    ctx.insert("can_translate", &capabilities.has(Capabilities::TRANSLATE));
    ctx.insert("can_suggest", &capabilities.has(Capabilities::SUGGEST));
    ctx.insert("can_review", &capabilities.has(Capabilities::REVIEW));
    ctx.insert("is_admin", &capabilities.has(Capabilities::ADMINISTRATE));
    ctx.insert("previous_url", &previous_url.unwrap_or(&scope.ctx_path));
    ctx.insert("filters", &filters);
    ctx
}

/// 导出视图
pub async fn get_export_view_context(
    storage: &dyn Storage,
    user: &RequestUser,
    scope: &EditorScope,
    filter: UnitFilter,
) -> Result<Context> {
    let unit_groups = storage.list_units(&scope.pootle_path, filter).await?;
    let unit_count: usize = unit_groups.iter().map(|g| g.units.len()).sum();

    let mut ctx = base_context(user);
    ctx.insert("page", "export-view");
    ctx.insert("pootle_path", &scope.pootle_path);
    ctx.insert("ctx_path", &scope.ctx_path);
    ctx.insert("resource_path", &scope.resource_path);
    ctx.insert("store", &scope.store);
    ctx.insert("directory", &scope.directory);
    ctx.insert("filter", filter.as_str());
    ctx.insert("filter_label", filter.label());
    ctx.insert("unit_groups", &unit_groups);
    ctx.insert("unit_count", &unit_count);
    Ok(ctx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_url() {
        assert_eq!(translate_url("/fr/", None), "/fr/translate/");
        assert_eq!(
            translate_url("/fr/", Some(UnitFilter::Incomplete)),
            "/fr/translate/#filter=incomplete"
        );
    }
}
