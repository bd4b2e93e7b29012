use actix_web::cookie::{Cookie, time::Duration};
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use serde_json::json;
use tracing::debug;

use super::LanguageService;
use crate::models::browser::responses::BrowserTable;
use crate::models::languages::entities::EditorScope;
use crate::render::render;
use crate::services::browser::{get_table_headings, make_project_item};
use crate::services::context::get_overview_context;
use crate::services::permissions::is_accessible_by;
use crate::services::stats::get_stats;
use crate::utils::{jsonify, tr_lang};

/// 记录最近访问语言的 cookie
pub const LANGUAGE_COOKIE: &str = "pootle-language";

const TABLE_FIELDS: [&str; 8] = [
    "name",
    "progress",
    "total",
    "need-translation",
    "suggestions",
    "critical",
    "last-updated",
    "activity",
];

pub async fn overview(
    service: &LanguageService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let state = service.language_request(request)?;
    let language = &state.language;

    // 已按项目全名排序，只保留用户可见的翻译项目
    let translation_projects = storage.list_translation_projects(language.id).await?;
    let mut user_tps = Vec::with_capacity(translation_projects.len());
    for tp in translation_projects {
        if is_accessible_by(storage.as_ref(), &tp, &state.user).await? {
            user_tps.push(tp);
        }
    }
    debug!(
        "Language {} has {} accessible translation projects",
        language.code,
        user_tps.len()
    );

    let stats = get_stats(
        storage.as_ref(),
        &language.directory.pootle_path,
        &user_tps,
    )
    .await?;

    let items = user_tps
        .iter()
        .map(|tp| {
            let tp_stats = stats.children.get(tp.code()).cloned().unwrap_or_default();
            make_project_item(tp, tp_stats)
        })
        .collect();

    let table = BrowserTable {
        id: "language",
        fields: TABLE_FIELDS.to_vec(),
        headings: get_table_headings(&TABLE_FIELDS),
        items,
    };

    let scope = EditorScope::for_language(language);
    let mut ctx =
        get_overview_context(storage.as_ref(), &state.user, state.capabilities, &scope).await?;
    ctx.insert(
        "language",
        &json!({
            "code": language.code,
            "name": tr_lang(&language.fullname),
        }),
    );
    ctx.insert("table", &table);
    ctx.insert("stats", &jsonify(&stats)?);
    ctx.insert("browser_extends", "languages/base.html");

    let mut response = render("browser/overview.html", &ctx)?;
    response.add_cookie(&language_cookie(&language.code))?;

    Ok(response)
}

fn language_cookie(code: &str) -> Cookie<'static> {
    Cookie::build(LANGUAGE_COOKIE, code.to_string())
        .path("/")
        .max_age(Duration::days(365))
        .finish()
}
