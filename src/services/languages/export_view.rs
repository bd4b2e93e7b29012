use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::LanguageService;
use crate::models::languages::entities::{EditorScope, Project};
use crate::models::units::requests::ExportViewQuery;
use crate::render::render;
use crate::services::context::get_export_view_context;

/// 导出视图的源语言固定为英语
pub const SOURCE_LANGUAGE: &str = "en";

/// 按过滤条件列出语言下的翻译单元
pub async fn export_view(
    service: &LanguageService,
    request: &HttpRequest,
    query: ExportViewQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let state = service.language_request(request)?;

    let scope = EditorScope::for_language(&state.language);

    let mut ctx =
        get_export_view_context(storage.as_ref(), &state.user, &scope, query.filter()).await?;
    ctx.insert("source_language", SOURCE_LANGUAGE);
    ctx.insert("language", &state.language);
    ctx.insert("project", &Option::<Project>::None);

    Ok(render("editor/export_view.html", &ctx)?)
}
