use actix_web::http::header::REFERER;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::LanguageService;
use crate::models::languages::entities::{EditorScope, Project};
use crate::render::render;
use crate::services::context::get_translation_context;

pub async fn translate(
    service: &LanguageService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let state = service.language_request(request)?;

    // 语言范围：没有具体的 store 和翻译项目
    let scope = EditorScope::for_language(&state.language);
    let previous_url = request
        .headers()
        .get(REFERER)
        .and_then(|value| value.to_str().ok());

    let mut ctx = get_translation_context(&state.user, state.capabilities, &scope, previous_url);
    ctx.insert("language", &state.language);
    ctx.insert("project", &Option::<Project>::None);
    ctx.insert("editor_extends", "languages/base.html");

    Ok(render("editor/main.html", &ctx)?)
}
