use actix_web::http::header::LOCATION;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use serde_json::json;

use super::{LANGUAGE_COOKIE, LanguageService};
use crate::middlewares::Authenticate;
use crate::models::permissions::entities::Capabilities;
use crate::render::render;
use crate::services::context::base_context;
use crate::services::permissions::effective_capabilities;
use crate::utils::tr_lang;

/// 首页：有语言 cookie 时跳转到该语言，否则列出可见语言
pub async fn index(service: &LanguageService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = Authenticate::extract_user(request);

    if let Some(cookie) = request.cookie(LANGUAGE_COOKIE)
        && let Some(language) = storage.get_language_by_code(cookie.value()).await?
    {
        return Ok(HttpResponse::Found()
            .insert_header((LOCATION, language.pootle_path()))
            .finish());
    }

    let mut languages = Vec::new();
    for language in storage.list_languages().await? {
        let capabilities =
            effective_capabilities(storage.as_ref(), &user, &language.directory.pootle_path)
                .await?;
        if capabilities.has(Capabilities::VIEW) {
            languages.push(json!({
                "code": language.code,
                "name": tr_lang(&language.fullname),
                "href": language.pootle_path(),
            }));
        }
    }

    let mut ctx = base_context(&user);
    ctx.insert("page", "index");
    ctx.insert("languages", &languages);

    Ok(render("index.html", &ctx)?)
}
