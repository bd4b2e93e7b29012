use actix_web::http::header::LOCATION;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RequirePermission};
use crate::models::permissions::entities::Capabilities;
use crate::models::permissions::requests::PermissionForm;
use crate::models::units::requests::ExportViewQuery;
use crate::services::LanguageService;

/// 被其他路由占用、不能用作语言代码的路径段
pub const RESERVED_CODES: [&str; 1] = ["accounts"];

// 懒加载的全局 LanguageService 实例
static LANGUAGE_SERVICE: Lazy<LanguageService> = Lazy::new(LanguageService::new_lazy);

pub async fn index(req: HttpRequest) -> ActixResult<HttpResponse> {
    LANGUAGE_SERVICE.index(&req).await
}

// `/fr` 补上结尾的斜杠
pub async fn append_slash(req: HttpRequest) -> HttpResponse {
    let location = match req.query_string() {
        "" => format!("{}/", req.path()),
        query => format!("{}/?{}", req.path(), query),
    };
    HttpResponse::PermanentRedirect()
        .insert_header((LOCATION, location))
        .finish()
}

pub async fn overview(req: HttpRequest) -> ActixResult<HttpResponse> {
    LANGUAGE_SERVICE.overview(&req).await
}

pub async fn translate(req: HttpRequest) -> ActixResult<HttpResponse> {
    LANGUAGE_SERVICE.translate(&req).await
}

pub async fn export_view(
    req: HttpRequest,
    query: web::Query<ExportViewQuery>,
) -> ActixResult<HttpResponse> {
    LANGUAGE_SERVICE.export_view(&req, query.into_inner()).await
}

pub async fn admin_page(req: HttpRequest) -> ActixResult<HttpResponse> {
    LANGUAGE_SERVICE.language_admin(&req, None).await
}

pub async fn admin_submit(
    req: HttpRequest,
    form: web::Form<PermissionForm>,
) -> ActixResult<HttpResponse> {
    LANGUAGE_SERVICE
        .language_admin(&req, Some(form.into_inner()))
        .await
}

// 配置路由
// 中间件按注册的逆序执行：先认证，再解析语言，最后检查权限
pub fn configure_language_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/")
            .wrap(middlewares::Authenticate)
            .route(web::get().to(index)),
    )
    .service(web::resource("/{language_code}").route(web::get().to(append_slash)))
    .service(
        web::scope("/{language_code}")
            .wrap(middlewares::ResolveLanguage)
            .wrap(middlewares::Authenticate)
            .service(
                web::resource("/")
                    .wrap(RequirePermission::new(Capabilities::VIEW))
                    .route(web::get().to(overview)),
            )
            .service(
                web::resource("/translate/")
                    .wrap(RequirePermission::new(Capabilities::VIEW))
                    .route(web::get().to(translate)),
            )
            .service(
                web::resource("/export-view/")
                    .wrap(RequirePermission::new(Capabilities::VIEW))
                    .route(web::get().to(export_view)),
            )
            .service(
                web::resource("/admin/permissions/")
                    .wrap(RequirePermission::new(Capabilities::ADMINISTRATE))
                    .route(web::get().to(admin_page))
                    .route(web::post().to(admin_submit)),
            ),
    );
}
