use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::users::requests::{LoginForm, LoginPageQuery};
use crate::services::AuthService;

// 懒加载的全局 AuthService 实例
static AUTH_SERVICE: Lazy<AuthService> = Lazy::new(AuthService::new_lazy);

pub async fn login_page(
    req: HttpRequest,
    query: web::Query<LoginPageQuery>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.login_page(query.into_inner(), &req).await
}

pub async fn login(req: HttpRequest, form: web::Form<LoginForm>) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.login(form.into_inner(), &req).await
}

pub async fn logout() -> ActixResult<HttpResponse> {
    AUTH_SERVICE.logout().await
}

// 配置路由
pub fn configure_account_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/accounts")
            .wrap(middlewares::Authenticate)
            .route("/login/", web::get().to(login_page))
            .route("/login/", web::post().to(login))
            .route("/logout/", web::post().to(logout)),
    );
}
