use actix_web::http::{StatusCode, header::LOCATION};
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tera::Context;
use tracing::{error, info};

use super::AuthService;
use crate::errors::PootleError;
use crate::middlewares::Authenticate;
use crate::models::users::requests::{LoginForm, LoginPageQuery};
use crate::render::render_with_status;
use crate::services::context::base_context;
use crate::utils::jwt::JwtUtils;
use crate::utils::password::verify_password;

const TEMPLATE: &str = "accounts/login.html";

/// 只接受站内路径，防止开放重定向
pub(crate) fn safe_next(next: Option<&str>) -> String {
    match next {
        Some(next) if next.starts_with('/') && !next.starts_with("//") => next.to_string(),
        _ => "/".to_string(),
    }
}

fn login_context(request: &HttpRequest, next: &str) -> Context {
    let mut ctx = base_context(&Authenticate::extract_user(request));
    ctx.insert("page", "login");
    ctx.insert("next", next);
    ctx
}

pub async fn handle_login_page(
    query: LoginPageQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let next = safe_next(query.next.as_deref());
    Ok(render_with_status(
        StatusCode::OK,
        TEMPLATE,
        &login_context(request, &next),
    )?)
}

pub async fn handle_login(
    service: &AuthService,
    form: LoginForm,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let next = safe_next(form.next.as_deref());

    // 系统用户和停用账户都不能登录
    let user = storage
        .get_user_by_username(form.username.trim())
        .await?
        .filter(|user| user.is_active && !user.is_system_user())
        .filter(|user| verify_password(&form.password, &user.password_hash));

    let Some(user) = user else {
        info!("Failed login attempt for {}", form.username);
        let mut ctx = login_context(request, &next);
        ctx.insert("username", &form.username);
        ctx.insert("form_error", "Username or password is incorrect");
        return Ok(render_with_status(StatusCode::UNAUTHORIZED, TEMPLATE, &ctx)?);
    };

    let token = JwtUtils::generate_access_token(user.id).map_err(|e| {
        error!("Failed to generate JWT token: {}", e);
        PootleError::authentication("Login failed, unable to generate token")
    })?;

    info!("User {} logged in successfully", user.username);
    Ok(HttpResponse::SeeOther()
        .cookie(JwtUtils::create_access_token_cookie(&token))
        .insert_header((LOCATION, next))
        .finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_next() {
        assert_eq!(safe_next(Some("/fr/")), "/fr/");
        assert_eq!(safe_next(Some("//evil.example.com/")), "/");
        assert_eq!(safe_next(Some("https://evil.example.com/")), "/");
        assert_eq!(safe_next(None), "/");
    }
}
