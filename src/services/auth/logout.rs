use actix_web::http::header::LOCATION;
use actix_web::{HttpResponse, Result as ActixResult};

use crate::utils::jwt::JwtUtils;

/// 处理用户登出
/// 通过设置空的 access token cookie 清除登录状态
pub async fn handle_logout() -> ActixResult<HttpResponse> {
    // max_age=0 会让浏览器删除该 cookie
    let empty_cookie = JwtUtils::create_empty_access_token_cookie();

    Ok(HttpResponse::SeeOther()
        .cookie(empty_cookie)
        .insert_header((LOCATION, "/"))
        .finish())
}
