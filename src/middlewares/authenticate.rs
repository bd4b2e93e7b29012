/*!
 * 用户识别中间件
 *
 * 从 `Authorization: Bearer <JWT>` 或 `access_token` cookie 中识别当前用户，
 * 并将 [`RequestUser`] 写入请求扩展。
 *
 * 与必须登录的接口不同，页面允许匿名访问：令牌缺失、无效或对应的用户
 * 已停用时，请求以匿名身份继续，由后续的权限检查决定是否放行。
 *
 * ```rust,ignore
 * web::scope("/{language_code}")
 *     .wrap(ResolveLanguage)
 *     .wrap(Authenticate) // 最后注册的最先执行
 * ```
 */

use crate::models::users::entities::RequestUser;
use crate::storage::Storage;
use crate::utils::jwt::JwtUtils;
use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::rc::Rc;
use tracing::{debug, error, info};

use super::{create_error_response, storage_from};

#[derive(Clone)]
pub struct Authenticate;

// 辅助函数：根据令牌确定请求用户
async fn identify_user(
    req: &ServiceRequest,
    storage: &dyn Storage,
) -> crate::errors::Result<RequestUser> {
    let Some(token) = JwtUtils::extract_access_token(req.request()) else {
        return Ok(RequestUser::Anonymous);
    };

    let claims = match JwtUtils::verify_access_token(&token) {
        Ok(claims) => claims,
        Err(err) => {
            info!("JWT token validation failed: {}", err);
            return Ok(RequestUser::Anonymous);
        }
    };

    let Some(user_id) = claims.user_id() else {
        info!("Invalid user ID in JWT: {}", claims.sub);
        return Ok(RequestUser::Anonymous);
    };

    match storage.get_user_by_id(user_id).await? {
        Some(user) if user.is_active && !user.is_system_user() => {
            Ok(RequestUser::Authenticated(user))
        }
        Some(user) => {
            info!("User {} is not allowed to sign in", user.username);
            Ok(RequestUser::Anonymous)
        }
        None => {
            info!("User {} from token not found", user_id);
            Ok(RequestUser::Anonymous)
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for Authenticate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthenticateMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthenticateMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct AuthenticateMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthenticateMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        Box::pin(async move {
            let Some(storage) = storage_from(&req) else {
                error!("Storage not found in app data");
                return Ok(req.into_response(
                    create_error_response(
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Storage is not configured",
                    )
                    .map_into_right_body(),
                ));
            };

            match identify_user(&req, storage.as_ref()).await {
                Ok(user) => {
                    debug!("Request to {} identified as {:?}", req.path(), user.id());
                    req.extensions_mut().insert(user);
                    let res = srv.call(req).await?.map_into_left_body();
                    Ok(res)
                }
                Err(err) => {
                    error!("Failed to identify user for {}: {}", req.path(), err);
                    Ok(req.into_response(
                        create_error_response(
                            StatusCode::INTERNAL_SERVER_ERROR,
                            "Failed to load user",
                        )
                        .map_into_right_body(),
                    ))
                }
            }
        })
    }
}

// 辅助函数：从请求中提取用户信息
impl Authenticate {
    /// 当前请求的用户，未经过中间件时视为匿名
    pub fn extract_user(req: &actix_web::HttpRequest) -> RequestUser {
        req.extensions()
            .get::<RequestUser>()
            .cloned()
            .unwrap_or(RequestUser::Anonymous)
    }
}
