/*!
 * 基于目录权限的访问控制中间件
 *
 * 必须在 [`Authenticate`](super::Authenticate) 与
 * [`ResolveLanguage`](super::ResolveLanguage) 之后执行。计算当前用户在语言
 * 目录上的有效权限，缺少所需权限时返回 403 页面；通过时把有效权限写入
 * 请求扩展，供处理程序构建上下文。
 *
 * ```rust,ignore
 * web::resource("/admin/permissions/")
 *     .wrap(RequirePermission::new(Capabilities::ADMINISTRATE))
 * ```
 */

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

use crate::models::{
    languages::entities::Language, permissions::entities::Capabilities,
    users::entities::RequestUser,
};
use crate::services::permissions::effective_capabilities;

use super::{create_error_response, storage_from};

#[derive(Clone)]
pub struct RequirePermission {
    required: Capabilities,
}

impl RequirePermission {
    /// 创建需要特定权限的中间件
    pub fn new(required: Capabilities) -> Self {
        Self { required }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequirePermission
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequirePermissionMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequirePermissionMiddleware {
            service: Rc::new(service),
            required: self.required,
        }))
    }
}

pub struct RequirePermissionMiddleware<S> {
    service: Rc<S>,
    required: Capabilities,
}

impl<S, B> Service<ServiceRequest> for RequirePermissionMiddleware<S>
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
        let required = self.required;

        Box::pin(async move {
            // 1. 请求用户，未识别时按匿名处理
            let user = req
                .extensions()
                .get::<RequestUser>()
                .cloned()
                .unwrap_or(RequestUser::Anonymous);

            // 2. 已解析的语言
            let language = req.extensions().get::<Language>().cloned();
            let Some(language) = language else {
                error!("RequirePermission used without ResolveLanguage on {}", req.path());
                return Ok(req.into_response(
                    create_error_response(StatusCode::NOT_FOUND, "Resource not found")
                        .map_into_right_body(),
                ));
            };

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

            // 3. 计算有效权限
            let capabilities = match effective_capabilities(
                storage.as_ref(),
                &user,
                &language.directory.pootle_path,
            )
            .await
            {
                Ok(capabilities) => capabilities,
                Err(err) => {
                    error!("Failed to resolve permissions: {}", err);
                    return Ok(req.into_response(
                        create_error_response(
                            StatusCode::INTERNAL_SERVER_ERROR,
                            "Failed to check permissions",
                        )
                        .map_into_right_body(),
                    ));
                }
            };

            // 4. 判断是否拥有所需权限
            if capabilities.has(required) {
                debug!(
                    "User {:?} has `{}` on {}",
                    user.id(),
                    required,
                    language.directory.pootle_path
                );
                req.extensions_mut().insert(capabilities);
                let res = srv.call(req).await?.map_into_left_body();
                Ok(res)
            } else {
                info!(
                    "User {:?} lacks `{}` on {}",
                    user.id(),
                    required,
                    language.directory.pootle_path
                );
                Ok(req.into_response(
                    create_error_response(
                        StatusCode::FORBIDDEN,
                        &format!("You do not have the `{required}` permission here"),
                    )
                    .map_into_right_body(),
                ))
            }
        })
    }
}

impl RequirePermission {
    /// 此函数应该在应用了 RequirePermission 中间件的路由处理程序中使用
    pub fn extract_capabilities(req: &actix_web::HttpRequest) -> Capabilities {
        req.extensions()
            .get::<Capabilities>()
            .copied()
            .unwrap_or_default()
    }
}
