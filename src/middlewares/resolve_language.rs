/*!
 * 语言解析中间件
 *
 * 将路径中的 `{language_code}` 解析为 [`Language`] 并写入请求扩展，
 * 找不到对应语言时返回 404 页面。
 */

use crate::models::languages::entities::Language;
use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::rc::Rc;
use tracing::{debug, error};

use super::{create_error_response, storage_from};

pub const LANGUAGE_CODE_PARAM: &str = "language_code";

#[derive(Clone)]
pub struct ResolveLanguage;

impl<S, B> Transform<S, ServiceRequest> for ResolveLanguage
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = ResolveLanguageMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ResolveLanguageMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct ResolveLanguageMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for ResolveLanguageMiddleware<S>
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
            // 1. 读取语言代码
            let Some(code) = req
                .match_info()
                .get(LANGUAGE_CODE_PARAM)
                .map(|s| s.to_string())
            else {
                return Ok(req.into_response(
                    create_error_response(StatusCode::NOT_FOUND, "Language not found")
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

            // 2. 查询语言
            match storage.get_language_by_code(&code).await {
                Ok(Some(language)) => {
                    debug!("Resolved language {}", language.code);
                    req.extensions_mut().insert(language);
                    let res = srv.call(req).await?.map_into_left_body();
                    Ok(res)
                }
                Ok(None) => Ok(req.into_response(
                    create_error_response(
                        StatusCode::NOT_FOUND,
                        &format!("Language `{code}` not found"),
                    )
                    .map_into_right_body(),
                )),
                Err(err) => {
                    error!("Failed to resolve language {}: {}", code, err);
                    Ok(req.into_response(
                        create_error_response(
                            StatusCode::INTERNAL_SERVER_ERROR,
                            "Failed to load language",
                        )
                        .map_into_right_body(),
                    ))
                }
            }
        })
    }
}

impl ResolveLanguage {
    /// 此函数应该在应用了 ResolveLanguage 中间件的路由处理程序中使用
    pub fn extract_language(req: &actix_web::HttpRequest) -> Option<Language> {
        req.extensions().get::<Language>().cloned()
    }
}
