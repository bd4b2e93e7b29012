pub mod admin;
pub mod export_view;
pub mod index;
pub mod overview;
pub mod translate;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::errors::{PootleError, Result};
use crate::middlewares::{Authenticate, RequirePermission, ResolveLanguage};
use crate::models::languages::entities::Language;
use crate::models::permissions::entities::Capabilities;
use crate::models::permissions::requests::PermissionForm;
use crate::models::units::requests::ExportViewQuery;
use crate::models::users::entities::RequestUser;
use crate::storage::Storage;

pub use overview::LANGUAGE_COOKIE;

pub struct LanguageService {
    storage: Option<Arc<dyn Storage>>,
}

/// 中间件写入请求扩展的数据
pub(crate) struct LanguageRequest {
    pub language: Language,
    pub user: RequestUser,
    pub capabilities: Capabilities,
}

impl LanguageService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Result<Arc<dyn Storage>> {
        if let Some(storage) = &self.storage {
            return Ok(storage.clone());
        }
        request
            .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
            .map(|data| data.get_ref().clone())
            .ok_or_else(|| PootleError::database_config("Storage not found in app data"))
    }

    pub(crate) fn language_request(&self, request: &HttpRequest) -> Result<LanguageRequest> {
        let language = ResolveLanguage::extract_language(request)
            .ok_or_else(|| PootleError::not_found("Language not found"))?;
        Ok(LanguageRequest {
            language,
            user: Authenticate::extract_user(request),
            capabilities: RequirePermission::extract_capabilities(request),
        })
    }

    // 语言列表首页
    pub async fn index(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        index::index(self, request).await
    }

    // 语言概览
    pub async fn overview(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        overview::overview(self, request).await
    }

    // 语言范围的编辑器
    pub async fn translate(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        translate::translate(self, request).await
    }

    // 导出视图
    pub async fn export_view(
        &self,
        request: &HttpRequest,
        query: ExportViewQuery,
    ) -> ActixResult<HttpResponse> {
        export_view::export_view(self, request, query).await
    }

    // 语言权限管理，`form` 为 None 时只展示
    pub async fn language_admin(
        &self,
        request: &HttpRequest,
        form: Option<PermissionForm>,
    ) -> ActixResult<HttpResponse> {
        admin::language_admin(self, request, form).await
    }
}
