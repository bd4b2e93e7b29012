pub mod authenticate;
pub mod require_permission;
pub mod resolve_language;

pub use authenticate::Authenticate;
pub use require_permission::RequirePermission;
pub use resolve_language::ResolveLanguage;

use actix_web::{HttpResponse, dev::ServiceRequest, http::StatusCode, web};
use std::sync::Arc;

use crate::storage::Storage;

// 辅助函数：创建错误响应
pub(crate) fn create_error_response(status: StatusCode, message: &str) -> HttpResponse {
    crate::render::error_page(status, message)
}

// 辅助函数：从 app_data 获取存储
pub(crate) fn storage_from(req: &ServiceRequest) -> Option<Arc<dyn Storage>> {
    req.app_data::<web::Data<Arc<dyn Storage>>>()
        .map(|data| data.get_ref().clone())
}
