pub mod login;
pub mod logout;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::errors::{PootleError, Result};
use crate::models::users::requests::{LoginForm, LoginPageQuery};
use crate::storage::Storage;

pub struct AuthService {
    storage: Option<Arc<dyn Storage>>,
}

impl AuthService {
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

    // 登录页面
    pub async fn login_page(
        &self,
        query: LoginPageQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        login::handle_login_page(query, request).await
    }

    // 登录验证
    pub async fn login(&self, form: LoginForm, request: &HttpRequest) -> ActixResult<HttpResponse> {
        login::handle_login(self, form, request).await
    }

    // 登出
    pub async fn logout(&self) -> ActixResult<HttpResponse> {
        logout::handle_logout().await
    }
}
