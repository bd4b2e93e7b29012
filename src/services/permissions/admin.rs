//! 目录权限管理页面

use actix_web::http::{StatusCode, header::LOCATION};
use actix_web::{HttpRequest, HttpResponse};
use serde_json::json;
use tera::Context;
use tracing::info;

use crate::errors::{PootleError, Result};
use crate::models::languages::entities::Directory;
use crate::models::permissions::{entities::Capabilities, requests::PermissionForm};
use crate::render::render_with_status;
use crate::storage::Storage;

/// 展示并修改目录上的权限集
///
/// 提交成功后重定向回当前页面；用户名无效时以 400 重新渲染表单。
pub async fn admin_permissions(
    storage: &dyn Storage,
    request: &HttpRequest,
    directory: &Directory,
    template: &str,
    mut ctx: Context,
    form: Option<PermissionForm>,
) -> Result<HttpResponse> {
    let mut status = StatusCode::OK;

    if let Some(form) = form {
        match save_permissions(storage, directory, &form).await {
            Ok(()) => {
                return Ok(HttpResponse::SeeOther()
                    .insert_header((LOCATION, request.path().to_string()))
                    .finish());
            }
            Err(PootleError::Validation(message)) => {
                status = StatusCode::BAD_REQUEST;
                ctx.insert("form_error", &message);
                ctx.insert("form_username", &form.username);
            }
            Err(e) => return Err(e),
        }
    }

    let permission_sets = storage.list_permission_sets(directory.id).await?;
    let choices: Vec<_> = Capabilities::CHOICES
        .iter()
        .map(|(_, code, label)| json!({ "code": code, "label": label }))
        .collect();

    ctx.insert("permission_sets", &permission_sets);
    ctx.insert("capability_choices", &choices);

    render_with_status(status, template, &ctx)
}

async fn save_permissions(
    storage: &dyn Storage,
    directory: &Directory,
    form: &PermissionForm,
) -> Result<()> {
    let username = form.username.trim();
    if username.is_empty() {
        return Err(PootleError::validation("Username is required"));
    }

    let user = storage
        .get_user_by_username(username)
        .await?
        .ok_or_else(|| PootleError::validation(format!("User `{username}` does not exist")))?;

    let capabilities = form.capabilities();
    storage
        .save_permission_set(user.id, directory.id, capabilities)
        .await?;

    info!(
        "Permissions of {} on {} set to [{}]",
        user.username, directory.pootle_path, capabilities
    );
    Ok(())
}
