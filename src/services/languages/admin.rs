use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::LanguageService;
use crate::models::permissions::requests::PermissionForm;
use crate::services::context::base_context;
use crate::services::permissions::admin::admin_permissions;

const TEMPLATE: &str = "languages/admin/permissions.html";

pub async fn language_admin(
    service: &LanguageService,
    request: &HttpRequest,
    form: Option<PermissionForm>,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let state = service.language_request(request)?;

    let mut ctx = base_context(&state.user);
    ctx.insert("page", "admin-permissions");
    ctx.insert("language", &state.language);
    ctx.insert("directory", &state.language.directory);

    Ok(admin_permissions(
        storage.as_ref(),
        request,
        &state.language.directory,
        TEMPLATE,
        ctx,
        form,
    )
    .await?)
}
