use serde::Deserialize;

// 登录表单
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub next: Option<String>,
}

// 用户创建请求（用于存储层，password 为哈希后的值）
#[derive(Debug, Clone)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub is_superuser: bool,
}

// 登录页面查询参数
#[derive(Debug, Default, Deserialize)]
pub struct LoginPageQuery {
    #[serde(default)]
    pub next: Option<String>,
}
