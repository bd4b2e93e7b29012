//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_pootle_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum PootleError {
            $($variant(String),)*
        }

        impl PootleError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(PootleError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(PootleError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(PootleError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl PootleError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        PootleError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_pootle_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    FileOperation("E004", "File Operation Error"),
    Validation("E005", "Validation Error"),
    NotFound("E006", "Resource Not Found"),
    Serialization("E007", "Serialization Error"),
    Template("E008", "Template Error"),
    Authentication("E009", "Authentication Error"),
    Authorization("E010", "Authorization Error"),
}

impl PootleError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for PootleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for PootleError {}

impl ResponseError for PootleError {
    fn status_code(&self) -> StatusCode {
        match self {
            PootleError::NotFound(_) => StatusCode::NOT_FOUND,
            PootleError::Authorization(_) => StatusCode::FORBIDDEN,
            PootleError::Authentication(_) => StatusCode::UNAUTHORIZED,
            PootleError::Validation(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("{}", self.format_simple());
        }
        crate::render::error_page(status, self.message())
    }
}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for PootleError {
    fn from(err: sea_orm::DbErr) -> Self {
        PootleError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for PootleError {
    fn from(err: std::io::Error) -> Self {
        PootleError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for PootleError {
    fn from(err: serde_json::Error) -> Self {
        PootleError::Serialization(err.to_string())
    }
}

impl From<tera::Error> for PootleError {
    fn from(err: tera::Error) -> Self {
        // tera 的错误链里才有具体原因
        let mut message = err.to_string();
        let mut source = std::error::Error::source(&err);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        PootleError::Template(message)
    }
}

pub type Result<T> = std::result::Result<T, PootleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(PootleError::database_config("test").code(), "E001");
        assert_eq!(PootleError::validation("test").code(), "E005");
        assert_eq!(PootleError::not_found("test").code(), "E006");
        assert_eq!(PootleError::authorization("test").code(), "E010");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            PootleError::template("test").error_type(),
            "Template Error"
        );
        assert_eq!(
            PootleError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = PootleError::validation("Invalid input");
        assert_eq!(err.message(), "Invalid input");
    }

    #[test]
    fn test_format_simple() {
        let err = PootleError::not_found("Language 'xx' not found");
        let formatted = err.format_simple();
        assert!(formatted.contains("Resource Not Found"));
        assert!(formatted.contains("Language 'xx' not found"));
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            PootleError::not_found("x").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            PootleError::authorization("x").status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            PootleError::authentication("x").status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            PootleError::database_operation("x").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
