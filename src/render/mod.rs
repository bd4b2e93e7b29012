//! HTML 模板渲染
//!
//! 使用 rust-embed 嵌入 `templates/` 目录下的 Tera 模板，支持：
//! - 自定义模板目录覆盖（开发用）
//! - 统一的错误页面

use actix_web::{HttpResponse, http::StatusCode};
use rust_embed::Embed;
use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;
use tera::{Context, Tera};
use tracing::{debug, warn};

use crate::config::AppConfig;
use crate::errors::Result;
use crate::utils::time::format_timestamp;

const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";

/// 嵌入模板
/// 编译时从 templates/ 目录读取文件
#[derive(Embed)]
#[folder = "templates/"]
struct TemplateAssets;

static TEMPLATES: OnceLock<Templates> = OnceLock::new();

pub struct Templates {
    tera: Tera,
}

impl Templates {
    /// 加载全部模板，`override_dir` 中的同名文件优先
    pub fn load(override_dir: &str) -> Result<Self> {
        let mut sources = Vec::new();
        for name in TemplateAssets::iter() {
            let content = match try_override_file(override_dir, &name) {
                Some(content) => {
                    debug!("Using template override for {}", name);
                    content
                }
                None => match TemplateAssets::get(&name) {
                    Some(file) => String::from_utf8_lossy(&file.data).into_owned(),
                    None => continue,
                },
            };
            sources.push((name.into_owned(), content));
        }

        let mut tera = Tera::default();
        // 一次性加载，才能正确解析模板继承
        tera.add_raw_templates(sources)?;
        tera.set_escape_fn(escape_html);
        tera.register_filter("timestamp", timestamp_filter);
        Ok(Self { tera })
    }

    /// 获取全局模板实例
    pub fn get() -> &'static Templates {
        TEMPLATES.get_or_init(|| {
            let config = AppConfig::get();
            Self::load(&config.templates.override_dir).unwrap_or_else(|e| {
                eprintln!("Failed to load templates: {e}");
                std::process::exit(1);
            })
        })
    }

    /// 初始化模板 (在应用启动时调用)
    pub fn init(override_dir: &str) -> Result<()> {
        let templates = Self::load(override_dir)?;
        if TEMPLATES.set(templates).is_err() {
            warn!("Templates already initialized");
        }
        Ok(())
    }

    pub fn render(&self, name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(name, context)?)
    }

    #[cfg(test)]
    fn has_template(&self, name: &str) -> bool {
        self.tera.get_template_names().any(|n| n == name)
    }
}

fn try_override_file(override_dir: &str, name: &str) -> Option<String> {
    if override_dir.is_empty() {
        return None;
    }
    std::fs::read_to_string(Path::new(override_dir).join(name)).ok()
}

/// 自动转义，保留 `/` 以便路径原样出现在属性中
fn escape_html(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '"' => output.push_str("&quot;"),
            '\'' => output.push_str("&#x27;"),
            _ => output.push(c),
        }
    }
    output
}

/// `{{ value | timestamp }}`，空值输出空字符串
fn timestamp_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    Ok(tera::Value::String(
        value.as_i64().map(format_timestamp).unwrap_or_default(),
    ))
}

/// 渲染模板为 200 HTML 响应
pub fn render(template: &str, context: &Context) -> Result<HttpResponse> {
    render_with_status(StatusCode::OK, template, context)
}

pub fn render_with_status(
    status: StatusCode,
    template: &str,
    context: &Context,
) -> Result<HttpResponse> {
    let html = Templates::get().render(template, context)?;
    Ok(HttpResponse::build(status)
        .content_type(HTML_CONTENT_TYPE)
        .body(html))
}

/// 错误页面，模板渲染失败时退回纯文本 HTML
pub fn error_page(status: StatusCode, message: &str) -> HttpResponse {
    let mut context = Context::new();
    context.insert("status", &status.as_u16());
    context.insert("reason", status.canonical_reason().unwrap_or("Error"));
    context.insert("message", message);

    let body = Templates::get()
        .render("errors/error.html", &context)
        .unwrap_or_else(|e| {
            warn!("Failed to render error page: {}", e);
            format!(
                "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>{}</title></head>\
                 <body><h1>{}</h1></body></html>",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Error")
            )
        });

    HttpResponse::build(status)
        .content_type(HTML_CONTENT_TYPE)
        .body(body)
}
