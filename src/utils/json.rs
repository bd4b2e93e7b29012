use serde::Serialize;

use crate::errors::Result;

/// 序列化为 JSON 字符串，供模板中的脚本读取
///
/// `<`、`>`、`&` 转为 `\u003c` 等形式，结果可以直接放进 `<script>` 元素。
pub fn jsonify<T: Serialize>(value: &T) -> Result<String> {
    let json = serde_json::to_string(value)?;
    let mut escaped = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => escaped.push_str("\\u003c"),
            '>' => escaped.push_str("\\u003e"),
            '&' => escaped.push_str("\\u0026"),
            _ => escaped.push(c),
        }
    }
    Ok(escaped)
}
