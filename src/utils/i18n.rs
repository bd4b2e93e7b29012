//! 语言名称本地化

use crate::config::AppConfig;
use std::collections::HashMap;

/// 本地化语言全名
///
/// `Base (Variant)` 形式的名称按部分分别查表，查不到的部分原样保留。
pub fn tr_lang(fullname: &str) -> String {
    tr_lang_with(fullname, &AppConfig::get().i18n.language_names)
}

pub fn tr_lang_with(fullname: &str, names: &HashMap<String, String>) -> String {
    let translate = |part: &str| -> String {
        let part = part.trim();
        names.get(part).cloned().unwrap_or_else(|| part.to_string())
    };

    match split_variant(fullname) {
        Some((base, variant)) => format!("{} ({})", translate(base), translate(variant)),
        None => translate(fullname),
    }
}

fn split_variant(fullname: &str) -> Option<(&str, &str)> {
    let fullname = fullname.trim();
    let inner = fullname.strip_suffix(')')?;
    let open = inner.rfind('(')?;
    let base = inner[..open].trim_end();
    if base.is_empty() {
        return None;
    }
    Some((base, &inner[open + 1..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names() -> HashMap<String, String> {
        HashMap::from([
            ("Portuguese".to_string(), "Português".to_string()),
            ("Brazil".to_string(), "Brasil".to_string()),
            ("French".to_string(), "Français".to_string()),
        ])
    }

    #[test]
    fn test_plain_name() {
        assert_eq!(tr_lang_with("French", &names()), "Français");
        assert_eq!(tr_lang_with("Klingon", &names()), "Klingon");
    }

    #[test]
    fn test_variant_name() {
        assert_eq!(
            tr_lang_with("Portuguese (Brazil)", &names()),
            "Português (Brasil)"
        );
        assert_eq!(
            tr_lang_with("Portuguese (Portugal)", &names()),
            "Português (Portugal)"
        );
    }

    #[test]
    fn test_malformed_parentheses() {
        assert_eq!(tr_lang_with("(Brazil)", &names()), "(Brazil)");
        assert_eq!(tr_lang_with("French)", &names()), "French)");
    }
}
