use serde::Deserialize;

use super::entities::Capabilities;

/// 权限管理表单，每个权限一个复选框
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PermissionForm {
    pub username: String,
    #[serde(default)]
    pub view: Option<String>,
    #[serde(default)]
    pub suggest: Option<String>,
    #[serde(default)]
    pub translate: Option<String>,
    #[serde(default)]
    pub review: Option<String>,
    #[serde(default)]
    pub administrate: Option<String>,
}

impl PermissionForm {
    pub fn capabilities(&self) -> Capabilities {
        [
            (&self.view, Capabilities::VIEW),
            (&self.suggest, Capabilities::SUGGEST),
            (&self.translate, Capabilities::TRANSLATE),
            (&self.review, Capabilities::REVIEW),
            (&self.administrate, Capabilities::ADMINISTRATE),
        ]
        .into_iter()
        .filter(|(checked, _)| checked.is_some())
        .fold(Capabilities::empty(), |acc, (_, cap)| acc | cap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_boxes() {
        let form = PermissionForm {
            username: "alice".into(),
            view: Some("on".into()),
            review: Some("on".into()),
            ..Default::default()
        };
        assert_eq!(
            form.capabilities(),
            Capabilities::VIEW | Capabilities::REVIEW
        );
        assert!(PermissionForm::default().capabilities().is_empty());
    }
}
