use serde::Serialize;

/// 资源树中的目录
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Directory {
    pub id: i64,
    pub name: String,
    pub pootle_path: String,
    pub parent_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Language {
    pub id: i64,
    pub code: String,
    pub fullname: String,
    pub directory: Directory,
}

impl Language {
    pub fn pootle_path(&self) -> String {
        format!("/{}/", self.code)
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Project {
    pub id: i64,
    pub code: String,
    pub fullname: String,
    pub disabled: bool,
}

/// 某个语言下的某个项目
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TranslationProject {
    pub id: i64,
    pub language_id: i64,
    pub directory_id: i64,
    pub pootle_path: String,
    pub project: Project,
}

impl TranslationProject {
    pub fn code(&self) -> &str {
        &self.project.code
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Store {
    pub id: i64,
    pub translation_project_id: i64,
    pub name: String,
    pub pootle_path: String,
}

/// 编辑器 / 导出视图的作用范围
///
/// 语言级别的页面没有具体的 store 和项目。
#[derive(Debug, Clone, Serialize)]
pub struct EditorScope {
    pub pootle_path: String,
    pub ctx_path: String,
    pub resource_path: String,
    pub store: Option<Store>,
    pub directory: Directory,
}

impl EditorScope {
    pub fn for_language(language: &Language) -> Self {
        let path = language.pootle_path();
        Self {
            pootle_path: path.clone(),
            ctx_path: path,
            resource_path: String::new(),
            store: None,
            directory: language.directory.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_scope() {
        let language = Language {
            id: 1,
            code: "pt_BR".into(),
            fullname: "Portuguese (Brazil)".into(),
            directory: Directory {
                id: 2,
                name: "pt_BR".into(),
                pootle_path: "/pt_BR/".into(),
                parent_id: Some(1),
            },
        };
        let scope = EditorScope::for_language(&language);
        assert_eq!(scope.pootle_path, "/pt_BR/");
        assert_eq!(scope.ctx_path, "/pt_BR/");
        assert_eq!(scope.resource_path, "");
        assert!(scope.store.is_none());
        assert_eq!(scope.directory.id, 2);
    }
}
