//! 浏览表格

use crate::models::browser::responses::{TableHeading, TableItem};
use crate::models::languages::entities::TranslationProject;
use crate::models::stats::responses::Stats;
use crate::models::units::requests::UnitFilter;
use crate::services::context::translate_url;

/// 列定义：(id, class, sortable, 显示名)
const HEADINGS: [(&str, &str, bool, &str); 8] = [
    ("name", "stats", true, "Name"),
    ("progress", "stats", true, "Progress"),
    ("total", "stats-number sorttable_numeric", true, "Total"),
    (
        "need-translation",
        "stats-number sorttable_numeric",
        true,
        "Need Translation",
    ),
    (
        "suggestions",
        "stats-number sorttable_numeric",
        true,
        "Suggestions",
    ),
    ("critical", "stats-number sorttable_numeric", true, "Critical"),
    ("last-updated", "stats", true, "Last updated"),
    ("activity", "stats", true, "Last Activity"),
];

/// 按字段顺序生成列标题，未知字段跳过
pub fn get_table_headings(fields: &[&str]) -> Vec<TableHeading> {
    fields
        .iter()
        .filter_map(|field| {
            HEADINGS
                .iter()
                .find(|(id, ..)| id == field)
                .map(|&(id, class, sortable, display_name)| TableHeading {
                    id,
                    class,
                    sortable,
                    display_name,
                })
        })
        .collect()
}

/// 翻译项目在语言概览表格中的一行
pub fn make_project_item(tp: &TranslationProject, stats: Stats) -> TableItem {
    let path = &tp.pootle_path;
    TableItem {
        code: tp.code().to_string(),
        title: tp.project.fullname.clone(),
        href: path.clone(),
        href_all: translate_url(path, None),
        href_todo: translate_url(path, Some(UnitFilter::Incomplete)),
        href_sugg: translate_url(path, Some(UnitFilter::Suggestions)),
        href_critical: translate_url(path, Some(UnitFilter::Critical)),
        is_disabled: tp.project.disabled,
        icon: "project",
        progress: stats.progress(),
        need_translation: stats.need_translation(),
        stats,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::languages::entities::Project;

    #[test]
    fn test_headings_follow_field_order() {
        let headings = get_table_headings(&["total", "bogus", "name"]);
        let ids: Vec<&str> = headings.iter().map(|h| h.id).collect();
        assert_eq!(ids, vec!["total", "name"]);
        assert_eq!(headings[1].display_name, "Name");
    }

    #[test]
    fn test_make_project_item() {
        let tp = TranslationProject {
            id: 3,
            language_id: 1,
            directory_id: 9,
            pootle_path: "/fr/tutorial/".into(),
            project: Project {
                id: 2,
                code: "tutorial".into(),
                fullname: "Tutorial".into(),
                disabled: false,
            },
        };
        let stats = Stats {
            total: 10,
            translated: 4,
            ..Default::default()
        };
        let item = make_project_item(&tp, stats);
        assert_eq!(item.code, "tutorial");
        assert_eq!(item.title, "Tutorial");
        assert_eq!(item.href, "/fr/tutorial/");
        assert_eq!(item.href_todo, "/fr/tutorial/translate/#filter=incomplete");
        assert_eq!(item.icon, "project");
        assert_eq!(item.progress, 40);
        assert_eq!(item.need_translation, 6);
    }
}
