use serde::Serialize;

use crate::models::stats::responses::Stats;

/// 表格列标题
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TableHeading {
    pub id: &'static str,
    pub class: &'static str,
    pub sortable: bool,
    pub display_name: &'static str,
}

/// 浏览表格中的一行
#[derive(Debug, Clone, Serialize)]
pub struct TableItem {
    pub code: String,
    pub title: String,
    pub href: String,
    pub href_all: String,
    pub href_todo: String,
    pub href_sugg: String,
    pub href_critical: String,
    pub is_disabled: bool,
    pub icon: &'static str,
    pub progress: u8,
    pub need_translation: i64,
    pub stats: Stats,
}

#[derive(Debug, Clone, Serialize)]
pub struct BrowserTable {
    pub id: &'static str,
    pub fields: Vec<&'static str>,
    pub headings: Vec<TableHeading>,
    pub items: Vec<TableItem>,
}
