use sea_orm::sea_query::{Alias, Expr, ExprTrait, Func, LikeExpr};
use sea_orm::{ColumnTrait, Condition};

/// LIKE 模式转义字符
pub const LIKE_ESCAPE: char = '\\';

/// 转义 LIKE 通配符，配合 `ESCAPE '\'` 使用
pub fn escape_like_pattern(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

/// 前缀匹配的 LIKE 表达式
pub fn prefix_like(prefix: &str) -> LikeExpr {
    LikeExpr::new(format!("{}%", escape_like_pattern(prefix))).escape(LIKE_ESCAPE)
}

/// 区分大小写的路径前缀条件
///
/// SQLite 的 LIKE 对 ASCII 字母不区分大小写，`/fr/` 会匹配到 `/FR/`。
/// LIKE 负责走索引，SUBSTR 的等值比较负责大小写。
pub fn under_path<C: ColumnTrait>(column: C, prefix: &str) -> Condition {
    let like = column.like(prefix_like(prefix));
    let length = prefix.chars().count() as i64;
    let head = Func::cust(Alias::new("SUBSTR"))
        .arg(column.into_expr())
        .arg(1)
        .arg(length);
    Condition::all().add(like).add(Expr::expr(head).eq(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like_pattern() {
        assert_eq!(escape_like_pattern("/pt_BR/"), "/pt\\_BR/");
        assert_eq!(escape_like_pattern("100%"), "100\\%");
        assert_eq!(escape_like_pattern("/fr/"), "/fr/");
    }

    #[test]
    fn test_under_path_compares_exact_prefix() {
        use crate::entity::stores::{Column, Entity};
        use sea_orm::{DbBackend, EntityTrait, QueryFilter, QueryTrait};

        let sql = Entity::find()
            .filter(under_path(Column::PootlePath, "/fr/"))
            .build(DbBackend::Sqlite)
            .to_string();
        assert!(sql.contains(r#""pootle_store_store"."pootle_path" LIKE '/fr/%'"#));
        assert!(sql.contains(r#"SUBSTR("pootle_store_store"."pootle_path", 1, 4) = '/fr/'"#));
    }
}
