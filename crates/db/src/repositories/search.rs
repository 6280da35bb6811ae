//! Case-insensitive substring search helpers.

use sea_orm::{
    ColumnTrait, Condition,
    sea_query::{Expr, Func},
};

/// Builds a `LIKE` pattern matching `term` anywhere, lowercased.
///
/// `%`, `_` and `\` in the term match literally.
#[must_use]
pub fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.trim().to_lowercase().chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// `lower(col) LIKE pattern` for any of `columns`.
pub fn any_column_contains<C>(columns: &[C], term: &str) -> Condition
where
    C: ColumnTrait + Copy + 'static,
{
    let pattern = like_pattern(term);
    columns.iter().fold(Condition::any(), |cond, col| {
        cond.add(Expr::expr(Func::lower(Expr::col(*col))).like(pattern.clone()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_wraps_and_lowercases() {
        assert_eq!(like_pattern("  Lima "), "%lima%");
    }

    #[test]
    fn test_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("50%_off"), "%50\\%\\_off%");
        assert_eq!(like_pattern("a\\b"), "%a\\\\b%");
    }
}
