//! Dynamic WHERE-clause construction for list queries.
//!
//! List endpoints accept a small set of optional named filters. Handlers
//! translate the present ones into [`Filter`] values; [`push_filters`]
//! renders them into a [`QueryBuilder`] as a parameterized predicate
//! combined with implicit AND. An empty filter slice matches all rows.

use lmeval_core::types::DbId;
use sqlx::{Postgres, QueryBuilder};

/// A single column predicate.
#[derive(Debug, Clone)]
pub enum Filter {
    /// Exact equality on a column.
    Eq(&'static str, Bind),
    /// Case-insensitive substring match (`ILIKE '%needle%'`).
    Contains(&'static str, String),
}

/// A typed bind value for an equality filter.
#[derive(Debug, Clone)]
pub enum Bind {
    Text(String),
    Id(DbId),
    Int(i64),
}

impl Filter {
    pub fn eq_text(column: &'static str, value: impl Into<String>) -> Self {
        Filter::Eq(column, Bind::Text(value.into()))
    }

    pub fn eq_id(column: &'static str, id: DbId) -> Self {
        Filter::Eq(column, Bind::Id(id))
    }

    pub fn eq_int(column: &'static str, value: i64) -> Self {
        Filter::Eq(column, Bind::Int(value))
    }

    pub fn contains(column: &'static str, needle: impl Into<String>) -> Self {
        Filter::Contains(column, needle.into())
    }
}

/// Append `WHERE ... AND ...` clauses for the given filters.
///
/// Column names are compile-time constants supplied by repositories;
/// only values are bound as query parameters.
pub fn push_filters(qb: &mut QueryBuilder<'_, Postgres>, filters: &[Filter]) {
    for (i, filter) in filters.iter().enumerate() {
        qb.push(if i == 0 { " WHERE " } else { " AND " });
        match filter {
            Filter::Eq(column, bind) => {
                qb.push(*column).push(" = ");
                match bind {
                    Bind::Text(value) => qb.push_bind(value.clone()),
                    Bind::Id(id) => qb.push_bind(*id),
                    Bind::Int(value) => qb.push_bind(*value),
                };
            }
            Filter::Contains(column, needle) => {
                qb.push(*column)
                    .push(" ILIKE ")
                    .push_bind(format!("%{}%", escape_like(needle)));
            }
        }
    }
}

/// Escape LIKE metacharacters so user input matches literally.
fn escape_like(needle: &str) -> String {
    let mut escaped = String::with_capacity(needle.len());
    for ch in needle.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_filters_produces_no_where_clause() {
        let mut qb = QueryBuilder::new("SELECT id FROM providers");
        push_filters(&mut qb, &[]);
        assert_eq!(qb.sql(), "SELECT id FROM providers");
    }

    #[test]
    fn single_filter_uses_where() {
        let mut qb = QueryBuilder::new("SELECT id FROM providers");
        push_filters(&mut qb, &[Filter::eq_text("country", "DE")]);
        assert_eq!(qb.sql(), "SELECT id FROM providers WHERE country = $1");
    }

    #[test]
    fn multiple_filters_joined_with_and() {
        let mut qb = QueryBuilder::new("SELECT id FROM models");
        let provider_id = uuid::Uuid::new_v4();
        push_filters(
            &mut qb,
            &[
                Filter::eq_id("provider_id", provider_id),
                Filter::contains("name", "gpt"),
            ],
        );
        assert_eq!(
            qb.sql(),
            "SELECT id FROM models WHERE provider_id = $1 AND name ILIKE $2"
        );
    }

    #[test]
    fn escape_like_handles_metacharacters() {
        assert_eq!(escape_like("50%_off\\"), "50\\%\\_off\\\\");
        assert_eq!(escape_like("plain"), "plain");
    }
}
