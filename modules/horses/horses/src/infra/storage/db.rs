use std::fmt::Display;

use sea_orm::sea_query::{Expr, SimpleExpr};
use tracing::error;

use crate::domain::error::DomainError;

/// Escape character used by every LIKE pattern built here.
pub const LIKE_ESCAPE: char = '!';

/// Wrap a store error into a domain error, logging the cause.
pub fn db_err(e: impl Display) -> DomainError {
    let message = e.to_string();
    error!(error = %message, "Database operation failed");
    DomainError::database(message)
}

/// Escape LIKE wildcards in `input` and wrap it for a case-insensitive substring match.
///
/// The result is meant to be used with `ESCAPE '!'` against a lower-cased column.
pub fn contains_pattern(input: &str) -> String {
    let mut pattern = String::with_capacity(input.len() + 2);
    pattern.push('%');
    for c in input.to_lowercase().chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// Case-insensitive substring match on an owner's "first last" name.
pub fn owner_name_contains(needle: &str) -> SimpleExpr {
    Expr::cust_with_values(
        format!(
            r#"LOWER("owner"."first_name" || ' ' || "owner"."last_name") LIKE ? ESCAPE '{LIKE_ESCAPE}'"#
        ),
        [contains_pattern(needle)],
    )
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn pattern_is_lowercased_and_wrapped() {
        assert_eq!(contains_pattern("Storm"), "%storm%");
    }

    #[test]
    fn wildcards_are_escaped() {
        assert_eq!(contains_pattern("50%_a!"), "%50!%!_a!!%");
    }
}
