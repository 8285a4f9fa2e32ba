/// Credential store: user persistence behind a trait seam
pub mod postgres;

pub use postgres::PgUserStore;

use crate::error::Result;
use crate::models::{NewUser, User};
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

/// Persistence contract for user records.
///
/// Lookups return `Ok(None)` when the record is absent; an `Err` means
/// the store itself failed. Mutations surface `NotFound` / `Conflict`
/// as domain errors.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn get_by_id(&self, id: i64) -> Result<Option<User>>;

    async fn get_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Insert a new user. The store assigns id and timestamps and
    /// defaults the role when unset. Duplicate email is a `Conflict`.
    async fn create(&self, new_user: NewUser) -> Result<User>;

    /// Update name and role by id, refreshing `updated_at`.
    async fn update(&self, user: &User) -> Result<User>;

    async fn delete(&self, id: i64) -> Result<()>;

    /// All users, newest first.
    async fn get_all(&self) -> Result<Vec<User>>;

    /// Page of users plus the total number of matching rows. An empty
    /// `search` means no filter; otherwise name or email must contain
    /// the substring case-insensitively. Out-of-range page and limit
    /// values are clamped, see [`clamp_page_limit`].
    async fn get_paginated(&self, page: i64, limit: i64, search: &str)
        -> Result<(Vec<User>, i64)>;
}

/// Clamp pagination parameters: page is at least 1, limit falls back
/// to 10 when outside [1, 100].
pub fn clamp_page_limit(page: i64, limit: i64) -> (i64, i64) {
    let page = page.max(1);
    let limit = if (1..=100).contains(&limit) { limit } else { 10 };
    (page, limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_passes_valid_values() {
        assert_eq!(clamp_page_limit(1, 10), (1, 10));
        assert_eq!(clamp_page_limit(7, 100), (7, 100));
        assert_eq!(clamp_page_limit(3, 1), (3, 1));
    }

    #[test]
    fn test_clamp_page_below_one() {
        assert_eq!(clamp_page_limit(0, 10), (1, 10));
        assert_eq!(clamp_page_limit(-5, 10), (1, 10));
    }

    #[test]
    fn test_clamp_limit_out_of_range() {
        assert_eq!(clamp_page_limit(1, 0), (1, 10));
        assert_eq!(clamp_page_limit(1, 101), (1, 10));
        assert_eq!(clamp_page_limit(1, -1), (1, 10));
        assert_eq!(clamp_page_limit(1, 1000), (1, 10));
    }
}
