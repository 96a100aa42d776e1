//! Port interface for user storage

use async_trait::async_trait;
use eventdesk_domain::{NewUser, Result, User, UserId};

/// Trait for persisting and querying users
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Store a user and return it with its assigned id
    async fn create(&self, user: NewUser) -> Result<User>;

    /// All users by ascending id
    async fn list(&self) -> Result<Vec<User>>;

    /// Users whose ids appear in `user_ids`; unknown ids are absent from the
    /// result
    async fn find_by_ids(&self, user_ids: &[UserId]) -> Result<Vec<User>>;
}
