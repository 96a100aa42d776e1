//! User service

use std::sync::Arc;

use eventdesk_domain::constants::MSG_USER_NAME_REQUIRED;
use eventdesk_domain::{EventDeskError, NewUser, Result, User};
use tracing::{info, warn};

use super::ports::UserRepository;

/// Creates and lists users
pub struct UserService {
    users: Arc<dyn UserRepository>,
}

impl UserService {
    /// Create a new user service
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Register a user
    ///
    /// # Errors
    /// `InvalidInput` if the name is missing or blank.
    pub async fn create_user(&self, user_name: Option<String>) -> Result<User> {
        let user_name = match user_name {
            Some(name) if !name.trim().is_empty() => name,
            _ => {
                warn!("Rejected user without a name");
                return Err(EventDeskError::InvalidInput(MSG_USER_NAME_REQUIRED.to_string()));
            }
        };

        let user = self.users.create(NewUser { user_name }).await?;
        info!(user_id = user.user_id, "User created");
        Ok(user)
    }

    /// All users by ascending id
    pub async fn list_users(&self) -> Result<Vec<User>> {
        self.users.list().await
    }
}
