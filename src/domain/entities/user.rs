//! User entity for recipe authors and readers.

use chrono::{DateTime, Utc};

/// A registered user.
///
/// Users author recipes, keep favorites and a shopping cart, and follow
/// other users. Passwords are not stored here; access goes through
/// pre-provisioned API tokens.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User instance.
    pub fn new(
        id: i64,
        username: String,
        email: String,
        first_name: String,
        last_name: String,
        avatar: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            username,
            email,
            first_name,
            last_name,
            avatar,
            created_at,
        }
    }

    /// "First Last" display form.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Input data for creating a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_creation() {
        let now = Utc::now();
        let user = User::new(
            1,
            "chef".to_string(),
            "chef@example.com".to_string(),
            "Julia".to_string(),
            "Child".to_string(),
            None,
            now,
        );

        assert_eq!(user.id, 1);
        assert_eq!(user.username, "chef");
        assert!(user.avatar.is_none());
        assert_eq!(user.created_at, now);
    }

    #[test]
    fn test_full_name() {
        let user = User::new(
            2,
            "baker".to_string(),
            "baker@example.com".to_string(),
            "Paul".to_string(),
            "Hollywood".to_string(),
            Some("/media/avatars/2.png".to_string()),
            Utc::now(),
        );

        assert_eq!(user.full_name(), "Paul Hollywood");
    }
}
