use serde::{Deserialize, Serialize};

/// The signed-in user, as persisted between visits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Whether the user has prior activity; new sign-ups start without.
    pub has_history: bool,
}

impl UserProfile {
    /// Profile for a returning user, named after the email local part.
    pub fn returning(email: &str) -> Self {
        let name = email.split('@').next().unwrap_or(email).to_string();
        Self {
            id: email.to_string(),
            name,
            email: email.to_string(),
            has_history: true,
        }
    }

    /// Profile for a fresh sign-up.
    pub fn fresh(name: &str, email: &str) -> Self {
        Self {
            id: email.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            has_history: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_returning_profile_named_from_email() {
        let profile = UserProfile::returning("jamie@example.com");
        assert_eq!(profile.name, "jamie");
        assert_eq!(profile.email, "jamie@example.com");
        assert!(profile.has_history);
    }

    #[test]
    fn test_fresh_profile_has_no_history() {
        let profile = UserProfile::fresh("Jamie", "jamie@example.com");
        assert_eq!(profile.name, "Jamie");
        assert!(!profile.has_history);
    }

    #[test]
    fn test_returning_profile_without_at_sign() {
        let profile = UserProfile::returning("jamie");
        assert_eq!(profile.name, "jamie");
    }
}
