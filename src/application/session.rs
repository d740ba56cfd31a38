use crate::domain::ports::KeyValueStoreBox;
use crate::domain::session::UserProfile;
use crate::error::Result;

const SESSION_KEY: &str = "session/user";

/// Manages the signed-in profile through an injected key-value store.
///
/// All operations are async and return typed results; there is no real
/// credential verification behind them.
pub struct SessionManager {
    store: KeyValueStoreBox,
}

impl SessionManager {
    pub fn new(store: KeyValueStoreBox) -> Self {
        Self { store }
    }

    /// Signs in a returning user and persists the profile.
    pub async fn log_in(&self, email: &str) -> Result<UserProfile> {
        let profile = UserProfile::returning(email);
        self.persist(&profile).await?;
        Ok(profile)
    }

    /// Registers a new user and persists the profile.
    pub async fn sign_up(&self, name: &str, email: &str) -> Result<UserProfile> {
        let profile = UserProfile::fresh(name, email);
        self.persist(&profile).await?;
        Ok(profile)
    }

    /// Clears the persisted session.
    pub async fn log_out(&self) -> Result<()> {
        self.store.remove(SESSION_KEY).await
    }

    /// Returns the persisted profile, if any. A payload that fails to parse
    /// is discarded and reported as no session.
    pub async fn current(&self) -> Result<Option<UserProfile>> {
        match self.store.get(SESSION_KEY).await? {
            Some(payload) => match serde_json::from_str(&payload) {
                Ok(profile) => Ok(Some(profile)),
                Err(_) => {
                    self.store.remove(SESSION_KEY).await?;
                    Ok(None)
                }
            },
            None => Ok(None),
        }
    }

    async fn persist(&self, profile: &UserProfile) -> Result<()> {
        self.store
            .put(SESSION_KEY, serde_json::to_string(profile)?)
            .await
    }
}
