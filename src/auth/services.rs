use lazy_static::lazy_static;
use regex::Regex;
use tracing::{info, warn};

use crate::auth::jwt::JwtKeys;
use crate::auth::password::{hash_password, verify_password};
use crate::auth::repo::{InsertError, UserStore};
use crate::auth::repo_types::User;
use crate::error::ApiError;

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

/// Creates a credential: one read (existence check) plus one write. The
/// unique index on email is the real uniqueness guarantee; a concurrent
/// duplicate that slips past the check still comes back as `DuplicateUser`.
/// No token is issued on registration.
pub async fn register(
    store: &dyn UserStore,
    name: &str,
    email: &str,
    password: &str,
) -> Result<User, ApiError> {
    if store.find_by_email(email).await?.is_some() {
        warn!(email = %email, "registration for existing email");
        return Err(ApiError::DuplicateUser);
    }

    let hash = hash_password(password)?;

    let user = store.insert(name, email, &hash).await.map_err(|e| match e {
        InsertError::DuplicateEmail => {
            warn!(email = %email, "registration lost duplicate race");
            ApiError::DuplicateUser
        }
        InsertError::Other(e) => ApiError::Internal(e),
    })?;

    info!(user_id = %user.id, email = %user.email, "user registered");
    Ok(user)
}

/// Verifies a credential and issues a bearer token. Unknown email and wrong
/// password produce the same error so callers cannot enumerate accounts.
/// One read, no writes.
pub async fn login(
    store: &dyn UserStore,
    keys: &JwtKeys,
    email: &str,
    password: &str,
) -> Result<String, ApiError> {
    let user = match store.find_by_email(email).await? {
        Some(u) => u,
        None => {
            warn!(email = %email, "login for unknown email");
            return Err(ApiError::InvalidCredentials);
        }
    };

    if !verify_password(password, &user.password_hash)? {
        warn!(email = %email, user_id = %user.id, "login with invalid password");
        return Err(ApiError::InvalidCredentials);
    }

    let token = keys.sign(&user.email)?;
    info!(user_id = %user.id, email = %user.email, "user logged in");
    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::time::Duration;
    use time::OffsetDateTime;
    use uuid::Uuid;

    /// In-memory credential store mirroring the unique-index behavior of the
    /// Postgres implementation.
    #[derive(Default)]
    struct MemoryUserStore {
        users: Mutex<HashMap<String, User>>,
    }

    impl MemoryUserStore {
        fn len(&self) -> usize {
            self.users.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl UserStore for MemoryUserStore {
        async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>> {
            Ok(self.users.lock().unwrap().get(email).cloned())
        }

        async fn insert(
            &self,
            name: &str,
            email: &str,
            password_hash: &str,
        ) -> Result<User, InsertError> {
            let mut users = self.users.lock().unwrap();
            if users.contains_key(email) {
                return Err(InsertError::DuplicateEmail);
            }
            let user = User {
                id: Uuid::new_v4(),
                name: name.to_string(),
                email: email.to_string(),
                password_hash: password_hash.to_string(),
                created_at: OffsetDateTime::now_utc(),
            };
            users.insert(email.to_string(), user.clone());
            Ok(user)
        }
    }

    fn make_keys() -> JwtKeys {
        JwtKeys::new("test-secret", Duration::from_secs(300))
    }

    #[tokio::test]
    async fn register_succeeds_once_then_duplicates_fail() {
        let store = MemoryUserStore::default();
        let user = register(&store, "Alice", "a@x.com", "secret1")
            .await
            .expect("first registration");
        assert_eq!(user.email, "a@x.com");
        assert_ne!(user.password_hash, "secret1");

        let err = register(&store, "Alice2", "a@x.com", "other")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::DuplicateUser));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn insert_race_surfaces_as_duplicate_user() {
        let store = MemoryUserStore::default();
        // Simulate the concurrent registration that passed the existence
        // check: the row exists by the time our insert lands.
        store
            .insert("Alice", "a@x.com", "some-hash")
            .await
            .expect("seed user");
        let err = register(&store, "Alice2", "a@x.com", "other")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::DuplicateUser));
    }

    #[tokio::test]
    async fn login_with_correct_password_returns_token_for_email() {
        let store = MemoryUserStore::default();
        let keys = make_keys();
        register(&store, "Alice", "a@x.com", "secret1")
            .await
            .expect("register");

        let token = login(&store, &keys, "a@x.com", "secret1")
            .await
            .expect("login");
        let claims = keys.verify(&token).expect("verify");
        assert_eq!(claims.email, "a@x.com");
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_email_are_indistinguishable() {
        let store = MemoryUserStore::default();
        let keys = make_keys();
        register(&store, "Alice", "a@x.com", "secret1")
            .await
            .expect("register");

        let wrong_pw = login(&store, &keys, "a@x.com", "wrong").await.unwrap_err();
        let no_user = login(&store, &keys, "nobody@x.com", "secret1")
            .await
            .unwrap_err();
        assert!(matches!(wrong_pw, ApiError::InvalidCredentials));
        assert!(matches!(no_user, ApiError::InvalidCredentials));
        assert_eq!(wrong_pw.to_string(), no_user.to_string());
    }

    #[tokio::test]
    async fn failed_logins_never_mutate_the_store() {
        let store = MemoryUserStore::default();
        let keys = make_keys();
        register(&store, "Alice", "a@x.com", "secret1")
            .await
            .expect("register");
        assert_eq!(store.len(), 1);

        for _ in 0..3 {
            let _ = login(&store, &keys, "a@x.com", "wrong").await.unwrap_err();
            let _ = login(&store, &keys, "ghost@x.com", "x").await.unwrap_err();
        }
        assert_eq!(store.len(), 1);
        // The surviving credential still works.
        login(&store, &keys, "a@x.com", "secret1")
            .await
            .expect("login still succeeds");
    }

    #[test]
    fn email_validation_accepts_and_rejects() {
        assert!(is_valid_email("a@x.com"));
        assert!(is_valid_email("first.last@sub.example.org"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@x.com"));
    }
}
