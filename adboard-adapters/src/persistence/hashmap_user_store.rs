use std::collections::HashMap;
use std::sync::Arc;

use adboard_core::{Email, User, UserStore, UserStoreError};
use secrecy::Secret;
use tokio::sync::RwLock;

#[derive(Default)]
struct Inner {
    users: HashMap<Email, User>,
    next_id: i64,
}

/// In-memory user store. Clones share the same map via the inner
/// `Arc<RwLock>`, so the store can be handed to every route.
#[derive(Clone, Default)]
pub struct HashMapUserStore {
    inner: Arc<RwLock<Inner>>,
}

impl HashMapUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl UserStore for HashMapUserStore {
    #[tracing::instrument(name = "Adding user to in-memory store", skip_all)]
    async fn add_user(
        &self,
        email: Email,
        password_hash: Secret<String>,
    ) -> Result<User, UserStoreError> {
        // One write guard covers both the existence check and the insert,
        // so two racing signups for the same email produce a single user.
        let mut inner = self.inner.write().await;
        if inner.users.contains_key(&email) {
            return Err(UserStoreError::UserAlreadyExists);
        }
        inner.next_id += 1;
        let user = User::new(inner.next_id, email.clone(), password_hash);
        inner.users.insert(email, user.clone());
        Ok(user)
    }

    #[tracing::instrument(name = "Retrieving user from in-memory store", skip_all)]
    async fn get_user(&self, email: &Email) -> Result<User, UserStoreError> {
        self.inner
            .read()
            .await
            .users
            .get(email)
            .cloned()
            .ok_or(UserStoreError::UserNotFound)
    }
}

#[cfg(test)]
mod tests {
    use secrecy::ExposeSecret;

    use super::*;

    fn email(raw: &str) -> Email {
        Email::try_from(Secret::new(raw.to_string())).unwrap()
    }

    #[tokio::test]
    async fn add_and_get_user() {
        let store = HashMapUserStore::new();
        let created = store
            .add_user(email("alice@example.com"), Secret::new("hash".to_string()))
            .await
            .unwrap();
        assert_eq!(created.id(), 1);

        let fetched = store.get_user(&email("alice@example.com")).await.unwrap();
        assert_eq!(fetched.id(), created.id());
        assert_eq!(fetched.password_hash().expose_secret(), "hash");
    }

    #[tokio::test]
    async fn ids_are_monotonic() {
        let store = HashMapUserStore::new();
        let a = store
            .add_user(email("a@example.com"), Secret::new("h".to_string()))
            .await
            .unwrap();
        let b = store
            .add_user(email("b@example.com"), Secret::new("h".to_string()))
            .await
            .unwrap();
        assert!(b.id() > a.id());
        assert!(a.id() > 0);
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let store = HashMapUserStore::new();
        store
            .add_user(email("alice@example.com"), Secret::new("h1".to_string()))
            .await
            .unwrap();

        let result = store
            .add_user(email("alice@example.com"), Secret::new("h2".to_string()))
            .await;
        assert_eq!(result.unwrap_err(), UserStoreError::UserAlreadyExists);
    }

    #[tokio::test]
    async fn racing_inserts_produce_exactly_one_user() {
        let store = HashMapUserStore::new();

        let mut handles = Vec::new();
        for i in 0..16 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store
                    .add_user(
                        email("race@example.com"),
                        Secret::new(format!("hash-{i}")),
                    )
                    .await
            }));
        }

        let mut created = 0;
        let mut rejected = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => created += 1,
                Err(UserStoreError::UserAlreadyExists) => rejected += 1,
                Err(e) => panic!("unexpected error: {e}"),
            }
        }

        assert_eq!(created, 1);
        assert_eq!(rejected, 15);
    }

    #[tokio::test]
    async fn missing_user_reports_not_found() {
        let store = HashMapUserStore::new();
        let result = store.get_user(&email("nobody@example.com")).await;
        assert_eq!(result.unwrap_err(), UserStoreError::UserNotFound);
    }
}
