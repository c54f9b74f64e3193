use crate::models::{ProfileForm, UserMetadata};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory stand-in for the identity provider's per-user metadata
///
/// Handles:
/// - Seeding a user on first sign-in
/// - Reading the saved profile to prefill forms
/// - Merging wizard and settings saves
#[derive(Clone, Default)]
pub struct UserMetadataStore {
    users: Arc<RwLock<HashMap<String, UserMetadata>>>,
}

impl UserMetadataStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user with the identity fields the provider knows about
    pub async fn seed(&self, user_id: &str, full_name: &str, email: &str) -> UserMetadata {
        let mut users = self.users.write().await;
        let entry = users
            .entry(user_id.to_string())
            .or_insert_with(|| UserMetadata {
                user_id: user_id.to_string(),
                ..Default::default()
            });
        entry.full_name = full_name.to_string();
        entry.email = email.to_string();
        entry.updated_at = Some(chrono::Utc::now());

        tracing::debug!("Seeded metadata for user {}", user_id);
        entry.clone()
    }

    pub async fn get(&self, user_id: &str) -> Option<UserMetadata> {
        self.users.read().await.get(user_id).cloned()
    }

    /// Store the wizard fields and the completed step list
    ///
    /// Unknown users get a fresh record, matching the provider's
    /// create-on-write behaviour for metadata.
    pub async fn save_profile(
        &self,
        user_id: &str,
        form: &ProfileForm,
        completed_steps: &[u8],
    ) -> UserMetadata {
        let mut users = self.users.write().await;
        let entry = users
            .entry(user_id.to_string())
            .or_insert_with(|| UserMetadata {
                user_id: user_id.to_string(),
                ..Default::default()
            });

        entry.full_name = form.name.trim().to_string();
        entry.education = form.education.trim().to_string();
        entry.interests = form.interests.trim().to_string();
        entry.skills = form.skills.clone();
        entry.completed_steps = completed_steps.to_vec();
        entry.updated_at = Some(chrono::Utc::now());

        tracing::debug!(
            "Saved profile for user {} ({} steps completed)",
            user_id,
            completed_steps.len()
        );
        entry.clone()
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seed_and_get() {
        let store = UserMetadataStore::new();
        assert!(store.get("u1").await.is_none());

        store.seed("u1", "Jane Doe", "jane@example.com").await;
        let meta = store.get("u1").await.unwrap();
        assert_eq!(meta.full_name, "Jane Doe");
        assert_eq!(meta.email, "jane@example.com");
        assert!(meta.updated_at.is_some());
    }

    #[tokio::test]
    async fn test_save_profile_keeps_email() {
        let store = UserMetadataStore::new();
        store.seed("u1", "Jane", "jane@example.com").await;

        let form = ProfileForm {
            name: " Jane Doe ".to_string(),
            education: "MBA".to_string(),
            skills: vec!["SQL".to_string()],
            interests: "Analytics".to_string(),
            profile_picture: None,
        };
        let saved = store.save_profile("u1", &form, &[1, 2]).await;

        assert_eq!(saved.full_name, "Jane Doe");
        assert_eq!(saved.email, "jane@example.com");
        assert_eq!(saved.completed_steps, vec![1, 2]);
        assert_eq!(store.len().await, 1);
    }
}
