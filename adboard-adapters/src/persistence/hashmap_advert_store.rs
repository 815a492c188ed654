use std::collections::HashMap;
use std::sync::Arc;

use adboard_core::{Advert, AdvertChanges, AdvertStore, AdvertStoreError, Email, NewAdvert};
use chrono::Utc;
use tokio::sync::RwLock;

#[derive(Default)]
struct Inner {
    adverts: HashMap<i64, Advert>,
    next_id: i64,
}

/// In-memory advert store with monotonic ids.
#[derive(Clone, Default)]
pub struct HashMapAdvertStore {
    inner: Arc<RwLock<Inner>>,
}

impl HashMapAdvertStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl AdvertStore for HashMapAdvertStore {
    #[tracing::instrument(name = "Adding advert to in-memory store", skip_all)]
    async fn add_advert(
        &self,
        owner: Email,
        advert: NewAdvert,
    ) -> Result<Advert, AdvertStoreError> {
        let mut inner = self.inner.write().await;
        inner.next_id += 1;
        let advert = Advert {
            id: inner.next_id,
            title: advert.title,
            description: advert.description,
            price: advert.price,
            owner,
            image_urls: advert.image_urls,
            created_at: Utc::now(),
        };
        inner.adverts.insert(advert.id, advert.clone());
        Ok(advert)
    }

    async fn get_advert(&self, id: i64) -> Result<Advert, AdvertStoreError> {
        self.inner
            .read()
            .await
            .adverts
            .get(&id)
            .cloned()
            .ok_or(AdvertStoreError::AdvertNotFound)
    }

    async fn list_adverts(&self) -> Result<Vec<Advert>, AdvertStoreError> {
        let inner = self.inner.read().await;
        let mut adverts: Vec<Advert> = inner.adverts.values().cloned().collect();
        adverts.sort_by_key(|advert| advert.id);
        Ok(adverts)
    }

    #[tracing::instrument(name = "Updating advert in in-memory store", skip_all)]
    async fn update_advert(
        &self,
        id: i64,
        changes: AdvertChanges,
    ) -> Result<Advert, AdvertStoreError> {
        let mut inner = self.inner.write().await;
        let advert = inner
            .adverts
            .get_mut(&id)
            .ok_or(AdvertStoreError::AdvertNotFound)?;

        if let Some(title) = changes.title {
            advert.title = title;
        }
        if let Some(description) = changes.description {
            advert.description = description;
        }
        if let Some(price) = changes.price {
            advert.price = price;
        }
        if let Some(image_urls) = changes.image_urls {
            advert.image_urls = image_urls;
        }

        Ok(advert.clone())
    }

    #[tracing::instrument(name = "Removing advert from in-memory store", skip_all)]
    async fn remove_advert(&self, id: i64) -> Result<(), AdvertStoreError> {
        self.inner
            .write()
            .await
            .adverts
            .remove(&id)
            .map(|_| ())
            .ok_or(AdvertStoreError::AdvertNotFound)
    }
}
