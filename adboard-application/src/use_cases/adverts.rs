use adboard_core::{Advert, AdvertChanges, AdvertStore, AdvertStoreError, Email, NewAdvert};

/// Error types for advert mutations
#[derive(Debug, thiserror::Error)]
pub enum AdvertWriteError {
    #[error("advert not found")]
    NotFound,
    #[error("advert belongs to another user")]
    NotOwner,
    #[error("unexpected error: {0}")]
    UnexpectedError(String),
}

impl From<AdvertStoreError> for AdvertWriteError {
    fn from(error: AdvertStoreError) -> Self {
        match error {
            AdvertStoreError::AdvertNotFound => AdvertWriteError::NotFound,
            AdvertStoreError::UnexpectedError(msg) => AdvertWriteError::UnexpectedError(msg),
        }
    }
}

/// Create advert use case - publishes an advert owned by the subject.
pub struct CreateAdvertUseCase<'a> {
    advert_store: &'a dyn AdvertStore,
}

impl<'a> CreateAdvertUseCase<'a> {
    pub fn new(advert_store: &'a dyn AdvertStore) -> Self {
        Self { advert_store }
    }

    #[tracing::instrument(name = "CreateAdvertUseCase::execute", skip(self, advert))]
    pub async fn execute(
        &self,
        owner: Email,
        advert: NewAdvert,
    ) -> Result<Advert, AdvertWriteError> {
        Ok(self.advert_store.add_advert(owner, advert).await?)
    }
}

/// Update advert use case - owner-gated partial update.
pub struct UpdateAdvertUseCase<'a> {
    advert_store: &'a dyn AdvertStore,
}

impl<'a> UpdateAdvertUseCase<'a> {
    pub fn new(advert_store: &'a dyn AdvertStore) -> Self {
        Self { advert_store }
    }

    #[tracing::instrument(name = "UpdateAdvertUseCase::execute", skip(self, changes))]
    pub async fn execute(
        &self,
        subject: &Email,
        id: i64,
        changes: AdvertChanges,
    ) -> Result<Advert, AdvertWriteError> {
        let advert = self.advert_store.get_advert(id).await?;
        if &advert.owner != subject {
            return Err(AdvertWriteError::NotOwner);
        }
        Ok(self.advert_store.update_advert(id, changes).await?)
    }
}

/// Delete advert use case - owner-gated removal.
pub struct DeleteAdvertUseCase<'a> {
    advert_store: &'a dyn AdvertStore,
}

impl<'a> DeleteAdvertUseCase<'a> {
    pub fn new(advert_store: &'a dyn AdvertStore) -> Self {
        Self { advert_store }
    }

    #[tracing::instrument(name = "DeleteAdvertUseCase::execute", skip(self))]
    pub async fn execute(&self, subject: &Email, id: i64) -> Result<(), AdvertWriteError> {
        let advert = self.advert_store.get_advert(id).await?;
        if &advert.owner != subject {
            return Err(AdvertWriteError::NotOwner);
        }
        Ok(self.advert_store.remove_advert(id).await?)
    }
}
