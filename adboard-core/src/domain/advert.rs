use chrono::{DateTime, Utc};

use super::email::Email;

/// A published advert. Owned by the account that created it; only the
/// owner may update or delete it.
#[derive(Clone, Debug)]
pub struct Advert {
    pub id: i64,
    pub title: String,
    pub description: String,
    /// Price in minor currency units.
    pub price: i64,
    pub owner: Email,
    pub image_urls: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Advert attributes supplied at creation. The store assigns id and
/// creation time.
#[derive(Clone, Debug)]
pub struct NewAdvert {
    pub title: String,
    pub description: String,
    pub price: i64,
    pub image_urls: Vec<String>,
}

/// Partial update; `None` fields are left untouched.
#[derive(Clone, Debug, Default)]
pub struct AdvertChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<i64>,
    pub image_urls: Option<Vec<String>>,
}
