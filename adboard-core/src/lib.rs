pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    advert::{Advert, AdvertChanges, NewAdvert},
    email::{Email, EmailError},
    password::{Password, PasswordError},
    session::SessionId,
    user::User,
};

pub use ports::{
    repositories::{
        AdvertStore, AdvertStoreError, SessionStore, SessionStoreError, UserStore, UserStoreError,
    },
    services::{HashingError, PasswordHasher},
};
