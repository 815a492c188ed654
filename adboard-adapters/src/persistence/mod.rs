pub mod hashmap_advert_store;
pub mod hashmap_session_store;
pub mod hashmap_user_store;
pub mod postgres_user_store;
