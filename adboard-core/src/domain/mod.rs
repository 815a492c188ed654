pub mod advert;
pub mod email;
pub mod password;
pub mod session;
pub mod user;
