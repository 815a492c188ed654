use secrecy::Secret;

use super::email::Email;

/// A registered account. The id is assigned by the user store at creation
/// and never changes; the password only ever appears here as its hash.
#[derive(Clone, Debug)]
pub struct User {
    id: i64,
    email: Email,
    password_hash: Secret<String>,
}

impl User {
    pub fn new(id: i64, email: Email, password_hash: Secret<String>) -> Self {
        Self {
            id,
            email,
            password_hash,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password_hash(&self) -> &Secret<String> {
        &self.password_hash
    }
}
