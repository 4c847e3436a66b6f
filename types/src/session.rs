use crate::LoginResponse;
use secrecy::SecretString;

/// An authenticated session, created from a successful login and handed to
/// the API client. Held in memory only: set on login, cleared on logout, read
/// once per request. A page reload starts logged out.
#[derive(Debug, Clone)]
pub struct Session {
    pub username: String,
    token: SecretString,
}

impl Session {
    pub fn new(username: String, response: LoginResponse) -> Self {
        Self {
            username,
            token: response.token,
        }
    }

    pub fn token(&self) -> &SecretString {
        &self.token
    }
}
