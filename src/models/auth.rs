use std::fmt;

use garde::Validate;
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// The login form, sent as-is to `POST /api/auth/login`.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate, Zeroize, ZeroizeOnDrop)]
pub struct LoginRequest {
    #[garde(email)]
    pub email: String,
    #[garde(length(min = 3))]
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// The registration form, sent as-is to `POST /api/auth/register`.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate, Zeroize, ZeroizeOnDrop)]
pub struct RegisterRequest {
    #[garde(email, length(max = 50))]
    pub email: String,
    #[serde(rename = "firstName")]
    #[garde(length(min = 3, max = 20))]
    pub first_name: String,
    #[serde(rename = "lastName")]
    #[garde(length(min = 3, max = 20))]
    pub last_name: String,
    #[garde(length(min = 3, max = 40))]
    pub password: String,
}

impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("email", &self.email)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("password", &"<redacted>")
            .finish()
    }
}
