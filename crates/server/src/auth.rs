//! Shared-secret check for admin operations.

use std::fmt;

use subtle::ConstantTimeEq;

/// Header that carries the admin secret.
pub const ADMIN_HEADER: &str = "x-admin-auth";

/// The configured admin secret. With no secret configured nothing is admitted.
#[derive(Clone, Default)]
pub struct AdminCredential {
    secret: Option<String>,
}

impl AdminCredential {
    pub fn new(secret: Option<String>) -> Self {
        Self { secret: secret.filter(|s| !s.is_empty()) }
    }

    pub fn is_configured(&self) -> bool {
        self.secret.is_some()
    }

    /// Constant-time comparison of the presented header value with the secret.
    pub fn verify(&self, presented: Option<&str>) -> bool {
        match (self.secret.as_deref(), presented) {
            (Some(expected), Some(got)) => expected.as_bytes().ct_eq(got.as_bytes()).into(),
            _ => false,
        }
    }
}

impl fmt::Debug for AdminCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminCredential")
            .field("configured", &self.is_configured())
            .finish()
    }
}
