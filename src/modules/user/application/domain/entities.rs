use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationStatus {
    Pending,
    Verified,
}

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    /// Present exactly while a verification is pending.
    pub verification_token: Option<String>,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn status(&self) -> VerificationStatus {
        if self.is_verified {
            VerificationStatus::Verified
        } else {
            VerificationStatus::Pending
        }
    }

    /// Pending -> Verified. The consumed token is dropped so it can never match again.
    pub fn mark_verified(&mut self) {
        self.is_verified = true;
        self.verification_token = None;
    }

    /// Pending -> Pending with a fresh token. Returns `false` and leaves the
    /// user untouched once verified.
    pub fn rotate_token(&mut self, token: String) -> bool {
        if self.is_verified {
            return false;
        }
        self.verification_token = Some(token);
        true
    }
}

/// Data needed to persist a freshly registered, still unverified user.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub verification_token: String,
}
