//! Auth
//!
//! Mock identity service over two store blobs: the registered-users list
//! and the active session. Passwords are stored as plain text — this is a
//! storefront mock, not a credential system.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;
use uuid::Uuid;

use crate::storage::{self, KeyValueStore, StoreError};

/// Storage key for the registered-users blob.
pub const USERS_KEY: &str = "users_v1";

/// Storage key for the active-session blob.
pub const SESSION_KEY: &str = "auth_user_v1";

/// Registration and sign-in failures, surfaced as inline messages.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// A registration field was blank.
    #[error("All fields are required.")]
    MissingFields,

    /// The email already has an account.
    #[error("Email already registered.")]
    EmailTaken,

    /// Login was attempted without an email or password.
    #[error("Email and password required.")]
    MissingCredentials,

    /// No user matches the email and password pair.
    #[error("Invalid credentials.")]
    InvalidCredentials,

    /// The operation needs a signed-in user.
    #[error("Not authenticated.")]
    NotAuthenticated,

    /// The session points at a user the store no longer has.
    #[error("User not found.")]
    UserNotFound,
}

/// Stored user record, including the plain-text mock password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Opaque user id.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Email, trimmed and lowercased at registration.
    pub email: String,

    /// Plain-text password (mock).
    pub password: String,

    /// Home delivery address.
    pub home_address: String,

    /// Work delivery address.
    pub work_address: String,
}

/// Active session: the signed-in user minus the password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque user id.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Email.
    pub email: String,

    /// Home delivery address.
    pub home_address: String,

    /// Work delivery address.
    pub work_address: String,
}

impl From<&UserRecord> for Session {
    fn from(record: &UserRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            email: record.email.clone(),
            home_address: record.home_address.clone(),
            work_address: record.work_address.clone(),
        }
    }
}

/// Mock identity service for one storefront session.
#[derive(Debug)]
pub struct AuthService {
    store: Arc<dyn KeyValueStore>,
    session: Option<Session>,
}

impl AuthService {
    /// Hydrate the service, restoring any persisted session. An unreadable
    /// session blob signs the user out rather than failing.
    #[must_use]
    pub fn hydrate(store: Arc<dyn KeyValueStore>) -> Self {
        let session = match storage::get_json::<Session>(store.as_ref(), SESSION_KEY) {
            Ok(found) => found,
            Err(err) => {
                warn!(%err, "session blob unreadable, signing out");
                None
            }
        };

        Self { store, session }
    }

    /// The signed-in user, if any.
    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Register a new user and sign them in.
    ///
    /// Every field is required; the email is trimmed, lowercased and must
    /// not already have an account.
    ///
    /// # Errors
    ///
    /// [`AuthError::MissingFields`] on any blank field,
    /// [`AuthError::EmailTaken`] on a duplicate email.
    pub fn register(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
        home_address: &str,
        work_address: &str,
    ) -> Result<Session, AuthError> {
        let name = name.trim();
        let email = email.trim().to_lowercase();
        let home_address = home_address.trim();
        let work_address = work_address.trim();

        if name.is_empty()
            || email.is_empty()
            || password.is_empty()
            || home_address.is_empty()
            || work_address.is_empty()
        {
            return Err(AuthError::MissingFields);
        }

        let mut users = self.read_users();

        if users.iter().any(|user| user.email == email) {
            return Err(AuthError::EmailTaken);
        }

        let record = UserRecord {
            id: Uuid::new_v4().to_string(),
            name: name.to_owned(),
            email,
            password: password.to_owned(),
            home_address: home_address.to_owned(),
            work_address: work_address.to_owned(),
        };
        let session = Session::from(&record);

        users.push(record);
        self.write_users(&users);
        self.set_session(Some(session.clone()));

        Ok(session)
    }

    /// Sign in with an email and password.
    ///
    /// # Errors
    ///
    /// [`AuthError::MissingCredentials`] when either input is blank,
    /// [`AuthError::InvalidCredentials`] when no stored user matches.
    pub fn login(&mut self, email: &str, password: &str) -> Result<Session, AuthError> {
        let email = email.trim().to_lowercase();

        if email.is_empty() || password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        let users = self.read_users();
        let found = users
            .iter()
            .find(|user| user.email == email && user.password == password)
            .ok_or(AuthError::InvalidCredentials)?;

        let session = Session::from(found);
        self.set_session(Some(session.clone()));

        Ok(session)
    }

    /// Sign out and drop the persisted session.
    pub fn logout(&mut self) {
        self.set_session(None);
    }

    /// Update both addresses on the stored user and the live session.
    ///
    /// # Errors
    ///
    /// [`AuthError::NotAuthenticated`] without a signed-in user,
    /// [`AuthError::UserNotFound`] when the session's user is gone from
    /// the store.
    pub fn update_addresses(
        &mut self,
        home_address: &str,
        work_address: &str,
    ) -> Result<Session, AuthError> {
        let current = self.session.as_ref().ok_or(AuthError::NotAuthenticated)?;

        let mut users = self.read_users();
        let record = users
            .iter_mut()
            .find(|user| user.id == current.id)
            .ok_or(AuthError::UserNotFound)?;

        record.home_address = home_address.trim().to_owned();
        record.work_address = work_address.trim().to_owned();
        let session = Session::from(&*record);

        self.write_users(&users);
        self.set_session(Some(session.clone()));

        Ok(session)
    }

    fn read_users(&self) -> Vec<UserRecord> {
        match storage::get_json(self.store.as_ref(), USERS_KEY) {
            Ok(Some(users)) => users,
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!(%err, "users blob unreadable, treating as empty");
                Vec::new()
            }
        }
    }

    fn write_users(&self, users: &[UserRecord]) {
        if let Err(err) = storage::set_json(self.store.as_ref(), USERS_KEY, &users) {
            warn!(%err, "users blob write failed");
        }
    }

    fn set_session(&mut self, session: Option<Session>) {
        let result = match &session {
            Some(active) => storage::set_json(self.store.as_ref(), SESSION_KEY, active),
            None => self.store.remove(SESSION_KEY),
        };

        if let Err(err) = result {
            warn!(%err, "session blob write failed");
        }

        self.session = session;
    }
}
