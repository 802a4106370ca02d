use crate::errors::AppError;
use crate::models::{Store, UserRecord};
use thiserror::Error;

const MAX_USERNAME_LEN: usize = 64;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("username and password are required")]
    MissingField,
    #[error("username may only contain letters, digits, '.', '_' and '-'")]
    InvalidUsername,
    #[error("user already exists")]
    DuplicateUser,
    #[error("invalid credentials")]
    InvalidCredentials,
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::MissingField | AuthError::InvalidUsername => {
                AppError::bad_request(err.to_string())
            }
            AuthError::DuplicateUser => AppError::conflict(err.to_string()),
            AuthError::InvalidCredentials => AppError::unauthorized(err.to_string()),
        }
    }
}

pub fn register(store: &mut Store, username: &str, password: &str) -> Result<(), AuthError> {
    if username.is_empty() || password.is_empty() {
        return Err(AuthError::MissingField);
    }
    if !valid_username(username) {
        return Err(AuthError::InvalidUsername);
    }
    if store.users.contains_key(username) {
        return Err(AuthError::DuplicateUser);
    }

    store.users.insert(
        username.to_string(),
        UserRecord {
            password: password.to_string(),
        },
    );
    store.habits.insert(username.to_string(), Vec::new());
    store.xp.insert(username.to_string(), 0);

    Ok(())
}

pub fn login(store: &Store, username: &str, password: &str) -> Result<(), AuthError> {
    if username.is_empty() || password.is_empty() {
        return Err(AuthError::MissingField);
    }
    match store.users.get(username) {
        Some(record) if record.password == password => Ok(()),
        _ => Err(AuthError::InvalidCredentials),
    }
}

// Usernames become storage key suffixes, which are file names on disk.
fn valid_username(username: &str) -> bool {
    username.len() <= MAX_USERNAME_LEN
        && username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
}
