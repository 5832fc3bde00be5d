use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info};
use uuid::Uuid;

use super::domain::{Credentials, Identity, IssuedToken, SessionRecord, UserAccount};
use super::store::{StoreError, TokenStore, UserStore};
use crate::config::AuthConfig;

const PASSWORD_HASH_COST: u32 = 10;

/// Issues, validates, and revokes opaque bearer tokens for registered users.
pub struct AuthService<U, T> {
    users: Arc<U>,
    tokens: Arc<T>,
    token_ttl: Duration,
}

impl<U, T> AuthService<U, T>
where
    U: UserStore + 'static,
    T: TokenStore + 'static,
{
    pub fn new(users: Arc<U>, tokens: Arc<T>, config: &AuthConfig) -> Self {
        Self {
            users,
            tokens,
            token_ttl: config.token_ttl(),
        }
    }

    /// Create an account and sign the new user in.
    pub async fn register(&self, credentials: Credentials) -> Result<IssuedToken, AuthError> {
        let (email, password) = required_fields(credentials)?;

        if self.users.fetch(&email).await?.is_some() {
            return Err(AuthError::UserExists);
        }

        let account = UserAccount {
            id: Uuid::new_v4().simple().to_string(),
            password_hash: hash_password(password).await?,
            email,
        };

        self.users
            .insert(account.clone())
            .await
            .map_err(|err| match err {
                StoreError::Conflict => AuthError::UserExists,
                other => AuthError::Store(other),
            })?;

        info!(user_id = %account.id, "registered user");
        self.issue(account.identity()).await
    }

    pub async fn login(&self, credentials: Credentials) -> Result<IssuedToken, AuthError> {
        let (email, password) = required_fields(credentials)?;

        let account = self
            .users
            .fetch(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !verify_password(password, account.password_hash.clone()).await? {
            return Err(AuthError::InvalidCredentials);
        }

        self.issue(account.identity()).await
    }

    pub async fn issue(&self, identity: Identity) -> Result<IssuedToken, AuthError> {
        self.issue_at(identity, Utc::now()).await
    }

    /// Issue a token valid from `now`; sessions already expired at `now` are swept first.
    pub async fn issue_at(
        &self,
        identity: Identity,
        now: DateTime<Utc>,
    ) -> Result<IssuedToken, AuthError> {
        let expires_at = now
            .checked_add_signed(self.token_ttl)
            .ok_or(AuthError::ExpiryOutOfRange)?;

        self.purge_expired_at(now).await?;

        let token = Uuid::new_v4().simple().to_string();
        self.tokens
            .put(
                &token,
                SessionRecord {
                    identity: identity.clone(),
                    expires_at,
                },
            )
            .await?;

        debug!(user_id = %identity.user_id, %expires_at, "issued session token");
        Ok(IssuedToken {
            token,
            identity,
            expires_at,
        })
    }

    pub async fn authenticate(&self, token: &str) -> Result<Identity, AuthError> {
        self.authenticate_at(token, Utc::now()).await
    }

    /// Resolve a token to its identity; expired sessions are evicted on the way out.
    pub async fn authenticate_at(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<Identity, AuthError> {
        let session = self
            .tokens
            .get(token)
            .await?
            .ok_or(AuthError::TokenRevokedOrExpired)?;

        if session.is_expired(now) {
            self.tokens.remove(token).await?;
            return Err(AuthError::TokenRevokedOrExpired);
        }

        Ok(session.identity)
    }

    /// Revoking an unknown token is not an error.
    pub async fn revoke(&self, token: &str) -> Result<(), AuthError> {
        self.tokens.remove(token).await?;
        Ok(())
    }

    pub async fn purge_expired(&self) -> Result<usize, AuthError> {
        self.purge_expired_at(Utc::now()).await
    }

    pub async fn purge_expired_at(&self, now: DateTime<Utc>) -> Result<usize, AuthError> {
        let purged = self.tokens.purge_expired(now).await?;
        if purged > 0 {
            debug!(purged, "swept expired session tokens");
        }
        Ok(purged)
    }
}

fn required_fields(credentials: Credentials) -> Result<(String, String), AuthError> {
    let email = credentials
        .email
        .map(|email| email.trim().to_ascii_lowercase())
        .filter(|email| !email.is_empty());
    let password = credentials.password.filter(|password| !password.is_empty());

    match (email, password) {
        (Some(email), Some(password)) => Ok((email, password)),
        _ => Err(AuthError::MissingFields),
    }
}

// bcrypt is CPU-bound; keep it off the async workers.
async fn hash_password(password: String) -> Result<String, AuthError> {
    tokio::task::spawn_blocking(move || bcrypt::hash(password, PASSWORD_HASH_COST))
        .await
        .map_err(|err| AuthError::PasswordHash(err.to_string()))?
        .map_err(|err| AuthError::PasswordHash(err.to_string()))
}

async fn verify_password(password: String, hash: String) -> Result<bool, AuthError> {
    tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|err| AuthError::PasswordHash(err.to_string()))?
        .map_err(|err| AuthError::PasswordHash(err.to_string()))
}

/// Failures of the token collaborator, kept apart from plan lookup errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Missing required fields")]
    MissingFields,
    #[error("User already exists")]
    UserExists,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("No token provided")]
    MissingToken,
    #[error("Invalid token format")]
    MalformedToken,
    #[error("Token has been revoked or expired")]
    TokenRevokedOrExpired,
    #[error("token expiry is out of range")]
    ExpiryOutOfRange,
    #[error("password hashing failed: {0}")]
    PasswordHash(String),
    #[error("session store failure: {0}")]
    Store(#[from] StoreError),
}
