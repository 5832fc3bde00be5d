//! Token collaborator: accounts, opaque bearer sessions, and the guard that
//! protects the plan and assistant routes.

pub mod domain;
pub mod middleware;
pub mod router;
pub mod service;
pub mod store;

pub use domain::{Credentials, Identity, IssuedToken, SessionRecord, UserAccount};
pub use middleware::{bearer_token, require_token};
pub use router::auth_router;
pub use service::{AuthError, AuthService};
pub use store::{InMemoryTokenStore, InMemoryUserStore, StoreError, TokenStore, UserStore};
