//! `gauchorecords-auth` — pure authentication/authorization boundary.
//!
//! This crate is intentionally decoupled from HTTP and storage.

pub mod authorize;
pub mod claims;
pub mod jwt;
pub mod principal;
pub mod roles;

pub use authorize::{require_role, AuthzError};
pub use claims::{validate_claims, SessionClaims, TokenValidationError};
pub use jwt::{Hs256TokenValidator, TokenValidator};
pub use principal::Principal;
pub use roles::Role;
