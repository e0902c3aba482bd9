use thiserror::Error;

use crate::principal::Principal;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthzError {
    #[error("access denied: authentication required")]
    NotAuthenticated,

    #[error("access denied: missing role '{0}'")]
    MissingRole(String),
}

/// Authorize a principal against a route's required role.
///
/// - No IO
/// - No panics
/// - Unauthenticated callers fail here too; there is no separate 401 surface
///
/// Roles are checked literally: `ADMIN` does not imply `USER`.
pub fn require_role(principal: &Principal, role: &str) -> Result<(), AuthzError> {
    if !principal.is_authenticated() {
        return Err(AuthzError::NotAuthenticated);
    }
    if !principal.has_role(role) {
        return Err(AuthzError::MissingRole(role.to_string()));
    }
    Ok(())
}
