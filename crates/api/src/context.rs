use gauchorecords_auth::Principal;

/// Principal context for a request (authenticated identity + roles).
///
/// Installed by the identity middleware for every request; anonymous
/// requests carry the anonymous principal rather than being rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrincipalContext {
    principal: Principal,
}

impl PrincipalContext {
    pub fn new(principal: Principal) -> Self {
        Self { principal }
    }

    pub fn principal(&self) -> &Principal {
        &self.principal
    }
}
