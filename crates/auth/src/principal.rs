use crate::roles::Role;

/// The subject of the current request, paired with its granted roles.
///
/// Every request carries exactly one principal. Requests without valid
/// credentials carry the anonymous principal (`authenticated == false`,
/// empty role set); rejection happens at the per-route gate, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    authenticated: bool,
    subject: Option<String>,
    roles: Vec<Role>,
}

impl Principal {
    pub fn authenticated(subject: impl Into<String>, roles: Vec<Role>) -> Self {
        Self {
            authenticated: true,
            subject: Some(subject.into()),
            roles,
        }
    }

    pub fn anonymous() -> Self {
        Self {
            authenticated: false,
            subject: None,
            roles: Vec::new(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r.as_str() == role)
    }
}
