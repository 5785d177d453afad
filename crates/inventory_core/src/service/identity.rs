//! Identity boundary consumed by the inventory store.
//!
//! The store only needs to know which user is signed in; how that user
//! authenticated is not its concern.

/// Source of the currently signed-in user id.
pub trait IdentityProvider {
    fn current_user_id(&self) -> Option<String>;
}

/// Identity pinned to a fixed value. Used by the CLI and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticIdentity {
    user_id: Option<String>,
}

impl StaticIdentity {
    pub fn signed_in(user_id: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
        }
    }

    pub fn signed_out() -> Self {
        Self::default()
    }

    pub fn sign_in(&mut self, user_id: impl Into<String>) {
        self.user_id = Some(user_id.into());
    }

    pub fn sign_out(&mut self) {
        self.user_id = None;
    }
}

impl IdentityProvider for StaticIdentity {
    fn current_user_id(&self) -> Option<String> {
        self.user_id.clone()
    }
}
