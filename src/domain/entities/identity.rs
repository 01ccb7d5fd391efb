//! Identity entity representing the visitor resolved from a forum session.

/// The outcome of resolving an inbound session against the forum.
///
/// `authenticated` is true exactly when the forum reported a non-zero user id
/// for the session. The unauthenticated guest state is the default until the
/// forum proves otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: Option<u64>,
    pub username: String,
    pub authenticated: bool,
}

impl Identity {
    /// The default unauthenticated identity.
    pub fn guest() -> Self {
        Self {
            user_id: None,
            username: String::new(),
            authenticated: false,
        }
    }

    /// An identity confirmed by the forum.
    ///
    /// A zero user id is the forum's "no user" sentinel and stays a guest.
    pub fn member(user_id: u64, username: impl Into<String>) -> Self {
        if user_id == 0 {
            return Self::guest();
        }

        Self {
            user_id: Some(user_id),
            username: username.into(),
            authenticated: true,
        }
    }
}

impl Default for Identity {
    fn default() -> Self {
        Self::guest()
    }
}
