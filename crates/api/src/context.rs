use chainsight_core::UserId;

/// Identity of the caller for a request.
///
/// Authentication happens upstream; by the time a request reaches a handler
/// this is present and immutable.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct UserContext {
    user_id: UserId,
}

impl UserContext {
    pub fn new(user_id: UserId) -> Self {
        Self { user_id }
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }
}
