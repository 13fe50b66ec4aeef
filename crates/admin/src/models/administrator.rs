//! Administrator domain model.

use serde::Serialize;

use keyholder_core::{AdministratorId, Email};

/// An administrator account.
///
/// Values handed out by repositories are detached copies; the store owns the
/// durable record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Administrator {
    /// Store-generated identifier, immutable once assigned.
    pub id: AdministratorId,
    /// Invitation address, unique across administrators.
    pub email: Email,
}

impl Administrator {
    /// Create an administrator value from its parts.
    #[must_use]
    pub const fn new(id: AdministratorId, email: Email) -> Self {
        Self { id, email }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_id_and_email() {
        let id: AdministratorId = "67e55044-10b1-426f-9247-bb680e5fe0c8".parse().unwrap();
        let admin = Administrator::new(id, Email::parse("a@b.com").unwrap());

        let json = serde_json::to_value(&admin).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "67e55044-10b1-426f-9247-bb680e5fe0c8",
                "email": "a@b.com",
            })
        );
    }
}
