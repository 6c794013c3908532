use async_trait::async_trait;

use super::domain::StaffRecord;
use super::errors::AuthError;

/// Read-only access to the staff roster.
#[async_trait]
pub trait StaffRepository: Send + Sync {
    /// `email` is already trimmed and lower-cased.
    async fn find_by_email(&self, email: &str) -> Result<Option<StaffRecord>, AuthError>;
}

/// Simple in-memory roster for tests and doc examples
pub mod mock {
    use super::*;

    #[derive(Default)]
    pub struct InMemoryStaffRepository {
        accounts: Vec<StaffRecord>,
    }

    impl InMemoryStaffRepository {
        pub fn new(accounts: Vec<StaffRecord>) -> Self { Self { accounts } }

        /// The two fixed accounts the store is seeded with.
        pub fn default_roster() -> Self {
            Self::new(vec![
                StaffRecord { id: 1, email: "staff@gmail.com".into(), password: "staff123".into(), role: "staff".into() },
                StaffRecord { id: 2, email: "admin@gmail.com".into(), password: "admin123".into(), role: "admin".into() },
            ])
        }
    }

    #[async_trait]
    impl StaffRepository for InMemoryStaffRepository {
        async fn find_by_email(&self, email: &str) -> Result<Option<StaffRecord>, AuthError> {
            Ok(self
                .accounts
                .iter()
                .find(|a| a.email.eq_ignore_ascii_case(email))
                .cloned())
        }
    }
}
