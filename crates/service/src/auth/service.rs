use std::sync::Arc;

use chrono::Utc;
use tracing::{info, instrument, warn};

use super::domain::{AuthSession, LoginInput, StaffUser};
use super::errors::AuthError;
use super::repository::StaffRepository;

/// Auth business service independent of web framework
pub struct AuthService<R: StaffRepository> {
    repo: Arc<R>,
}

impl<R: StaffRepository> AuthService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Check credentials against the roster and issue an opaque session token.
    ///
    /// Email comparison is case-insensitive; the password must match byte for byte.
    ///
    /// # Examples
    /// ```
    /// use service::auth::{service::AuthService, repository::mock::InMemoryStaffRepository};
    /// use service::auth::domain::LoginInput;
    /// use std::sync::Arc;
    /// let svc = AuthService::new(Arc::new(InMemoryStaffRepository::default_roster()));
    /// let input = LoginInput { email: " Staff@Gmail.com ".into(), password: "staff123".into() };
    /// let session = tokio_test::block_on(svc.login(input)).unwrap();
    /// assert_eq!(session.user.role, "staff");
    /// ```
    #[instrument(skip(self, input), fields(email = %input.email.trim()))]
    pub async fn login(&self, input: LoginInput) -> Result<AuthSession, AuthError> {
        let email = input.email.trim().to_lowercase();
        if email.is_empty() {
            return Err(AuthError::Validation("Email is required.".into()));
        }
        if input.password.trim().is_empty() {
            return Err(AuthError::Validation("Password is required.".into()));
        }

        let account = self.repo.find_by_email(&email).await?;
        let account = match account {
            Some(a) if a.password.as_bytes() == input.password.as_bytes() => a,
            _ => {
                warn!("staff_login_rejected");
                return Err(AuthError::Unauthorized);
            }
        };

        let user = StaffUser::from(account);
        let token = issue_token(user.id);
        info!(user_id = user.id, role = %user.role, "staff_logged_in");
        Ok(AuthSession { token, user })
    }
}

/// Opaque token: account id plus wall-clock millis. Not signed and never checked server-side.
fn issue_token(user_id: i32) -> String {
    format!("staff-{}-{}", user_id, Utc::now().timestamp_millis())
}
