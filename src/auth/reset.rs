use std::sync::Arc;

use time::{Duration as TimeDuration, OffsetDateTime};
use tracing::{info, instrument, warn};

use crate::auth::code::generate_reset_code;
use crate::auth::password::hash_password;
use crate::auth::repo::UserStore;
use crate::error::AuthError;
use crate::mailer::Mailer;

/// Orchestrates the two-step forgot-password / reset-password exchange.
///
/// Collaborators are injected at construction; the flow itself keeps no
/// state beyond the configured code lifetime. All pending-code state lives
/// on the user record in the store.
#[derive(Clone)]
pub struct ResetFlow {
    store: Arc<dyn UserStore>,
    mailer: Arc<dyn Mailer>,
    code_ttl: TimeDuration,
}

impl ResetFlow {
    pub fn new(store: Arc<dyn UserStore>, mailer: Arc<dyn Mailer>, code_ttl_minutes: i64) -> Self {
        Self {
            store,
            mailer,
            code_ttl: TimeDuration::minutes(code_ttl_minutes),
        }
    }

    /// Issue a new reset code and mail it to the registered address.
    ///
    /// The fresh code unconditionally replaces any pending one, so at most
    /// one code is live per user. The code is persisted before the notifier
    /// runs; a delivery failure leaves it pending and is reported as
    /// `NotificationFailed`.
    #[instrument(skip(self))]
    pub async fn forgot_password(&self, email: &str) -> Result<(), AuthError> {
        let code = generate_reset_code();
        let expires_at = OffsetDateTime::now_utc() + self.code_ttl;

        let updated = self
            .store
            .set_reset_code(email, &code, expires_at)
            .await
            .map_err(AuthError::store)?;
        if !updated {
            warn!("password reset requested for unknown email");
            return Err(AuthError::NotFound);
        }
        info!("reset code issued");

        self.mailer
            .send(
                email,
                "Your password reset code",
                &reset_code_email(&code, self.code_ttl.whole_minutes()),
            )
            .await
            .map_err(|e| {
                warn!(error = %e, "reset code email failed; code remains pending");
                AuthError::NotificationFailed
            })?;
        Ok(())
    }

    /// Trade a pending code for a new password.
    ///
    /// The store applies the password write and the code clear as one
    /// compare-and-set update, so a replayed or concurrent consumption
    /// observes the code as already gone. Unknown email, missing code,
    /// mismatch and expiry all collapse into the same error so the
    /// response shape reveals nothing about account existence.
    #[instrument(skip(self, code, new_password))]
    pub async fn reset_password(
        &self,
        email: &str,
        code: &str,
        new_password: &str,
    ) -> Result<(), AuthError> {
        let new_hash = hash_password(new_password).map_err(AuthError::internal)?;
        let consumed = self
            .store
            .consume_reset_code(email, code, &new_hash, OffsetDateTime::now_utc())
            .await
            .map_err(AuthError::store)?;
        if !consumed {
            return Err(AuthError::InvalidOrExpiredCode);
        }
        info!("password reset committed");
        Ok(())
    }
}

fn reset_code_email(code: &str, ttl_minutes: i64) -> String {
    format!(
        "Hello,\n\n\
        A password reset was requested for your account.\n\n\
        Your one-time reset code:\n\n\
        {code}\n\n\
        The code expires in {ttl_minutes} minutes and can be used once.\n\n\
        If you did not request this reset, you can ignore this email."
    )
}
