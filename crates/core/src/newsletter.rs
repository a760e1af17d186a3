//! Newsletter signup form state.
//!
//! Nothing is sent anywhere: a non-empty address flips the form into its
//! "subscribed" state and the UI resets it after [`RESET_DELAY_MS`].

use crate::error::Error;
use crate::result::Result;

/// How long the success message stays up before the form resets.
pub const RESET_DELAY_MS: u32 = 3000;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubscriptionForm {
    email: String,
    subscribed: bool,
}

impl SubscriptionForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub const fn is_subscribed(&self) -> bool {
        self.subscribed
    }

    /// Accept the current address.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyEmail` if the address is blank.
    pub fn submit(&mut self) -> Result<()> {
        if self.email.trim().is_empty() {
            return Err(Error::EmptyEmail);
        }
        tracing::debug!("newsletter signup accepted");
        self.subscribed = true;
        Ok(())
    }

    /// Clear the address and hide the success message.
    pub fn reset(&mut self) {
        self.email.clear();
        self.subscribed = false;
    }
}
