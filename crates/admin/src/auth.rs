//! Admin session seam.
//!
//! Authentication lives in the hosted auth service; the admin panel only
//! needs a session signal plus sign-in/sign-out actions. Everything behind
//! the gate asks `is_active` before touching a backend.

use secrecy::SecretString;

use crate::error::AdminError;

/// Handle to the hosted auth session.
pub trait AdminSession {
    /// Whether an admin session is currently active.
    fn is_active(&self) -> bool;

    /// Authenticate against the backend.
    ///
    /// # Errors
    ///
    /// Returns `AdminError::InvalidCredentials` when the backend rejects
    /// the email/password pair.
    fn sign_in(&mut self, email: &str, password: &SecretString) -> Result<(), AdminError>;

    /// End the current session.
    fn sign_out(&mut self);
}
