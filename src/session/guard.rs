//! Route guard for protected commands

use super::{Credential, SessionSnapshot};
use crate::error::{Error, Result};

/// What a protected view should do for a given session snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session not initialized yet; show a placeholder
    Loading,
    /// Credential present; render the protected view
    Render,
    /// No credential; go to the login view
    RedirectToLogin,
}

/// Gate between the session and protected commands.
///
/// Only `loading` and credential presence matter. A credential without a
/// known principal still renders.
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteGuard;

impl RouteGuard {
    pub fn evaluate(&self, snapshot: &SessionSnapshot) -> GuardDecision {
        if snapshot.loading {
            GuardDecision::Loading
        } else if snapshot.credential.is_some() {
            GuardDecision::Render
        } else {
            GuardDecision::RedirectToLogin
        }
    }

    /// Credential to use for a protected request, or [`Error::NotLoggedIn`].
    ///
    /// Commands never run before initialization, so `Loading` is treated the
    /// same as a missing session.
    pub fn require(&self, snapshot: &SessionSnapshot) -> Result<Credential> {
        match (self.evaluate(snapshot), &snapshot.credential) {
            (GuardDecision::Render, Some(credential)) => Ok(credential.clone()),
            _ => Err(Error::NotLoggedIn),
        }
    }
}
