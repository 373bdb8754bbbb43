//! Session store
//!
//! Owns the credential/principal lifecycle for one portal. The store is the
//! only writer of the credential: it restores it from durable storage at
//! startup, replaces it on login, and drops it on logout or when a protected
//! request is rejected.
//!
//! State changes are published through a [`tokio::sync::watch`] channel so a
//! [`RouteGuard`] (or anything else holding a receiver) sees the new snapshot
//! before the mutating call returns.

use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::client::AuthApi;
use crate::client::models::{LoginResponse, Principal};
use crate::error::AuthError;
use crate::storage::CredentialStorage;

pub mod guard;

pub use guard::RouteGuard;

/// Which administrative surface a session belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Portal {
    /// System-administrator portal
    #[default]
    Admin,
    /// Bus-owner portal
    Owner,
}

impl Portal {
    /// Durable storage key holding this portal's credential
    pub fn storage_key(self) -> &'static str {
        match self {
            Portal::Admin => "adminToken",
            Portal::Owner => "token",
        }
    }

    /// Authentication endpoint path
    pub fn login_path(self) -> &'static str {
        match self {
            Portal::Admin => "/admin/auth/login",
            Portal::Owner => "/bus-owner/auth/login",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Portal::Admin => "admin",
            Portal::Owner => "owner",
        }
    }
}

impl fmt::Display for Portal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Portal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Portal::Admin),
            "owner" | "bus-owner" => Ok(Portal::Owner),
            other => Err(format!("unknown portal '{}' (expected admin or owner)", other)),
        }
    }
}

/// Opaque bearer token. Never decoded; `Debug` output is redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap a raw token, rejecting empty values
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            None
        } else {
            Some(Self(raw))
        }
    }

    /// The raw token, for the `Authorization` header and storage only
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Point-in-time view of the session, as published to subscribers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    /// True until `initialize` has run
    pub loading: bool,
    pub credential: Option<Credential>,
    pub principal: Option<Principal>,
    /// False for a credential restored from storage until a protected
    /// request succeeds with it
    pub verified: bool,
}

impl SessionSnapshot {
    fn initializing() -> Self {
        Self {
            loading: true,
            credential: None,
            principal: None,
            verified: false,
        }
    }

    fn signed_out() -> Self {
        Self {
            loading: false,
            credential: None,
            principal: None,
            verified: false,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.credential.is_some()
    }
}

/// Result of a successful login
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub principal: Option<Principal>,
}

/// Ordering state for credential mutations
#[derive(Debug, Default)]
struct Generations {
    /// Bumped by logout and invalidation
    epoch: u64,
    /// Ticket handed to the most recently started login
    last_started: u64,
    /// Ticket of the last login that committed
    last_committed: u64,
}

/// Identifies one login attempt
#[derive(Debug, Clone, Copy)]
struct LoginTicket {
    epoch: u64,
    ticket: u64,
}

/// Single source of truth for "is there an authenticated session".
pub struct SessionStore {
    portal: Portal,
    storage: Arc<dyn CredentialStorage>,
    auth: Arc<dyn AuthApi>,
    state: watch::Sender<SessionSnapshot>,
    /// A login commits only if no logout or invalidation happened since it
    /// started and no later-started login has committed.
    generations: Mutex<Generations>,
}

impl SessionStore {
    pub fn new(
        portal: Portal,
        storage: Arc<dyn CredentialStorage>,
        auth: Arc<dyn AuthApi>,
    ) -> Self {
        let (state, _) = watch::channel(SessionSnapshot::initializing());
        Self {
            portal,
            storage,
            auth,
            state,
            generations: Mutex::new(Generations::default()),
        }
    }

    pub fn portal(&self) -> Portal {
        self.portal
    }

    /// Restore a persisted credential. Runs once; later calls are no-ops.
    pub fn initialize(&self) {
        let _generations = self.lock_generations();
        if !self.state.borrow().loading {
            return;
        }

        let key = self.portal.storage_key();
        let restored = match self.storage.get(key) {
            Ok(value) => value.and_then(Credential::new),
            Err(e) => {
                warn!("Ignoring unreadable stored credential: {}", e);
                None
            }
        };

        match restored {
            Some(credential) => {
                debug!("Restored {} session from storage", self.portal);
                self.state.send_replace(SessionSnapshot {
                    loading: false,
                    credential: Some(credential),
                    principal: None,
                    verified: false,
                });
            }
            None => {
                debug!("No stored {} session", self.portal);
                self.state.send_replace(SessionSnapshot::signed_out());
            }
        }
    }

    /// Exchange an identifier/secret pair for a session.
    ///
    /// Nothing is persisted on failure. If a logout happens while this one
    /// is in flight, or a login started later has already committed, the
    /// response is discarded and [`AuthError::Superseded`] is returned.
    pub async fn login(&self, identifier: &str, secret: &str) -> Result<LoginOutcome, AuthError> {
        let ticket = {
            let mut generations = self.lock_generations();
            generations.last_started += 1;
            LoginTicket {
                epoch: generations.epoch,
                ticket: generations.last_started,
            }
        };

        debug!("Logging in to {} portal as {}", self.portal, identifier);
        let response = self.auth.login(self.portal, identifier, secret).await?;
        self.commit_login(ticket, response)
    }

    fn commit_login(
        &self,
        ticket: LoginTicket,
        response: LoginResponse,
    ) -> Result<LoginOutcome, AuthError> {
        let mut generations = self.lock_generations();
        if generations.epoch != ticket.epoch || generations.last_committed > ticket.ticket {
            debug!(
                "Discarding stale login response (login {}, last committed {})",
                ticket.ticket, generations.last_committed
            );
            return Err(AuthError::Superseded);
        }

        let credential = Credential::new(response.token)
            .ok_or_else(|| AuthError::InvalidResponse("empty token".to_string()))?;

        self.storage
            .set(self.portal.storage_key(), credential.expose())
            .map_err(|e| AuthError::Storage(e.to_string()))?;

        generations.last_committed = ticket.ticket;
        self.state.send_replace(SessionSnapshot {
            loading: false,
            credential: Some(credential.clone()),
            principal: response.principal.clone(),
            verified: true,
        });

        info!(
            "Logged in to {} portal{}",
            self.portal,
            response
                .principal
                .as_ref()
                .map(|p| format!(" as {}", p.username))
                .unwrap_or_default()
        );

        Ok(LoginOutcome {
            principal: response.principal,
        })
    }

    /// Drop the session from memory and storage. Idempotent; never fails.
    pub fn logout(&self) {
        let mut generations = self.lock_generations();
        generations.epoch += 1;
        self.clear("logout");
    }

    /// Downgrade after the server rejected `credential`.
    ///
    /// Returns true if the session was cleared. A rejection of a credential
    /// that is no longer current leaves the newer session alone.
    pub fn invalidate(&self, credential: &Credential) -> bool {
        let mut generations = self.lock_generations();
        if self.state.borrow().credential.as_ref() != Some(credential) {
            return false;
        }
        generations.epoch += 1;
        warn!("{} session rejected by server; signing out", self.portal);
        self.clear("invalidation");
        true
    }

    /// Mark a restored credential as accepted by the server
    pub fn confirm(&self, credential: &Credential) {
        self.state.send_if_modified(|snapshot| {
            if snapshot.credential.as_ref() == Some(credential) && !snapshot.verified {
                snapshot.verified = true;
                true
            } else {
                false
            }
        });
    }

    pub fn current_credential(&self) -> Option<Credential> {
        self.state.borrow().credential.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().loading
    }

    pub fn principal(&self) -> Option<Principal> {
        self.state.borrow().principal.clone()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.state.borrow().clone()
    }

    /// Receiver that observes every published snapshot
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.state.subscribe()
    }

    fn clear(&self, reason: &str) {
        if let Err(e) = self.storage.remove(self.portal.storage_key()) {
            warn!("Failed to remove stored credential on {}: {}", reason, e);
        }

        let was_authenticated = self.state.borrow().is_authenticated();
        self.state.send_replace(SessionSnapshot::signed_out());
        if was_authenticated {
            info!("Signed out of {} portal ({})", self.portal, reason);
        }
    }

    fn lock_generations(&self) -> MutexGuard<'_, Generations> {
        self.generations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
