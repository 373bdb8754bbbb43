//! Command execution context
//!
//! Provides a unified context for command execution, eliminating boilerplate
//! for config loading, session restoration, and client initialization.

use std::sync::Arc;

use log::debug;

use crate::cli::args::GlobalOptions;
use crate::cli::{OutputFormat, PaginationArgs};
use crate::client::{AuthClient, PaginationParams, TransitClient};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::session::{Portal, RouteGuard, SessionStore};
use crate::storage::FileStorage;

/// Context for command execution containing config, session, and client.
///
/// Building a context restores any stored credential for the selected
/// portal, so the session is never in its loading phase afterwards.
pub struct CommandContext {
    /// Loaded configuration
    pub config: Config,
    /// Portal this invocation acts on
    pub portal: Portal,
    /// Resolved API base URL
    pub api_host: String,
    /// Session for `portal`
    pub session: Arc<SessionStore>,
    /// Authorized API client (Arc-wrapped for parallel request support)
    pub client: Arc<TransitClient>,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context with full initialization.
    ///
    /// # Errors
    /// Returns error if the config cannot be loaded or a client cannot be built.
    /// A missing or unreadable stored credential is not an error.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::load_at(opts.config_ref())?;
        let portal = opts.portal.unwrap_or_else(|| config.portal());
        let api_host = opts
            .api_host_ref()
            .unwrap_or_else(|| config.api_host())
            .to_string();

        let storage = Arc::new(FileStorage::new(config.state_dir()?));
        let auth = Arc::new(AuthClient::new(&api_host)?);
        let session = Arc::new(SessionStore::new(portal, storage, auth));
        session.initialize();

        let client = Arc::new(TransitClient::new(&api_host, session.clone())?);
        let format = resolve_format(opts.format, &config);

        debug!("Using {} portal at {}", portal, api_host);

        Ok(Self {
            config,
            portal,
            api_host,
            session,
            client,
            format,
        })
    }

    /// Gate a protected command: the right portal and a live session.
    pub fn authorize(&self, expected: Portal) -> Result<()> {
        if self.portal != expected {
            return Err(Error::WrongPortal {
                expected,
                actual: self.portal,
            });
        }
        RouteGuard.require(&self.session.snapshot())?;
        Ok(())
    }

    /// Pagination params with the configured page size as default
    pub fn pagination(&self, args: &PaginationArgs) -> PaginationParams {
        args.to_params(self.config.preferences.page_size)
    }
}

/// CLI flag, then config preference, then table.
pub fn resolve_format(flag: Option<OutputFormat>, config: &Config) -> OutputFormat {
    flag.or_else(|| {
        config
            .preferences
            .format
            .as_deref()
            .and_then(OutputFormat::from_preference)
    })
    .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn opts_for(dir: &std::path::Path, portal: Option<Portal>) -> GlobalOptions {
        let config_path = dir.join("config.yaml");
        std::fs::write(
            &config_path,
            format!("state_dir: {}\n", dir.join("state").display()),
        )
        .unwrap();

        GlobalOptions {
            portal,
            config: Some(config_path.display().to_string()),
            ..GlobalOptions::default()
        }
    }

    #[test]
    fn test_resolve_format_precedence() {
        let mut config = Config::default();
        assert_eq!(resolve_format(None, &config), OutputFormat::Table);

        config.preferences.format = Some("json".to_string());
        assert_eq!(resolve_format(None, &config), OutputFormat::Json);
        assert_eq!(
            resolve_format(Some(OutputFormat::Pretty), &config),
            OutputFormat::Pretty
        );

        config.preferences.format = Some("yaml".to_string());
        assert_eq!(resolve_format(None, &config), OutputFormat::Table);
    }

    #[test]
    fn test_context_restores_stored_session() {
        let temp = tempdir().unwrap();
        let opts = opts_for(temp.path(), None);
        std::fs::create_dir_all(temp.path().join("state")).unwrap();
        std::fs::write(temp.path().join("state").join("adminToken"), "tok-1").unwrap();

        let ctx = CommandContext::new(&opts).unwrap();

        assert!(!ctx.session.is_loading());
        assert!(ctx.session.is_authenticated());
        assert!(ctx.authorize(Portal::Admin).is_ok());
    }

    #[test]
    fn test_authorize_without_session() {
        let temp = tempdir().unwrap();
        let ctx = CommandContext::new(&opts_for(temp.path(), None)).unwrap();

        assert!(matches!(
            ctx.authorize(Portal::Admin),
            Err(Error::NotLoggedIn)
        ));
    }

    #[test]
    fn test_authorize_rejects_other_portal() {
        let temp = tempdir().unwrap();
        let ctx = CommandContext::new(&opts_for(temp.path(), Some(Portal::Owner))).unwrap();

        assert!(matches!(
            ctx.authorize(Portal::Admin),
            Err(Error::WrongPortal {
                expected: Portal::Admin,
                actual: Portal::Owner
            })
        ));
    }
}
