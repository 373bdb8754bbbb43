//! Login and logout commands

use std::time::Duration;

use colored::Colorize;
use indicatif::ProgressBar;
use log::{debug, warn};

use crate::cli::CommandContext;
use crate::cli::args::{GlobalOptions, PasswordArgs};
use crate::cli::prompt;
use crate::config::Config;
use crate::error::Result;
use crate::session::Portal;
use crate::storage::{CredentialStorage, FileStorage};

/// Run the login command
///
/// Missing username or password are prompted for. On failure the server's
/// message (or "Login failed") is reported and nothing is stored.
pub async fn login(
    opts: &GlobalOptions,
    username: Option<String>,
    password: &PasswordArgs,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    if ctx.session.is_authenticated() {
        debug!("Replacing existing {} session", ctx.portal);
    }

    let username = prompt::text_or_prompt(username, "Username")?;
    let secret = prompt::password(password, "Password")?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_message(format!("Signing in to the {} portal...", ctx.portal));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = ctx.session.login(&username, &secret).await;
    spinner.finish_and_clear();

    let outcome = result?;
    let who = outcome
        .principal
        .as_ref()
        .map(|p| p.username.as_str())
        .unwrap_or(username.as_str());

    println!(
        "{} Signed in to the {} portal as {}",
        "✓".green(),
        ctx.portal,
        who.bold()
    );
    Ok(())
}

/// Run the logout command. Succeeds whether or not a session existed.
///
/// Only the portal and state directory are resolved, so a broken config
/// file or an unreachable API host cannot keep a stored credential around.
pub fn logout(opts: &GlobalOptions) -> Result<()> {
    let config = Config::load_at(opts.config_ref()).unwrap_or_else(|e| {
        warn!("Ignoring unreadable config for logout: {}", e);
        Config::default()
    });
    let portal = opts.portal.unwrap_or_else(|| config.portal());

    let had_session = match config.state_dir() {
        Ok(dir) => forget_credential(&FileStorage::new(dir), portal),
        Err(e) => {
            warn!("No state directory to clear: {}", e);
            false
        }
    };

    if had_session {
        println!("{} Signed out of the {} portal", "✓".green(), portal);
    } else {
        println!("{} No active {} session", "○".dimmed(), portal);
    }
    Ok(())
}

/// Remove the stored credential for `portal`; true if one was present.
fn forget_credential(storage: &dyn CredentialStorage, portal: Portal) -> bool {
    let key = portal.storage_key();
    let existed = storage.get(key).map(|v| v.is_some()).unwrap_or_else(|e| {
        warn!("{}", e);
        true
    });
    if let Err(e) = storage.remove(key) {
        warn!("{}", e);
    }
    debug!("Cleared stored {} credential", portal);
    existed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn test_forget_credential_removes_only_portal_key() {
        let storage = MemoryStorage::with_entry("adminToken", "abc");
        storage.set("token", "owner").unwrap();

        assert!(forget_credential(&storage, Portal::Admin));

        assert_eq!(storage.get("adminToken").unwrap(), None);
        assert_eq!(storage.get("token").unwrap(), Some("owner".to_string()));
        assert!(!forget_credential(&storage, Portal::Admin));
    }
}
