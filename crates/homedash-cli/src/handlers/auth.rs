//! Auth command handlers.

use anyhow::Result;
use homedash_core::{AuthSettings, PASSWORD_MASK};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::report_source;
use crate::utils::input::value_or_prompt;

/// Changes requested by `auth settings set`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthSettingsEdits {
    pub enabled: Option<bool>,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl AuthSettingsEdits {
    pub fn from_flags(
        enable: bool,
        disable: bool,
        username: Option<String>,
        password: Option<String>,
    ) -> Self {
        let enabled = match (enable, disable) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        };
        Self {
            enabled,
            username,
            password,
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.enabled.is_none() && self.username.is_none() && self.password.is_none()
    }

    /// Apply to the current settings.
    ///
    /// Without a new password the current one is sent back as-is; when it is
    /// the mask the server keeps the stored password.
    pub fn apply(self, mut settings: AuthSettings) -> AuthSettings {
        if let Some(enabled) = self.enabled {
            settings.is_enabled = enabled;
        }
        if let Some(username) = self.username {
            settings.username = username;
        }
        if let Some(password) = self.password {
            settings.password = password;
        }
        settings
    }
}

pub async fn login(ctx: &CliContext, username: Option<String>, password: Option<String>) -> Result<()> {
    let username = value_or_prompt(username, "Username")?;
    let password = value_or_prompt(password, "Password")?;

    let granted = ctx.client().auth().login(&username, &password).await;
    report_source(&granted);

    if !granted.value {
        return Err(CliError::Unauthorized.into());
    }
    println!("Logged in.");
    Ok(())
}

pub fn logout(ctx: &CliContext) {
    ctx.client().auth().logout();
    println!("Logged out.");
}

pub async fn status(ctx: &CliContext) -> Result<()> {
    let authenticated = ctx.client().auth().is_authenticated().await;
    report_source(&authenticated);

    if authenticated.value {
        println!("Authenticated.");
    } else {
        println!("Not authenticated. Run 'homedash auth login'.");
    }
    Ok(())
}

pub async fn show_settings(ctx: &CliContext) -> Result<()> {
    let settings = ctx.client().auth().get_auth_settings().await;
    report_source(&settings);
    print_settings(&settings.value);
    Ok(())
}

pub async fn set_settings(ctx: &CliContext, edits: AuthSettingsEdits) -> Result<()> {
    if edits.is_empty() {
        return Err(CliError::Arguments(
            "pass at least one of --enable, --disable, --username, --password".to_string(),
        )
        .into());
    }

    let service = ctx.client().auth();
    let current = service.get_auth_settings().await;
    let settings = edits.apply(current.value);

    if !settings.has_usable_credentials() {
        eprintln!("Warning: auth is enabled without a username and password.");
    }

    let saved = service.save_auth_settings(&settings).await;
    report_source(&saved);
    println!("Auth settings saved.\n");
    print_settings(&settings.masked());
    Ok(())
}

fn print_settings(settings: &AuthSettings) {
    let password = if settings.password.is_empty() {
        "(none)"
    } else {
        PASSWORD_MASK
    };
    println!("Enabled:  {}", if settings.is_enabled { "yes" } else { "no" });
    println!("Username: {}", settings.username);
    println!("Password: {password}");
}
