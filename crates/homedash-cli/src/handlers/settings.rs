//! Dashboard settings command handlers.

use anyhow::Result;
use homedash_core::{DashboardSettings, DashboardSettingsUpdate};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::report_source;

pub async fn show(ctx: &CliContext) -> Result<()> {
    let settings = ctx.client().dashboard().get_settings().await;
    report_source(&settings);
    print_settings(&settings.value);
    Ok(())
}

pub async fn set(ctx: &CliContext, update: DashboardSettingsUpdate) -> Result<()> {
    if update.is_empty() {
        return Err(CliError::Arguments(
            "pass at least one of --title, --subtitle, --primary-color, --background-color"
                .to_string(),
        )
        .into());
    }

    let settings = ctx.client().dashboard().update_settings(update).await;
    report_source(&settings);
    println!("Settings saved.\n");
    print_settings(&settings.value);
    Ok(())
}

fn print_settings(settings: &DashboardSettings) {
    println!("Title:            {}", settings.title);
    println!("Subtitle:         {}", settings.subtitle);
    println!("Primary color:    {}", settings.primary_color);
    println!("Background color: {}", settings.background_color);
}
