use bgg_client::{ClientSettings, settings_path};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use super::{OutputFormat, print_json};
use crate::error::CliError;

/// Print the settings file path.
pub(crate) fn run_config_path() -> Result<(), CliError> {
    println!("{}", settings_path().display());
    Ok(())
}

/// Show the effective settings and where the file lives.
///
/// Unlike a normal client start, an unreadable settings file is reported
/// here instead of silently falling back to defaults.
pub(crate) fn run_config_show(format: OutputFormat) -> Result<(), CliError> {
    let path = settings_path();
    let mut settings =
        ClientSettings::load_file(&path).map_err(|e| CliError::config(e.to_string()))?;
    settings.apply_env(|key| std::env::var(key).ok());

    if format == OutputFormat::Json {
        return print_json(&settings);
    }

    println!(
        "{}",
        "Client Configuration".if_supports_color(Stdout, |t| t.bold())
    );
    println!();

    let status = if path.exists() {
        "(exists)".if_supports_color(Stdout, |t| t.green()).to_string()
    } else {
        "(not found, using defaults)"
            .if_supports_color(Stdout, |t| t.dimmed())
            .to_string()
    };
    println!(
        "  Settings file: {} {}",
        path.display().if_supports_color(Stdout, |t| t.cyan()),
        status
    );
    println!();

    let fields = [
        ("base_url", settings.base_url.clone()),
        ("timeout_secs", settings.timeout_secs.to_string()),
        ("user_agent", settings.user_agent.clone()),
        ("detail_ttl_secs", settings.detail_ttl_secs.to_string()),
    ];
    for (name, value) in fields {
        println!(
            "  {:<16} {}",
            format!("{name}:").if_supports_color(Stdout, |t| t.bold()),
            value
        );
    }
    Ok(())
}
