//! Settings commands

use anyhow::Result;
use colored::Colorize;

use crate::config::Settings;
use crate::output::{print_info, print_success, OutputFormat};

/// Show the saved settings
pub fn show_settings(format: OutputFormat) -> Result<()> {
    let settings = Settings::load()?;

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&settings)?;
            println!("{}", json);
        }
        OutputFormat::Table => {
            println!("{}", "Saved Settings".bold());
            println!("{}", "=".repeat(40));
            println!("Host:    {}", settings.host.as_deref().unwrap_or("-").cyan());
            println!(
                "Port:    {}",
                settings.port.map(|p| p.to_string()).unwrap_or_else(|| "-".to_string())
            );
            println!("Scheme:  {}", settings.scheme.as_deref().unwrap_or("-"));
            println!();
            print_info(&format!("File: {}", Settings::settings_path()?.display()));
        }
    }

    Ok(())
}

/// Update the saved settings with the given values
pub fn set_settings(host: Option<String>, port: Option<u16>, scheme: Option<String>) -> Result<()> {
    let mut settings = Settings::load()?;

    if host.is_some() {
        settings.host = host;
    }
    if port.is_some() {
        settings.port = port;
    }
    if scheme.is_some() {
        settings.scheme = scheme;
    }

    let path = settings.save()?;
    print_success(&format!("Settings saved to {}", path.display()));
    Ok(())
}
