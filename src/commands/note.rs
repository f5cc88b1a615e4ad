//! Vault deep-link command

use anyhow::Result;

use otto::config::Config;
use otto::error::OttoError;
use otto::output::{print_event, Icons};
use otto::vault::{VaultLink, WriteMode};

#[allow(clippy::too_many_arguments)]
pub fn cmd_note(
    file: Option<String>,
    vault: Option<String>,
    daily: bool,
    heading: Option<String>,
    append: Option<String>,
    prepend: Option<String>,
    json: bool,
) -> Result<()> {
    let cwd = std::env::current_dir().ok();
    let config = Config::load_or_default(cwd.as_deref());

    let vault_name = vault
        .or(config.vault.name)
        .ok_or(OttoError::NoVault)?;

    let mut link = VaultLink::new(vault_name);
    if daily {
        link = link.with_daily();
    } else if let Some(file) = file {
        link = link.with_file(file);
    }
    if let Some(heading) = heading {
        link = link.with_heading(heading);
    }
    if let Some(text) = append {
        link = link.with_payload(WriteMode::Append, text);
    } else if let Some(text) = prepend {
        link = link.with_payload(WriteMode::Prepend, text);
    }

    let uri = link.to_uri()?;

    if json {
        print_event(&serde_json::json!({
            "event": "note",
            "uri": uri,
        }));
    } else {
        let icons = Icons::for_stdout();
        println!("{} {}", icons.link, uri);
    }

    Ok(())
}
