//! Config subcommand handlers.

use dialoguer::Input;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config::{self, Config, Profile};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Profile listing rows ────────────────────────────────────────────

#[derive(Serialize)]
struct ProfileEntry {
    name: String,
    server: String,
    default: bool,
}

#[derive(Tabled)]
struct ProfileRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Server")]
    server: String,
    #[tabled(rename = "Default")]
    default: &'static str,
}

fn profile_entries(cfg: &Config) -> Vec<ProfileEntry> {
    let default = cfg.default_profile.as_deref().unwrap_or("default");
    let mut entries: Vec<_> = cfg
        .profiles
        .iter()
        .map(|(name, p)| ProfileEntry {
            name: name.clone(),
            server: p.server.clone(),
            default: name == default,
        })
        .collect();
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    entries
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Init { name } => init(&name, global),

        ConfigCommand::Show => {
            let cfg = config::load_config()?;
            let out = output::render_single(global.output_format(), &cfg, to_toml, to_toml)?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ConfigCommand::Path => {
            output::print_output(&config::config_path().display().to_string(), global.quiet);
            Ok(())
        }

        ConfigCommand::Profiles => {
            let cfg = config::load_config()?;
            if cfg.profiles.is_empty() {
                eprintln!("No profiles configured. Run: natsdash config init --server <URL>");
                return Ok(());
            }
            let entries = profile_entries(&cfg);
            let out = output::render_list(
                global.output_format(),
                &entries,
                |e| ProfileRow {
                    name: e.name.clone(),
                    server: e.server.clone(),
                    default: if e.default { "*" } else { "" },
                },
                |e| e.name.clone(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ConfigCommand::Use { name } => {
            let mut cfg = config::load_config()?;

            if !cfg.profiles.contains_key(&name) {
                return Err(CliError::ProfileNotFound {
                    available: config::available_profiles(&cfg),
                    name,
                });
            }

            cfg.default_profile = Some(name.clone());
            config::save_config(&cfg)?;
            if !global.quiet {
                eprintln!("✓ Default profile set to '{name}'");
            }
            Ok(())
        }
    }
}

/// Create or replace a profile from `--server` (or a prompt) plus the
/// other global flags.
fn init(name: &str, global: &GlobalOpts) -> Result<(), CliError> {
    let mut cfg = config::load_config()?;
    let path = config::config_path();

    let server = match (&global.server, global.yes) {
        (Some(server), _) => server.clone(),
        (None, true) => {
            return Err(CliError::Validation {
                field: "server".into(),
                reason: "--server is required with --yes".into(),
            });
        }
        (None, false) => Input::new()
            .with_prompt("Backend URL")
            .default("http://127.0.0.1:8080".to_owned())
            .interact_text()
            .map_err(util::prompt_err)?,
    };
    natsdash_config::parse_server_url(&server)?;

    if cfg.profiles.contains_key(name)
        && !util::confirm(&format!("Profile '{name}' exists. Overwrite?"), global.yes)?
    {
        eprintln!("Aborted; {} left unchanged", path.display());
        return Ok(());
    }

    let profile = Profile {
        server,
        insecure: global.insecure.then_some(true),
        timeout: global.timeout,
        locale: global.locale.clone(),
        ..Profile::default()
    };
    cfg.profiles.insert(name.to_owned(), profile);
    if cfg.profiles.len() == 1 || global.profile.as_deref() == Some(name) {
        cfg.default_profile = Some(name.to_owned());
    }

    config::save_config(&cfg)?;
    if !global.quiet {
        eprintln!("✓ Profile '{name}' written to {}", path.display());
        eprintln!("  Test it: natsdash --profile {name} health");
    }
    Ok(())
}

fn to_toml(cfg: &Config) -> String {
    toml::to_string_pretty(cfg).unwrap_or_else(|e| format!("# failed to render config: {e}"))
}
