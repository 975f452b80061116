//! CLI-side configuration: profile selection and flag overrides on top
//! of `natsdash_config`.

use clap::ValueEnum;
use natsdash_api::TlsMode;
pub use natsdash_config::{
    Config, Profile, ServerConfig, config_path, load_config, profile_to_server_config,
    save_config,
};

use crate::cli::GlobalOpts;
use crate::error::CliError;

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

/// Comma-separated profile names for error help text.
pub fn available_profiles(config: &Config) -> String {
    let mut names: Vec<_> = config.profiles.keys().cloned().collect();
    if names.is_empty() {
        return "(none)".into();
    }
    names.sort();
    names.join(", ")
}

/// Build the `ServerConfig` for this invocation.
///
/// Precedence: flag / env var > profile > `[defaults]`. With no matching
/// profile, `--server` alone is enough.
pub fn resolve_server(global: &GlobalOpts) -> Result<ServerConfig, CliError> {
    let cfg = load_config()?;
    let profile_name = active_profile_name(global, &cfg);

    let base = match cfg.profiles.get(&profile_name) {
        Some(profile) => profile.clone(),
        None if global.server.is_some() => Profile::default(),
        // An explicitly requested profile that doesn't exist is an error
        None if global.profile.is_some() => {
            return Err(CliError::ProfileNotFound {
                name: profile_name,
                available: available_profiles(&cfg),
            });
        }
        None => {
            return Err(CliError::NoConfig {
                path: config_path().display().to_string(),
            });
        }
    };

    let profile = apply_overrides(base, global);
    let mut server = profile_to_server_config(&profile, &cfg.defaults)?;

    if global.insecure {
        server.transport.tls = TlsMode::DangerAcceptInvalid;
    }
    tracing::debug!(
        profile = %profile_name,
        url = %server.url,
        timeout = ?server.transport.timeout,
        "resolved server"
    );
    Ok(server)
}

fn apply_overrides(mut profile: Profile, global: &GlobalOpts) -> Profile {
    if let Some(ref server) = global.server {
        profile.server.clone_from(server);
    }
    if let Some(secs) = global.timeout {
        profile.timeout = Some(secs);
    }
    if let Some(ref locale) = global.locale {
        profile.locale = Some(locale.clone());
    }
    profile
}

/// Fill `--output` / `--color` from `[defaults]` when neither the flag
/// nor its env var was given.
pub fn apply_output_defaults(global: &mut GlobalOpts) -> Result<(), CliError> {
    // A broken file is reported by the commands that read profiles
    let Ok(cfg) = load_config() else {
        return Ok(());
    };
    if global.output.is_none() {
        global.output = Some(parse_setting("defaults.output", &cfg.defaults.output)?);
    }
    if global.color.is_none() {
        global.color = Some(parse_setting("defaults.color", &cfg.defaults.color)?);
    }
    Ok(())
}

fn parse_setting<T: ValueEnum>(field: &str, raw: &str) -> Result<T, CliError> {
    T::from_str(raw, true).map_err(|reason| CliError::Validation {
        field: field.into(),
        reason,
    })
}
