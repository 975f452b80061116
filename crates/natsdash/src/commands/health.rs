//! Backend health command handler.

use natsdash_api::{ApiClient, HEALTH_ENDPOINT, HealthStatus};
use natsdash_core::{DateStyle, FormatOptions, format_date};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

use super::util;

pub async fn handle(
    client: &ApiClient,
    global: &GlobalOpts,
    locale: &str,
) -> Result<(), CliError> {
    let health: HealthStatus = util::decode_payload(HEALTH_ENDPOINT, client.health().await)?;

    // Validate the locale even when the backend omits a timestamp
    let options = FormatOptions::for_locale(locale).with_style(DateStyle::DateTime);
    let checked_at = match health.timestamp {
        Some(ts) => format_date(&ts, &options)?,
        None => util::now_label(locale)?,
    };

    let color = output::should_color(global.color_mode());
    let out = output::render_single(
        global.output_format(),
        &health,
        |h| {
            output::detail_view(
                &[
                    ("Status", output::status(&h.status, h.is_healthy(), color)),
                    ("Database", h.database.as_deref().unwrap_or("-").to_owned()),
                    ("NATS", h.nats.as_deref().unwrap_or("-").to_owned()),
                    ("Checked", checked_at.clone()),
                ],
                color,
            )
        },
        |h| h.status.clone(),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}
