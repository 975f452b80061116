//! NATS statistics command handler.

use natsdash_api::{ApiClient, NATS_STATS_ENDPOINT, NatsStats};
use serde::Serialize;

use crate::cli::{GlobalOpts, StatsArgs};
use crate::error::CliError;
use crate::output;

use super::util;

/// Stats plus when they were fetched, as rendered by every format.
#[derive(Serialize)]
struct StatsView {
    #[serde(flatten)]
    stats: NatsStats,
    fetched_at: String,
}

pub async fn handle(
    client: &ApiClient,
    args: StatsArgs,
    global: &GlobalOpts,
    locale: &str,
) -> Result<(), CliError> {
    let result = client.nats_stats().await;

    if args.raw {
        let data = util::require_success(NATS_STATS_ENDPOINT, result)?;
        let out = output::render_json(&data, false)?;
        output::print_output(&out, global.quiet);
        return Ok(());
    }

    let stats: NatsStats = util::decode_payload(NATS_STATS_ENDPOINT, result)?;
    let view = StatsView {
        stats,
        fetched_at: util::now_label(locale)?,
    };

    let color = output::should_color(global.color_mode());
    let out = output::render_single(
        global.output_format(),
        &view,
        |v| detail(v, color),
        |v| {
            let s = &v.stats;
            format!(
                "{}\t{}\t{}\t{}\t{}\t{}\t{}",
                s.connections,
                s.subscriptions,
                s.messages.inbound,
                s.messages.outbound,
                s.bytes.inbound,
                s.bytes.outbound,
                s.uptime
            )
        },
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}

fn detail(view: &StatsView, color: bool) -> String {
    let s = &view.stats;
    output::detail_view(
        &[
            ("Connections", s.connections.to_string()),
            ("Subscriptions", s.subscriptions.to_string()),
            (
                "Messages",
                format!("{} in / {} out", s.messages.inbound, s.messages.outbound),
            ),
            (
                "Bytes",
                format!(
                    "{} in / {} out",
                    output::fmt_bytes(s.bytes.inbound),
                    output::fmt_bytes(s.bytes.outbound)
                ),
            ),
            ("Uptime", s.uptime.clone()),
            ("Fetched", view.fetched_at.clone()),
        ],
        color,
    )
}
