//! Event publishing command handler.

use natsdash_api::{ApiClient, EVENTS_ENDPOINT, PublishAck};
use serde_json::{Value, json};

use crate::cli::{GlobalOpts, PublishArgs};
use crate::error::CliError;
use crate::output;

use super::util;

pub async fn handle(
    client: &ApiClient,
    args: PublishArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let data: Value = util::json_input("data", args.data.as_deref(), args.from_file.as_deref())?
        .unwrap_or_else(|| json!({}));

    tracing::info!(event_type = %args.event_type, "publishing event");
    let ack: PublishAck = util::decode_payload(
        EVENTS_ENDPOINT,
        client.publish_event(&args.event_type, &data).await,
    )?;

    let color = output::should_color(global.color_mode());
    let out = output::render_single(
        global.output_format(),
        &ack,
        |a| {
            let message = a.message.as_deref().unwrap_or("Event published");
            format!(
                "{} {message} ({})",
                output::status("✓", a.success, color),
                args.event_type
            )
        },
        |a| a.success.to_string(),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}
