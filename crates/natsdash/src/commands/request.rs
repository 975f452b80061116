//! Raw request command handler.
//!
//! Prints the normalized `ApiResult` for any endpoint, then exits with
//! the request-failed code if the result was a failure.

use natsdash_api::{ApiClient, ApiResult, Method, RequestOptions};

use crate::cli::{GlobalOpts, HttpMethod, OutputFormat, RequestArgs};
use crate::error::CliError;
use crate::output;

use super::util;

impl From<HttpMethod> for Method {
    fn from(m: HttpMethod) -> Self {
        match m {
            HttpMethod::Get => Self::Get,
            HttpMethod::Post => Self::Post,
            HttpMethod::Put => Self::Put,
            HttpMethod::Delete => Self::Delete,
        }
    }
}

pub async fn handle(
    client: &ApiClient,
    args: RequestArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let mut options = RequestOptions::new(args.method.into());
    if let Some(body) = util::json_input("body", args.body.as_deref(), args.from_file.as_deref())? {
        options = options.with_body(body);
    }

    let result = client.request(&args.endpoint, options).await;

    // Table has no natural shape for arbitrary JSON; show the envelope
    let format = match global.output_format() {
        OutputFormat::Table => OutputFormat::Json,
        other => other,
    };
    let out = output::render_single(format, &result, |_| String::new(), plain)?;
    output::print_output(&out, global.quiet);

    if let Some(message) = result.error() {
        return Err(CliError::RequestFailed {
            endpoint: args.endpoint,
            message: message.to_owned(),
        });
    }
    Ok(())
}

/// Plain output: the payload on success, the message on failure.
fn plain(result: &ApiResult) -> String {
    match (result.data(), result.error()) {
        (Some(data), _) => data.to_string(),
        (None, Some(error)) => error.to_owned(),
        (None, None) => String::new(),
    }
}
