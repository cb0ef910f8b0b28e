use url::Url;

use crate::domain::{GatewayTier, MessageOptions, ResponseFormat, ScheduledAt};

/// Serialize credentials, accumulated options, and the message body into the
/// form parameters of a send request.
///
/// Optional parameters are omitted entirely when unset, never sent empty.
pub fn encode_send_form(
    username: &str,
    password: &str,
    options: &MessageOptions,
    body: &str,
) -> Vec<(String, String)> {
    let mut params = Vec::<(String, String)>::new();

    params.push(("username".to_owned(), username.to_owned()));
    params.push(("password".to_owned(), password.to_owned()));
    params.push(("destination".to_owned(), options.destinations.join(",")));
    params.push((
        ResponseFormat::FIELD.to_owned(),
        options.response_format.as_str().to_owned(),
    ));
    params.push(("sender".to_owned(), options.sender.clone()));
    params.push(("body".to_owned(), body.to_owned()));

    if let Some(reference) = options.reference.as_ref() {
        params.push(("reference".to_owned(), reference.clone()));
    }
    if let Some(scheduled_at) = options.scheduled_at.as_ref() {
        params.push((ScheduledAt::FIELD.to_owned(), scheduled_at.as_str().to_owned()));
    }
    if options.test_mode {
        params.push(("test".to_owned(), "1".to_owned()));
    }
    // Replacement is the gateway default; the parameter only exists to turn
    // it off.
    if !options.replace_non_gsm_chars {
        params.push(("replacechars".to_owned(), "0".to_owned()));
    }
    if let Some(tier) = options.gateway_tier {
        params.push((GatewayTier::FIELD.to_owned(), tier.code().to_string()));
    }
    if let Some(route_id) = options.gateway_route_id {
        params.push(("gatewayId".to_owned(), route_id.to_string()));
    }
    if let Some(dlr_url) = delivery_report_url(options) {
        params.push(("dlrUrl".to_owned(), dlr_url));
    }

    params
}

/// The delivery report URL is forwarded only when it parses as an `http` or
/// `https` URL; anything else is dropped from the request.
fn delivery_report_url(options: &MessageOptions) -> Option<String> {
    let raw = options.delivery_report_url.as_ref()?;
    let url = Url::parse(raw).ok()?;
    matches!(url.scheme(), "http" | "https").then(|| raw.clone())
}
