use crate::domain::value::{GatewayTier, ResponseFormat, ScheduledAt};

#[derive(Debug, Clone)]
/// Message configuration accumulated on the client and serialized into every
/// send request.
///
/// None of these fields are validated client-side; the gateway is the
/// authority on sender and destination formats and reports problems in its
/// response.
pub struct MessageOptions {
    /// Sender id shown to the recipient: up to 16 digits or up to 11
    /// characters, passed through as-is.
    pub sender: String,
    /// Recipient MSISDNs in insertion order. Never deduplicated.
    pub destinations: Vec<String>,
    /// Opaque value the gateway echoes in delivery reports so they can be
    /// correlated with this message.
    pub reference: Option<String>,
    /// Format the gateway should answer with.
    pub response_format: ResponseFormat,
    /// Scheduled delivery time; `None` sends immediately.
    pub scheduled_at: Option<ScheduledAt>,
    /// When set, the gateway validates the message without delivering it or
    /// charging credits.
    pub test_mode: bool,
    /// Server-side replacement of non-GSM-7 characters. On by default; the
    /// wire parameter is only sent to turn it off.
    pub replace_non_gsm_chars: bool,
    /// Routing quality class.
    pub gateway_tier: Option<GatewayTier>,
    /// Explicit route id, overriding the tier on the gateway side.
    pub gateway_route_id: Option<u32>,
    /// Delivery report callback URL. Only `http`/`https` URLs are attached
    /// to requests.
    pub delivery_report_url: Option<String>,
}

impl Default for MessageOptions {
    fn default() -> Self {
        Self {
            sender: String::new(),
            destinations: Vec::new(),
            reference: None,
            response_format: ResponseFormat::default(),
            scheduled_at: None,
            test_mode: false,
            replace_non_gsm_chars: true,
            gateway_tier: None,
            gateway_route_id: None,
            delivery_report_url: None,
        }
    }
}
