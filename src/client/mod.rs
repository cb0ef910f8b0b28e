//! Client layer: orchestrates transport calls and keeps the response state.

use std::error::Error as StdError;
use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDateTime;
use tracing::debug;

use crate::domain::{
    GatewayTier, MessageOptions, ResponseFormat, ResponseState, ScheduledAt, SendResponse,
};
use crate::transport;

const DEFAULT_SEND_ENDPOINT: &str = "https://api.messagebird.com/api/sms";
const DEFAULT_CREDITS_ENDPOINT: &str = "https://api.messagebird.com/api/credits";

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    reason: String,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn post_form(
        &self,
        url: &str,
        params: &[(String, String)],
    ) -> Result<HttpResponse, Box<dyn StdError + Send + Sync>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post_form(
        &self,
        url: &str,
        params: &[(String, String)],
    ) -> Result<HttpResponse, Box<dyn StdError + Send + Sync>> {
        let response = self.client.post(url).form(&params).send()?;
        let status = response.status().as_u16();
        let reason = response
            .status()
            .canonical_reason()
            .unwrap_or_default()
            .to_owned();
        let body = response.text()?;
        Ok(HttpResponse {
            status,
            reason,
            body,
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`MessageBirdClient`].
///
/// Non-2xx HTTP statuses are not errors here: the gateway reports request
/// problems in the response body, and the status line stays readable through
/// the accessors.
pub enum MessageBirdError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Response body could not be parsed as the expected format.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),
}

#[derive(Debug, Clone)]
/// Builder for [`MessageBirdClient`].
///
/// Use this when you need to customize the endpoints, timeout, or
/// user-agent.
pub struct MessageBirdClientBuilder {
    username: String,
    password: String,
    send_endpoint: String,
    credits_endpoint: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl MessageBirdClientBuilder {
    /// Create a builder with the default endpoints and no timeout/user-agent
    /// override.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            send_endpoint: DEFAULT_SEND_ENDPOINT.to_owned(),
            credits_endpoint: DEFAULT_CREDITS_ENDPOINT.to_owned(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the endpoint URL for sending messages.
    pub fn send_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.send_endpoint = endpoint.into();
        self
    }

    /// Override the endpoint URL for the credit balance query.
    pub fn credits_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.credits_endpoint = endpoint.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`MessageBirdClient`].
    pub fn build(self) -> Result<MessageBirdClient, MessageBirdError> {
        let mut builder = reqwest::blocking::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| MessageBirdError::Transport(Box::new(err)))?;

        Ok(MessageBirdClient {
            username: self.username,
            password: self.password,
            options: MessageOptions::default(),
            send_endpoint: self.send_endpoint,
            credits_endpoint: self.credits_endpoint,
            http: Arc::new(ReqwestTransport { client }),
            last_response: ResponseState::default(),
        })
    }
}

#[derive(Clone)]
/// Client for the MessageBird SMS gateway.
///
/// Message configuration accumulates through setters; each operation then
/// serializes the current state into one blocking form-encoded POST. The raw
/// and parsed response of the most recent call stay readable through the
/// accessors, so the original send-then-inspect calling pattern keeps
/// working alongside the returned values.
///
/// Operations take `&mut self` because they overwrite the stored response
/// state; sharing one client across threads therefore needs an external
/// lock, which also serializes the state updates.
pub struct MessageBirdClient {
    username: String,
    password: String,
    options: MessageOptions,
    send_endpoint: String,
    credits_endpoint: String,
    http: Arc<dyn HttpTransport>,
    last_response: ResponseState,
}

impl MessageBirdClient {
    /// Create a client with the given account credentials and the default
    /// endpoints.
    ///
    /// For more customization, use [`MessageBirdClient::builder`].
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            options: MessageOptions::default(),
            send_endpoint: DEFAULT_SEND_ENDPOINT.to_owned(),
            credits_endpoint: DEFAULT_CREDITS_ENDPOINT.to_owned(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::blocking::Client::new(),
            }),
            last_response: ResponseState::default(),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> MessageBirdClientBuilder {
        MessageBirdClientBuilder::new(username, password)
    }

    /// Append a recipient MSISDN.
    ///
    /// May be called repeatedly; destinations are kept in insertion order
    /// and never deduplicated or validated.
    pub fn add_destination(&mut self, destination: impl Into<String>) {
        self.options.destinations.push(destination.into());
    }

    /// Set the reference the gateway echoes in delivery reports.
    pub fn set_reference(&mut self, reference: impl Into<String>) {
        self.options.reference = Some(reference.into());
    }

    /// Set the sender id shown to recipients: up to 16 digits or up to 11
    /// characters. The gateway validates this server-side.
    pub fn set_sender(&mut self, sender: impl Into<String>) {
        self.options.sender = sender.into();
    }

    /// Choose the response format the gateway answers with.
    pub fn set_response_format(&mut self, format: ResponseFormat) {
        self.options.response_format = format;
    }

    /// Schedule delivery instead of sending immediately.
    ///
    /// The gateway reads the stamp in its own timezone (Europe/Amsterdam).
    pub fn set_scheduled_at(&mut self, at: NaiveDateTime) {
        self.options.scheduled_at = Some(ScheduledAt::new(at));
    }

    /// When enabled the gateway validates the message without delivering it
    /// or charging credits.
    pub fn set_test_mode(&mut self, test_mode: bool) {
        self.options.test_mode = test_mode;
    }

    /// Control server-side replacement of non-GSM-7 characters (on by
    /// default).
    pub fn set_replace_non_gsm_chars(&mut self, replace: bool) {
        self.options.replace_non_gsm_chars = replace;
    }

    /// Route the message over a quality tier.
    pub fn set_gateway_tier(&mut self, tier: GatewayTier) {
        self.options.gateway_tier = Some(tier);
    }

    /// Pin an explicit route id; overrides the tier on the gateway side.
    pub fn set_gateway_route_id(&mut self, route_id: u32) {
        self.options.gateway_route_id = Some(route_id);
    }

    /// Set the delivery report callback URL.
    ///
    /// Only attached to requests when it parses as an `http` or `https`
    /// URL; other values are silently left off the wire.
    pub fn set_delivery_report_url(&mut self, url: impl Into<String>) {
        self.options.delivery_report_url = Some(url.into());
    }

    /// Current accumulated message options.
    pub fn options(&self) -> &MessageOptions {
        &self.options
    }

    /// Send `body` to every destination added so far.
    ///
    /// Issues one blocking POST; the whole batch shares its fate. The
    /// response state is overwritten before this returns, so the accessors
    /// reflect this call afterwards, including for non-2xx statuses, which
    /// are stored rather than raised.
    ///
    /// Errors:
    /// - [`MessageBirdError::Transport`] when the POST itself fails,
    /// - [`MessageBirdError::Parse`] when an XML-format response body is
    ///   malformed (the raw body stays readable via
    ///   [`MessageBirdClient::raw_response_body`]).
    pub fn send_message(&mut self, body: &str) -> Result<SendResponse, MessageBirdError> {
        let params =
            transport::encode_send_form(&self.username, &self.password, &self.options, body);

        debug!(
            endpoint = %self.send_endpoint,
            destinations = self.options.destinations.len(),
            "sending message"
        );
        let response = self
            .http
            .post_form(&self.send_endpoint, &params)
            .map_err(MessageBirdError::Transport)?;
        debug!(status = response.status, "gateway answered");

        self.last_response =
            ResponseState::received(response.status, response.reason, response.body);
        if self.options.response_format == ResponseFormat::Xml {
            let root = transport::parse_document(self.last_response.raw_body())
                .map_err(|err| MessageBirdError::Parse(Box::new(err)))?;
            self.last_response.set_xml_root(root);
        }

        Ok(SendResponse {
            response_code: self.last_response.response_code(),
            response_message: self.last_response.response_message(),
        })
    }

    /// Query the remaining credit balance.
    ///
    /// Balance responses are always XML, whatever format is configured for
    /// sends. Returns the value of the `credits` element, or `0.0` when the
    /// gateway omits it. The response state is overwritten just like for
    /// [`MessageBirdClient::send_message`].
    pub fn get_balance(&mut self) -> Result<f64, MessageBirdError> {
        let params = transport::encode_credits_form(&self.username, &self.password);

        debug!(endpoint = %self.credits_endpoint, "requesting credit balance");
        let response = self
            .http
            .post_form(&self.credits_endpoint, &params)
            .map_err(MessageBirdError::Transport)?;
        debug!(status = response.status, "gateway answered");

        self.last_response =
            ResponseState::received(response.status, response.reason, response.body);
        let root = transport::parse_document(self.last_response.raw_body())
            .map_err(|err| MessageBirdError::Parse(Box::new(err)))?;
        let credits = transport::decode_credits_response(&root)
            .map_err(|err| MessageBirdError::Parse(Box::new(err)))?;
        self.last_response.set_xml_root(root);

        Ok(credits)
    }

    /// `responseCode` element text of the last response, or the raw body
    /// when the response was not parsed as XML or lacks the element.
    pub fn response_code(&self) -> String {
        self.last_response.response_code()
    }

    /// `responseMessage` element text of the last response, with the same
    /// fallback as [`MessageBirdClient::response_code`].
    pub fn response_message(&self) -> String {
        self.last_response.response_message()
    }

    /// Raw body of the last response.
    pub fn raw_response_body(&self) -> &str {
        self.last_response.raw_body()
    }

    /// HTTP status of the last response; `None` before the first call.
    pub fn http_status(&self) -> Option<u16> {
        self.last_response.http_status()
    }

    /// HTTP reason phrase of the last response.
    pub fn http_reason(&self) -> &str {
        self.last_response.http_reason()
    }

    /// Parsed document root of the last XML response.
    pub fn xml_root(&self) -> Option<&xmltree::Element> {
        self.last_response.xml_root()
    }

    /// Full state of the last response.
    pub fn last_response(&self) -> &ResponseState {
        &self.last_response
    }
}
