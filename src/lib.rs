//! Typed Rust client for the MessageBird SMS gateway HTTP API.
//!
//! The client accumulates message configuration through setters, performs
//! one blocking form-encoded POST per operation, and keeps the raw and
//! parsed response readable through accessors afterwards: send, then
//! inspect.
//!
//! ```rust,no_run
//! use messagebird::MessageBirdClient;
//!
//! fn main() -> Result<(), messagebird::MessageBirdError> {
//!     let mut client = MessageBirdClient::new("username", "password");
//!     client.set_sender("YourSender");
//!     client.add_destination("31600000000");
//!     client.set_reference("123456789");
//!
//!     let response = client.send_message("This is a test message")?;
//!     println!("{} {}", response.response_code, response.response_message);
//!
//!     let credits = client.get_balance()?;
//!     println!("credits left: {credits}");
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{MessageBirdClient, MessageBirdClientBuilder, MessageBirdError};
pub use domain::{
    GatewayTier, MessageOptions, Msisdn, ResponseFormat, ResponseState, ScheduledAt, SendResponse,
    ValidationError,
};
