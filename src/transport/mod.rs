//! Transport layer: wire-format details (form encoding and XML decoding).

mod credits;
mod send;
mod xml;

pub use credits::{decode_credits_response, encode_credits_form};
pub use send::encode_send_form;
pub use xml::parse_document;
