//! Domain layer: strong types and response projections (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::MessageOptions;
pub(crate) use response::find_element;
pub use response::{ResponseState, SendResponse};
pub use validation::ValidationError;
pub use value::{GatewayTier, Msisdn, ResponseFormat, ScheduledAt};

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn msisdn_rejects_empty_and_garbage() {
        assert!(matches!(
            Msisdn::parse(None, "  "),
            Err(ValidationError::Empty {
                field: Msisdn::FIELD
            })
        ));
        assert!(matches!(
            Msisdn::parse(None, "hello"),
            Err(ValidationError::InvalidPhoneNumber { .. })
        ));
    }

    #[test]
    fn scheduled_at_stamp_is_minute_precision() {
        let at = NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(3, 4, 59)
            .unwrap();
        assert_eq!(ScheduledAt::new(at).as_str(), "202401020304");
    }

    #[test]
    fn default_options_request_xml_responses() {
        let options = MessageOptions::default();
        assert_eq!(options.response_format.as_str(), "XML");
    }
}
