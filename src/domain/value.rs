use chrono::NaiveDateTime;
use phonenumber::country;

use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Response format requested from the gateway (`responsetype`).
///
/// `Xml` responses are parsed and their document root is kept on the client;
/// `Plain` and `Simple` responses stay raw.
pub enum ResponseFormat {
    #[default]
    Xml,
    Plain,
    Simple,
}

impl ResponseFormat {
    /// Form field name used by the gateway (`responsetype`).
    pub const FIELD: &'static str = "responsetype";

    /// Wire value for this format.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Xml => "XML",
            Self::Plain => "PLAIN",
            Self::Simple => "SIMPLE",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Routing quality class for outgoing messages (`gateway`).
///
/// The gateway identifies tiers by fixed integer codes on the wire.
pub enum GatewayTier {
    Basic,
    Business,
    Voice,
}

impl GatewayTier {
    /// Form field name used by the gateway (`gateway`).
    pub const FIELD: &'static str = "gateway";

    /// Wire code for this tier.
    pub fn code(self) -> u8 {
        match self {
            Self::Basic => 2,
            Self::Business => 1,
            Self::Voice => 8,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Scheduled delivery time (`timestamp`), kept pre-formatted as `YYYYMMDDHHmm`.
///
/// The gateway reads the stamp in its own fixed timezone (Europe/Amsterdam);
/// no conversion is performed here, which is why the boundary type is a
/// [`NaiveDateTime`].
pub struct ScheduledAt(String);

impl ScheduledAt {
    /// Form field name used by the gateway (`timestamp`).
    pub const FIELD: &'static str = "timestamp";

    /// Format a date/time into the gateway's stamp format.
    pub fn new(at: NaiveDateTime) -> Self {
        Self(at.format("%Y%m%d%H%M").to_string())
    }

    /// The stamp as sent to the gateway.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<NaiveDateTime> for ScheduledAt {
    fn from(at: NaiveDateTime) -> Self {
        Self::new(at)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Parsed and normalized destination number.
///
/// The gateway expects destinations as international digits without the
/// leading `+`. Destinations added to the client as plain strings are passed
/// through untouched; parse into [`Msisdn`] when you want normalization.
pub struct Msisdn(String);

impl Msisdn {
    /// Form field name used by the gateway (`destination`).
    pub const FIELD: &'static str = "destination";

    /// Parse and normalize a phone number.
    ///
    /// `default_region` is used when the input does not contain an explicit
    /// country prefix.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = input.into();
        let raw = input.trim().to_owned();
        if raw.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }

        let parsed = phonenumber::parse(default_region, &raw)
            .map_err(|_| ValidationError::InvalidPhoneNumber { input: raw.clone() })?;

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();

        Ok(Self(e164.trim_start_matches('+').to_owned()))
    }

    /// Normalized digits as sent to the gateway.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Msisdn> for String {
    fn from(value: Msisdn) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn response_format_wire_values() {
        assert_eq!(ResponseFormat::Xml.as_str(), "XML");
        assert_eq!(ResponseFormat::Plain.as_str(), "PLAIN");
        assert_eq!(ResponseFormat::Simple.as_str(), "SIMPLE");
        assert_eq!(ResponseFormat::default(), ResponseFormat::Xml);
    }

    #[test]
    fn gateway_tier_wire_codes() {
        assert_eq!(GatewayTier::Basic.code(), 2);
        assert_eq!(GatewayTier::Business.code(), 1);
        assert_eq!(GatewayTier::Voice.code(), 8);
    }

    #[test]
    fn scheduled_at_formats_minute_precision_stamp() {
        let at = NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(3, 4, 0)
            .unwrap();
        assert_eq!(ScheduledAt::new(at).as_str(), "202401020304");

        let late = NaiveDate::from_ymd_opt(2031, 12, 31)
            .unwrap()
            .and_hms_opt(23, 59, 59)
            .unwrap();
        assert_eq!(ScheduledAt::from(late).as_str(), "203112312359");
    }

    #[test]
    fn msisdn_normalizes_to_digits_without_plus() {
        let msisdn = Msisdn::parse(None, "+31 6 0000 0000").unwrap();
        assert_eq!(msisdn.as_str(), "31600000000");

        let msisdn = Msisdn::parse(Some(country::Id::NL), "06 0000 0000").unwrap();
        assert_eq!(msisdn.as_str(), "31600000000");

        assert!(Msisdn::parse(None, "   ").is_err());
        assert!(Msisdn::parse(None, "not-a-number").is_err());
    }

    #[test]
    fn msisdn_converts_into_plain_destination_string() {
        let msisdn = Msisdn::parse(None, "+31600000000").unwrap();
        let destination: String = msisdn.into();
        assert_eq!(destination, "31600000000");
    }
}
