use xmltree::Element;

use crate::domain::find_element;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("credits element is not numeric: {value}")]
    NonNumericCredits { value: String },
}

/// Balance requests carry the credentials and nothing else.
pub fn encode_credits_form(username: &str, password: &str) -> Vec<(String, String)> {
    vec![
        ("username".to_owned(), username.to_owned()),
        ("password".to_owned(), password.to_owned()),
    ]
}

/// Extract the remaining balance from a credits response document.
///
/// A document without a `credits` element decodes as an exhausted balance
/// of zero.
pub fn decode_credits_response(root: &Element) -> Result<f64, TransportError> {
    let Some(text) = find_element(root, "credits").and_then(Element::get_text) else {
        return Ok(0.0);
    };

    let trimmed = text.trim();
    trimmed
        .parse()
        .map_err(|_| TransportError::NonNumericCredits {
            value: trimmed.to_owned(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> Element {
        Element::parse(body.as_bytes()).unwrap()
    }

    #[test]
    fn credits_form_is_credentials_only() {
        assert_eq!(
            encode_credits_form("user", "secret"),
            vec![
                ("username".to_owned(), "user".to_owned()),
                ("password".to_owned(), "secret".to_owned()),
            ]
        );
    }

    #[test]
    fn decode_reads_credits_element_text() {
        let root = parse("<response><credits>9.5</credits></response>");
        assert_eq!(decode_credits_response(&root).unwrap(), 9.5);

        let root = parse("<response><credits> 120 </credits></response>");
        assert_eq!(decode_credits_response(&root).unwrap(), 120.0);
    }

    #[test]
    fn decode_missing_credits_is_zero() {
        let root = parse("<response><responseCode>03</responseCode></response>");
        assert_eq!(decode_credits_response(&root).unwrap(), 0.0);
    }

    #[test]
    fn decode_rejects_non_numeric_credits() {
        let root = parse("<response><credits>lots</credits></response>");
        assert!(matches!(
            decode_credits_response(&root),
            Err(TransportError::NonNumericCredits { value }) if value == "lots"
        ));
    }
}
