use xmltree::Element;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid XML response: {0}")]
    Xml(#[from] xmltree::ParseError),
}

/// Parse a response body into its document root.
pub fn parse_document(body: &str) -> Result<Element, TransportError> {
    Ok(Element::parse(body.as_bytes())?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_document() {
        let root = parse_document("<response><responseCode>01</responseCode></response>").unwrap();
        assert_eq!(root.name, "response");
    }

    #[test]
    fn rejects_malformed_document() {
        assert!(parse_document("<response>").is_err());
        assert!(parse_document("not xml at all").is_err());
    }
}
