use xmltree::{Element, XMLNode};

#[derive(Debug, Clone, Default)]
/// State left behind by the most recent gateway call.
///
/// Replaced wholesale on every send or balance request. A client that has
/// not made a call yet exposes empty defaults here; none of the accessors
/// fail.
pub struct ResponseState {
    status: Option<u16>,
    reason: String,
    body: String,
    xml_root: Option<Element>,
}

impl ResponseState {
    pub(crate) fn received(status: u16, reason: String, body: String) -> Self {
        Self {
            status: Some(status),
            reason,
            body,
            xml_root: None,
        }
    }

    pub(crate) fn set_xml_root(&mut self, root: Element) {
        self.xml_root = Some(root);
    }

    /// HTTP status code of the last response; `None` before the first call.
    pub fn http_status(&self) -> Option<u16> {
        self.status
    }

    /// HTTP reason phrase of the last response.
    pub fn http_reason(&self) -> &str {
        &self.reason
    }

    /// Raw, unparsed response body.
    pub fn raw_body(&self) -> &str {
        &self.body
    }

    /// Parsed document root, when the last response was parsed as XML.
    pub fn xml_root(&self) -> Option<&Element> {
        self.xml_root.as_ref()
    }

    /// Text of the `responseCode` element.
    ///
    /// Falls back to the raw body when the last response was not parsed as
    /// XML or the element is missing.
    pub fn response_code(&self) -> String {
        self.element_text_or_body("responseCode")
    }

    /// Text of the `responseMessage` element, with the same fallback as
    /// [`ResponseState::response_code`].
    pub fn response_message(&self) -> String {
        self.element_text_or_body("responseMessage")
    }

    /// Text content of the first element with the given name under the
    /// parsed root, if any.
    pub fn element_text(&self, name: &str) -> Option<String> {
        let root = self.xml_root.as_ref()?;
        find_element(root, name)
            .and_then(Element::get_text)
            .map(|text| text.into_owned())
    }

    fn element_text_or_body(&self, name: &str) -> String {
        self.element_text(name)
            .unwrap_or_else(|| self.body.clone())
    }
}

/// Depth-first search over descendant elements, in document order. The root
/// itself is not a candidate.
pub(crate) fn find_element<'a>(element: &'a Element, name: &str) -> Option<&'a Element> {
    for child in element.children.iter().filter_map(XMLNode::as_element) {
        if child.name == name {
            return Some(child);
        }
        if let Some(found) = find_element(child, name) {
            return Some(found);
        }
    }
    None
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Outcome of a send call.
///
/// The same values stay readable through the client accessors afterwards.
pub struct SendResponse {
    /// Gateway response code, or the raw body for non-XML formats.
    pub response_code: String,
    /// Gateway response message, or the raw body for non-XML formats.
    pub response_message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn xml_state(body: &str) -> ResponseState {
        let mut state = ResponseState::received(200, "OK".to_owned(), body.to_owned());
        let root = Element::parse(body.as_bytes()).unwrap();
        state.set_xml_root(root);
        state
    }

    #[test]
    fn fresh_state_exposes_empty_defaults() {
        let state = ResponseState::default();
        assert_eq!(state.http_status(), None);
        assert_eq!(state.http_reason(), "");
        assert_eq!(state.raw_body(), "");
        assert!(state.xml_root().is_none());
        assert_eq!(state.response_code(), "");
        assert_eq!(state.response_message(), "");
    }

    #[test]
    fn xml_state_projects_element_text() {
        let state = xml_state(
            "<response><responseCode>10</responseCode>\
             <responseMessage>OK</responseMessage></response>",
        );
        assert_eq!(state.response_code(), "10");
        assert_eq!(state.response_message(), "OK");
    }

    #[test]
    fn element_search_descends_into_nested_elements() {
        let state = xml_state(
            "<response><item><responseCode>07</responseCode></item></response>",
        );
        assert_eq!(state.response_code(), "07");
        assert_eq!(state.element_text("missing"), None);
    }

    #[test]
    fn missing_element_falls_back_to_raw_body() {
        let state = xml_state("<response><other>x</other></response>");
        assert_eq!(
            state.response_code(),
            "<response><other>x</other></response>"
        );
    }

    #[test]
    fn unparsed_state_falls_back_to_raw_body() {
        let state = ResponseState::received(200, "OK".to_owned(), "01".to_owned());
        assert_eq!(state.response_code(), "01");
        assert_eq!(state.response_message(), "01");
        assert_eq!(state.http_status(), Some(200));
        assert_eq!(state.http_reason(), "OK");
    }
}
