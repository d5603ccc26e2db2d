/// Errors raised while turning response text into a [`Document`](crate::Document).
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("XML parse error: {0}")]
    XmlParse(#[from] quick_xml::Error),

    #[error("XML attribute error: {0}")]
    XmlAttribute(#[from] quick_xml::events::attributes::AttrError),

    #[error("Malformed document: {0}")]
    Malformed(String),
}

impl DocumentError {
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::Malformed(msg.into())
    }
}

/// Errors raised by the strict readers in [`extract`](crate::extract).
///
/// The defensive readers never produce these; they only surface from fields
/// that are read without a fallback.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MapError {
    #[error("Missing <{0}> element")]
    MissingElement(String),

    #[error("Missing attribute '{attribute}' on <{element}>")]
    MissingAttribute { element: String, attribute: String },

    #[error("Invalid {kind} in <{element}>: '{value}'")]
    InvalidValue {
        element: String,
        value: String,
        kind: &'static str,
    },
}

impl MapError {
    pub fn missing_element(name: impl Into<String>) -> Self {
        Self::MissingElement(name.into())
    }

    pub fn missing_attribute(element: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self::MissingAttribute {
            element: element.into(),
            attribute: attribute.into(),
        }
    }

    pub fn invalid_value(
        element: impl Into<String>,
        value: impl Into<String>,
        kind: &'static str,
    ) -> Self {
        Self::InvalidValue {
            element: element.into(),
            value: value.into(),
            kind,
        }
    }
}
