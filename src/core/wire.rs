use serde::Serialize;
use serde_json::{Map, Value};

pub(crate) const ERROR_FIELD: &str = "Error Message";
pub(crate) const INFORMATION_FIELD: &str = "Information";
pub(crate) const NOTE_FIELD: &str = "Note";

/// Advisory text the provider attaches to otherwise usable responses,
/// typically a rate-limit or premium-endpoint reminder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderNotice {
    /// The `Information` field, if present.
    pub information: Option<String>,
    /// The `Note` field, if present.
    pub note: Option<String>,
}

impl ProviderNotice {
    fn from_body(body: &Map<String, Value>) -> Option<Self> {
        let information = body.get(INFORMATION_FIELD).map(text);
        let note = body.get(NOTE_FIELD).map(text);
        if information.is_none() && note.is_none() {
            return None;
        }
        Some(Self { information, note })
    }
}

/// A top-level response object, sorted into the shapes the provider emits.
#[derive(Debug)]
pub(crate) enum Envelope {
    /// `{"Error Message": ...}`
    Error { message: String },
    /// Both `Information` and `Note` present; the rest of the body is still usable.
    Advisory {
        notice: ProviderNotice,
        body: Map<String, Value>,
    },
    /// Anything else: series data, possibly with a lone `Information` or `Note`.
    Payload {
        notice: Option<ProviderNotice>,
        body: Map<String, Value>,
    },
}

impl Envelope {
    pub(crate) fn classify(body: Map<String, Value>) -> Self {
        if let Some(message) = body.get(ERROR_FIELD) {
            return Envelope::Error {
                message: text(message),
            };
        }
        let notice = ProviderNotice::from_body(&body);
        match notice {
            Some(notice) if notice.information.is_some() && notice.note.is_some() => {
                Envelope::Advisory { notice, body }
            }
            notice => Envelope::Payload { notice, body },
        }
    }
}

/// A parsed, error-free response handed back to the endpoint layer.
#[derive(Debug)]
pub(crate) struct RawResponse {
    pub(crate) body: Map<String, Value>,
    pub(crate) notice: Option<ProviderNotice>,
}

impl RawResponse {
    pub(crate) fn new(body: Map<String, Value>, notice: Option<ProviderNotice>) -> Self {
        Self { body, notice }
    }
}

fn text(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
