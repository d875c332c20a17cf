//! Wire-level primitives shared by the generated CDP domain types and the
//! session/transport layer. Mirrors the shape of the JSON envelopes the
//! DevTools protocol uses: method calls keyed by a monotonic id, responses
//! that carry either a `result` or an `error`, and unsolicited events.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::ops::Deref;

/// Identifier for an outgoing [`MethodCall`].
///
/// Unique and strictly increasing within the lifetime of a single
/// transport; never reused.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CallId(usize);

impl CallId {
    pub fn new(id: usize) -> Self {
        CallId(id)
    }

    pub fn value(&self) -> usize {
        self.0
    }
}

impl fmt::Display for CallId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A command request as written to the wire.
#[derive(Serialize, Debug, PartialEq)]
pub struct MethodCall {
    pub id: CallId,
    #[serde(rename = "sessionId", skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    pub method: Cow<'static, str>,
    pub params: serde_json::Value,
}

/// Implemented by every generated params type; identifies the CDP method
/// the type sends a request to / receives a notification from, e.g.
/// `DOM.querySelector`.
pub trait Method {
    /// The whole string identifier for this method like: `DOM.querySelector`
    fn identifier(&self) -> Cow<'static, str>;

    /// The name of the domain this method belongs to: `DOM`
    fn domain_name(&self) -> Cow<'static, str> {
        self.split().0
    }

    /// The standalone identifier of the method inside the domain: `querySelector`
    fn method_name(&self) -> Cow<'static, str> {
        self.split().1
    }

    /// Tuple of (`domain_name`, `method_name`)
    fn split(&self) -> (Cow<'static, str>, Cow<'static, str>) {
        match self.identifier() {
            Cow::Borrowed(id) => {
                let mut iter = id.split('.');
                (iter.next().unwrap_or_default().into(), iter.next().unwrap_or_default().into())
            }
            Cow::Owned(id) => {
                let mut iter = id.split('.');
                (
                    Cow::Owned(iter.next().unwrap_or_default().to_string()),
                    Cow::Owned(iter.next().unwrap_or_default().to_string()),
                )
            }
        }
    }
}

/// A typed command: its `Response` associated type is what the `result`
/// envelope field is decoded into.
pub trait Command: serde::ser::Serialize + Method {
    type Response: DeserializeOwned + fmt::Debug;
}

/// The decoded result of a [`Command`], still tagged with the method it
/// answers and the id that was allocated for it.
#[derive(Debug)]
pub struct CommandResponse<T: fmt::Debug> {
    pub id: CallId,
    pub result: T,
    pub method: Cow<'static, str>,
}

impl<T: fmt::Debug> Deref for CommandResponse<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.result
    }
}

/// Implemented by every generated event type.
pub trait Event: Method + DeserializeOwned {
    fn session_id(&self) -> Option<&str>;
}

/// A catch-all event representation used before an event's params are
/// deserialized into a concrete domain type; carries the raw JSON payload
/// plus the `sessionId` the frame arrived tagged with.
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
pub struct CdpEvent {
    pub method: Cow<'static, str>,
    #[serde(rename = "sessionId", skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    pub params: serde_json::Value,
}

impl Method for CdpEvent {
    fn identifier(&self) -> Cow<'static, str> {
        self.method.clone()
    }
}

impl Event for CdpEvent {
    fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }
}

/// A response to a [`MethodCall`] as it arrives over the wire, before the
/// `result` payload has been decoded into a concrete type.
#[derive(Deserialize, Debug, PartialEq, Clone)]
pub struct Response {
    pub id: CallId,
    pub result: Option<serde_json::Value>,
    pub error: Option<Error>,
    #[serde(rename = "sessionId", skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

/// A single inbound websocket frame: either a command response or an event.
#[derive(Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum Message {
    Response(Response),
    Event(CdpEvent),
}

/// Protocol-level error returned in a [`Response`]'s `error` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Error {
    pub code: i64,
    pub message: String,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CDP error {}: {}", self.code, self.message)
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    struct Dummy;
    impl Method for Dummy {
        fn identifier(&self) -> Cow<'static, str> {
            "DOM.querySelector".into()
        }
    }

    #[test]
    fn splits_domain_and_method() {
        let d = Dummy;
        assert_eq!(d.domain_name(), "DOM");
        assert_eq!(d.method_name(), "querySelector");
    }

    #[test]
    fn message_decodes_response_and_event() {
        let resp: Message = serde_json::from_str(r#"{"id":1,"result":{}}"#).unwrap();
        assert!(matches!(resp, Message::Response(_)));

        let ev: Message = serde_json::from_str(r#"{"method":"Page.loadEventFired","params":{}}"#).unwrap();
        assert!(matches!(ev, Message::Event(_)));
    }
}
