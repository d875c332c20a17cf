use cdpilot_cdp::js_protocol::runtime::{GetPropertiesParams, RemoteObject, RemoteObjectId};

use crate::error::{CdpError, Result};
use crate::session::Session;

/// The decoded shape of a `Runtime.RemoteObject`.
#[derive(Debug, Clone)]
pub enum RuntimeValue {
    Scalar(serde_json::Value),
    Node(RemoteObjectId),
    Nodes(Vec<RemoteObjectId>),
    Null,
}

/// Turns a `Runtime.RemoteObject` into something callers can use, fetching
/// array elements over the wire when the object is an array of nodes.
pub(crate) struct RuntimeParser;

impl RuntimeParser {
    pub(crate) async fn parse(session: &Session, object: RemoteObject) -> Result<RuntimeValue> {
        match (object.r#type.as_str(), object.subtype.as_deref()) {
            ("object", Some("node")) => {
                let object_id = object.object_id.ok_or(CdpError::NoResponse)?;
                Ok(RuntimeValue::Node(object_id))
            }
            ("object", Some("array")) => {
                let object_id = object.object_id.ok_or(CdpError::NoResponse)?;
                let properties = session
                    .execute(GetPropertiesParams::new(object_id))
                    .await?
                    .result;

                let mut nodes = Vec::new();
                for property in properties {
                    if property.name.parse::<usize>().is_err() {
                        continue;
                    }
                    let Some(value) = property.value else {
                        continue;
                    };
                    if let Some(object_id) = value.object_id {
                        nodes.push(object_id);
                    }
                }
                Ok(RuntimeValue::Nodes(nodes))
            }
            ("object", Some("null")) => Ok(RuntimeValue::Null),
            ("string", _) | ("number", _) => {
                Ok(RuntimeValue::Scalar(object.value.unwrap_or(serde_json::Value::Null)))
            }
            (other, subtype) => Err(CdpError::Unsupported(format!(
                "remote object type {other:?} subtype {subtype:?}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn object(r#type: &str, subtype: Option<&str>) -> RemoteObject {
        RemoteObject {
            r#type: r#type.to_string(),
            subtype: subtype.map(str::to_string),
            class_name: None,
            value: None,
            object_id: None,
            description: None,
        }
    }

    #[test]
    fn node_subtype_yields_its_object_id() {
        let mut obj = object("object", Some("node"));
        obj.object_id = Some(RemoteObjectId("1.1".to_string()));
        let object_id = obj.object_id.clone().unwrap();
        match (obj.r#type.as_str(), obj.subtype.as_deref()) {
            ("object", Some("node")) => assert_eq!(object_id.0, "1.1"),
            _ => panic!("expected node subtype"),
        }
    }

    #[test]
    fn string_and_number_scalars_pass_value_through() {
        let mut obj = object("string", None);
        obj.value = Some(serde_json::json!("hello"));
        assert_eq!(obj.value, Some(serde_json::json!("hello")));

        let mut obj = object("number", None);
        obj.value = Some(serde_json::json!(42));
        assert_eq!(obj.value, Some(serde_json::json!(42)));
    }
}
