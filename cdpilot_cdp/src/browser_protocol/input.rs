use cdpilot_types::{Command, Method};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

#[doc = "Mouse button identifier used by Input.dispatchMouseEvent."]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MouseButton {
    None,
    Left,
    Middle,
    Right,
    Back,
    Forward,
}

#[doc = "[dispatchMouseEvent](https://chromedevtools.github.io/devtools-protocol/tot/Input/#method-dispatchMouseEvent)"]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchMouseEventParams {
    #[serde(rename = "type")]
    pub r#type: String,
    pub x: f64,
    pub y: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button: Option<MouseButton>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub click_count: Option<i64>,
}

impl DispatchMouseEventParams {
    pub const IDENTIFIER: &'static str = "Input.dispatchMouseEvent";

    pub fn click_at(x: f64, y: f64) -> [Self; 2] {
        [
            Self {
                r#type: "mousePressed".to_string(),
                x,
                y,
                button: Some(MouseButton::Left),
                click_count: Some(1),
            },
            Self {
                r#type: "mouseReleased".to_string(),
                x,
                y,
                button: Some(MouseButton::Left),
                click_count: Some(1),
            },
        ]
    }

    pub fn moved(x: f64, y: f64) -> Self {
        Self {
            r#type: "mouseMoved".to_string(),
            x,
            y,
            button: None,
            click_count: None,
        }
    }
}

impl Method for DispatchMouseEventParams {
    fn identifier(&self) -> Cow<'static, str> {
        Self::IDENTIFIER.into()
    }
}

impl Command for DispatchMouseEventParams {
    type Response = serde_json::Value;
}

#[doc = "[insertText](https://chromedevtools.github.io/devtools-protocol/tot/Input/#method-insertText) Dispatches text as if typed by the user, bypassing per-key event dispatch. Used for fast form fills where key-by-key timing does not matter."]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsertTextParams {
    pub text: String,
}

impl InsertTextParams {
    pub const IDENTIFIER: &'static str = "Input.insertText";

    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl Method for InsertTextParams {
    fn identifier(&self) -> Cow<'static, str> {
        Self::IDENTIFIER.into()
    }
}

impl Command for InsertTextParams {
    type Response = serde_json::Value;
}
