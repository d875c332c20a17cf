use cdpilot_types::{Command, Method};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use super::target::TargetId;

#[doc = "Browser context id, used to isolate sessions from one another."]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BrowserContextId(pub String);

impl From<String> for BrowserContextId {
    fn from(s: String) -> Self {
        BrowserContextId(s)
    }
}

impl From<&str> for BrowserContextId {
    fn from(s: &str) -> Self {
        BrowserContextId(s.to_string())
    }
}

impl std::fmt::Display for BrowserContextId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[doc = "Browser window id."]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowId(pub i64);

#[doc = "The state of the browser window."]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WindowState {
    Normal,
    Minimized,
    Maximized,
    Fullscreen,
}

#[doc = "Browser window bounds information."]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bounds {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_state: Option<WindowState>,
}

impl Bounds {
    pub fn with_state(state: WindowState) -> Self {
        Self {
            window_state: Some(state),
            ..Default::default()
        }
    }
}

#[doc = "[getWindowForTarget](https://chromedevtools.github.io/devtools-protocol/tot/Browser/#method-getWindowForTarget)"]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetWindowForTargetParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_id: Option<TargetId>,
}

impl GetWindowForTargetParams {
    pub const IDENTIFIER: &'static str = "Browser.getWindowForTarget";

    pub fn new(target_id: TargetId) -> Self {
        Self {
            target_id: Some(target_id),
        }
    }
}

impl Method for GetWindowForTargetParams {
    fn identifier(&self) -> Cow<'static, str> {
        Self::IDENTIFIER.into()
    }
}

impl Command for GetWindowForTargetParams {
    type Response = GetWindowForTargetReturns;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetWindowForTargetReturns {
    pub window_id: WindowId,
    pub bounds: Bounds,
}

#[doc = "[setWindowBounds](https://chromedevtools.github.io/devtools-protocol/tot/Browser/#method-setWindowBounds)"]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetWindowBoundsParams {
    pub window_id: WindowId,
    pub bounds: Bounds,
}

impl SetWindowBoundsParams {
    pub const IDENTIFIER: &'static str = "Browser.setWindowBounds";

    pub fn new(window_id: WindowId, bounds: Bounds) -> Self {
        Self { window_id, bounds }
    }
}

impl Method for SetWindowBoundsParams {
    fn identifier(&self) -> Cow<'static, str> {
        Self::IDENTIFIER.into()
    }
}

impl Command for SetWindowBoundsParams {
    type Response = serde_json::Value;
}

#[doc = "[setDownloadBehavior](https://chromedevtools.github.io/devtools-protocol/tot/Browser/#method-setDownloadBehavior)"]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetDownloadBehaviorParams {
    pub behavior: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub browser_context_id: Option<BrowserContextId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events_enabled: Option<bool>,
}

impl SetDownloadBehaviorParams {
    pub const IDENTIFIER: &'static str = "Browser.setDownloadBehavior";

    pub fn new(behavior: impl Into<String>) -> Self {
        Self {
            behavior: behavior.into(),
            browser_context_id: None,
            download_path: None,
            events_enabled: None,
        }
    }
}

impl Method for SetDownloadBehaviorParams {
    fn identifier(&self) -> Cow<'static, str> {
        Self::IDENTIFIER.into()
    }
}

impl Command for SetDownloadBehaviorParams {
    type Response = serde_json::Value;
}

#[doc = "[close](https://chromedevtools.github.io/devtools-protocol/tot/Browser/#method-close)"]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CloseParams {}

impl CloseParams {
    pub const IDENTIFIER: &'static str = "Browser.close";
}

impl Method for CloseParams {
    fn identifier(&self) -> Cow<'static, str> {
        Self::IDENTIFIER.into()
    }
}

impl Command for CloseParams {
    type Response = serde_json::Value;
}
