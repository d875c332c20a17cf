use cdpilot_types::{Command, Event, Method};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use super::dom::BackendNodeId;

#[doc = "Unique frame identifier."]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrameId(pub String);

#[doc = "[enable](https://chromedevtools.github.io/devtools-protocol/tot/Page/#method-enable)"]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnableParams {}

impl EnableParams {
    pub const IDENTIFIER: &'static str = "Page.enable";
}

impl Method for EnableParams {
    fn identifier(&self) -> Cow<'static, str> {
        Self::IDENTIFIER.into()
    }
}

impl Command for EnableParams {
    type Response = serde_json::Value;
}

#[doc = "[navigate](https://chromedevtools.github.io/devtools-protocol/tot/Page/#method-navigate)"]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigateParams {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referrer: Option<String>,
}

impl NavigateParams {
    pub const IDENTIFIER: &'static str = "Page.navigate";

    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            referrer: None,
        }
    }
}

impl Method for NavigateParams {
    fn identifier(&self) -> Cow<'static, str> {
        Self::IDENTIFIER.into()
    }
}

impl Command for NavigateParams {
    type Response = NavigateReturns;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigateReturns {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_id: Option<FrameId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_text: Option<String>,
}

#[doc = "[reload](https://chromedevtools.github.io/devtools-protocol/tot/Page/#method-reload)"]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReloadParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_cache: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script_to_evaluate_on_load: Option<String>,
}

impl ReloadParams {
    pub const IDENTIFIER: &'static str = "Page.reload";
}

impl Method for ReloadParams {
    fn identifier(&self) -> Cow<'static, str> {
        Self::IDENTIFIER.into()
    }
}

impl Command for ReloadParams {
    type Response = serde_json::Value;
}

#[doc = "[close](https://chromedevtools.github.io/devtools-protocol/tot/Page/#method-close)"]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CloseParams {}

impl CloseParams {
    pub const IDENTIFIER: &'static str = "Page.close";
}

impl Method for CloseParams {
    fn identifier(&self) -> Cow<'static, str> {
        Self::IDENTIFIER.into()
    }
}

impl Command for CloseParams {
    type Response = serde_json::Value;
}

#[doc = "[bringToFront](https://chromedevtools.github.io/devtools-protocol/tot/Page/#method-bringToFront)"]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BringToFrontParams {}

impl BringToFrontParams {
    pub const IDENTIFIER: &'static str = "Page.bringToFront";
}

impl Method for BringToFrontParams {
    fn identifier(&self) -> Cow<'static, str> {
        Self::IDENTIFIER.into()
    }
}

impl Command for BringToFrontParams {
    type Response = serde_json::Value;
}

#[doc = "Viewport for capturing screenshot clipped to a region."]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewport {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub scale: f64,
}

#[doc = "[captureScreenshot](https://chromedevtools.github.io/devtools-protocol/tot/Page/#method-captureScreenshot)"]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureScreenshotParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clip: Option<Viewport>,
}

impl CaptureScreenshotParams {
    pub const IDENTIFIER: &'static str = "Page.captureScreenshot";
}

impl Method for CaptureScreenshotParams {
    fn identifier(&self) -> Cow<'static, str> {
        Self::IDENTIFIER.into()
    }
}

impl Command for CaptureScreenshotParams {
    type Response = CaptureScreenshotReturns;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptureScreenshotReturns {
    pub data: String,
}

#[doc = "[printToPDF](https://chromedevtools.github.io/devtools-protocol/tot/Page/#method-printToPDF)"]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintToPdfParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub landscape: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_header_footer: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub print_background: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
}

impl PrintToPdfParams {
    pub const IDENTIFIER: &'static str = "Page.printToPDF";
}

impl Method for PrintToPdfParams {
    fn identifier(&self) -> Cow<'static, str> {
        Self::IDENTIFIER.into()
    }
}

impl Command for PrintToPdfParams {
    type Response = PrintToPdfReturns;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrintToPdfReturns {
    pub data: String,
}

#[doc = "[setInterceptFileChooserDialog](https://chromedevtools.github.io/devtools-protocol/tot/Page/#method-setInterceptFileChooserDialog)"]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetInterceptFileChooserDialogParams {
    pub enabled: bool,
}

impl SetInterceptFileChooserDialogParams {
    pub const IDENTIFIER: &'static str = "Page.setInterceptFileChooserDialog";

    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl Method for SetInterceptFileChooserDialogParams {
    fn identifier(&self) -> Cow<'static, str> {
        Self::IDENTIFIER.into()
    }
}

impl Command for SetInterceptFileChooserDialogParams {
    type Response = serde_json::Value;
}

#[doc = "[fileChooserOpened](https://chromedevtools.github.io/devtools-protocol/tot/Page/#event-fileChooserOpened)"]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileChooserOpenedEvent {
    pub backend_node_id: BackendNodeId,
    pub mode: String,
}

impl FileChooserOpenedEvent {
    pub const IDENTIFIER: &'static str = "Page.fileChooserOpened";
}

impl Method for FileChooserOpenedEvent {
    fn identifier(&self) -> Cow<'static, str> {
        Self::IDENTIFIER.into()
    }
}

impl Event for FileChooserOpenedEvent {
    fn session_id(&self) -> Option<&str> {
        None
    }
}
