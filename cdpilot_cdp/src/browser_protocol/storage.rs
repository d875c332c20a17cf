use cdpilot_types::{Command, Method};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use super::browser::BrowserContextId;
use super::network::{Cookie, CookieParam};

#[doc = "[setCookies](https://chromedevtools.github.io/devtools-protocol/tot/Storage/#method-setCookies)"]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetCookiesParams {
    pub cookies: Vec<CookieParam>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub browser_context_id: Option<BrowserContextId>,
}

impl SetCookiesParams {
    pub const IDENTIFIER: &'static str = "Storage.setCookies";

    pub fn new(cookies: Vec<CookieParam>) -> Self {
        Self {
            cookies,
            browser_context_id: None,
        }
    }
}

impl Method for SetCookiesParams {
    fn identifier(&self) -> Cow<'static, str> {
        Self::IDENTIFIER.into()
    }
}

impl Command for SetCookiesParams {
    type Response = serde_json::Value;
}

#[doc = "[getCookies](https://chromedevtools.github.io/devtools-protocol/tot/Storage/#method-getCookies)"]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetCookiesParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub browser_context_id: Option<BrowserContextId>,
}

impl GetCookiesParams {
    pub const IDENTIFIER: &'static str = "Storage.getCookies";
}

impl Method for GetCookiesParams {
    fn identifier(&self) -> Cow<'static, str> {
        Self::IDENTIFIER.into()
    }
}

impl Command for GetCookiesParams {
    type Response = GetCookiesReturns;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetCookiesReturns {
    pub cookies: Vec<Cookie>,
}

#[doc = "[clearCookies](https://chromedevtools.github.io/devtools-protocol/tot/Storage/#method-clearCookies)"]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearCookiesParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub browser_context_id: Option<BrowserContextId>,
}

impl ClearCookiesParams {
    pub const IDENTIFIER: &'static str = "Storage.clearCookies";
}

impl Method for ClearCookiesParams {
    fn identifier(&self) -> Cow<'static, str> {
        Self::IDENTIFIER.into()
    }
}

impl Command for ClearCookiesParams {
    type Response = serde_json::Value;
}
