use std::time::Duration;

use tokio::sync::Mutex as AsyncMutex;
use tokio::time::sleep;

use cdpilot_cdp::browser_protocol::dom::{
    BackendNodeId, DescribeNodeParams, DiscardSearchResultsParams, GetDocumentParams, GetOuterHtmlParams, Node,
    NodeId, PerformSearchParams, PushNodesByBackendIdsToFrontendParams, QuerySelectorAllParams, QuerySelectorParams,
    ResolveNodeParams, ScrollIntoViewIfNeededParams, SetFileInputFilesParams, GetSearchResultsParams,
};
use cdpilot_cdp::browser_protocol::input::DispatchMouseEventParams;
use cdpilot_cdp::browser_protocol::page::{CaptureScreenshotParams, Viewport};
use cdpilot_cdp::js_protocol::runtime::{CallFunctionOnParams, EvaluateParams, RemoteObjectId};

use crate::by::{By, Locator};
use crate::error::{CdpError, Result};
use crate::js::{RuntimeParser, RuntimeValue};
use crate::session::Session;

/// A resolved DOM element: a [`Session`] it was found through, plus the
/// `BackendNodeId` that survives document mutation (unlike `NodeId`, which
/// is only valid within the inspector's current "document" epoch). The
/// `RemoteObjectId` used to run scripts `this`-bound to the element is
/// derived from that id lazily, the first time it is needed, and cached
/// until the element is dropped — an `Element` is never re-pointed at a
/// different node.
pub struct Element {
    session: Session,
    backend_node_id: BackendNodeId,
    object_id: AsyncMutex<Option<RemoteObjectId>>,
}

impl Element {
    fn new(session: Session, backend_node_id: BackendNodeId) -> Self {
        Self {
            session,
            backend_node_id,
            object_id: AsyncMutex::new(None),
        }
    }

    async fn node(&self) -> Result<Node> {
        let params = DescribeNodeParams::new_backend_node(self.backend_node_id);
        Ok(self.session.execute(params).await?.node)
    }

    /// `NodeId`s are document-local and go stale as soon as a newer document
    /// snapshot is taken; re-derive this element's before any `DOM.query*`
    /// call rather than trusting a cached one.
    async fn current_node_id(&self) -> Result<NodeId> {
        let params = PushNodesByBackendIdsToFrontendParams::new([self.backend_node_id]);
        let node_ids = self.session.execute(params).await?.node_ids;
        node_ids.into_iter().next().ok_or(CdpError::NoSuchElement)
    }

    async fn object_id(&self) -> Result<RemoteObjectId> {
        let mut cached = self.object_id.lock().await;
        if let Some(id) = cached.as_ref() {
            return Ok(id.clone());
        }
        let params = ResolveNodeParams::new_backend_node(self.backend_node_id);
        let object_id = self.session.execute(params).await?.object.object_id.ok_or(CdpError::NoResponse)?;
        *cached = Some(object_id.clone());
        Ok(object_id)
    }

    pub async fn tag(&self) -> Result<String> {
        Ok(self.node().await?.node_name.to_lowercase())
    }

    pub async fn attrs(&self) -> Result<std::collections::HashMap<String, String>> {
        match self.get_attribute(None).await? {
            AttributeLookup::Map(map) => Ok(map),
            AttributeLookup::Value(_) => unreachable!("get_attribute(None) always returns a map"),
        }
    }

    /// Returns the single attribute named `name`, or the full `name -> value`
    /// map when `name` is `None`. `node.attributes` is a flat
    /// `[k0, v0, k1, v1, ...]` sequence on the wire.
    pub async fn get_attribute(&self, name: Option<&str>) -> Result<AttributeLookup> {
        let node = self.node().await?;
        let flat = node.attributes.unwrap_or_default();
        let mut map = std::collections::HashMap::new();
        for pair in flat.chunks(2) {
            let [key, value] = pair else { continue };
            if Some(key.as_str()) == name {
                return Ok(AttributeLookup::Value(Some(value.clone())));
            }
            map.insert(key.clone(), value.clone());
        }
        if name.is_some() {
            return Ok(AttributeLookup::Value(None));
        }
        Ok(AttributeLookup::Map(map))
    }

    async fn attribute(&self, name: &str) -> Result<Option<String>> {
        match self.get_attribute(Some(name)).await? {
            AttributeLookup::Value(value) => Ok(value),
            AttributeLookup::Map(_) => unreachable!("get_attribute(Some) always returns a value"),
        }
    }

    pub async fn parent(&self) -> Result<Element> {
        let node = self.node().await?;
        let parent_id = node.parent_id.ok_or(CdpError::NoSuchElement)?;
        if parent_id.0 == 0 {
            return Err(CdpError::NoSuchElement);
        }
        let described = self
            .session
            .execute(DescribeNodeParams {
                node_id: Some(parent_id),
                ..Default::default()
            })
            .await?
            .node;
        Ok(Element::new(self.session.clone(), described.backend_node_id))
    }

    pub async fn outer_html(&self) -> Result<String> {
        let object_id = self.object_id().await?;
        let params = GetOuterHtmlParams {
            object_id: Some(object_id),
            ..Default::default()
        };
        Ok(self.session.execute(params).await?.outer_html)
    }

    pub async fn text(&self) -> Result<String> {
        match self.execute_script(text_content_script()).await? {
            RuntimeValue::Scalar(serde_json::Value::String(text)) => Ok(text),
            other => Err(unexpected_scalar(other)),
        }
    }

    pub async fn bounds(&self) -> Result<ElementBounds> {
        match self.execute_script(bounding_client_rect_script()).await? {
            RuntimeValue::Scalar(serde_json::Value::String(json)) => {
                serde_json::from_str(&json).map_err(CdpError::from)
            }
            other => Err(unexpected_scalar(other)),
        }
    }

    pub async fn scroll_into_view(&self) -> Result<()> {
        let params = ScrollIntoViewIfNeededParams {
            backend_node_id: Some(self.backend_node_id),
            ..Default::default()
        };
        self.session.execute(params).await?;
        Ok(())
    }

    pub async fn click(&self) -> Result<()> {
        self.scroll_into_view().await?;
        let bounds = self.bounds().await?;
        let x = bounds.x + bounds.width / 2.0;
        let y = bounds.y + bounds.height / 2.0;
        let [pressed, released] = DispatchMouseEventParams::click_at(x, y);
        self.session.execute(pressed).await?;
        sleep(Duration::from_millis(100)).await;
        self.session.execute(released).await?;
        Ok(())
    }

    pub async fn input(&self, text: impl Into<String>) -> Result<()> {
        self.scroll_into_view().await?;
        self.session
            .execute(cdpilot_cdp::browser_protocol::input::InsertTextParams::new(text))
            .await?;
        Ok(())
    }

    pub async fn set_input_files(&self, files: Vec<String>) -> Result<()> {
        let tag = self.tag().await?;
        let kind = self.attribute("type").await?;
        if tag != "input" || kind.as_deref() != Some("file") {
            return Err(CdpError::ElementNotFileInput);
        }
        let params = SetFileInputFilesParams::new_backend_node(files, self.backend_node_id);
        self.session.execute(params).await?;
        Ok(())
    }

    pub async fn take_screenshot(&self, format: impl Into<String>, quality: Option<i64>) -> Result<Vec<u8>> {
        let bounds = self.bounds().await?;
        let params = CaptureScreenshotParams {
            format: Some(format.into()),
            quality,
            clip: Some(Viewport {
                x: bounds.x,
                y: bounds.y,
                width: bounds.width,
                height: bounds.height,
                scale: 1.0,
            }),
        };
        let data = self.session.execute(params).await?.data;
        base64::Engine::decode(&base64::engine::general_purpose::STANDARD, data).map_err(|_| CdpError::NoResponse)
    }

    pub async fn execute_script(&self, source: impl Into<String>) -> Result<RuntimeValue> {
        let object_id = self.object_id().await?;
        run_script(&self.session, &source.into(), Some(&object_id)).await
    }

    pub async fn find_element(&self, by: By) -> Result<Element> {
        match by.resolve() {
            Locator::Css(selector) => {
                let elements = self.find_by_css(&selector, false).await?;
                elements.into_iter().next().ok_or(CdpError::NoSuchElement)
            }
            Locator::XPath(xpath) => {
                let elements = find_by_xpath_on_element(self, &xpath, false).await?;
                elements.into_iter().next().ok_or(CdpError::NoSuchElement)
            }
        }
    }

    pub async fn find_elements(&self, by: By) -> Result<Vec<Element>> {
        match by.resolve() {
            Locator::Css(selector) => self.find_by_css(&selector, true).await,
            Locator::XPath(xpath) => find_by_xpath_on_element(self, &xpath, true).await,
        }
    }

    async fn find_by_css(&self, selector: &str, multiple: bool) -> Result<Vec<Element>> {
        let node_id = self.current_node_id().await?;
        find_by_css_with_node_id(&self.session, node_id, selector, multiple).await
    }

    pub(crate) async fn find_from_document(session: &Session, by: &By) -> Result<Element> {
        let elements = Self::find_all_from_document(session, by).await?;
        elements.into_iter().next().ok_or(CdpError::NoSuchElement)
    }

    pub(crate) async fn find_all_from_document(session: &Session, by: &By) -> Result<Vec<Element>> {
        match by.resolve() {
            Locator::Css(selector) => {
                let root = document_root(session).await?;
                find_by_css_with_node_id(session, root.node_id, &selector, true).await
            }
            Locator::XPath(xpath) => find_by_xpath_on_document(session, &xpath, true).await,
        }
    }

    pub(crate) async fn execute_document_script(session: &Session, source: impl Into<String>) -> Result<RuntimeValue> {
        run_script(session, &source.into(), None).await
    }
}

/// Either the full `name -> value` attribute map or a single attribute's
/// value, depending on whether [`Element::get_attribute`] was asked for a
/// specific name.
#[derive(Debug, Clone)]
pub enum AttributeLookup {
    Map(std::collections::HashMap<String, String>),
    Value(Option<String>),
}

#[derive(Debug, Clone, Copy, serde::Deserialize)]
pub struct ElementBounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

fn unexpected_scalar(value: RuntimeValue) -> CdpError {
    CdpError::Unsupported(format!("expected a scalar script result, got {value:?}"))
}

async fn document_root(session: &Session) -> Result<Node> {
    let params = GetDocumentParams {
        depth: Some(0),
        pierce: None,
    };
    Ok(session.execute(params).await?.root)
}

async fn find_by_css_with_node_id(session: &Session, node_id: NodeId, selector: &str, multiple: bool) -> Result<Vec<Element>> {
    let node_ids = if multiple {
        session.execute(QuerySelectorAllParams::new(node_id, selector)).await?.node_ids
    } else {
        let found = session.execute(QuerySelectorParams::new(node_id, selector)).await?.node_id;
        if found.0 == 0 {
            return Err(CdpError::NoSuchElement);
        }
        vec![found]
    };

    let mut elements = Vec::with_capacity(node_ids.len());
    for node_id in node_ids {
        if node_id.0 == 0 {
            continue;
        }
        let node = session.execute(DescribeNodeParams {
            node_id: Some(node_id),
            ..Default::default()
        }).await?.node;
        elements.push(Element::new(session.clone(), node.backend_node_id));
    }
    Ok(elements)
}

/// Runs `DOM.performSearch` and always releases the search handle it
/// allocates, on both the success and error paths.
async fn find_by_xpath_on_document(session: &Session, xpath: &str, multiple: bool) -> Result<Vec<Element>> {
    let search = session
        .execute(PerformSearchParams {
            query: xpath.to_string(),
            include_user_agent_shadow_dom: Some(true),
        })
        .await?;
    let search_id = search.search_id.clone();
    let result_count = search.result_count;

    let outcome: Result<Vec<NodeId>> = async {
        let to_index = if multiple { result_count } else { result_count.min(1) };
        if to_index <= 0 {
            return Ok(Vec::new());
        }
        let node_ids = session
            .execute(GetSearchResultsParams::new(search_id.clone(), 0, to_index))
            .await?
            .node_ids;
        Ok(node_ids)
    }
    .await;

    let _ = session.execute(DiscardSearchResultsParams::new(search_id)).await;

    let node_ids = outcome?;
    let mut elements = Vec::with_capacity(node_ids.len());
    for node_id in node_ids {
        if node_id.0 == 0 {
            continue;
        }
        let node = session
            .execute(DescribeNodeParams {
                node_id: Some(node_id),
                ..Default::default()
            })
            .await?
            .node;
        elements.push(Element::new(session.clone(), node.backend_node_id));
    }
    Ok(elements)
}

/// XPath search rooted on an element's own node, evaluated in-page via
/// `document.evaluate(..., this, ...)` since `DOM.performSearch` only
/// searches the whole document.
async fn find_by_xpath_on_element(element: &Element, xpath: &str, multiple: bool) -> Result<Vec<Element>> {
    let script = if multiple {
        find_elements_by_xpath_script(xpath)
    } else {
        find_element_by_xpath_script(xpath)
    };

    let value = element.execute_script(script).await?;
    let object_ids = match value {
        RuntimeValue::Nodes(ids) => ids,
        RuntimeValue::Node(id) => vec![id],
        RuntimeValue::Null => Vec::new(),
        other => return Err(unexpected_scalar(other)),
    };

    let mut elements = Vec::with_capacity(object_ids.len());
    for object_id in object_ids {
        let node = element
            .session
            .execute(DescribeNodeParams {
                object_id: Some(object_id),
                ..Default::default()
            })
            .await?
            .node;
        if node.node_id.0 == 0 {
            element
                .session
                .execute(PushNodesByBackendIdsToFrontendParams::new([node.backend_node_id]))
                .await?;
        }
        elements.push(Element::new(element.session.clone(), node.backend_node_id));
    }
    Ok(elements)
}

async fn run_script(session: &Session, source: &str, object_id: Option<&RemoteObjectId>) -> Result<RuntimeValue> {
    let trimmed = source.trim();
    let result = if trimmed.contains("this") {
        let object_id = object_id.ok_or(CdpError::ParamsMustSpecified("objectId"))?.clone();
        session
            .execute(CallFunctionOnParams::new(trimmed.to_string(), object_id))
            .await?
            .result
    } else {
        let expression = if is_function_expression(trimmed) {
            format!("({trimmed})()")
        } else {
            trimmed.to_string()
        };
        session.execute(EvaluateParams::new(expression)).await?.result
    };
    RuntimeParser::parse(session, result).await
}

/// Approximates the original's `^function.*};?$` regex: a standalone
/// function expression that should be immediately invoked rather than
/// handed to `Runtime.evaluate` as a bare declaration.
fn is_function_expression(source: &str) -> bool {
    let body = source.trim_end().trim_end_matches(';').trim_end();
    source.trim_start().starts_with("function") && body.ends_with('}')
}

fn text_content_script() -> &'static str {
    "function() { return this.textContent; }"
}

fn bounding_client_rect_script() -> &'static str {
    "function() { return JSON.stringify(this.getBoundingClientRect()); }"
}

fn find_element_by_xpath_script(xpath: &str) -> String {
    let escaped = xpath.replace('"', "\\\"");
    format!(
        "function() {{ return document.evaluate(\"{escaped}\", this, null, XPathResult.FIRST_ORDERED_NODE_TYPE, null).singleNodeValue; }}"
    )
}

fn find_elements_by_xpath_script(xpath: &str) -> String {
    let escaped = xpath.replace('"', "\\\"");
    format!(
        "function() {{ var elements = document.evaluate(\"{escaped}\", this, null, XPathResult.ORDERED_NODE_SNAPSHOT_TYPE, null); var results = []; for (var inx = 0; inx < elements.snapshotLength; inx++) {{ results.push(elements.snapshotItem(inx)); }} return results; }}"
    )
}

impl std::fmt::Debug for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Element").field("backend_node_id", &self.backend_node_id).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_standalone_function_expressions() {
        assert!(is_function_expression("function() {\n  return 1;\n}"));
        assert!(is_function_expression("function() { return 1; };"));
    }

    #[test]
    fn evaluate_expressions_are_not_treated_as_function_expressions() {
        assert!(!is_function_expression("document.title"));
    }

    #[test]
    fn xpath_scripts_escape_embedded_quotes() {
        let script = find_element_by_xpath_script(r#"//div[@id="x"]"#);
        assert!(script.contains(r#"\"x\""#));
    }
}
