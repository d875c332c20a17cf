use cdpilot_types::{Command, Method};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

#[doc = "Unique DOM node identifier, local to the current document. Invalidated whenever the document is re-navigated."]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub i64);

#[doc = "Unique DOM node identifier stable across the document's lifetime, valid even before the node has been pushed to the front end."]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BackendNodeId(pub i64);

#[doc = "DOM interaction is implemented in terms of the accessible elements of the page, as represented by the Node type."]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub node_id: NodeId,
    pub backend_node_id: BackendNodeId,
    #[serde(rename = "nodeType")]
    pub node_type: i64,
    #[serde(rename = "nodeName")]
    pub node_name: String,
    #[serde(rename = "localName")]
    pub local_name: String,
    #[serde(rename = "nodeValue")]
    pub node_value: String,
    #[serde(skip_serializing_if = "Option::is_none", rename = "parentId")]
    pub parent_id: Option<NodeId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Node>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_id: Option<super::page::FrameId>,
}

#[doc = "[getDocument](https://chromedevtools.github.io/devtools-protocol/tot/DOM/#method-getDocument)"]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetDocumentParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pierce: Option<bool>,
}

impl GetDocumentParams {
    pub const IDENTIFIER: &'static str = "DOM.getDocument";
}

impl Method for GetDocumentParams {
    fn identifier(&self) -> Cow<'static, str> {
        Self::IDENTIFIER.into()
    }
}

impl Command for GetDocumentParams {
    type Response = GetDocumentReturns;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetDocumentReturns {
    pub root: Node,
}

#[doc = "[describeNode](https://chromedevtools.github.io/devtools-protocol/tot/DOM/#method-describeNode)"]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeNodeParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_id: Option<NodeId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backend_node_id: Option<BackendNodeId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_id: Option<super::super::js_protocol::runtime::RemoteObjectId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<i64>,
}

impl DescribeNodeParams {
    pub const IDENTIFIER: &'static str = "DOM.describeNode";

    pub fn new_backend_node(backend_node_id: BackendNodeId) -> Self {
        Self {
            backend_node_id: Some(backend_node_id),
            ..Default::default()
        }
    }
}

impl Method for DescribeNodeParams {
    fn identifier(&self) -> Cow<'static, str> {
        Self::IDENTIFIER.into()
    }
}

impl Command for DescribeNodeParams {
    type Response = DescribeNodeReturns;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DescribeNodeReturns {
    pub node: Node,
}

#[doc = "[resolveNode](https://chromedevtools.github.io/devtools-protocol/tot/DOM/#method-resolveNode)"]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveNodeParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_id: Option<NodeId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backend_node_id: Option<BackendNodeId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_group: Option<String>,
}

impl ResolveNodeParams {
    pub const IDENTIFIER: &'static str = "DOM.resolveNode";

    pub fn new_backend_node(backend_node_id: BackendNodeId) -> Self {
        Self {
            backend_node_id: Some(backend_node_id),
            ..Default::default()
        }
    }
}

impl Method for ResolveNodeParams {
    fn identifier(&self) -> Cow<'static, str> {
        Self::IDENTIFIER.into()
    }
}

impl Command for ResolveNodeParams {
    type Response = ResolveNodeReturns;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolveNodeReturns {
    pub object: super::super::js_protocol::runtime::RemoteObject,
}

#[doc = "[querySelector](https://chromedevtools.github.io/devtools-protocol/tot/DOM/#method-querySelector)"]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuerySelectorParams {
    pub node_id: NodeId,
    pub selector: String,
}

impl QuerySelectorParams {
    pub const IDENTIFIER: &'static str = "DOM.querySelector";

    pub fn new(node_id: NodeId, selector: impl Into<String>) -> Self {
        Self {
            node_id,
            selector: selector.into(),
        }
    }
}

impl Method for QuerySelectorParams {
    fn identifier(&self) -> Cow<'static, str> {
        Self::IDENTIFIER.into()
    }
}

impl Command for QuerySelectorParams {
    type Response = QuerySelectorReturns;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuerySelectorReturns {
    pub node_id: NodeId,
}

#[doc = "[querySelectorAll](https://chromedevtools.github.io/devtools-protocol/tot/DOM/#method-querySelectorAll)"]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuerySelectorAllParams {
    pub node_id: NodeId,
    pub selector: String,
}

impl QuerySelectorAllParams {
    pub const IDENTIFIER: &'static str = "DOM.querySelectorAll";

    pub fn new(node_id: NodeId, selector: impl Into<String>) -> Self {
        Self {
            node_id,
            selector: selector.into(),
        }
    }
}

impl Method for QuerySelectorAllParams {
    fn identifier(&self) -> Cow<'static, str> {
        Self::IDENTIFIER.into()
    }
}

impl Command for QuerySelectorAllParams {
    type Response = QuerySelectorAllReturns;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuerySelectorAllReturns {
    pub node_ids: Vec<NodeId>,
}

#[doc = "[pushNodesByBackendIdsToFrontend](https://chromedevtools.github.io/devtools-protocol/tot/DOM/#method-pushNodesByBackendIdsToFrontend)"]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PushNodesByBackendIdsToFrontendParams {
    pub backend_node_ids: Vec<BackendNodeId>,
}

impl PushNodesByBackendIdsToFrontendParams {
    pub const IDENTIFIER: &'static str = "DOM.pushNodesByBackendIdsToFrontend";

    pub fn new(backend_node_ids: impl Into<Vec<BackendNodeId>>) -> Self {
        Self {
            backend_node_ids: backend_node_ids.into(),
        }
    }
}

impl Method for PushNodesByBackendIdsToFrontendParams {
    fn identifier(&self) -> Cow<'static, str> {
        Self::IDENTIFIER.into()
    }
}

impl Command for PushNodesByBackendIdsToFrontendParams {
    type Response = PushNodesByBackendIdsToFrontendReturns;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PushNodesByBackendIdsToFrontendReturns {
    pub node_ids: Vec<NodeId>,
}

#[doc = "[scrollIntoViewIfNeeded](https://chromedevtools.github.io/devtools-protocol/tot/DOM/#method-scrollIntoViewIfNeeded)"]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollIntoViewIfNeededParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_id: Option<NodeId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backend_node_id: Option<BackendNodeId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_id: Option<super::super::js_protocol::runtime::RemoteObjectId>,
}

impl ScrollIntoViewIfNeededParams {
    pub const IDENTIFIER: &'static str = "DOM.scrollIntoViewIfNeeded";

    pub fn new_node(node_id: NodeId) -> Self {
        Self {
            node_id: Some(node_id),
            ..Default::default()
        }
    }
}

impl Method for ScrollIntoViewIfNeededParams {
    fn identifier(&self) -> Cow<'static, str> {
        Self::IDENTIFIER.into()
    }
}

impl Command for ScrollIntoViewIfNeededParams {
    type Response = serde_json::Value;
}

#[doc = "[setFileInputFiles](https://chromedevtools.github.io/devtools-protocol/tot/DOM/#method-setFileInputFiles)"]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetFileInputFilesParams {
    pub files: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_id: Option<NodeId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backend_node_id: Option<BackendNodeId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_id: Option<super::super::js_protocol::runtime::RemoteObjectId>,
}

impl SetFileInputFilesParams {
    pub const IDENTIFIER: &'static str = "DOM.setFileInputFiles";

    pub fn new_backend_node(files: Vec<String>, backend_node_id: BackendNodeId) -> Self {
        Self {
            files,
            backend_node_id: Some(backend_node_id),
            ..Default::default()
        }
    }
}

impl Method for SetFileInputFilesParams {
    fn identifier(&self) -> Cow<'static, str> {
        Self::IDENTIFIER.into()
    }
}

impl Command for SetFileInputFilesParams {
    type Response = serde_json::Value;
}

#[doc = "[performSearch](https://chromedevtools.github.io/devtools-protocol/tot/DOM/#method-performSearch) Runs the XPath or plain-text query against the document, returning a handle used to page through results."]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformSearchParams {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_user_agent_shadow_dom: Option<bool>,
}

impl PerformSearchParams {
    pub const IDENTIFIER: &'static str = "DOM.performSearch";

    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            include_user_agent_shadow_dom: None,
        }
    }
}

impl Method for PerformSearchParams {
    fn identifier(&self) -> Cow<'static, str> {
        Self::IDENTIFIER.into()
    }
}

impl Command for PerformSearchParams {
    type Response = PerformSearchReturns;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformSearchReturns {
    pub search_id: String,
    pub result_count: i64,
}

#[doc = "[getSearchResults](https://chromedevtools.github.io/devtools-protocol/tot/DOM/#method-getSearchResults)"]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetSearchResultsParams {
    pub search_id: String,
    pub from_index: i64,
    pub to_index: i64,
}

impl GetSearchResultsParams {
    pub const IDENTIFIER: &'static str = "DOM.getSearchResults";

    pub fn new(search_id: impl Into<String>, from_index: i64, to_index: i64) -> Self {
        Self {
            search_id: search_id.into(),
            from_index,
            to_index,
        }
    }
}

impl Method for GetSearchResultsParams {
    fn identifier(&self) -> Cow<'static, str> {
        Self::IDENTIFIER.into()
    }
}

impl Command for GetSearchResultsParams {
    type Response = GetSearchResultsReturns;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetSearchResultsReturns {
    pub node_ids: Vec<NodeId>,
}

#[doc = "[discardSearchResults](https://chromedevtools.github.io/devtools-protocol/tot/DOM/#method-discardSearchResults) Frees the buffer held for a prior performSearch. Callers must always issue this, including on error paths, or the search handle leaks for the life of the session."]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscardSearchResultsParams {
    pub search_id: String,
}

impl DiscardSearchResultsParams {
    pub const IDENTIFIER: &'static str = "DOM.discardSearchResults";

    pub fn new(search_id: impl Into<String>) -> Self {
        Self {
            search_id: search_id.into(),
        }
    }
}

impl Method for DiscardSearchResultsParams {
    fn identifier(&self) -> Cow<'static, str> {
        Self::IDENTIFIER.into()
    }
}

impl Command for DiscardSearchResultsParams {
    type Response = serde_json::Value;
}

#[doc = "[getOuterHTML](https://chromedevtools.github.io/devtools-protocol/tot/DOM/#method-getOuterHTML)"]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetOuterHtmlParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_id: Option<NodeId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backend_node_id: Option<BackendNodeId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_id: Option<super::super::js_protocol::runtime::RemoteObjectId>,
}

impl GetOuterHtmlParams {
    pub const IDENTIFIER: &'static str = "DOM.getOuterHTML";

    pub fn new_backend_node(backend_node_id: BackendNodeId) -> Self {
        Self {
            backend_node_id: Some(backend_node_id),
            ..Default::default()
        }
    }
}

impl Method for GetOuterHtmlParams {
    fn identifier(&self) -> Cow<'static, str> {
        Self::IDENTIFIER.into()
    }
}

impl Command for GetOuterHtmlParams {
    type Response = GetOuterHtmlReturns;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetOuterHtmlReturns {
    pub outer_html: String,
}

#[doc = "[enable](https://chromedevtools.github.io/devtools-protocol/tot/DOM/#method-enable)"]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnableParams {}

impl EnableParams {
    pub const IDENTIFIER: &'static str = "DOM.enable";
}

impl Method for EnableParams {
    fn identifier(&self) -> Cow<'static, str> {
        Self::IDENTIFIER.into()
    }
}

impl Command for EnableParams {
    type Response = serde_json::Value;
}
