use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex as AsyncMutex;
use tokio::time::sleep;

use cdpilot_cdp::browser_protocol::browser::BrowserContextId;
use cdpilot_cdp::browser_protocol::dom::{
    BackendNodeId, EnableParams as DomEnableParams, GetDocumentParams, GetOuterHtmlParams, SetFileInputFilesParams,
};
use cdpilot_cdp::browser_protocol::page::{
    BringToFrontParams, CaptureScreenshotParams, CloseParams as PageCloseParams, EnableParams as PageEnableParams,
    FileChooserOpenedEvent, NavigateParams, PrintToPdfParams, ReloadParams, SetInterceptFileChooserDialogParams,
};
use cdpilot_cdp::browser_protocol::target::{ActivateTargetParams, CreateTargetParams, GetTargetInfoParams, TargetId, TargetInfo};
use cdpilot_cdp::js_protocol::runtime::{EnableParams as RuntimeEnableParams, EvaluateParams};

use crate::element::Element;
use crate::error::{CdpError, Result};
use crate::session::{Session, SessionManager};

/// A single browser tab, bound to one target and the session attached to
/// it. Created already navigated: construction awaits the initial page
/// load the same way `go_to`/`refresh` do.
pub struct Tab {
    session: Session,
    sessions: Arc<SessionManager>,
    target_id: TargetId,
    context_id: Option<BrowserContextId>,
    page_load_timeout: Duration,
    root_node: AsyncMutex<Option<BackendNodeId>>,
    domains_enabled: AsyncMutex<bool>,
}

impl Tab {
    pub(crate) async fn attach(
        sessions: Arc<SessionManager>,
        target_id: TargetId,
        context_id: Option<BrowserContextId>,
        page_load_timeout: Duration,
    ) -> Result<Self> {
        let session = sessions.get_session(&target_id).await?;
        let tab = Self {
            session,
            sessions,
            target_id,
            context_id,
            page_load_timeout,
            root_node: AsyncMutex::new(None),
            domains_enabled: AsyncMutex::new(false),
        };
        tab.wait_page_load().await?;
        Ok(tab)
    }

    pub(crate) fn session(&self) -> &Session {
        &self.session
    }

    pub(crate) fn target_id(&self) -> &TargetId {
        &self.target_id
    }

    async fn ensure_domains_enabled(&self) -> Result<()> {
        let mut enabled = self.domains_enabled.lock().await;
        if *enabled {
            return Ok(());
        }
        self.session.execute(PageEnableParams {}).await?;
        self.session.execute(DomEnableParams {}).await?;
        self.session.execute(RuntimeEnableParams {}).await?;
        *enabled = true;
        Ok(())
    }

    async fn wait_page_load(&self) -> Result<()> {
        self.ensure_domains_enabled().await?;

        let deadline = tokio::time::Instant::now() + self.page_load_timeout;
        loop {
            let ready = self
                .session
                .execute(EvaluateParams::new("document.readyState"))
                .await?
                .result
                .value
                == Some(serde_json::json!("complete"));
            if ready {
                break;
            }
            if tokio::time::Instant::now() >= deadline {
                return Err(CdpError::Timeout("page load"));
            }
            sleep(Duration::from_millis(500)).await;
        }

        *self.root_node.lock().await = None;
        Ok(())
    }

    pub async fn go_to(&self, url: impl Into<String>) -> Result<()> {
        self.session.execute(NavigateParams::new(url)).await?;
        self.wait_page_load().await
    }

    pub async fn refresh(&self, ignore_cache: Option<bool>, script_on_load: Option<String>) -> Result<()> {
        let params = ReloadParams {
            ignore_cache,
            script_to_evaluate_on_load: script_on_load,
        };
        self.session.execute(params).await?;
        self.wait_page_load().await
    }

    pub async fn close(&self) -> Result<()> {
        self.session.execute(PageCloseParams {}).await?;
        self.sessions.remove_session(&self.target_id).await;
        self.session.close();
        Ok(())
    }

    pub async fn activate(&self) -> Result<()> {
        self.session
            .execute(ActivateTargetParams::new(self.target_id.clone()))
            .await?;
        self.session.execute(BringToFrontParams {}).await?;
        Ok(())
    }

    pub async fn new_tab(&self, url: impl Into<String>) -> Result<Tab> {
        let root = self.sessions.get_root_session().await?;
        let mut params = cdpilot_cdp::browser_protocol::target::CreateTargetParams::new(url);
        if let Some(context_id) = &self.context_id {
            params = params.with_browser_context(context_id.clone());
        }
        let target_id = root.execute(params).await?.target_id;
        Tab::attach(self.sessions.clone(), target_id, self.context_id.clone(), self.page_load_timeout).await
    }

    pub async fn current_url(&self) -> Result<String> {
        Ok(self.target_info().await?.url)
    }

    pub async fn title(&self) -> Result<String> {
        Ok(self.target_info().await?.title)
    }

    async fn target_info(&self) -> Result<cdpilot_cdp::browser_protocol::target::TargetInfo> {
        let root = self.sessions.get_root_session().await?;
        let params = GetTargetInfoParams::new(self.target_id.clone());
        Ok(root.execute(params).await?.target_info)
    }

    async fn root_backend_node_id(&self) -> Result<BackendNodeId> {
        let mut cached = self.root_node.lock().await;
        if let Some(id) = *cached {
            return Ok(id);
        }
        let root = self.session.execute(GetDocumentParams { depth: Some(0), pierce: None }).await?.root;
        *cached = Some(root.backend_node_id);
        Ok(root.backend_node_id)
    }

    pub async fn page_source(&self) -> Result<String> {
        let backend_node_id = self.root_backend_node_id().await?;
        let params = GetOuterHtmlParams::new_backend_node(backend_node_id);
        Ok(self.session.execute(params).await?.outer_html)
    }

    pub async fn take_screenshot(&self, path: Option<&Path>) -> Result<Vec<u8>> {
        let params = CaptureScreenshotParams::default();
        let data = self.session.execute(params).await?.data;
        let bytes = base64::Engine::decode(&base64::engine::general_purpose::STANDARD, data)
            .map_err(|_| CdpError::NoResponse)?;
        if let Some(path) = path {
            write_bytes(path, &bytes).await?;
        }
        Ok(bytes)
    }

    pub async fn print_to_pdf(&self, path: Option<&Path>) -> Result<Vec<u8>> {
        let params = PrintToPdfParams::default();
        let data = self.session.execute(params).await?.data;
        let bytes = base64::Engine::decode(&base64::engine::general_purpose::STANDARD, data)
            .map_err(|_| CdpError::NoResponse)?;
        if let Some(path) = path {
            write_bytes(path, &bytes).await?;
        }
        Ok(bytes)
    }

    /// Intercepts the next file chooser dialog and feeds it `files`. The
    /// interception flag is always cleared on the way out, success or not.
    pub async fn expect_file_chooser<F, Fut, T>(&self, files: Vec<String>, action: F) -> Result<T>
    where
        F: FnOnce() -> Fut,
        Fut: std::future::Future<Output = Result<T>>,
    {
        self.session
            .execute(SetInterceptFileChooserDialogParams::new(true))
            .await?;

        let session = self.session.clone_for_event_handler();
        let files_for_handler = files;
        let subscription = self.session.on("Page.fileChooserOpened", true, move |payload| {
            let Ok(event) = serde_json::from_value::<FileChooserOpenedEvent>(payload.clone()) else {
                return;
            };
            let params = SetFileInputFilesParams::new_backend_node(files_for_handler.clone(), event.backend_node_id);
            let session = session.clone();
            tokio::spawn(async move {
                let _ = session.execute(params).await;
            });
        });

        let result = action().await;

        self.session.unregister(subscription);
        let _ = self.session.execute(SetInterceptFileChooserDialogParams::new(false)).await;
        result
    }

    pub async fn find_element(&self, by: crate::by::By) -> Result<Element> {
        Element::find_from_document(&self.session, &by).await
    }

    pub async fn find_elements(&self, by: crate::by::By) -> Result<Vec<Element>> {
        Element::find_all_from_document(&self.session, &by).await
    }

    pub async fn execute_script(&self, source: impl Into<String>) -> Result<crate::js::RuntimeValue> {
        Element::execute_document_script(&self.session, source).await
    }
}

async fn write_bytes(path: &Path, bytes: &[u8]) -> Result<()> {
    let mut file = tokio::fs::File::create(path).await?;
    file.write_all(bytes).await?;
    Ok(())
}
