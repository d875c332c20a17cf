use std::collections::HashSet;
use std::sync::{Arc, Mutex as StdMutex};
use std::time::Duration;

use indexmap::IndexMap;

use cdpilot_cdp::browser_protocol::browser::{
    Bounds, BrowserContextId, GetWindowForTargetParams, SetDownloadBehaviorParams, SetWindowBoundsParams, WindowId,
    WindowState,
};
use cdpilot_cdp::browser_protocol::network::{Cookie, CookieParam};
use cdpilot_cdp::browser_protocol::storage::{ClearCookiesParams, GetCookiesParams, SetCookiesParams};
use cdpilot_cdp::browser_protocol::target::{
    CreateBrowserContextParams, CreateTargetParams, DisposeBrowserContextParams, GetBrowserContextsParams,
    GetTargetsParams, SetDiscoverTargetsParams, TargetCreatedEvent, TargetDestroyedEvent, TargetId, TargetInfo,
};

use crate::error::Result;
use crate::process::BrowserProcess;
use crate::session::SessionManager;
use crate::tab::Tab;

/// Insertion-ordered so `get_tab(None)` can take the *last* live target the
/// way `Target.getTargets` orders them, rather than an arbitrary one — a
/// plain `HashMap` would not preserve that order.
type LiveTargets = Arc<StdMutex<IndexMap<TargetId, TargetInfo>>>;

fn is_ignored_target(info: &TargetInfo) -> bool {
    info.url.starts_with("chrome-extension://") || info.url.starts_with("devtools://")
}

/// Top-level handle returned by `launch`/`connect`. Owns the session
/// manager shared by every context and tab, the optional local browser
/// process, and a cache of live targets kept fresh by the
/// `Target.targetCreated`/`targetDestroyed` handlers registered in `init`.
pub struct ContextManager {
    sessions: Arc<SessionManager>,
    contexts: StdMutex<HashSet<BrowserContextId>>,
    live_targets: LiveTargets,
    default_context: Option<BrowserContextId>,
    page_load_timeout: Duration,
    process: Option<tokio::sync::Mutex<BrowserProcess>>,
}

impl ContextManager {
    pub(crate) async fn init(
        sessions: Arc<SessionManager>,
        page_load_timeout: Duration,
        process: Option<BrowserProcess>,
    ) -> Result<Self> {
        let root = sessions.get_root_session().await?;

        let existing_contexts = root
            .execute(GetBrowserContextsParams {})
            .await?
            .browser_context_ids;
        let existing: HashSet<BrowserContextId> = existing_contexts.into_iter().collect();

        let targets = root.execute(GetTargetsParams {}).await?.target_infos;
        let live: IndexMap<TargetId, TargetInfo> = targets
            .iter()
            .filter(|t| !is_ignored_target(t))
            .map(|t| (t.target_id.clone(), t.clone()))
            .collect();

        let active_contexts: HashSet<BrowserContextId> =
            live.values().filter_map(|t| t.browser_context_id.clone()).collect();

        for stale in existing.difference(&active_contexts) {
            let _ = root.execute(DisposeBrowserContextParams::new(stale.clone())).await;
        }

        let default_context = active_contexts
            .iter()
            .find(|id| !existing.contains(*id))
            .or_else(|| active_contexts.iter().next())
            .cloned();

        root.execute(SetDiscoverTargetsParams::new(true)).await?;

        let live_targets: LiveTargets = Arc::new(StdMutex::new(live));

        let created_cache = live_targets.clone();
        root.on("Target.targetCreated", false, move |payload| {
            if let Ok(event) = serde_json::from_value::<TargetCreatedEvent>(payload.clone()) {
                if !is_ignored_target(&event.target_info) {
                    created_cache
                        .lock()
                        .unwrap()
                        .insert(event.target_info.target_id.clone(), event.target_info);
                }
            }
        });

        let destroyed_cache = live_targets.clone();
        root.on("Target.targetDestroyed", false, move |payload| {
            if let Ok(event) = serde_json::from_value::<TargetDestroyedEvent>(payload.clone()) {
                destroyed_cache.lock().unwrap().shift_remove(&event.target_id);
            }
        });

        Ok(Self {
            sessions,
            contexts: StdMutex::new(existing),
            live_targets,
            default_context,
            page_load_timeout,
            process: process.map(tokio::sync::Mutex::new),
        })
    }

    /// Returns a handle to `id`, or the context the browser opened with if
    /// `id` is `None`.
    pub fn get_context(&self, id: Option<BrowserContextId>) -> BrowserContext {
        BrowserContext {
            id: id.or_else(|| self.default_context.clone()),
            sessions: self.sessions.clone(),
            live_targets: self.live_targets.clone(),
            page_load_timeout: self.page_load_timeout,
        }
    }

    pub async fn new_context(&self) -> Result<BrowserContext> {
        let root = self.sessions.get_root_session().await?;
        let id = root.execute(CreateBrowserContextParams {}).await?.browser_context_id;
        self.contexts.lock().unwrap().insert(id.clone());
        Ok(BrowserContext {
            id: Some(id),
            sessions: self.sessions.clone(),
            live_targets: self.live_targets.clone(),
            page_load_timeout: self.page_load_timeout,
        })
    }

    pub async fn delete_context(&self, context: &BrowserContext) -> Result<()> {
        let Some(id) = context.id.clone() else {
            return Ok(());
        };
        let root = self.sessions.get_root_session().await?;
        root.execute(DisposeBrowserContextParams::new(id.clone())).await?;
        self.contexts.lock().unwrap().remove(&id);
        Ok(())
    }

    /// Shuts down the root session and, if this manager launched its own
    /// browser, stops that subprocess.
    pub async fn close(&self) -> Result<()> {
        if let Some(process) = &self.process {
            process.lock().await.stop().await;
        }
        Ok(())
    }
}

/// A browser context (profile). Cookies, downloads, and window state are
/// scoped to the context; tabs created through it inherit its
/// `BrowserContextId` unless the caller overrides it explicitly.
#[derive(Clone)]
pub struct BrowserContext {
    id: Option<BrowserContextId>,
    sessions: Arc<SessionManager>,
    live_targets: LiveTargets,
    page_load_timeout: Duration,
}

impl BrowserContext {
    pub fn id(&self) -> Option<&BrowserContextId> {
        self.id.as_ref()
    }

    pub async fn new_tab(&self, url: impl Into<String>) -> Result<Tab> {
        let root = self.sessions.get_root_session().await?;
        let mut params = CreateTargetParams::new(url);
        if let Some(id) = &self.id {
            params = params.with_browser_context(id.clone());
        }
        let target_id = root.execute(params).await?.target_id;
        Tab::attach(self.sessions.clone(), target_id, self.id.clone(), self.page_load_timeout).await
    }

    /// Returns the tab for `target_id`, or, if `None`, the most recently
    /// created live target in this context — opening a blank tab if the
    /// context has none yet.
    pub async fn get_tab(&self, target_id: Option<TargetId>) -> Result<Tab> {
        let target_id = match target_id {
            Some(id) => id,
            None => {
                let candidate = self
                    .live_targets
                    .lock()
                    .unwrap()
                    .values()
                    .filter(|t| t.browser_context_id == self.id)
                    .last()
                    .map(|t| t.target_id.clone());
                match candidate {
                    Some(id) => id,
                    None => return self.new_tab("about:blank").await,
                }
            }
        };
        Tab::attach(self.sessions.clone(), target_id, self.id.clone(), self.page_load_timeout).await
    }

    pub async fn set_cookies(&self, cookies: Vec<CookieParam>) -> Result<()> {
        let root = self.sessions.get_root_session().await?;
        let mut params = SetCookiesParams::new(cookies);
        params.browser_context_id = self.id.clone();
        root.execute(params).await?;
        Ok(())
    }

    pub async fn get_cookies(&self) -> Result<Vec<Cookie>> {
        let root = self.sessions.get_root_session().await?;
        let params = GetCookiesParams {
            browser_context_id: self.id.clone(),
        };
        Ok(root.execute(params).await?.cookies)
    }

    pub async fn delete_all_cookies(&self) -> Result<()> {
        let root = self.sessions.get_root_session().await?;
        let params = ClearCookiesParams {
            browser_context_id: self.id.clone(),
        };
        root.execute(params).await?;
        Ok(())
    }

    pub async fn set_download_behavior(&self, behavior: impl Into<String>, path: Option<String>) -> Result<()> {
        let root = self.sessions.get_root_session().await?;
        let mut params = SetDownloadBehaviorParams::new(behavior);
        params.browser_context_id = self.id.clone();
        params.download_path = path;
        root.execute(params).await?;
        Ok(())
    }

    pub async fn set_download_path(&self, path: impl Into<String>) -> Result<()> {
        self.set_download_behavior("allow", Some(path.into())).await
    }

    pub async fn get_window_id(&self, target_id: Option<TargetId>) -> Result<WindowId> {
        let root = self.sessions.get_root_session().await?;
        let params = GetWindowForTargetParams { target_id };
        Ok(root.execute(params).await?.window_id)
    }

    async fn set_window_state(&self, target_id: Option<TargetId>, state: WindowState) -> Result<()> {
        let window_id = self.get_window_id(target_id).await?;
        let root = self.sessions.get_root_session().await?;
        root.execute(SetWindowBoundsParams::new(window_id, Bounds::with_state(state)))
            .await?;
        Ok(())
    }

    pub async fn set_window_maximized(&self, target_id: Option<TargetId>) -> Result<()> {
        self.set_window_state(target_id, WindowState::Maximized).await
    }

    pub async fn set_window_minimized(&self, target_id: Option<TargetId>) -> Result<()> {
        self.set_window_state(target_id, WindowState::Minimized).await
    }

    pub async fn set_window_bounds(&self, target_id: Option<TargetId>, bounds: Bounds) -> Result<()> {
        let window_id = self.get_window_id(target_id).await?;
        let root = self.sessions.get_root_session().await?;
        root.execute(SetWindowBoundsParams::new(window_id, bounds)).await?;
        Ok(())
    }
}

impl std::fmt::Debug for BrowserContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BrowserContext").field("id", &self.id).finish()
    }
}
