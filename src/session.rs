use std::collections::HashMap;
use std::sync::{Arc, Mutex as StdMutex};
use std::time::Duration;

use cdpilot_types::Command;
use serde_json::Value;
use tokio::sync::Mutex as AsyncMutex;

use cdpilot_cdp::browser_protocol::target::{AttachToTargetParams, DetachFromTargetParams, SessionId, TargetId};

use crate::error::{CdpError, Result};
use crate::events::{EventRouter, SubscriptionId};
use crate::transport::Transport;

const DEFAULT_COMMAND_TIMEOUT: Duration = Duration::from_secs(30);

/// A connection to either the browser itself (`session_id: None`, a
/// "RootSession") or a single target ("TargetSession", `session_id: Some`),
/// sharing one underlying [`Transport`]. Cheap to clone; every clone refers
/// to the same event router and correlation table.
#[derive(Clone)]
pub(crate) struct Session {
    transport: Arc<Transport>,
    session_id: Option<String>,
    router: Arc<EventRouter>,
}

impl Session {
    fn new(transport: Arc<Transport>, session_id: Option<String>) -> Self {
        let router = Arc::new(EventRouter::default());
        transport.register_router(session_id.clone(), router.clone());
        Self {
            transport,
            session_id,
            router,
        }
    }

    pub(crate) fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    pub(crate) async fn execute<C: Command>(&self, command: C) -> Result<C::Response> {
        let method = command.identifier();
        let params = serde_json::to_value(&command)?;
        let result = self
            .transport
            .send_and_await(method, self.session_id.clone(), params, DEFAULT_COMMAND_TIMEOUT)
            .await?;
        Ok(serde_json::from_value(result)?)
    }

    pub(crate) async fn execute_with_timeout<C: Command>(&self, command: C, timeout: Duration) -> Result<C::Response> {
        let method = command.identifier();
        let params = serde_json::to_value(&command)?;
        let result = self
            .transport
            .send_and_await(method, self.session_id.clone(), params, timeout)
            .await?;
        Ok(serde_json::from_value(result)?)
    }

    pub(crate) fn on(
        &self,
        event_name: impl Into<String>,
        one_shot: bool,
        callback: impl FnMut(&Value) + Send + 'static,
    ) -> SubscriptionId {
        self.router.register(event_name, one_shot, callback)
    }

    pub(crate) fn unregister(&self, id: SubscriptionId) {
        self.router.unregister(id);
    }

    pub(crate) async fn ping(&self) -> Result<()> {
        self.transport.ping().await
    }

    pub(crate) fn close(&self) {
        self.transport.unregister_router(&self.session_id);
    }

    /// A clone usable from inside a `'static` event callback, which cannot
    /// itself borrow `&self`. Shares the same transport, session id and
    /// router as the original.
    pub(crate) fn clone_for_event_handler(&self) -> Self {
        self.clone()
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session").field("session_id", &self.session_id).finish()
    }
}

/// Owns the single [`Transport`] for a browser endpoint plus the cache of
/// per-target [`Session`]s attached over it. Sessions are created lazily on
/// first use and kept until [`SessionManager::remove_session`] is called.
pub(crate) struct SessionManager {
    host: String,
    port: u16,
    transport: AsyncMutex<Option<Arc<Transport>>>,
    root: AsyncMutex<Option<Session>>,
    targets: StdMutex<HashMap<TargetId, Session>>,
}

impl SessionManager {
    pub(crate) fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            transport: AsyncMutex::new(None),
            root: AsyncMutex::new(None),
            targets: StdMutex::new(HashMap::new()),
        }
    }

    async fn transport(&self) -> Result<Arc<Transport>> {
        let mut slot = self.transport.lock().await;
        if let Some(existing) = slot.as_ref() {
            if !existing.is_closed() {
                return Ok(existing.clone());
            }
        }
        let ws_url = resolve_ws_url(&self.host, self.port).await?;
        let transport = Transport::connect(&ws_url).await?;
        *slot = Some(transport.clone());
        Ok(transport)
    }

    pub(crate) async fn get_root_session(&self) -> Result<Session> {
        let mut root = self.root.lock().await;
        if let Some(session) = root.as_ref() {
            return Ok(session.clone());
        }
        let transport = self.transport().await?;
        let session = Session::new(transport, None);
        *root = Some(session.clone());
        Ok(session)
    }

    pub(crate) async fn get_session(&self, target_id: &TargetId) -> Result<Session> {
        if let Some(session) = self.targets.lock().unwrap().get(target_id) {
            return Ok(session.clone());
        }

        let root = self.get_root_session().await?;
        let attach = AttachToTargetParams::new(target_id.clone());
        let returns = root.execute(attach).await?;
        let session_id: SessionId = returns.session_id;

        let transport = self.transport().await?;
        let session = Session::new(transport, Some(session_id.to_string()));
        self.targets.lock().unwrap().insert(target_id.clone(), session.clone());
        Ok(session)
    }

    /// Detaches the target's session from the browser side and drops it
    /// from the cache. Detach failures (e.g. the target is already gone)
    /// are logged but don't stop the local cleanup.
    pub(crate) async fn remove_session(&self, target_id: &TargetId) {
        let Some(session) = self.targets.lock().unwrap().remove(target_id) else {
            return;
        };
        if let Some(session_id) = session.session_id() {
            let detach = DetachFromTargetParams::with_session(session_id.into());
            if let Ok(root) = self.get_root_session().await {
                if let Err(err) = root.execute(detach).await {
                    tracing::warn!(target_id = %target_id, error = %err, "failed to detach session");
                }
            }
        }
        session.close();
    }
}

async fn resolve_ws_url(host: &str, port: u16) -> Result<String> {
    let url = format!("http://{host}:{port}/json/version");
    let body: Value = reqwest::get(&url).await?.json().await?;
    body.get("webSocketDebuggerUrl")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or(CdpError::BrowserLaunchError)
}
