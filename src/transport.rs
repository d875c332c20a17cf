use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex as StdMutex};
use std::time::Duration;

use async_tungstenite::tokio::{connect_async, ConnectStream};
use async_tungstenite::tungstenite::protocol::Message as WsMessage;
use async_tungstenite::WebSocketStream;
use futures::{SinkExt, StreamExt};
use tokio::sync::Mutex as AsyncMutex;

use cdpilot_types::{MethodCall, Message};

use crate::correlation::CorrelationTable;
use crate::error::{CdpError, Result};
use crate::events::EventRouter;

/// Frames larger than this are rejected by `async-tungstenite` itself; kept
/// here so callers can see the limit without reading the dependency.
pub const MAX_FRAME_SIZE: usize = 10 * 1024 * 1024;

type WsSink = futures::stream::SplitSink<WebSocketStream<ConnectStream>, WsMessage>;
type WsStream = futures::stream::SplitStream<WebSocketStream<ConnectStream>>;

/// One WebSocket connection to a browser endpoint, shared by every
/// [`crate::session::Session`] attached to it. Outgoing writes are
/// serialized through a mutex; a single background task owns the read half
/// and demultiplexes frames into either the [`CorrelationTable`] (command
/// responses) or the per-session [`EventRouter`] registry (events).
pub(crate) struct Transport {
    write: AsyncMutex<WsSink>,
    correlation: Arc<CorrelationTable>,
    routers: StdMutex<HashMap<Option<String>, Arc<EventRouter>>>,
    closed: AtomicBool,
}

impl Transport {
    pub(crate) async fn connect(ws_url: &str) -> Result<Arc<Self>> {
        let (ws, _response) = connect_async(ws_url).await?;
        let (write, read) = ws.split();

        let transport = Arc::new(Self {
            write: AsyncMutex::new(write),
            correlation: Arc::new(CorrelationTable::default()),
            routers: StdMutex::new(HashMap::new()),
            closed: AtomicBool::new(false),
        });

        tokio::spawn(Self::receive_loop(transport.clone(), read));
        Ok(transport)
    }

    /// Registers the router that owns `session_id`'s events. `None` is the
    /// root (browser-wide) session.
    pub(crate) fn register_router(&self, session_id: Option<String>, router: Arc<EventRouter>) {
        self.routers.lock().unwrap().insert(session_id, router);
    }

    pub(crate) fn unregister_router(&self, session_id: &Option<String>) {
        self.routers.lock().unwrap().remove(session_id);
    }

    pub(crate) fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    pub(crate) async fn send_and_await(
        &self,
        method: Cow<'static, str>,
        session_id: Option<String>,
        params: serde_json::Value,
        timeout: Duration,
    ) -> Result<serde_json::Value> {
        if self.is_closed() {
            return Err(CdpError::Disconnected);
        }

        let (id, rx) = self.correlation.allocate();
        let call = MethodCall {
            id,
            session_id,
            method,
            params,
        };
        let payload = serde_json::to_string(&call)?;

        {
            let mut write = self.write.lock().await;
            if let Err(err) = write.send(WsMessage::Text(payload)).await {
                self.correlation.forget(id);
                return Err(err.into());
            }
        }

        match tokio::time::timeout(timeout, rx).await {
            Ok(Ok(Ok(value))) => Ok(value),
            Ok(Ok(Err(err))) => Err(err.into()),
            Ok(Err(_canceled)) => Err(CdpError::Disconnected),
            Err(_elapsed) => {
                self.correlation.forget(id);
                Err(CdpError::Timeout("command response"))
            }
        }
    }

    pub(crate) async fn ping(&self) -> Result<()> {
        let mut write = self.write.lock().await;
        write.send(WsMessage::Ping(Vec::new())).await?;
        Ok(())
    }

    pub(crate) async fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
        self.correlation.drain(&CdpError::Disconnected);
        let mut write = self.write.lock().await;
        let _ = write.close().await;
    }

    async fn receive_loop(transport: Arc<Self>, mut read: WsStream) {
        while let Some(frame) = read.next().await {
            let frame = match frame {
                Ok(frame) => frame,
                Err(err) => {
                    tracing::warn!(error = %err, "websocket read failed, closing transport");
                    break;
                }
            };
            let data = match frame {
                WsMessage::Text(text) => text.into_bytes(),
                WsMessage::Binary(data) => data,
                WsMessage::Ping(_) | WsMessage::Pong(_) | WsMessage::Frame(_) => continue,
                WsMessage::Close(_) => break,
            };

            match serde_json::from_slice::<Message>(&data) {
                Ok(Message::Response(resp)) => {
                    transport.correlation.resolve(resp.id, resp.result, resp.error);
                }
                Ok(Message::Event(event)) => {
                    transport.dispatch_event(event);
                }
                Err(err) => {
                    tracing::warn!(error = %err, "failed to decode frame");
                }
            }
        }

        transport.closed.store(true, Ordering::SeqCst);
        transport.correlation.drain(&CdpError::Disconnected);
    }

    fn dispatch_event(&self, event: cdpilot_types::CdpEvent) {
        use cdpilot_types::{Event as _, Method as _};

        let session_key = event.session_id().map(|s| s.to_string());
        let routers = self.routers.lock().unwrap();
        if let Some(router) = routers.get(&session_key) {
            router.dispatch(&event.identifier(), &event.params);
        } else {
            tracing::debug!(
                method = %event.identifier(),
                session_id = ?session_key,
                "event for unregistered session dropped"
            );
        }
    }
}

impl std::fmt::Debug for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transport")
            .field("closed", &self.is_closed())
            .finish_non_exhaustive()
    }
}
