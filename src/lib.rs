//! `cdpilot` drives a Chromium-family browser over the Chrome DevTools
//! Protocol: one WebSocket per browser endpoint, multiplexed into
//! [`Session`](crate::session::Session)s per target, with a
//! `ContextManager` → `BrowserContext` → `Tab` → `Element` object model
//! layered on top. Call [`launch`] to spawn a local browser or [`connect`]
//! to attach to one already listening on a debugging port.
//!
//! ```no_run
//! # async fn run() -> cdpilot::Result<()> {
//! let manager = cdpilot::launch(cdpilot::BrowserConfig::builder().build()).await?;
//! let context = manager.get_context(None);
//! let tab = context.new_tab("https://example.com").await?;
//! let heading = tab.find_element(cdpilot::By::tag_name("h1")).await?;
//! println!("{}", heading.text().await?);
//! manager.close().await?;
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;
use std::time::Duration;

mod by;
mod context;
mod correlation;
mod element;
mod error;
mod events;
mod js;
mod process;
mod session;
mod tab;
mod transport;

pub use by::By;
pub use context::{BrowserContext, ContextManager};
pub use element::{AttributeLookup, Element, ElementBounds};
pub use error::{CdpError, Result};
pub use js::RuntimeValue;
pub use process::{BrowserConfig, BrowserConfigBuilder};
pub use tab::Tab;

use process::BrowserProcess;
use session::SessionManager;

const DEFAULT_PAGE_LOAD_TIMEOUT: Duration = Duration::from_secs(30);

/// Spawns a local browser process per `config` and returns a
/// [`ContextManager`] attached to it. When the returned manager is
/// `close()`d, the subprocess is torn down too.
pub async fn launch(config: BrowserConfig) -> Result<ContextManager> {
    let page_load_timeout = config.page_load_timeout;
    let process = BrowserProcess::spawn(&config).await?;
    let sessions = Arc::new(SessionManager::new("localhost", process.port));
    ContextManager::init(sessions, page_load_timeout, Some(process)).await
}

/// Attaches to a browser already listening on `host:port` for CDP
/// connections (e.g. started with `--remote-debugging-port`), using the
/// default page-load timeout.
pub async fn connect(host: impl Into<String>, port: u16) -> Result<ContextManager> {
    connect_with_timeout(host, port, DEFAULT_PAGE_LOAD_TIMEOUT).await
}

/// As [`connect`], but with an explicit page-load timeout applied to every
/// `Tab` the returned manager creates.
pub async fn connect_with_timeout(host: impl Into<String>, port: u16, page_load_timeout: Duration) -> Result<ContextManager> {
    let sessions = Arc::new(SessionManager::new(host, port));
    ContextManager::init(sessions, page_load_timeout, None).await
}
