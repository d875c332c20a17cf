use std::io;

use async_tungstenite::tungstenite;
use futures::channel::mpsc::SendError;
use futures::channel::oneshot::Canceled;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CdpError>;

#[derive(Debug, Error)]
pub enum CdpError {
    #[error("{0}")]
    Ws(#[from] tungstenite::Error),
    #[error("{0}")]
    Io(#[from] io::Error),
    #[error("{0}")]
    Serde(#[from] serde_json::Error),
    #[error("{0}")]
    Chrome(#[from] cdpilot_types::Error),
    #[error("{0}")]
    Url(#[from] url::ParseError),
    #[error("{0}")]
    Http(#[from] reqwest::Error),
    #[error("received no response for command before the connection closed")]
    NoResponse,
    #[error("transport is disconnected")]
    Disconnected,
    #[error("timed out waiting for {0}")]
    Timeout(&'static str),
    #[error("no element matched the given locator")]
    NoSuchElement,
    #[error("{0}")]
    ChannelSendError(#[from] ChannelError),
    #[error("browser did not become reachable within the readiness window")]
    BrowserLaunchError,
    #[error("no executable chrome/chromium binary was found at the given or default path")]
    ExecutableNotFoundError,
    #[error("no tab found for the given target id")]
    TabNotFoundError,
    #[error("no valid tab exists in this context")]
    NoValidTabError,
    #[error("operation attempted on a tab that has already been closed")]
    PageClosed,
    #[error("element is not a file input; use Tab::expect_file_chooser instead")]
    ElementNotFileInput,
    #[error("{0} must be specified")]
    ParamsMustSpecified(&'static str),
    #[error("argument already present in assembled browser options: {0}")]
    ArgumentAlreadyExistsInOptions(String),
    #[error("unsupported remote object: {0}")]
    Unsupported(String),
}

#[derive(Debug, Error)]
pub enum ChannelError {
    #[error("{0}")]
    Send(#[from] SendError),
    #[error("{0}")]
    Canceled(#[from] Canceled),
}

impl From<Canceled> for CdpError {
    fn from(err: Canceled) -> Self {
        ChannelError::from(err).into()
    }
}

impl From<SendError> for CdpError {
    fn from(err: SendError) -> Self {
        ChannelError::from(err).into()
    }
}
