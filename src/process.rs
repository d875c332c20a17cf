use std::path::PathBuf;
use std::time::Duration;

use tokio::process::{Child, Command as ProcessCommand};
use tokio::time::sleep;

use crate::error::{CdpError, Result};

const DEFAULT_ARGS: &[&str] = &[
    "--no-first-run",
    "--no-default-browser-check",
    "--enable-experimental-web-platform-features",
];

/// Launch options for a locally spawned browser. Mirrors the handful of
/// knobs a caller actually needs; anything more exotic can be appended to
/// `arguments` directly.
#[derive(Debug, Clone)]
pub struct BrowserConfig {
    pub executable: Option<PathBuf>,
    pub headless: bool,
    pub port: Option<u16>,
    pub user_data_dir: Option<PathBuf>,
    pub arguments: Vec<String>,
    pub process_envs: Vec<(String, String)>,
    pub page_load_timeout: Duration,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            executable: None,
            headless: true,
            port: None,
            user_data_dir: None,
            arguments: Vec::new(),
            process_envs: Vec::new(),
            page_load_timeout: Duration::from_secs(30),
        }
    }
}

impl BrowserConfig {
    pub fn builder() -> BrowserConfigBuilder {
        BrowserConfigBuilder::default()
    }
}

#[derive(Debug, Clone, Default)]
pub struct BrowserConfigBuilder {
    config: BrowserConfig,
}

impl BrowserConfigBuilder {
    pub fn executable(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.executable = Some(path.into());
        self
    }

    pub fn headless(mut self, headless: bool) -> Self {
        self.config.headless = headless;
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.config.port = Some(port);
        self
    }

    pub fn user_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.user_data_dir = Some(dir.into());
        self
    }

    /// Adds a raw `--flag` argument. Rejects a caller-supplied
    /// `--remote-debugging-port`, since the process layer always chooses
    /// its own and appends it last.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        let arg = arg.into();
        if !arg.starts_with("--remote-debugging-port") {
            self.config.arguments.push(arg);
        }
        self
    }

    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.process_envs.push((key.into(), value.into()));
        self
    }

    pub fn page_load_timeout(mut self, timeout: Duration) -> Self {
        self.config.page_load_timeout = timeout;
        self
    }

    pub fn build(self) -> BrowserConfig {
        self.config
    }
}

fn is_executable_file(path: &std::path::Path) -> bool {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        path.metadata().map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0).unwrap_or(false)
    }
    #[cfg(not(unix))]
    {
        path.is_file()
    }
}

fn default_executable() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("CDPILOT_CHROME") {
        let path = PathBuf::from(path);
        return if is_executable_file(&path) {
            Ok(path)
        } else {
            Err(CdpError::ExecutableNotFoundError)
        };
    }
    for name in ["chromium", "chromium-browser", "google-chrome", "google-chrome-stable", "chrome"] {
        if let Ok(path) = which::which(name) {
            return Ok(path);
        }
    }
    if cfg!(target_os = "macos") {
        let candidate = PathBuf::from("/Applications/Google Chrome.app/Contents/MacOS/Google Chrome");
        if candidate.exists() {
            return Ok(candidate);
        }
    }
    Err(CdpError::ExecutableNotFoundError)
}

/// A running browser subprocess. Spawn assembles the full argv from a
/// [`BrowserConfig`] and the chosen debugging port; `stop` escalates from a
/// graceful terminate to a hard kill if the process does not exit quickly.
pub(crate) struct BrowserProcess {
    child: Option<Child>,
    pub(crate) port: u16,
    _scratch_dir: Option<tempfile::TempDir>,
}

impl BrowserProcess {
    pub(crate) async fn spawn(config: &BrowserConfig) -> Result<Self> {
        let executable = match &config.executable {
            Some(path) => {
                if !is_executable_file(path) {
                    return Err(CdpError::ExecutableNotFoundError);
                }
                path.clone()
            }
            None => default_executable()?,
        };

        let port = config.port.unwrap_or(0);
        let port = if port == 0 { pick_free_port()? } else { port };

        let mut arguments: Vec<String> = config
            .arguments
            .iter()
            .filter(|a| !a.starts_with("--remote-debugging-port"))
            .cloned()
            .collect();

        if config.headless && !arguments.iter().any(|a| a == "--headless" || a.starts_with("--headless=")) {
            arguments.push("--headless=new".to_string());
        }

        let scratch_dir = if config.user_data_dir.is_none() {
            Some(tempfile::tempdir()?)
        } else {
            None
        };
        let user_data_dir = config
            .user_data_dir
            .clone()
            .or_else(|| scratch_dir.as_ref().map(|d| d.path().to_path_buf()))
            .expect("either supplied or freshly created above");
        arguments.push(format!("--user-data-dir={}", user_data_dir.display()));

        for default_arg in DEFAULT_ARGS {
            arguments.push(default_arg.to_string());
        }
        arguments.push(format!("--remote-debugging-port={port}"));

        let mut command = ProcessCommand::new(&executable);
        command.args(&arguments);
        command.stdout(std::process::Stdio::piped());
        command.stderr(std::process::Stdio::piped());
        for (key, value) in &config.process_envs {
            command.env(key, value);
        }

        let child = command.spawn()?;

        let process = Self {
            child: Some(child),
            port,
            _scratch_dir: scratch_dir,
        };
        process.wait_until_ready().await?;
        Ok(process)
    }

    async fn wait_until_ready(&self) -> Result<()> {
        let url = format!("http://127.0.0.1:{}/json/version", self.port);
        for attempt in 0..5 {
            if reqwest::get(&url).await.is_ok() {
                return Ok(());
            }
            if attempt < 4 {
                sleep(Duration::from_secs(1)).await;
            }
        }
        Err(CdpError::BrowserLaunchError)
    }

    pub(crate) async fn stop(&mut self) {
        let Some(mut child) = self.child.take() else {
            return;
        };

        #[cfg(unix)]
        if let Some(pid) = child.id() {
            // SAFETY: libc::kill with a pid observed via Child::id is sound;
            // sending SIGTERM to an already-exited pid is a harmless no-op.
            unsafe {
                libc::kill(pid as i32, libc::SIGTERM);
            }
        }

        let graceful = tokio::time::timeout(Duration::from_secs(3), child.wait()).await;
        if graceful.is_err() {
            let _ = child.start_kill();
            let _ = child.wait().await;
        }
    }
}

impl Drop for BrowserProcess {
    fn drop(&mut self) {
        if let Some(mut child) = self.child.take() {
            let _ = child.start_kill();
        }
    }
}

fn pick_free_port() -> Result<u16> {
    let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
    Ok(listener.local_addr()?.port())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_rejects_explicit_debugging_port_arg() {
        let config = BrowserConfig::builder().arg("--remote-debugging-port=1234").build();
        assert!(config.arguments.is_empty());
    }

    #[test]
    fn default_config_is_headless() {
        assert!(BrowserConfig::default().headless);
    }
}
