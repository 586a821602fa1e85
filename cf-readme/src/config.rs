//! Configuration resolution from CLI args

use crate::cli::Args;
use crate::error::CliError;
use cf_http_client::{CfClient, DEFAULT_TIMEOUT};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable overriding the API host (mirrors, local mocks)
pub const API_URL_ENV: &str = "CF_README_API_URL";

/// Name of the document patched in the archive root
pub const DOCUMENT_NAME: &str = "README.md";

/// Resolved runtime configuration, shared read-only by every stage
#[derive(Debug, Clone)]
pub struct Config {
    /// Codeforces handle
    pub handle: String,
    /// Archive root scanned for difficulty directories
    pub root_dir: PathBuf,
    /// README patched in place
    pub document_path: PathBuf,
    /// API host override, `None` for the public site
    pub api_base_url: Option<String>,
    /// Bound on the single API request
    pub timeout: Duration,
}

impl Config {
    /// Build config from CLI args and the environment
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        Self::resolve(args, std::env::var(API_URL_ENV).ok())
    }

    fn resolve(args: Args, api_base_url: Option<String>) -> Result<Self, CliError> {
        let handle = args.handle.trim().to_string();
        if handle.is_empty() {
            return Err(CliError::Config("Handle must not be empty".to_string()));
        }

        let root_dir = expand_tilde(&args.root);
        let document_path = root_dir.join(DOCUMENT_NAME);

        Ok(Config {
            handle,
            root_dir,
            document_path,
            api_base_url: api_base_url.filter(|u| !u.trim().is_empty()),
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// HTTP client for the configured host and timeout
    pub fn client(&self) -> Result<CfClient, CliError> {
        let builder = CfClient::builder().timeout(self.timeout);
        let builder = match &self.api_base_url {
            Some(url) => builder.base_url(url.as_str())?,
            None => builder,
        };
        Ok(builder.build()?)
    }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && (path_str.starts_with("~/") || path_str == "~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path_str.trim_start_matches('~').trim_start_matches('/'));
    }
    path.to_path_buf()
}
