use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    // Platform errors
    #[error("UNSUPPORTED_PLATFORM: no Tailwind CSS build for os '{os}', arch '{arch}'")]
    UnsupportedPlatform { os: String, arch: String },

    // Network errors
    #[error("NETWORK_ERROR: request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP_CLIENT_ERROR: failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("UPSTREAM_ERROR: GitHub API returned status {status} for {url}")]
    Upstream { url: String, status: u16 },

    #[error("DOWNLOAD_ERROR: download failed with status {status} from {url}")]
    Download { url: String, status: u16 },

    #[error("PARSE_ERROR: failed to parse release info from {url}: {reason}")]
    Parse { url: String, reason: String },

    #[error("INVALID_URL: '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("INVALID_URL: {0}")]
    UrlConstruction(#[from] crate::github::UrlError),

    // IO errors
    #[error("IO_ERROR: failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },
}

impl FetchError {
    /// Wraps an I/O error with a description of the operation that failed.
    pub fn io(operation: impl Into<String>, source: std::io::Error) -> Self {
        FetchError::Io {
            operation: operation.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;
