use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::OpError;

/// Request type: read a file.
pub const GET_FILE: &str = "getFile";
/// Request type: write a file.
pub const WRITE_FILE: &str = "writeFile";
/// Request type: list files in a directory.
pub const LIST_FILES: &str = "listFiles";
/// Request type: liveness check.
pub const PING: &str = "ping";

/// Pattern used by `listFiles` when the request carries none.
pub const DEFAULT_PATTERN: &str = "*";

/// A request from the peer, routed by its `type` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    GetFile(GetFileParams),
    WriteFile(WriteFileParams),
    ListFiles(ListFilesParams),
    Ping,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GetFileParams {
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WriteFileParams {
    pub path: String,
    /// Standard base64 with padding.
    pub data: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ListFilesParams {
    pub directory: String,
    #[serde(default = "default_pattern")]
    pub pattern: String,
}

fn default_pattern() -> String {
    DEFAULT_PATTERN.to_string()
}

impl Request {
    /// Route a decoded message by its `type` field and parse its parameters.
    pub fn from_value(message: Value) -> Result<Self, OpError> {
        let kind = message
            .get("type")
            .and_then(Value::as_str)
            .map(str::to_owned);

        match kind.as_deref() {
            Some(GET_FILE) => params(GET_FILE, message).map(Request::GetFile),
            Some(WRITE_FILE) => params(WRITE_FILE, message).map(Request::WriteFile),
            Some(LIST_FILES) => params(LIST_FILES, message).map(Request::ListFiles),
            Some(PING) => Ok(Request::Ping),
            _ => Err(OpError::UnknownOperation(message_type(&message))),
        }
    }

    /// The wire name of this request's type.
    pub fn kind(&self) -> &'static str {
        match self {
            Request::GetFile(_) => GET_FILE,
            Request::WriteFile(_) => WRITE_FILE,
            Request::ListFiles(_) => LIST_FILES,
            Request::Ping => PING,
        }
    }
}

fn params<T: DeserializeOwned>(operation: &'static str, message: Value) -> Result<T, OpError> {
    serde_json::from_value(message).map_err(|source| OpError::InvalidRequest { operation, source })
}

/// Render a message's `type` field for logs and error replies.
///
/// A missing field renders as `null`; non-string values render as JSON.
pub fn message_type(message: &Value) -> String {
    match message.get("type") {
        Some(Value::String(kind)) => kind.clone(),
        Some(other) => other.to_string(),
        None => "null".to_string(),
    }
}

/// Successful `getFile` reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileContents {
    /// Standard base64 encoding of the file contents.
    pub data: String,
    pub filename: String,
    pub mime_type: String,
    /// Size of the unencoded contents in bytes.
    pub size: u64,
}

/// Successful `writeFile` reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WriteReceipt {
    pub success: bool,
    pub path: String,
    pub size: u64,
}

/// One regular file in a `listFiles` reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileEntry {
    pub path: String,
    pub name: String,
    pub size: u64,
    /// Last modification time in seconds since the Unix epoch.
    pub modified: f64,
}

/// Successful `listFiles` reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub files: Vec<FileEntry>,
    pub count: usize,
}

impl From<Vec<FileEntry>> for Listing {
    fn from(files: Vec<FileEntry>) -> Self {
        Self {
            count: files.len(),
            files,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pong {
    pub pong: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReply {
    pub error: String,
}

/// Exactly one of these is sent back for every frame received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Response {
    File(FileContents),
    Written(WriteReceipt),
    Listing(Listing),
    Pong(Pong),
    Error(ErrorReply),
}

impl Response {
    pub fn pong() -> Self {
        Response::Pong(Pong { pong: true })
    }

    pub fn error(message: impl Into<String>) -> Self {
        Response::Error(ErrorReply {
            error: message.into(),
        })
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Response::Error(_))
    }
}

impl From<OpError> for Response {
    fn from(err: OpError) -> Self {
        Response::error(err.to_string())
    }
}
