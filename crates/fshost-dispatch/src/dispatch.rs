use serde_json::Value;

use crate::error::OpResult;
use crate::message::{message_type, ListFilesParams, Request, Response, WriteFileParams};
use crate::ops;
use crate::store::FileStore;

/// Route one decoded message to its handler and build the single reply.
///
/// Never fails: every handler error becomes an `{"error": ...}` response.
pub fn handle<S: FileStore + ?Sized>(store: &S, message: Value) -> Response {
    tracing::info!(message_type = %message_type(&message), "received message");

    match Request::from_value(message) {
        Ok(request) => execute(store, request),
        Err(err) => {
            tracing::warn!(error = %err, "rejected request");
            Response::from(err)
        }
    }
}

/// Run a parsed request against `store`.
pub fn execute<S: FileStore + ?Sized>(store: &S, request: Request) -> Response {
    let operation = request.kind();
    match request {
        Request::Ping => Response::pong(),
        Request::GetFile(params) => reply(
            operation,
            &params.path,
            ops::get_file(store, &params.path),
            Response::File,
        ),
        Request::WriteFile(WriteFileParams { path, data }) => reply(
            operation,
            &path,
            ops::write_file(store, &path, &data),
            Response::Written,
        ),
        Request::ListFiles(ListFilesParams { directory, pattern }) => reply(
            operation,
            &directory,
            ops::list_files(store, &directory, &pattern),
            Response::Listing,
        ),
    }
}

fn reply<T>(
    operation: &str,
    target: &str,
    result: OpResult<T>,
    wrap: impl FnOnce(T) -> Response,
) -> Response {
    match result {
        Ok(value) => wrap(value),
        Err(err) => {
            tracing::error!(operation, path = target, error = %err, "operation failed");
            Response::from(err)
        }
    }
}
