//! Request envelope and method dispatch
//!
//! The node hands each task to the container as a small JSON document naming
//! the method and its keyword arguments. This module decodes that envelope
//! and routes it to the matching handler.

use crate::config::Settings;
use crate::handler;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Keyword arguments of the remote call. Each handler reads the ones it
/// knows and ignores the rest.
#[derive(Debug, Deserialize, Default)]
pub struct RpcKwargs {
    /// Fetch: name of the file to transfer.
    #[serde(default)]
    pub filename: Option<String>,
    /// List: suffix filter, e.g. `[".txt"]`.
    #[serde(default)]
    pub extension: Option<Vec<String>>,
}

/// A single remote-procedure call as read from the task input file.
#[derive(Debug, Deserialize)]
pub struct RpcRequest {
    pub method: String,
    #[serde(default)]
    pub kwargs: RpcKwargs,
}

/// Faults surfaced to the host runtime instead of the remote caller.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("unknown method: {0}")]
    UnknownMethod(String),
    #[error("failed to list static files: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize reply: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Route a request to its handler and return the reply as JSON.
///
/// Handlers are addressable with or without the `RPC_` prefix the node uses
/// internally. List failures bubble up as [`DispatchError::Io`]; fetch
/// failures are part of its reply and never reach this error path.
pub async fn dispatch(settings: &Settings, request: &RpcRequest) -> Result<Value, DispatchError> {
    let method = request
        .method
        .strip_prefix("RPC_")
        .unwrap_or(&request.method);

    match method {
        "list_static_files" => {
            let files =
                handler::list_static_files(settings, request.kwargs.extension.as_deref()).await?;
            Ok(serde_json::to_value(files)?)
        }
        "fetch_static_file" => {
            let reply =
                handler::fetch_static_file(settings, request.kwargs.filename.clone()).await;
            Ok(serde_json::to_value(reply)?)
        }
        _ => Err(DispatchError::UnknownMethod(request.method.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    fn settings_for(dir: &tempfile::TempDir) -> Settings {
        Settings::with_folder(dir.path().to_string_lossy().into_owned())
    }

    fn write_file(dir: &tempfile::TempDir, name: &str, contents: &[u8]) {
        let mut file = File::create(dir.path().join(name)).expect("create file");
        file.write_all(contents).expect("write file");
    }

    fn request(json: &str) -> RpcRequest {
        serde_json::from_str(json).expect("request json")
    }

    #[tokio::test]
    async fn test_dispatch_routes_list_with_filter() {
        let dir = tempdir().expect("tempdir");
        write_file(&dir, "a.txt", b"a");
        write_file(&dir, "c.csv", b"c");

        let req = request(r#"{"method": "list_static_files", "kwargs": {"extension": [".txt"]}}"#);
        let reply = dispatch(&settings_for(&dir), &req).await.expect("dispatch");

        let map = reply.as_object().expect("object reply");
        assert_eq!(map.len(), 1);
        assert!(map.contains_key("a.txt"));
    }

    #[tokio::test]
    async fn test_dispatch_routes_fetch() {
        let dir = tempdir().expect("tempdir");
        write_file(&dir, "a.txt", &[104, 105]);

        let req = request(r#"{"method": "fetch_static_file", "kwargs": {"filename": "a.txt"}}"#);
        let reply = dispatch(&settings_for(&dir), &req).await.expect("dispatch");

        assert_eq!(reply, serde_json::json!([104, 105]));
    }

    #[tokio::test]
    async fn test_dispatch_accepts_rpc_prefixed_names() {
        let dir = tempdir().expect("tempdir");
        let req = request(r#"{"method": "RPC_list_static_files"}"#);
        let reply = dispatch(&settings_for(&dir), &req).await.expect("dispatch");
        assert_eq!(reply, serde_json::json!({}));
    }

    #[tokio::test]
    async fn test_dispatch_rejects_unknown_methods() {
        let dir = tempdir().expect("tempdir");
        let req = request(r#"{"method": "drop_all_tables"}"#);
        let err = dispatch(&settings_for(&dir), &req).await.unwrap_err();
        assert!(matches!(err, DispatchError::UnknownMethod(ref m) if m == "drop_all_tables"));
    }

    #[tokio::test]
    async fn test_list_faults_propagate_as_io_errors() {
        let settings = Settings::with_folder("/nonexistent/static-folder".to_string());
        let req = request(r#"{"method": "list_static_files"}"#);
        let err = dispatch(&settings, &req).await.unwrap_err();
        assert!(matches!(err, DispatchError::Io(_)));
    }

    #[tokio::test]
    async fn test_fetch_rejections_are_normal_replies() {
        let dir = tempdir().expect("tempdir");
        let req = request(r#"{"method": "fetch_static_file", "kwargs": {"filename": "x.csv"}}"#);
        let reply = dispatch(&settings_for(&dir), &req).await.expect("dispatch");
        assert_eq!(
            reply,
            serde_json::json!({ "msg": "It is not allowed to transfer a csv file..." })
        );
    }

    #[test]
    fn test_request_kwargs_default_to_empty() {
        let req = request(r#"{"method": "list_static_files"}"#);
        assert!(req.kwargs.filename.is_none());
        assert!(req.kwargs.extension.is_none());
    }
}
