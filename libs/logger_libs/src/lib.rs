use std::fmt::Debug;
use env_logger::Env;
use log::{debug, error, info, warn};
use serde_json::{from_str, json, Map, Value};
use serde::Serialize;

const CONTENT_PREVIEW: usize = 32;

/// Installs the global logger. `RUST_LOG` wins over `default_level` when set.
pub fn init_logger(default_level: &str) {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(default_level))
        .try_init();
}

pub fn json_converter<T>(data: T) -> Option<Map<String, Value>>
where
    T: Serialize,
{
    let mut request_json = serde_json::to_value(data).unwrap_or(json!({}));

    if let Some(obj) = request_json.as_object_mut() {
        if let Some(content) = obj.get_mut("content") {
            if let Some(text) = content.as_str() {
                *content = Value::String(content_preview(text));
            }
        }
    }

    request_json.as_object().cloned()
}

pub fn debug_logger<T, B>(log_id: &str, handler: &str, method: &str, request: &T, response: &B)
where
    T: Serialize + Debug,
    B: Serialize + Debug,
{
    let request = json_converter(request).unwrap_or_default();
    let response = json_converter(response).unwrap_or_default();

    debug!(
        "[ {} ] {}.{} Request: {} | Response: {}",
        log_id,
        handler,
        method,
        Value::Object(request),
        Value::Object(response)
    );
}

pub fn info_logger(log_id: &str, handler: &str, method: &str) {
    info!("[ {} ] {}.{}", log_id, handler, method)
}

pub fn warning_logger(log_id: &str, handler: &str, method: &str, message: &str) {
    warn!(
        "[ {} ] {}.{} warning: {}",
        log_id, handler, method, compact_message(message)
    );
}

pub fn error_logger(log_id: &str, handler: &str, method: &str, message: &str) {
    error!(
        "[ {} ] {}.{} error: {}",
        log_id, handler, method, compact_message(message)
    )
}

/// Re-renders JSON messages on one line; anything else passes through trimmed.
fn compact_message(message: &str) -> String {
    let cleaned_message = message.trim().trim_matches('"');

    match from_str::<Value>(cleaned_message) {
        Ok(json) => json.to_string(),
        Err(_) => cleaned_message.to_string(),
    }
}

pub fn content_preview(content: &str) -> String {
    if content.chars().count() > CONTENT_PREVIEW {
        let prefix: String = content.chars().take(CONTENT_PREVIEW).collect();
        format!("{}...", prefix)
    } else {
        content.to_string()
    }
}
