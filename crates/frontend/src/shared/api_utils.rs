//! API utilities for frontend-backend communication
//!
//! Provides helpers for constructing API URLs and a generic request function
//! that normalizes headers, body encoding and error extraction across JSON
//! and text responses.

use gloo_net::http::{Method, RequestBuilder};
use serde_json::Value;
use web_sys::FormData;

use crate::shared::errors::{ApiError, RequestError};
use crate::system::auth::storage::{Session, SessionStore};

/// Get the base URL for API requests
///
/// The backend serves the API on the same origin as the app, so this is the
/// window origin and paths are server-relative.
///
/// # Returns
/// - Origin like "https://clinic.example.com"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    window.location().origin().unwrap_or_default()
}

/// Build a full API URL from a path
///
/// # Arguments
/// * `path` - The API path (should start with "/api/")
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Request body accepted by [`request`]
pub enum ReqBody {
    /// Serialized as JSON with a matching content type
    Json(Value),
    /// Multipart form payload; the browser supplies the boundary-based
    /// content type, so none is set here
    Form(FormData),
}

/// Options for [`request`]. The default is a GET with no body.
#[derive(Default)]
pub struct RequestOpts {
    pub method: Option<Method>,
    pub headers: Vec<(String, String)>,
    pub body: Option<ReqBody>,
}

/// Parsed response body.
///
/// The request layer does not interpret shapes beyond content negotiation;
/// each call site narrows the variant it expects via [`Payload::decode`].
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Body declared and parsed as JSON
    Json(Value),
    /// Non-JSON body: opaque text carried the way the backend carries
    /// plain-text errors, under a single `detail` field
    Detail(String),
    /// Empty body, or a JSON body that failed to parse
    Empty,
}

impl Payload {
    /// Deserialize into the shape this call site expects
    pub fn decode<T: serde::de::DeserializeOwned>(&self) -> Result<T, ApiError> {
        let value = match self {
            Payload::Json(value) => value.clone(),
            Payload::Detail(text) => serde_json::json!({ "detail": text }),
            Payload::Empty => Value::Null,
        };
        serde_json::from_value(value).map_err(ApiError::from)
    }
}

/// Decode a response body according to its declared content type.
///
/// A JSON body that fails to parse degrades to [`Payload::Empty`] rather
/// than an error; any other content type is treated as opaque text.
pub fn decode_payload(content_type: Option<&str>, text: &str) -> Payload {
    let is_json = content_type
        .map(|ct| ct.contains("application/json"))
        .unwrap_or(false);
    if is_json {
        match serde_json::from_str::<Value>(text) {
            Ok(value) => Payload::Json(value),
            Err(_) => Payload::Empty,
        }
    } else if text.is_empty() {
        Payload::Empty
    } else {
        Payload::Detail(text.to_string())
    }
}

fn text_field<'a>(value: &'a Value, name: &str) -> Option<&'a str> {
    value
        .get(name)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// Resolve the user-facing message for a failed request.
///
/// Priority: a `detail` field, then an `error` field, then the JSON
/// serialization of a non-empty structured body, then a generic fallback
/// carrying the status code.
pub fn failure_message(status: u16, payload: &Payload) -> String {
    let fallback = || format!("Request failed ({})", status);
    match payload {
        Payload::Detail(text) => text.clone(),
        Payload::Json(value) => {
            if let Some(detail) = text_field(value, "detail") {
                return detail.to_string();
            }
            if let Some(error) = text_field(value, "error") {
                return error.to_string();
            }
            match value {
                Value::Object(map) if !map.is_empty() => value.to_string(),
                Value::Array(items) if !items.is_empty() => value.to_string(),
                _ => fallback(),
            }
        }
        Payload::Empty => fallback(),
    }
}

/// Headers for an API call: caller-supplied ones first, then `Accept` and,
/// when a token is stored, the bearer `Authorization` header. Later entries
/// override caller-supplied duplicates.
fn request_headers(token: &str, extra: &[(String, String)]) -> Vec<(String, String)> {
    let mut headers: Vec<(String, String)> = extra.to_vec();
    headers.push(("Accept".to_string(), "application/json".to_string()));
    if !token.is_empty() {
        headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
    }
    headers
}

/// Perform a request against the clinic API.
///
/// Attaches `Authorization: Bearer <token>` when a token is stored, encodes
/// the body, and decodes the response by its declared content type. Success
/// is decided by the HTTP status class alone; a non-2xx status becomes a
/// [`RequestError`] with the message extracted from the body. The session is
/// never mutated here.
pub async fn request<S: SessionStore>(
    session: &Session<S>,
    path: &str,
    opts: RequestOpts,
) -> Result<Payload, ApiError> {
    let url = api_url(path);
    let mut builder = RequestBuilder::new(&url).method(opts.method.unwrap_or(Method::GET));

    for (name, value) in request_headers(&session.token(), &opts.headers) {
        builder = builder.header(&name, &value);
    }

    let transport = |e: gloo_net::Error| ApiError::Transport(e.to_string());
    let request = match opts.body {
        Some(ReqBody::Json(value)) => builder.json(&value).map_err(transport)?,
        Some(ReqBody::Form(form)) => builder.body(form).map_err(transport)?,
        None => builder.build().map_err(transport)?,
    };

    let response = request.send().await.map_err(transport)?;

    let content_type = response.headers().get("content-type");
    let text = response.text().await.unwrap_or_default();
    let payload = decode_payload(content_type.as_deref(), &text);

    if !response.ok() {
        let status = response.status();
        let message = failure_message(status, &payload);
        log::debug!("request to {} failed with status {}", path, status);
        return Err(RequestError { status, message }.into());
    }

    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_body_is_parsed() {
        let payload = decode_payload(Some("application/json"), r#"{"detail":"Not found"}"#);
        assert_eq!(payload, Payload::Json(json!({"detail": "Not found"})));
    }

    #[test]
    fn json_content_type_with_charset_is_still_json() {
        let payload = decode_payload(Some("application/json; charset=utf-8"), "[1,2]");
        assert_eq!(payload, Payload::Json(json!([1, 2])));
    }

    #[test]
    fn unparseable_json_degrades_to_empty() {
        assert_eq!(
            decode_payload(Some("application/json"), "<html>oops</html>"),
            Payload::Empty
        );
    }

    #[test]
    fn text_body_is_wrapped_as_detail() {
        assert_eq!(
            decode_payload(Some("text/plain"), "Service unavailable"),
            Payload::Detail("Service unavailable".to_string())
        );
    }

    #[test]
    fn empty_text_is_empty_payload() {
        assert_eq!(decode_payload(Some("text/html"), ""), Payload::Empty);
        assert_eq!(decode_payload(None, ""), Payload::Empty);
    }

    #[test]
    fn failure_message_prefers_detail() {
        let payload = decode_payload(Some("application/json"), r#"{"detail":"Not found"}"#);
        assert_eq!(failure_message(404, &payload), "Not found");
    }

    #[test]
    fn failure_message_falls_back_to_error_field() {
        let payload = Payload::Json(json!({"error": "slot already booked"}));
        assert_eq!(failure_message(409, &payload), "slot already booked");
    }

    #[test]
    fn failure_message_serializes_other_objects() {
        let payload = Payload::Json(json!({"start_time": ["This field is required."]}));
        assert_eq!(
            failure_message(400, &payload),
            r#"{"start_time":["This field is required."]}"#
        );
    }

    #[test]
    fn empty_object_uses_generic_message() {
        let payload = Payload::Json(json!({}));
        assert_eq!(failure_message(500, &payload), "Request failed (500)");
    }

    #[test]
    fn empty_payload_uses_generic_message() {
        assert_eq!(failure_message(502, &Payload::Empty), "Request failed (502)");
    }

    #[test]
    fn text_body_becomes_the_message() {
        let payload = Payload::Detail("Server exploded".to_string());
        assert_eq!(failure_message(500, &payload), "Server exploded");
    }

    #[test]
    fn stored_token_becomes_bearer_header() {
        let headers = request_headers("abc123", &[]);
        assert!(headers.contains(&(
            "Authorization".to_string(),
            "Bearer abc123".to_string()
        )));
    }

    #[test]
    fn empty_token_sends_no_authorization() {
        let headers = request_headers("", &[]);
        assert!(headers.iter().all(|(name, _)| name != "Authorization"));
        assert!(headers.contains(&("Accept".to_string(), "application/json".to_string())));
    }

    #[test]
    fn caller_headers_are_kept() {
        let extra = vec![("X-Requested-With".to_string(), "clinic".to_string())];
        let headers = request_headers("abc123", &extra);
        assert!(headers.contains(&("X-Requested-With".to_string(), "clinic".to_string())));
    }

    #[test]
    fn payload_decode_narrows_shape() {
        #[derive(serde::Deserialize, PartialEq, Debug)]
        struct Msg {
            detail: String,
        }

        let payload = Payload::Detail("maintenance".to_string());
        let msg: Msg = payload.decode().unwrap();
        assert_eq!(msg.detail, "maintenance");

        let payload = Payload::Json(json!({"detail": "ok"}));
        let msg: Msg = payload.decode().unwrap();
        assert_eq!(msg.detail, "ok");

        assert!(Payload::Empty.decode::<Msg>().is_err());
    }
}
