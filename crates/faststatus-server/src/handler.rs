use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use tracing::{debug, warn};

use faststatus_resource::{Resource, ResourceId};

use crate::SharedStore;

/// Health check response.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".into(),
            version: env!("CARGO_PKG_VERSION").into(),
        }
    }
}

/// Health check handler.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}

/// The two response encodings, negotiated from the Accept header.
///
/// Error bodies follow the negotiation too, so a JSON client never has to
/// parse prose: 404 is `[]` and 500 is empty, while text clients get
/// `Resource Not Found` and `Server Error`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Encoding {
    Text,
    Json,
}

impl Encoding {
    /// `application/json` anywhere in the Accept header selects JSON;
    /// `text/plain`, `*/*`, anything else, or no header at all select text.
    fn negotiate(headers: &HeaderMap) -> Self {
        let accept = headers
            .get(header::ACCEPT)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("");
        let wants_json = accept.split(',').any(|item| {
            let media = item.split_once(';').map_or(item, |(media, _params)| media);
            media.trim() == "application/json"
        });
        if wants_json {
            Self::Json
        } else {
            Self::Text
        }
    }

    fn content_type(self) -> &'static str {
        match self {
            Self::Text => "text/plain; charset=utf-8",
            Self::Json => "application/json",
        }
    }

    /// Encode found resources: one line each (text) or a JSON array.
    fn encode_many(self, resources: &[Resource]) -> Result<String, serde_json::Error> {
        match self {
            Self::Text => Ok(resources
                .iter()
                .map(|resource| format!("{resource}\n"))
                .collect()),
            Self::Json => serde_json::to_string(resources),
        }
    }

    /// Encode a single resource: its line (text) or a JSON object.
    fn encode_one(self, resource: &Resource) -> Result<String, serde_json::Error> {
        match self {
            Self::Text => Ok(format!("{resource}\n")),
            Self::Json => serde_json::to_string(resource),
        }
    }

    fn ok(self, body: String) -> Response {
        (
            StatusCode::OK,
            [(header::CONTENT_TYPE, self.content_type())],
            body,
        )
            .into_response()
    }

    fn not_found(self) -> Response {
        let body = match self {
            Self::Text => "Resource Not Found",
            Self::Json => "[]",
        };
        (
            StatusCode::NOT_FOUND,
            [(header::CONTENT_TYPE, self.content_type())],
            body,
        )
            .into_response()
    }

    fn server_error(self) -> Response {
        let body = match self {
            Self::Text => "Server Error",
            Self::Json => "",
        };
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            [(header::CONTENT_TYPE, self.content_type())],
            body,
        )
            .into_response()
    }
}

/// Parse path segments as hex resource ids.
///
/// Empty segments (doubled or trailing slashes) are skipped; any non-hex
/// segment invalidates the whole path, since it names nothing addressable.
fn ids_from_path(path: &str) -> Option<Vec<ResourceId>> {
    let mut ids = Vec::new();
    for segment in path.split('/') {
        if segment.is_empty() {
            continue;
        }
        match ResourceId::from_hex(segment) {
            Ok(id) => ids.push(id),
            Err(_) => return None,
        }
    }
    Some(ids)
}

/// `GET /{ids...}`: look up each path id, skip ids with no record, and
/// encode the found resources in request order. 404 when the path is
/// unparseable or nothing resolves.
pub async fn get_resources_handler(
    State(store): State<SharedStore>,
    Path(path): Path<String>,
    headers: HeaderMap,
) -> Response {
    let encoding = Encoding::negotiate(&headers);
    let ids = match ids_from_path(&path) {
        Some(ids) if !ids.is_empty() => ids,
        _ => return encoding.not_found(),
    };

    let found: Vec<Resource> = match store.get_many(&ids) {
        Ok(results) => results.into_iter().flatten().collect(),
        Err(error) => {
            warn!(%error, "resource lookup failed");
            return encoding.server_error();
        }
    };
    if found.is_empty() {
        return encoding.not_found();
    }

    match encoding.encode_many(&found) {
        Ok(body) => encoding.ok(body),
        Err(error) => {
            warn!(%error, "response encoding failed");
            encoding.server_error()
        }
    }
}

/// `PUT /{id}`: upsert the resource in the body and echo it back. The body
/// id must match the path id; a mismatch is the caller's error, not a miss.
pub async fn put_resource_handler(
    State(store): State<SharedStore>,
    Path(path): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let encoding = Encoding::negotiate(&headers);
    let ids = match ids_from_path(&path) {
        Some(ids) if ids.len() == 1 => ids,
        _ => return encoding.not_found(),
    };

    let resource: Resource = match serde_json::from_slice(&body) {
        Ok(resource) => resource,
        Err(error) => {
            debug!(%error, "rejecting unreadable resource body");
            return encoding.server_error();
        }
    };
    if resource.id != ids[0] {
        return (StatusCode::BAD_REQUEST, "Bad Request").into_response();
    }

    store_and_echo(&store, resource, encoding)
}

/// `POST /`: upsert the resource in the body, keyed by the body id, and
/// echo it back.
pub async fn post_resource_handler(
    State(store): State<SharedStore>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let encoding = Encoding::negotiate(&headers);
    let resource: Resource = match serde_json::from_slice(&body) {
        Ok(resource) => resource,
        Err(error) => {
            debug!(%error, "rejecting unreadable resource body");
            return encoding.server_error();
        }
    };

    store_and_echo(&store, resource, encoding)
}

/// `DELETE /{ids...}`: remove each named resource. 204 when at least one
/// record existed, 404 when none did.
pub async fn delete_resources_handler(
    State(store): State<SharedStore>,
    Path(path): Path<String>,
    headers: HeaderMap,
) -> Response {
    let encoding = Encoding::negotiate(&headers);
    let ids = match ids_from_path(&path) {
        Some(ids) if !ids.is_empty() => ids,
        _ => return encoding.not_found(),
    };

    let mut any_deleted = false;
    for id in ids {
        match store.delete(id) {
            Ok(deleted) => any_deleted = any_deleted || deleted,
            Err(error) => {
                warn!(%error, "resource delete failed");
                return encoding.server_error();
            }
        }
    }

    if any_deleted {
        StatusCode::NO_CONTENT.into_response()
    } else {
        encoding.not_found()
    }
}

/// `GET /`: nothing is addressable at the root.
pub async fn root_handler(headers: HeaderMap) -> Response {
    Encoding::negotiate(&headers).not_found()
}

fn store_and_echo(store: &SharedStore, resource: Resource, encoding: Encoding) -> Response {
    if let Err(error) = store.put(&resource) {
        warn!(%error, "resource write failed");
        return encoding.server_error();
    }
    debug!(id = %resource.id, status = %resource.status, "stored resource");

    match encoding.encode_one(&resource) {
        Ok(body) => encoding.ok(body),
        Err(error) => {
            warn!(%error, "response encoding failed");
            encoding.server_error()
        }
    }
}
