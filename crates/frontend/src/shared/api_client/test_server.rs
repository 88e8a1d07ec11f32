//! In-process fake of the laboratory REST API for client tests.
//!
//! Keeps JSON records in memory, assigns `<prefix>_<n>` ids and timestamps,
//! and records the headers of every request it receives.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use serde_json::{json, Map, Value};
use tokio::net::TcpListener;

use super::ApiClient;
use crate::shared::api_utils::ClientConfig;
use crate::system::auth::Credentials;

#[derive(Debug, Clone)]
pub(crate) struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
}

#[derive(Default)]
struct Store {
    collections: HashMap<String, Vec<Value>>,
    counters: HashMap<String, u32>,
    requests: Vec<RecordedRequest>,
}

impl Store {
    fn next_id(&mut self, collection: &str) -> String {
        let counter = self.counters.entry(collection.to_string()).or_insert(0);
        *counter += 1;
        format!("{}_{}", id_prefix(collection), counter)
    }
}

type Shared = Arc<Mutex<Store>>;

pub(crate) struct FakeBackend {
    base_url: String,
    store: Shared,
}

impl FakeBackend {
    pub async fn spawn() -> Self {
        let store: Shared = Arc::default();
        let app = Router::new().fallback(handle).with_state(store.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            store,
        }
    }

    pub fn client(&self, token: Option<&str>) -> ApiClient {
        ApiClient::new(&ClientConfig::new(&self.base_url))
            .with_credentials(Credentials::from_token(token.map(str::to_string)))
    }

    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.store.lock().unwrap().requests.last().cloned()
    }
}

fn id_prefix(collection: &str) -> &'static str {
    match collection {
        "laboratories" => "lab",
        "clients" => "cli",
        "technicians" => "tec",
        "prostheses" => "pro",
        "orders" => "ord",
        _ => "obj",
    }
}

fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "resource not found" })),
    )
        .into_response()
}

fn bad_request(message: &str) -> Response {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
}

fn now() -> Value {
    Value::String(chrono::Utc::now().to_rfc3339())
}

async fn handle(
    State(store): State<Shared>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let header_value = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    let mut store = store.lock().unwrap();
    store.requests.push(RecordedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        authorization: header_value(header::AUTHORIZATION),
        content_type: header_value(header::CONTENT_TYPE),
    });

    let segments: Vec<String> = uri
        .path()
        .trim_matches('/')
        .split('/')
        .map(|s| urlencoding::decode(s).map(|s| s.into_owned()).unwrap_or_default())
        .collect();
    let segments: Vec<&str> = segments.iter().map(String::as_str).collect();

    let payload = if body.is_empty() {
        Value::Null
    } else {
        match serde_json::from_slice::<Value>(&body) {
            Ok(value) => value,
            Err(_) => return bad_request("invalid JSON body"),
        }
    };

    match (method.as_str(), segments.as_slice()) {
        ("GET", ["laboratories"]) => list(&store, "laboratories", None),
        ("POST", ["laboratories"]) => create(&mut store, "laboratories", None, payload),
        ("GET", ["laboratories", id]) => get(&store, "laboratories", None, id),
        ("PUT", ["laboratories", id]) => replace(&mut store, "laboratories", None, id, payload),
        ("DELETE", ["laboratories", id]) => remove(&mut store, "laboratories", None, id),

        ("GET", ["laboratories", lab, collection]) => {
            list(&store, collection, Some(*lab))
        }
        ("POST", ["laboratories", lab, collection]) => {
            create(&mut store, collection, Some(*lab), payload)
        }
        ("GET", ["laboratories", lab, collection, id]) => {
            get(&store, collection, Some(*lab), id)
        }
        ("PUT", ["laboratories", lab, collection, id]) => {
            replace(&mut store, collection, Some(*lab), id, payload)
        }
        ("DELETE", ["laboratories", lab, collection, id]) => {
            remove(&mut store, collection, Some(*lab), id)
        }
        ("PATCH", ["laboratories", lab, "orders", id, "status"]) => {
            set_status(&mut store, lab, id, payload)
        }
        _ => not_found(),
    }
}

fn belongs(record: &Value, lab: Option<&str>) -> bool {
    match lab {
        Some(lab) => record.get("laboratory_id").and_then(Value::as_str) == Some(lab),
        None => true,
    }
}

fn find<'a>(store: &'a Store, collection: &str, lab: Option<&str>, id: &str) -> Option<&'a Value> {
    store
        .collections
        .get(collection)?
        .iter()
        .find(|r| r.get("id").and_then(Value::as_str) == Some(id) && belongs(r, lab))
}

fn list(store: &Store, collection: &str, lab: Option<&str>) -> Response {
    let items: Vec<Value> = store
        .collections
        .get(collection)
        .map(|items| items.iter().filter(|r| belongs(r, lab)).cloned().collect())
        .unwrap_or_default();
    Json(items).into_response()
}

fn get(store: &Store, collection: &str, lab: Option<&str>, id: &str) -> Response {
    match find(store, collection, lab, id) {
        Some(record) => Json(record.clone()).into_response(),
        None => not_found(),
    }
}

fn create(store: &mut Store, collection: &str, lab: Option<&str>, payload: Value) -> Response {
    let Value::Object(mut record) = payload else {
        return bad_request("expected a JSON object");
    };
    if let Some(lab) = lab {
        if find(store, "laboratories", None, lab).is_none() {
            return not_found();
        }
        record.insert("laboratory_id".into(), Value::String(lab.to_string()));
    }
    if collection == "orders" {
        record.insert("status".into(), Value::String("received".into()));
    }

    let id = store.next_id(collection);
    let stamp = now();
    record.insert("id".into(), Value::String(id));
    record.insert("created_at".into(), stamp.clone());
    record.insert("updated_at".into(), stamp);

    let record = Value::Object(record);
    store
        .collections
        .entry(collection.to_string())
        .or_default()
        .push(record.clone());
    (StatusCode::CREATED, Json(record)).into_response()
}

fn replace(
    store: &mut Store,
    collection: &str,
    lab: Option<&str>,
    id: &str,
    payload: Value,
) -> Response {
    let Value::Object(mut record) = payload else {
        return bad_request("expected a JSON object");
    };
    let Some(existing) = find(store, collection, lab, id).cloned() else {
        return not_found();
    };

    // Server-owned fields always survive a replace
    for key in ["id", "laboratory_id", "created_at"] {
        if let Some(value) = existing.get(key) {
            record.insert(key.into(), value.clone());
        }
    }
    // Fields the update payload does not carry
    for key in ["status", "client_id"] {
        if let (false, Some(value)) = (record.contains_key(key), existing.get(key)) {
            record.insert(key.into(), value.clone());
        }
    }
    record.insert("updated_at".into(), now());

    store_record(store, collection, id, record)
}

fn set_status(store: &mut Store, lab: &str, id: &str, payload: Value) -> Response {
    let Some(status) = payload.get("status").and_then(Value::as_str).map(str::to_string) else {
        return bad_request("status is required");
    };
    let Some(existing) = find(store, "orders", Some(lab), id).cloned() else {
        return not_found();
    };

    let mut record: Map<String, Value> = existing.as_object().cloned().unwrap_or_default();
    record.insert("status".into(), Value::String(status));
    record.insert("updated_at".into(), now());

    store_record(store, "orders", id, record)
}

fn store_record(store: &mut Store, collection: &str, id: &str, record: Map<String, Value>) -> Response {
    let record = Value::Object(record);
    if let Some(slot) = store
        .collections
        .get_mut(collection)
        .and_then(|items| items.iter_mut().find(|r| r.get("id").and_then(Value::as_str) == Some(id)))
    {
        *slot = record.clone();
    }
    Json(record).into_response()
}

fn remove(store: &mut Store, collection: &str, lab: Option<&str>, id: &str) -> Response {
    if find(store, collection, lab, id).is_none() {
        return not_found();
    }
    if let Some(items) = store.collections.get_mut(collection) {
        items.retain(|r| r.get("id").and_then(Value::as_str) != Some(id));
    }
    StatusCode::NO_CONTENT.into_response()
}
