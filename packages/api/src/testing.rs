//! In-memory backend used by the unit tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use store::{MemoryStore, Storage};

use crate::auth::session::Session;
use crate::client::ApiClient;
use crate::models::{Role, UserInfo};
use crate::transport::{HttpRequest, HttpResponse, Method, Transport, TransportError};

pub const BASE_URL: &str = "http://test.local";

#[derive(Clone, Debug)]
enum Reply {
    Respond(u16, String),
    Offline,
}

#[derive(Default)]
struct FakeState {
    routes: HashMap<(Method, String), Reply>,
    requests: Vec<HttpRequest>,
}

/// Canned responses keyed by method and path (query ignored).
#[derive(Clone, Default)]
pub struct FakeTransport {
    state: Rc<RefCell<FakeState>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(&self, method: Method, path: &str, status: u16, body: &str) -> &Self {
        self.state.borrow_mut().routes.insert(
            (method, path.to_string()),
            Reply::Respond(status, body.to_string()),
        );
        self
    }

    pub fn offline(&self, method: Method, path: &str) -> &Self {
        self.state
            .borrow_mut()
            .routes
            .insert((method, path.to_string()), Reply::Offline);
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.state.borrow().requests.clone()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.state.borrow().requests.last().cloned()
    }

    /// How many requests hit `path` (query ignored).
    pub fn hits(&self, path: &str) -> usize {
        self.state
            .borrow()
            .requests
            .iter()
            .filter(|r| split_path(&r.url) == path)
            .count()
    }
}

fn split_path(url: &str) -> &str {
    let path = url.strip_prefix(BASE_URL).unwrap_or(url);
    path.split('?').next().unwrap_or(path)
}

impl Transport for FakeTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let key = (request.method.clone(), split_path(&request.url).to_string());
        let reply = {
            let mut state = self.state.borrow_mut();
            state.requests.push(request);
            state.routes.get(&key).cloned()
        };
        match reply {
            Some(Reply::Respond(status, body)) => Ok(HttpResponse { status, body }),
            Some(Reply::Offline) => Err(TransportError("connection refused".to_string())),
            None => Ok(HttpResponse {
                status: 404,
                body: r#"{"detail":"Not Found"}"#.to_string(),
            }),
        }
    }
}

pub fn session() -> Session<MemoryStore> {
    Session::new(Storage::new(MemoryStore::new()))
}

pub fn client(transport: &FakeTransport) -> ApiClient<FakeTransport, MemoryStore> {
    ApiClient::new(transport.clone(), BASE_URL, session())
}

pub fn user(id: i64, role: Role) -> UserInfo {
    UserInfo {
        id,
        name: "Sam".to_string(),
        email: "sam@gym.io".to_string(),
        role,
        created_at: "2025-01-01T00:00:00".to_string(),
    }
}

pub fn user_json(id: i64, role: &str) -> String {
    format!(
        r#"{{"id":{id},"name":"Sam","email":"sam@gym.io","role":"{role}","created_at":"2025-01-01T00:00:00"}}"#
    )
}
