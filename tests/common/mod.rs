#![allow(dead_code)]

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::{Json, Router};
use serde_json::{json, Value};

use gymadmin::navigation::RecordingNavigator;
use gymadmin::notify::RecordingNotifier;
use gymadmin::{ApiClient, Config, SessionStore};

/// A request as the mock backend saw it. `path` has the `/api` prefix
/// stripped.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    pub authorization: Option<String>,
    pub body: Option<Value>,
}

#[derive(Default)]
struct Backend {
    routes: HashMap<(Method, String), (StatusCode, Value)>,
    requests: Vec<Recorded>,
}

/// In-process stand-in for the gym backend. Every route answers with a
/// canned status and JSON body; unknown routes get a 404.
#[derive(Clone)]
pub struct MockBackend {
    inner: Arc<Mutex<Backend>>,
    pub base_url: String,
}

impl MockBackend {
    pub async fn start() -> Self {
        let inner = Arc::new(Mutex::new(Backend::default()));
        let app = Router::new().fallback(handle).with_state(inner.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            inner,
            base_url: format!("http://{}/api", addr),
        }
    }

    pub fn respond(&self, method: Method, path: &str, status: StatusCode, body: Value) {
        self.inner
            .lock()
            .unwrap()
            .routes
            .insert((method, path.to_string()), (status, body));
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.inner.lock().unwrap().requests.clone()
    }

    pub fn requests_to(&self, method: Method, path: &str) -> Vec<Recorded> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == method && r.path == path)
            .collect()
    }

    pub fn last_request(&self) -> Recorded {
        self.requests().pop().expect("no request reached the backend")
    }
}

async fn handle(
    State(backend): State<Arc<Mutex<Backend>>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, Json<Value>) {
    let path = uri.path().trim_start_matches("/api").to_string();
    let mut backend = backend.lock().unwrap();
    backend.requests.push(Recorded {
        method: method.clone(),
        path: path.clone(),
        authorization: headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: serde_json::from_slice(&body).ok(),
    });

    match backend.routes.get(&(method, path)) {
        Some((status, body)) => (*status, Json(body.clone())),
        None => (StatusCode::NOT_FOUND, Json(json!({ "message": "Route not found" }))),
    }
}

/// Base URL nothing listens on, for connection failures.
pub fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/api", port)
}

pub struct TestClient {
    pub client: ApiClient,
    pub notifier: RecordingNotifier,
    pub navigator: RecordingNavigator,
    pub session: SessionStore,
}

pub fn create_test_client(base_url: &str) -> TestClient {
    let config = Config {
        api_base_url: base_url.to_string(),
        session_file: PathBuf::from("unused"),
        request_timeout: Duration::from_secs(5),
    };
    let session = SessionStore::in_memory();
    let notifier = RecordingNotifier::new();
    let navigator = RecordingNavigator::new();
    let client = ApiClient::new(
        config,
        session.clone(),
        Arc::new(notifier.clone()),
        Arc::new(navigator.clone()),
    )
    .unwrap();

    TestClient {
        client,
        notifier,
        navigator,
        session,
    }
}

/// Client with a stored token, as after a successful login.
pub fn create_logged_in_client(base_url: &str) -> TestClient {
    let test = create_test_client(base_url);
    test.session.set("test-token").unwrap();
    test
}

// Response bodies in the backend's envelope shapes

pub fn users_body() -> Value {
    json!({
        "data": {
            "users": [
                {
                    "_id": "u1",
                    "name": "Alice Moore",
                    "email": "alice@gym.test",
                    "age": 29,
                    "weight": 61.5,
                    "height": 168.0,
                    "goal": "Build strength",
                    "membershipStatus": "active"
                },
                {
                    "_id": "u2",
                    "name": "Bob Stone",
                    "email": "bob@gym.test",
                    "membershipStatus": "expired"
                }
            ]
        }
    })
}

pub fn workout_plans_body() -> Value {
    json!({
        "data": {
            "workoutPlans": [
                {
                    "_id": "w1",
                    "name": "Push Pull Legs",
                    "description": "Six day split",
                    "difficulty": "advanced",
                    "exercises": [{ "name": "Squat", "sets": 5, "reps": 5, "restTime": 180 }]
                }
            ]
        }
    })
}

pub fn diet_plans_body() -> Value {
    json!({
        "data": {
            "dietPlans": [
                {
                    "_id": "d1",
                    "name": "Lean Bulk",
                    "calories": 2800,
                    "meals": [{ "name": "Breakfast", "time": "08:00", "foods": ["Oats"] }]
                }
            ]
        }
    })
}

pub fn memberships_body() -> Value {
    json!({
        "data": {
            "memberships": [
                {
                    "_id": "m1",
                    "userId": "u1",
                    "planType": "monthly",
                    "startDate": "2024-03-01",
                    "endDate": "2024-04-01",
                    "status": "active"
                }
            ]
        }
    })
}

pub fn payments_body() -> Value {
    json!({
        "data": {
            "payments": [
                {
                    "_id": "p1",
                    "userId": "u1",
                    "userName": "Alice Moore",
                    "userEmail": "alice@gym.test",
                    "amount": 49.99,
                    "planType": "monthly",
                    "status": "completed",
                    "createdAt": "2024-03-05T10:00:00Z",
                    "paymentMethod": "Credit Card"
                },
                {
                    "_id": "p2",
                    "userId": "u2",
                    "userName": "Bob Stone",
                    "userEmail": "bob@gym.test",
                    "amount": 499.99,
                    "planType": "yearly",
                    "status": "pending",
                    "createdAt": "2024-03-06T10:00:00Z",
                    "paymentMethod": "PayPal"
                }
            ]
        }
    })
}
