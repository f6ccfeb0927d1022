// src/test_support.rs
// DOCUMENTATION: In-process fake of the remote API for tests
// PURPOSE: Serve canned responses and record every request received

use actix_web::dev::ServerHandle;
use actix_web::http::StatusCode;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use std::collections::HashMap;
use std::sync::Mutex;

/// One request as seen by the fake API
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: String,
    pub authorization: Option<String>,
    pub body: String,
}

impl RecordedRequest {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("request body is JSON")
    }
}

struct CannedResponse {
    status: u16,
    content_type: &'static str,
    body: String,
}

struct MockState {
    responses: HashMap<String, CannedResponse>,
    requests: Mutex<Vec<RecordedRequest>>,
}

/// Builder for canned responses, keyed by request path
#[derive(Default)]
pub struct MockApiBuilder {
    responses: HashMap<String, CannedResponse>,
}

impl MockApiBuilder {
    pub fn json(mut self, path: &str, status: u16, body: serde_json::Value) -> Self {
        self.responses.insert(
            path.to_string(),
            CannedResponse {
                status,
                content_type: "application/json",
                body: body.to_string(),
            },
        );
        self
    }

    pub fn text(mut self, path: &str, status: u16, body: &str) -> Self {
        self.responses.insert(
            path.to_string(),
            CannedResponse {
                status,
                content_type: "text/html",
                body: body.to_string(),
            },
        );
        self
    }

    pub async fn start(self) -> MockApi {
        let state = web::Data::new(MockState {
            responses: self.responses,
            requests: Mutex::new(Vec::new()),
        });

        let app_state = state.clone();
        let server = HttpServer::new(move || {
            App::new()
                .app_data(app_state.clone())
                .default_service(web::to(record_and_reply))
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .expect("bind mock api");

        let addr = server.addrs()[0];
        let server = server.run();
        let handle = server.handle();
        actix_rt::spawn(server);

        MockApi {
            base_url: format!("http://{}", addr),
            state,
            handle,
        }
    }
}

/// Running fake API
pub struct MockApi {
    pub base_url: String,
    state: web::Data<MockState>,
    handle: ServerHandle,
}

impl MockApi {
    pub fn builder() -> MockApiBuilder {
        MockApiBuilder::default()
    }

    pub fn graphql_url(&self) -> String {
        format!("{}/graphql/", self.base_url)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    pub async fn stop(self) {
        self.handle.stop(false).await;
    }
}

async fn record_and_reply(
    req: HttpRequest,
    body: web::Bytes,
    state: web::Data<MockState>,
) -> HttpResponse {
    let recorded = RecordedRequest {
        method: req.method().to_string(),
        path: req.path().to_string(),
        query: req.query_string().to_string(),
        authorization: req
            .headers()
            .get("Authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: String::from_utf8_lossy(&body).to_string(),
    };
    state.requests.lock().unwrap().push(recorded);

    match state.responses.get(req.path()) {
        Some(canned) => HttpResponse::build(StatusCode::from_u16(canned.status).unwrap())
            .content_type(canned.content_type)
            .body(canned.body.clone()),
        None => HttpResponse::NotFound()
            .content_type("application/json")
            .body(r#"{"error":"no canned response"}"#),
    }
}

/// URL nothing listens on, for transport failures
pub const UNREACHABLE_URL: &str = "http://127.0.0.1:9";
