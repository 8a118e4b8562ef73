//! Local HTTP server standing in for the Perplexity API in adapter tests.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use poem::endpoint::make;
use poem::http::StatusCode;
use poem::listener::{Acceptor, Listener, TcpListener};
use poem::{Request, Response, Route, Server, post};
use serde_json::Value;

#[derive(Debug, Clone)]
pub struct ReceivedRequest {
    pub authorization: Option<String>,
    pub body: Value,
}

pub struct FakeUpstream {
    pub base_url: String,
    received: Arc<Mutex<Vec<ReceivedRequest>>>,
}

impl FakeUpstream {
    pub async fn spawn(status: u16, body: &str) -> Self {
        Self::spawn_with_delay(status, body, Duration::ZERO).await
    }

    pub async fn spawn_with_delay(status: u16, body: &str, delay: Duration) -> Self {
        let received = Arc::new(Mutex::new(Vec::new()));
        let log = received.clone();
        let body = body.to_string();
        let status = StatusCode::from_u16(status).unwrap();

        let app = Route::new().at(
            "/chat/completions",
            post(make(move |mut req: Request| {
                let log = log.clone();
                let body = body.clone();
                async move {
                    let authorization = req
                        .headers()
                        .get("authorization")
                        .and_then(|v| v.to_str().ok())
                        .map(str::to_string);
                    let raw = req.take_body().into_string().await.unwrap_or_default();
                    log.lock().unwrap().push(ReceivedRequest {
                        authorization,
                        body: serde_json::from_str(&raw).unwrap_or(Value::Null),
                    });
                    tokio::time::sleep(delay).await;
                    Response::builder()
                        .status(status)
                        .content_type("application/json")
                        .body(body)
                }
            })),
        );

        let acceptor = TcpListener::bind("127.0.0.1:0")
            .into_acceptor()
            .await
            .unwrap();
        let port = acceptor.local_addr()[0].as_socket_addr().unwrap().port();
        tokio::spawn(Server::new_with_acceptor(acceptor).run(app));

        Self {
            base_url: format!("http://127.0.0.1:{}", port),
            received,
        }
    }

    pub fn received(&self) -> Vec<ReceivedRequest> {
        self.received.lock().unwrap().clone()
    }
}
