use reqwest::{Response, header};
use rolodex_adapters::{
    Argon2PasswordHasher, HashMapSessionStore, HashMapUserStore, InMemoryAuditSink,
};
use rolodex_application::{AuthConfig, AuthService};
use rolodex_axum::{AppState, RefreshCookieConfig};
use rolodex_service::RolodexApp;
use secrecy::Secret;
use serde_json::Value;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

const SECRET: &str = "0123456789abcdef0123456789abcdef";
const TEST_ADDRESS: &str = "127.0.0.1:0";

pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
    pub audit_sink: InMemoryAuditSink,
    pub shutdown: CancellationToken,
}

impl TestApp {
    pub async fn new() -> Self {
        let config = AuthConfig::new(Secret::from(SECRET.to_string())).unwrap();
        let hasher = Argon2PasswordHasher::new(
            Secret::from(SECRET.to_string()),
            Secret::from("service-salt".to_string()),
        )
        .unwrap();
        let audit_sink = InMemoryAuditSink::new();
        let service = AuthService::new(
            HashMapUserStore::new(),
            HashMapSessionStore::new(),
            audit_sink.clone(),
            hasher,
            &config,
        );

        let shutdown = CancellationToken::new();
        let state = AppState::new(
            service,
            shutdown.clone(),
            RefreshCookieConfig {
                name: "refresh-token".to_string(),
                max_age_in_seconds: config.refresh_token_ttl().num_seconds(),
            },
        );

        let listener = TcpListener::bind(TEST_ADDRESS).await.unwrap();
        let address = format!("http://{}", listener.local_addr().unwrap());

        let server_shutdown = shutdown.clone();
        tokio::spawn(async move {
            RolodexApp::new(state)
                .run(listener, &[], server_shutdown)
                .await
                .unwrap();
        });

        Self {
            address,
            http_client: reqwest::Client::new(),
            audit_sink,
            shutdown,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/v1/auth{}", self.address, path)
    }

    pub async fn post_sign_up(&self, body: &Value) -> Response {
        self.http_client
            .post(self.url("/sign-up"))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_sign_in(&self, body: &Value) -> Response {
        self.http_client
            .post(self.url("/sign-in"))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_refresh(&self, cookie: Option<&str>) -> Response {
        let mut request = self.http_client.post(self.url("/refresh"));
        if let Some(cookie) = cookie {
            request = request.header(header::COOKIE, cookie);
        }
        request.send().await.expect("Failed to execute request.")
    }

    pub async fn get_session(&self, access_token: Option<&str>) -> Response {
        let mut request = self.http_client.get(self.url("/session"));
        if let Some(token) = access_token {
            request = request.bearer_auth(token);
        }
        request.send().await.expect("Failed to execute request.")
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

/// `name=value` part of the refresh cookie set by `response`.
pub fn refresh_cookie(response: &Response) -> String {
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .expect("response sets a refresh cookie");
    assert!(set_cookie.starts_with("refresh-token="));
    set_cookie
        .split(';')
        .next()
        .unwrap_or_default()
        .to_string()
}
