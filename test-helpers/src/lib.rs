pub mod mock;
pub mod telemetry;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use payloads::{APIClient, ClientError};
use std::net::TcpListener;
use tracing_log::LogTracer;
use tracing_subscriber::util::SubscriberInitExt;
use wiremock::MockServer;

/// Company account the mock backend accepts logins for.
pub const ALICE_EMAIL: &str = "alice@example.com";
pub const ALICE_PASSWORD: &str = "Alice#2024";
pub const ALICE_COMPANY_ID: i64 = 42;
/// An address the mock backend reports as unknown.
pub const UNKNOWN_EMAIL: &str = "unknown@example.com";
/// An address the mock backend reports as already registered.
pub const TAKEN_EMAIL: &str = "taken@example.com";
/// Any OTP other than these is accepted by the mock backend.
pub const EXPIRED_OTP: &str = "000000";
pub const INVALID_OTP: &str = "111111";

pub struct TestApp {
    #[allow(unused)]
    pub port: u16,
    pub server: MockServer,
    pub client: APIClient,
}

impl TestApp {
    /// Requests the mock backend received on the given path.
    pub async fn requests_to(&self, path: &str) -> Vec<wiremock::Request> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .into_iter()
            .filter(|request| request.url.path() == path)
            .collect()
    }
}

/// Start the mock portal backend on a specific port (0 for an os-assigned
/// one).
pub async fn spawn_app_on_port(port: u16) -> anyhow::Result<TestApp> {
    let subscriber = telemetry::get_subscriber("error".into());
    let _ = LogTracer::init();
    let _ = subscriber.try_init();

    let listener = TcpListener::bind(("127.0.0.1", port))?;
    let port = listener.local_addr()?.port();
    let server = MockServer::builder().listener(listener).start().await;
    mock::mount_portal(&server).await;

    let client = APIClient::new(server.uri());
    Ok(TestApp {
        port,
        server,
        client,
    })
}

pub async fn spawn_app() -> TestApp {
    spawn_app_on_port(0)
        .await
        .expect("failed to start mock portal backend")
}

/// Build an unsigned JWT-shaped token carrying the given claims.
pub fn make_token(claims: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
    format!("{header}.{payload}.signature")
}

/// Assert that the result of an API action results in a specific status code.
pub fn assert_status_code<T>(result: Result<T, ClientError>, expected: u16) {
    match result {
        Err(ClientError::APIError(code, _)) => {
            assert_eq!(code.as_u16(), expected)
        }
        _ => panic!("Expected APIError"),
    };
}

/// Assert that an API action failed with the given normalized message.
pub fn assert_error_message<T>(result: Result<T, ClientError>, expected: &str) {
    match result {
        Err(e) => assert_eq!(e.message(), expected),
        Ok(_) => panic!("Expected an error"),
    }
}
