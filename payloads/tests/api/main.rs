mod login;
mod otp;
mod set_password;
mod signup;

use test_helpers::spawn_app;

#[tokio::test]
async fn unknown_route_is_an_api_error() -> anyhow::Result<()> {
    let app = spawn_app().await;

    // Nothing is mounted under this base path.
    let client = payloads::APIClient::new(format!("{}/nowhere", app.server.uri()));
    let result = client
        .resend_otp(&payloads::requests::SendOtpRequest {
            email: "a@example.com".into(),
        })
        .await;
    test_helpers::assert_status_code(result, 404);

    Ok(())
}

#[tokio::test]
async fn unreachable_backend_is_a_network_error() -> anyhow::Result<()> {
    // Port 9 (discard) on localhost is not listening in the test environment.
    let client = payloads::APIClient::new("http://127.0.0.1:9");
    let result = client
        .resend_otp(&payloads::requests::SendOtpRequest {
            email: "a@example.com".into(),
        })
        .await;

    match result {
        Err(e @ payloads::ClientError::Network(_)) => {
            assert_eq!(e.status(), 0);
            assert_eq!(
                e.message(),
                payloads::api_client::NETWORK_ERROR_MESSAGE
            );
        }
        _ => panic!("Expected a network error"),
    }

    Ok(())
}
