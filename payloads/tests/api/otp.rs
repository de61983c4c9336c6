use payloads::requests::SendOtpRequest;
use test_helpers::{ALICE_EMAIL, UNKNOWN_EMAIL, assert_error_message, spawn_app};

#[tokio::test]
async fn resend_otp() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let details = SendOtpRequest {
        email: ALICE_EMAIL.into(),
    };
    let response = app.client.resend_otp(&details).await?;
    assert_eq!(response.message.as_deref(), Some("OTP sent"));

    let details = SendOtpRequest {
        email: UNKNOWN_EMAIL.into(),
    };
    let result = app.client.resend_otp(&details).await;
    assert_error_message(result, "User not found");

    Ok(())
}

#[tokio::test]
async fn forget_password() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let details = SendOtpRequest {
        email: ALICE_EMAIL.into(),
    };
    app.client.forget_password(&details).await?;
    assert_eq!(
        app.requests_to("/AccountPortal/forget-password-portal")
            .await
            .len(),
        1
    );

    Ok(())
}
