use payloads::requests::SetPasswordRequest;
use test_helpers::{
    ALICE_EMAIL, EXPIRED_OTP, INVALID_OTP, assert_error_message,
    assert_status_code, spawn_app,
};

fn request(otp: &str) -> SetPasswordRequest {
    SetPasswordRequest {
        email: ALICE_EMAIL.into(),
        otp: otp.into(),
        password: "Abcdef1!".into(),
        confirm_password: "Abcdef1!".into(),
    }
}

#[tokio::test]
async fn set_password_with_empty_success_body() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let response = app.client.set_password(&request("123456")).await?;
    assert_eq!(response, Default::default());

    let received = app.requests_to("/AccountPortal/setpassword").await;
    assert_eq!(received.len(), 1);
    let body: serde_json::Value = received[0].body_json()?;
    assert_eq!(
        body,
        serde_json::json!({
            "email": ALICE_EMAIL,
            "otp": "123456",
            "password": "Abcdef1!",
            "confirmPassword": "Abcdef1!"
        })
    );

    Ok(())
}

#[tokio::test]
async fn expired_otp_message_is_normalized() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let result = app.client.set_password(&request(EXPIRED_OTP)).await;
    assert_error_message(result, "OTP has expired");

    let result = app.client.set_password(&request(EXPIRED_OTP)).await;
    assert_status_code(result, 400);

    Ok(())
}

#[tokio::test]
async fn errors_list_is_normalized() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let result = app.client.set_password(&request(INVALID_OTP)).await;
    assert_error_message(result, "Invalid OTP");

    Ok(())
}
