use payloads::requests::LoginRequest;
use test_helpers::{
    ALICE_COMPANY_ID, ALICE_EMAIL, ALICE_PASSWORD, assert_error_message,
    mock::alice_token, spawn_app,
};

#[tokio::test]
async fn login_success() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let body = LoginRequest {
        email: ALICE_EMAIL.into(),
        password: ALICE_PASSWORD.into(),
    };
    let response = app.client.login(&body).await?;

    assert!(response.success);
    let data = response.data.expect("login data");
    assert_eq!(data.token, alice_token());
    assert_eq!(data.company_id.0, ALICE_COMPANY_ID);
    assert_eq!(data.token_type, "Bearer");

    Ok(())
}

#[tokio::test]
async fn login_refused() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let body = LoginRequest {
        email: ALICE_EMAIL.into(),
        password: "wrong".into(),
    };
    let result = app.client.login(&body).await;
    assert_error_message(result, "Invalid email or password");

    Ok(())
}

#[tokio::test]
async fn bearer_token_is_attached() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let client = app.client.clone().with_bearer_token(Some("abc".into()));

    let body = LoginRequest {
        email: ALICE_EMAIL.into(),
        password: ALICE_PASSWORD.into(),
    };
    client.login(&body).await?;
    app.client.login(&body).await?;

    let received = app.requests_to("/AccountPortal/login").await;
    assert_eq!(received.len(), 2);
    let authorization = received[0]
        .headers
        .get("authorization")
        .and_then(|value| value.to_str().ok());
    assert_eq!(authorization, Some("Bearer abc"));
    assert!(received[1].headers.get("authorization").is_none());

    Ok(())
}
