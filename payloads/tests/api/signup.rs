use payloads::requests::{CompanyRegistration, LogoFile};
use payloads::CompanyId;
use test_helpers::{
    ALICE_COMPANY_ID, ALICE_EMAIL, TAKEN_EMAIL, assert_error_message,
    spawn_app,
};

fn registration(email: &str) -> CompanyRegistration {
    CompanyRegistration {
        arabic_name: "أليس للتجارة".into(),
        english_name: "Alice Trading".into(),
        email: email.into(),
        phone_number: Some("01012345678".into()),
        website_url: None,
    }
}

#[tokio::test]
async fn sign_up_then_upload_logo() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let response = app.client.sign_up(&registration(ALICE_EMAIL)).await?;
    assert_eq!(response.company_id, Some(CompanyId(ALICE_COMPANY_ID)));

    let body: serde_json::Value =
        app.requests_to("/signUp-Company").await[0].body_json()?;
    assert_eq!(body["englishName"], "Alice Trading");
    assert_eq!(body["phoneNumber"], "01012345678");
    assert!(body.get("websiteUrl").is_none());

    let logo = LogoFile {
        file_name: "logo.png".into(),
        content_type: "image/png".into(),
        data: vec![0x89, b'P', b'N', b'G'],
    };
    let uploaded = app
        .client
        .upload_logo(CompanyId(ALICE_COMPANY_ID), &logo)
        .await?;
    assert_eq!(uploaded.message.as_deref(), Some("Logo uploaded"));

    let received = app
        .requests_to(&format!("/File/upload-logo/{ALICE_COMPANY_ID}"))
        .await;
    let content_type = received[0]
        .headers
        .get("content-type")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    assert!(content_type.starts_with("multipart/form-data"));

    Ok(())
}

#[tokio::test]
async fn logo_of_unknown_type_is_still_uploaded() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let logo = LogoFile {
        file_name: "logo.heic".into(),
        content_type: String::new(),
        data: vec![0, 0, 0, 24],
    };
    let uploaded = app
        .client
        .upload_logo(CompanyId(ALICE_COMPANY_ID), &logo)
        .await?;
    assert_eq!(uploaded.message.as_deref(), Some("Logo uploaded"));

    let received = app
        .requests_to(&format!("/File/upload-logo/{ALICE_COMPANY_ID}"))
        .await;
    assert_eq!(received.len(), 1);
    let body = String::from_utf8_lossy(&received[0].body).to_lowercase();
    assert!(body.contains("filename=\"logo.heic\""));
    assert!(body.contains("content-type: application/octet-stream"));

    Ok(())
}

#[tokio::test]
async fn duplicate_email_problem_details() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let result = app.client.sign_up(&registration(TAKEN_EMAIL)).await;
    assert_error_message(result, "Email already exists");

    Ok(())
}
