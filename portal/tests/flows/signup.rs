use crate::navigation;
use payloads::requests::LogoFile;
use portal::signup::{Field, Msg, SignupForm};
use portal::{Form, Language, Phase, Timings, View, run};
use test_helpers::{ALICE_COMPANY_ID, TAKEN_EMAIL, spawn_app};

fn form_with(email: &str) -> SignupForm {
    let mut form = SignupForm::new(Timings::immediate());
    for (field, value) in [
        (Field::NameAr, "شركة أليس"),
        (Field::NameEn, "Alice Trading"),
        (Field::Email, email),
        (Field::PhoneNumber, "01112345678"),
        (Field::WebsiteUrl, "alice.example.com"),
    ] {
        form.update(Msg::Edit(field, value.into()));
    }
    form
}

#[tokio::test]
async fn company_and_logo_are_registered() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let mut form = form_with("new@example.com");
    form.update(Msg::SelectLogo(LogoFile {
        file_name: "logo.png".into(),
        content_type: "image/png".into(),
        data: b"not really a png".to_vec(),
    }));

    let effects = run(&mut form, &app.client, Msg::Submit).await;

    assert_eq!(navigation(&effects), Some(&View::Login));
    assert_eq!(form.submission().phase(), Phase::Succeeded);
    assert_eq!(app.requests_to("/signUp-Company").await.len(), 1);
    let uploads = app
        .requests_to(&format!("/File/upload-logo/{ALICE_COMPANY_ID}"))
        .await;
    assert_eq!(uploads.len(), 1);
    Ok(())
}

#[tokio::test]
async fn taken_email_is_reported() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let mut form = form_with(TAKEN_EMAIL);

    let effects = run(&mut form, &app.client, Msg::Submit).await;

    assert!(effects.is_empty());
    assert_eq!(
        form.error_message(Language::Ar).as_deref(),
        Some("البريد الإلكتروني مستخدم بالفعل")
    );
    assert_eq!(
        form.error_message(Language::En).as_deref(),
        Some("Email already exists")
    );
    Ok(())
}
