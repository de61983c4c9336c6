use crate::{navigation, timings};
use portal::forgot_password::{ForgotPasswordForm, Msg};
use portal::set_password::SetPasswordQuery;
use portal::{Form, Language, View, run};
use test_helpers::{ALICE_EMAIL, UNKNOWN_EMAIL, spawn_app};

#[tokio::test]
async fn otp_is_requested_for_known_users() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let mut form = ForgotPasswordForm::new(timings());
    form.update(Msg::EditEmail(ALICE_EMAIL.into()));

    let effects = run(&mut form, &app.client, Msg::Submit).await;

    assert_eq!(
        navigation(&effects),
        Some(&View::SetPassword(SetPasswordQuery {
            otp_code: None,
            email: Some(ALICE_EMAIL.into()),
        }))
    );
    let received = app.requests_to("/AccountPortal/forget-password-portal").await;
    let body: serde_json::Value = received[0].body_json()?;
    assert_eq!(body, serde_json::json!({ "email": ALICE_EMAIL }));
    Ok(())
}

#[tokio::test]
async fn unknown_users_get_an_error() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let mut form = ForgotPasswordForm::new(timings());
    form.update(Msg::EditEmail(UNKNOWN_EMAIL.into()));

    let effects = run(&mut form, &app.client, Msg::Submit).await;

    assert!(effects.is_empty());
    assert_eq!(
        form.error_message(Language::Ar).as_deref(),
        Some("المستخدم غير موجود")
    );
    Ok(())
}
