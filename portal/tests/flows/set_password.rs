use crate::{navigation, timings};
use portal::set_password::{Field, Msg, SetPasswordForm, SetPasswordQuery};
use portal::{Effect, Form, Language, Phase, View, run};
use test_helpers::{
    ALICE_EMAIL, EXPIRED_OTP, INVALID_OTP, UNKNOWN_EMAIL, spawn_app,
};

fn form_with(email: &str, otp: &str) -> SetPasswordForm {
    let query = SetPasswordQuery {
        otp_code: Some(otp.into()),
        email: Some(email.into()),
    };
    let mut form = SetPasswordForm::from_query(&query, timings());
    form.update(Msg::Edit(Field::Password, "Abcdef1!".into()));
    form.update(Msg::Edit(Field::ConfirmPassword, "Abcdef1!".into()));
    form
}

#[tokio::test]
async fn new_password_is_accepted() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let mut form = form_with(ALICE_EMAIL, "123456");

    let effects = run(&mut form, &app.client, Msg::Submit).await;

    assert_eq!(navigation(&effects), Some(&View::Login));
    assert_eq!(form.submission().phase(), Phase::Succeeded);
    assert_eq!(app.requests_to("/AccountPortal/setpassword").await.len(), 1);
    Ok(())
}

#[tokio::test]
async fn expired_otp_is_shown_in_both_languages() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let mut form = form_with(ALICE_EMAIL, EXPIRED_OTP);

    let effects = run(&mut form, &app.client, Msg::Submit).await;

    assert!(effects.is_empty());
    assert!(!form.is_loading());
    assert_eq!(
        form.error_message(Language::En).as_deref(),
        Some("OTP has expired")
    );
    assert_eq!(
        form.error_message(Language::Ar).as_deref(),
        Some("انتهت صلاحية رمز التحقق")
    );
    Ok(())
}

#[tokio::test]
async fn errors_array_is_translated() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let mut form = form_with(ALICE_EMAIL, INVALID_OTP);

    run(&mut form, &app.client, Msg::Submit).await;

    assert_eq!(
        form.error_message(Language::Ar).as_deref(),
        Some("رمز التحقق غير صحيح")
    );
    Ok(())
}

#[tokio::test]
async fn resend_otp_round_trip() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let mut form = form_with(ALICE_EMAIL, "123456");

    let effects = run(&mut form, &app.client, Msg::ResendOtp).await;
    let [Effect::Wake { ticket, .. }] = effects.as_slice() else {
        panic!("expected a wake, got {effects:?}");
    };
    assert!(form.resend().success_message(Language::En).is_some());
    assert_eq!(app.requests_to("/AccountPortal/resend-otp-portal").await.len(), 1);

    form.on_wake(*ticket);
    assert!(form.resend().success_message(Language::En).is_none());

    form.update(Msg::Edit(Field::Email, UNKNOWN_EMAIL.into()));
    let effects = run(&mut form, &app.client, Msg::ResendOtp).await;
    assert!(effects.is_empty());
    assert_eq!(
        form.resend().error_message(Language::En).as_deref(),
        Some("User not found")
    );
    Ok(())
}
