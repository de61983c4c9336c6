use crate::navigation;
use portal::login::{Field, LoginForm, Msg};
use portal::session::{Claims, MemoryStore, SessionStore, current_claims};
use portal::{Effect, Form, Language, View, run};
use test_helpers::{ALICE_EMAIL, ALICE_PASSWORD, spawn_app};

fn form_with(email: &str, password: &str) -> LoginForm {
    let mut form = LoginForm::new();
    form.update(Msg::Edit(Field::Email, email.into()));
    form.update(Msg::Edit(Field::Password, password.into()));
    form
}

#[tokio::test]
async fn login_stores_the_token() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let store = MemoryStore::default();
    let mut form = form_with(ALICE_EMAIL, ALICE_PASSWORD);

    let effects = run(&mut form, &app.client, Msg::Submit).await;

    assert_eq!(navigation(&effects), Some(&View::Home));
    for effect in &effects {
        if let Effect::SaveToken(token) = effect {
            store.set_token(token);
        }
    }
    let Some(claims) = current_claims(&store) else {
        panic!("expected claims from the stored token");
    };
    assert_eq!(claims.email.as_deref(), Some(ALICE_EMAIL));

    // The token is then sent along with later requests.
    let token = store.token().unwrap_or_default();
    let client = app.client.clone().with_bearer_token(Some(token.clone()));
    let _ = client
        .resend_otp(&payloads::requests::SendOtpRequest {
            email: ALICE_EMAIL.into(),
        })
        .await?;
    let received = app.requests_to("/AccountPortal/resend-otp-portal").await;
    let header = received[0]
        .headers
        .get("authorization")
        .and_then(|value| value.to_str().ok());
    assert_eq!(header, Some(format!("Bearer {token}").as_str()));
    assert!(Claims::decode(&token).is_ok());
    Ok(())
}

#[tokio::test]
async fn wrong_password_is_refused() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let mut form = form_with(ALICE_EMAIL, "Wrong#2024");

    let effects = run(&mut form, &app.client, Msg::Submit).await;

    assert!(effects.is_empty());
    assert_eq!(
        form.error_message(Language::En).as_deref(),
        Some("Invalid email or password")
    );
    Ok(())
}
