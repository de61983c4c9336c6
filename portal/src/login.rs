//! Login form.

use crate::validation::{FieldError, ValidationErrors, is_valid_email};
use crate::{
    Effect, Form, Label, Language, Lifecycle, Notice, Reply, Request,
    SubmissionState, Ticket, View,
};
use payloads::ClientError;
use payloads::requests::LoginRequest;
use std::collections::BTreeSet;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Email,
    Password,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginFields {
    pub email: String,
    pub password: String,
}

pub fn validate(fields: &LoginFields) -> ValidationErrors<Field> {
    let mut errors = ValidationErrors::default();
    let email = fields.email.trim();
    if email.is_empty() {
        errors.add(Field::Email, FieldError::Required);
    } else if !is_valid_email(email) {
        errors.add(Field::Email, FieldError::InvalidEmail);
    }
    if fields.password.is_empty() {
        errors.add(Field::Password, FieldError::Required);
    }
    errors
}

pub fn error_label(field: Field, error: FieldError) -> Label {
    match (field, error) {
        (Field::Email, FieldError::Required) => Label::EmailRequired,
        (Field::Email, _) => Label::EmailInvalid,
        (Field::Password, _) => Label::PasswordRequired,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    Edit(Field, String),
    Blur(Field),
    Submit,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    fields: LoginFields,
    touched: BTreeSet<Field>,
    submission: SubmissionState,
    lifecycle: Lifecycle,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &LoginFields {
        &self.fields
    }

    pub fn submission(&self) -> &SubmissionState {
        &self.submission
    }

    pub fn is_loading(&self) -> bool {
        self.submission.is_loading()
    }

    pub fn can_submit(&self) -> bool {
        self.submission.can_submit()
    }

    pub fn field_error(&self, field: Field) -> Option<FieldError> {
        if !self.touched.contains(&field) {
            return None;
        }
        validate(&self.fields).field(field)
    }

    pub fn field_message(
        &self,
        field: Field,
        language: Language,
    ) -> Option<&'static str> {
        self.field_error(field)
            .map(|error| error_label(field, error).text(language))
    }

    pub fn error_message(&self, language: Language) -> Option<String> {
        self.submission.error_message(language)
    }

    pub fn success_message(&self, language: Language) -> Option<String> {
        self.submission.success_message(language)
    }

    fn submit(&mut self) -> Vec<Effect> {
        if !self.can_submit() {
            return Vec::new();
        }
        if !validate(&self.fields).is_empty() {
            self.touched.extend([Field::Email, Field::Password]);
            return Vec::new();
        }

        let ticket = self.lifecycle.issue();
        self.submission.start(ticket);
        tracing::debug!(%ticket, "logging in");
        vec![Effect::Call {
            ticket,
            request: Request::Login(LoginRequest {
                email: self.fields.email.trim().to_string(),
                password: self.fields.password.clone(),
            }),
        }]
    }
}

impl Form for LoginForm {
    type Msg = Msg;

    fn update(&mut self, msg: Msg) -> Vec<Effect> {
        if self.lifecycle.is_disposed() {
            return Vec::new();
        }
        match msg {
            Msg::Edit(field, value) => {
                match field {
                    Field::Email => self.fields.email = value,
                    Field::Password => self.fields.password = value,
                }
                self.touched.insert(field);
                self.submission.on_edit();
                Vec::new()
            }
            Msg::Blur(field) => {
                self.touched.insert(field);
                Vec::new()
            }
            Msg::Submit => self.submit(),
        }
    }

    fn on_reply(
        &mut self,
        ticket: Ticket,
        reply: Result<Reply, ClientError>,
    ) -> Vec<Effect> {
        if self.lifecycle.is_disposed()
            || !self.submission.is_waiting_for(ticket)
        {
            tracing::debug!(%ticket, "dropping login reply");
            return Vec::new();
        }

        match reply {
            Ok(Reply::LoggedIn(response)) => match response.data {
                Some(data) => {
                    tracing::info!(user_id = data.user_id, "logged in");
                    self.submission.succeed(Notice::Label(Label::LoginSuccess));
                    vec![
                        Effect::SaveToken(data.token),
                        Effect::Navigate {
                            view: View::Home,
                            after: Duration::ZERO,
                        },
                    ]
                }
                None => {
                    tracing::warn!("login succeeded without a token");
                    self.submission.fail(Notice::Label(Label::ErrorOccurred));
                    Vec::new()
                }
            },
            Ok(other) => {
                tracing::warn!(?other, "unexpected reply to login");
                self.submission.fail(Notice::Label(Label::ErrorOccurred));
                Vec::new()
            }
            Err(e) => {
                self.submission.fail(Notice::from(&e));
                Vec::new()
            }
        }
    }

    fn dispose(&mut self) {
        self.lifecycle.dispose();
    }

    fn is_disposed(&self) -> bool {
        self.lifecycle.is_disposed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Canned, FakeGateway};
    use crate::{Phase, run};
    use payloads::CompanyId;
    use payloads::responses::{LoginData, LoginResponse};

    fn filled(email: &str, password: &str) -> LoginForm {
        let mut form = LoginForm::new();
        form.update(Msg::Edit(Field::Email, email.into()));
        form.update(Msg::Edit(Field::Password, password.into()));
        form
    }

    fn logged_in(token: &str) -> Canned {
        Canned::Ok(Reply::LoggedIn(LoginResponse {
            success: true,
            message: "Login successful".into(),
            data: Some(LoginData {
                token: token.into(),
                expires_in_minutes: 60,
                user_id: 7,
                company_id: CompanyId(42),
                email: "alice@example.com".into(),
                company_name: "Alice Trading".into(),
                company_arabic_name: "أليس للتجارة".into(),
                token_type: "Bearer".into(),
            }),
            errors: Vec::new(),
        }))
    }

    #[tokio::test]
    async fn success_saves_token_and_goes_home() {
        let mut form = filled(" alice@example.com", "Alice#2024");
        let gateway = FakeGateway::replying([logged_in("jwt")]);

        let effects = run(&mut form, &gateway, Msg::Submit).await;

        assert_eq!(
            gateway.calls(),
            vec![Request::Login(LoginRequest {
                email: "alice@example.com".into(),
                password: "Alice#2024".into(),
            })]
        );
        assert_eq!(
            effects,
            vec![
                Effect::SaveToken("jwt".into()),
                Effect::Navigate {
                    view: View::Home,
                    after: Duration::ZERO,
                },
            ]
        );
        assert_eq!(form.submission().phase(), Phase::Succeeded);
    }

    #[tokio::test]
    async fn refused_login_is_translated() {
        let mut form = filled("alice@example.com", "wrong");
        let gateway = FakeGateway::replying([Canned::Err(
            401,
            "Invalid email or password",
        )]);

        let effects = run(&mut form, &gateway, Msg::Submit).await;

        assert!(effects.is_empty());
        assert!(!form.is_loading());
        assert_eq!(
            form.error_message(Language::Ar).as_deref(),
            Some("البريد الإلكتروني أو كلمة المرور غير صحيحة")
        );
    }

    #[tokio::test]
    async fn missing_token_is_an_error() {
        let mut form = filled("alice@example.com", "Alice#2024");
        let gateway = FakeGateway::replying([Canned::Ok(Reply::LoggedIn(
            LoginResponse {
                success: true,
                ..Default::default()
            },
        ))]);

        let effects = run(&mut form, &gateway, Msg::Submit).await;

        assert!(effects.is_empty());
        assert_eq!(
            form.error_message(Language::En).as_deref(),
            Some("An error occurred. Please try again.")
        );
    }

    #[tokio::test]
    async fn invalid_form_is_not_sent() {
        let mut form = filled("alice", "");
        let gateway = FakeGateway::default();

        run(&mut form, &gateway, Msg::Submit).await;

        assert!(gateway.calls().is_empty());
        assert_eq!(form.field_error(Field::Email), Some(FieldError::InvalidEmail));
        assert_eq!(
            form.field_message(Field::Password, Language::En),
            Some("Password should be required")
        );
    }

    #[test]
    fn only_touched_fields_report_errors() {
        let mut form = LoginForm::new();
        assert_eq!(form.field_error(Field::Email), None);
        form.update(Msg::Blur(Field::Email));
        assert_eq!(form.field_error(Field::Email), Some(FieldError::Required));
        assert_eq!(form.field_error(Field::Password), None);
    }
}
