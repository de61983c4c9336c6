//! Set-password form: the user proves ownership of the account with the
//! emailed OTP and picks a new password. Also hosts the "resend OTP" action.

use crate::validation::{
    self, FieldError, GroupError, ValidationErrors, is_valid_email,
    is_valid_otp, passwords_match,
};
use crate::{
    Effect, Form, Label, Language, Lifecycle, Notice, Reply, Request,
    SubmissionState, Ticket, Timings, View,
};
use payloads::ClientError;
use payloads::requests::{SendOtpRequest, SetPasswordRequest};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Email,
    Otp,
    Password,
    ConfirmPassword,
}

impl Field {
    pub const ALL: [Field; 4] =
        [Self::Email, Self::Otp, Self::Password, Self::ConfirmPassword];
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetPasswordFields {
    pub email: String,
    pub otp: String,
    pub password: String,
    pub confirm_password: String,
}

impl SetPasswordFields {
    fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Email => &mut self.email,
            Field::Otp => &mut self.otp,
            Field::Password => &mut self.password,
            Field::ConfirmPassword => &mut self.confirm_password,
        }
    }

    /// Email and OTP are trimmed; passwords are sent exactly as typed.
    pub fn to_request(&self) -> SetPasswordRequest {
        SetPasswordRequest {
            email: self.email.trim().to_string(),
            otp: self.otp.trim().to_string(),
            password: self.password.clone(),
            confirm_password: self.confirm_password.clone(),
        }
    }
}

/// Query parameters accepted by the set-password page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetPasswordQuery {
    #[serde(
        rename = "otpCode",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub otp_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Validate every field plus the password confirmation.
///
/// An empty password reports `Required` only: the policy error stays quiet
/// until something has been typed.
pub fn validate(fields: &SetPasswordFields) -> ValidationErrors<Field> {
    let mut errors = ValidationErrors::default();

    let email = fields.email.trim();
    if email.is_empty() {
        errors.add(Field::Email, FieldError::Required);
    } else if !is_valid_email(email) {
        errors.add(Field::Email, FieldError::InvalidEmail);
    }

    let otp = fields.otp.trim();
    if otp.is_empty() {
        errors.add(Field::Otp, FieldError::Required);
    } else if !is_valid_otp(otp) {
        errors.add(Field::Otp, FieldError::WrongLength);
    }

    if fields.password.is_empty() {
        errors.add(Field::Password, FieldError::Required);
    } else if !validation::password_meets_policy(&fields.password) {
        errors.add(Field::Password, FieldError::WeakPassword);
    }

    if fields.confirm_password.is_empty() {
        errors.add(Field::ConfirmPassword, FieldError::Required);
    }

    if !passwords_match(&fields.password, &fields.confirm_password) {
        errors.set_group(GroupError::PasswordMismatch);
    }

    errors
}

pub fn error_label(field: Field, error: FieldError) -> Label {
    match (field, error) {
        (Field::Email, FieldError::Required) => Label::EmailRequired,
        (Field::Email, _) => Label::EmailInvalid,
        (Field::Otp, FieldError::Required) => Label::OtpRequired,
        (Field::Otp, _) => Label::OtpLength,
        (Field::Password, FieldError::Required) => Label::PasswordRequired,
        (Field::Password, _) => Label::PasswordPolicy,
        (Field::ConfirmPassword, _) => Label::ConfirmPasswordRequired,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    Edit(Field, String),
    /// The field lost focus.
    Blur(Field),
    Submit,
    ResendOtp,
}

/// State of the resend-OTP action, independent from the main submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResendState {
    pending: Option<Ticket>,
    /// Success notice and the timer ticket that clears it.
    notice: Option<(Ticket, Notice)>,
    error: Option<Notice>,
}

impl ResendState {
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn success_message(&self, language: Language) -> Option<String> {
        self.notice.as_ref().map(|(_, notice)| notice.render(language))
    }

    pub fn error_message(&self, language: Language) -> Option<String> {
        self.error.as_ref().map(|notice| notice.render(language))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetPasswordForm {
    fields: SetPasswordFields,
    touched: BTreeSet<Field>,
    submission: SubmissionState,
    resend: ResendState,
    timings: Timings,
    lifecycle: Lifecycle,
}

impl SetPasswordForm {
    pub fn new(timings: Timings) -> Self {
        Self {
            fields: SetPasswordFields::default(),
            touched: BTreeSet::new(),
            submission: SubmissionState::default(),
            resend: ResendState::default(),
            timings,
            lifecycle: Lifecycle::default(),
        }
    }

    /// A form pre-filled from the page's query parameters.
    pub fn from_query(query: &SetPasswordQuery, timings: Timings) -> Self {
        let mut form = Self::new(timings);
        if let Some(otp) = query.otp_code.as_deref().filter(|o| !o.is_empty()) {
            form.fields.otp = otp.to_string();
        }
        if let Some(email) = query.email.as_deref().filter(|e| !e.is_empty()) {
            form.fields.email = email.to_string();
        }
        form
    }

    pub fn fields(&self) -> &SetPasswordFields {
        &self.fields
    }

    pub fn submission(&self) -> &SubmissionState {
        &self.submission
    }

    pub fn resend(&self) -> &ResendState {
        &self.resend
    }

    pub fn is_loading(&self) -> bool {
        self.submission.is_loading()
    }

    pub fn can_submit(&self) -> bool {
        self.submission.can_submit()
    }

    pub fn errors(&self) -> ValidationErrors<Field> {
        validate(&self.fields)
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    /// The error to show under a field; only touched fields show errors.
    pub fn field_error(&self, field: Field) -> Option<FieldError> {
        if !self.is_touched(field) {
            return None;
        }
        self.errors().field(field)
    }

    pub fn field_message(
        &self,
        field: Field,
        language: Language,
    ) -> Option<&'static str> {
        self.field_error(field)
            .map(|error| error_label(field, error).text(language))
    }

    /// The confirmation mismatch, reported for the form as a whole once the
    /// confirmation field has been touched.
    pub fn mismatch_message(&self, language: Language) -> Option<&'static str> {
        let mismatch = self.errors().group() == Some(GroupError::PasswordMismatch);
        (mismatch && self.is_touched(Field::ConfirmPassword))
            .then(|| Label::PasswordsMismatch.text(language))
    }

    pub fn error_message(&self, language: Language) -> Option<String> {
        self.submission.error_message(language)
    }

    pub fn success_message(&self, language: Language) -> Option<String> {
        self.submission.success_message(language)
    }

    fn submit(&mut self) -> Vec<Effect> {
        if !self.can_submit() {
            tracing::debug!(
                phase = ?self.submission.phase(),
                "set password not accepting submits"
            );
            return Vec::new();
        }

        let errors = self.errors();
        if !errors.is_empty() {
            tracing::debug!(?errors, "set password form is invalid");
            self.touched.extend(Field::ALL);
            return Vec::new();
        }

        let ticket = self.lifecycle.issue();
        self.submission.start(ticket);
        tracing::debug!(%ticket, "submitting new password");
        vec![Effect::Call {
            ticket,
            request: Request::SetPassword(self.fields.to_request()),
        }]
    }

    fn resend_otp(&mut self) -> Vec<Effect> {
        if self.resend.is_loading() {
            return Vec::new();
        }

        let email = self.fields.email.trim();
        if email.is_empty() {
            self.touched.insert(Field::Email);
            self.resend.notice = None;
            self.resend.error = Some(Notice::Label(Label::EmailRequired));
            return Vec::new();
        }

        let request = Request::ResendOtp(SendOtpRequest {
            email: email.to_string(),
        });
        let ticket = self.lifecycle.issue();
        self.resend = ResendState {
            pending: Some(ticket),
            ..Default::default()
        };
        tracing::debug!(%ticket, "resending otp");
        vec![Effect::Call { ticket, request }]
    }

    fn on_resend_reply(
        &mut self,
        ticket: Ticket,
        reply: Result<Reply, ClientError>,
    ) -> Vec<Effect> {
        self.resend.pending = None;
        match reply {
            Ok(_) => {
                self.resend.notice =
                    Some((ticket, Notice::Label(Label::OtpResent)));
                vec![Effect::Wake {
                    ticket,
                    after: self.timings.notice_timeout,
                }]
            }
            Err(e) => {
                self.resend.error = Some(Notice::from(&e));
                Vec::new()
            }
        }
    }
}

impl Form for SetPasswordForm {
    type Msg = Msg;

    fn update(&mut self, msg: Msg) -> Vec<Effect> {
        if self.lifecycle.is_disposed() {
            return Vec::new();
        }
        match msg {
            Msg::Edit(field, value) => {
                *self.fields.get_mut(field) = value;
                self.touched.insert(field);
                self.submission.on_edit();
                if field == Field::Email {
                    self.resend.error = None;
                }
                Vec::new()
            }
            Msg::Blur(field) => {
                self.touched.insert(field);
                Vec::new()
            }
            Msg::Submit => self.submit(),
            Msg::ResendOtp => self.resend_otp(),
        }
    }

    fn on_reply(
        &mut self,
        ticket: Ticket,
        reply: Result<Reply, ClientError>,
    ) -> Vec<Effect> {
        if self.lifecycle.is_disposed() {
            tracing::debug!(%ticket, "dropping reply for disposed form");
            return Vec::new();
        }
        if self.resend.pending == Some(ticket) {
            return self.on_resend_reply(ticket, reply);
        }
        if !self.submission.is_waiting_for(ticket) {
            tracing::debug!(%ticket, "dropping stale reply");
            return Vec::new();
        }

        match reply {
            Ok(_) => {
                self.submission
                    .succeed(Notice::Label(Label::PasswordSetSuccess));
                vec![Effect::Navigate {
                    view: View::Login,
                    after: self.timings.navigate_delay,
                }]
            }
            Err(e) => {
                tracing::debug!(status = e.status(), "set password failed");
                self.submission.fail(Notice::from(&e));
                Vec::new()
            }
        }
    }

    fn on_wake(&mut self, ticket: Ticket) -> Vec<Effect> {
        if self
            .resend
            .notice
            .as_ref()
            .is_some_and(|(shown, _)| *shown == ticket)
        {
            self.resend.notice = None;
        }
        Vec::new()
    }

    fn dispose(&mut self) {
        self.lifecycle.dispose();
    }

    fn is_disposed(&self) -> bool {
        self.lifecycle.is_disposed()
    }
}
