//! Forgot-password form: asks the backend to email an OTP, then sends the
//! user on to the set-password page.

use crate::set_password::SetPasswordQuery;
use crate::validation::{FieldError, is_valid_email};
use crate::{
    Effect, Form, Label, Language, Lifecycle, Notice, Reply, Request,
    SubmissionState, Ticket, Timings, View,
};
use payloads::ClientError;
use payloads::requests::SendOtpRequest;

pub fn validate(email: &str) -> Option<FieldError> {
    let email = email.trim();
    if email.is_empty() {
        Some(FieldError::Required)
    } else if !is_valid_email(email) {
        Some(FieldError::InvalidEmail)
    } else {
        None
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    EditEmail(String),
    BlurEmail,
    Submit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForgotPasswordForm {
    email: String,
    touched: bool,
    submission: SubmissionState,
    timings: Timings,
    lifecycle: Lifecycle,
}

impl ForgotPasswordForm {
    pub fn new(timings: Timings) -> Self {
        Self {
            email: String::new(),
            touched: false,
            submission: SubmissionState::default(),
            timings,
            lifecycle: Lifecycle::default(),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
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

    pub fn email_error(&self) -> Option<FieldError> {
        self.touched.then(|| validate(&self.email)).flatten()
    }

    pub fn email_message(&self, language: Language) -> Option<&'static str> {
        self.email_error().map(|error| match error {
            FieldError::Required => Label::EmailRequired.text(language),
            _ => Label::EmailInvalid.text(language),
        })
    }

    pub fn error_message(&self, language: Language) -> Option<String> {
        self.submission.error_message(language)
    }

    pub fn success_message(&self, language: Language) -> Option<String> {
        self.submission.success_message(language)
    }
}

impl Form for ForgotPasswordForm {
    type Msg = Msg;

    fn update(&mut self, msg: Msg) -> Vec<Effect> {
        if self.lifecycle.is_disposed() {
            return Vec::new();
        }
        match msg {
            Msg::EditEmail(email) => {
                self.email = email;
                self.touched = true;
                self.submission.on_edit();
                Vec::new()
            }
            Msg::BlurEmail => {
                self.touched = true;
                Vec::new()
            }
            Msg::Submit => {
                if !self.can_submit() {
                    return Vec::new();
                }
                if validate(&self.email).is_some() {
                    self.touched = true;
                    return Vec::new();
                }
                let ticket = self.lifecycle.issue();
                self.submission.start(ticket);
                tracing::debug!(%ticket, "requesting otp");
                vec![Effect::Call {
                    ticket,
                    request: Request::ForgetPassword(SendOtpRequest {
                        email: self.email.trim().to_string(),
                    }),
                }]
            }
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
            return Vec::new();
        }
        match reply {
            Ok(_) => {
                self.submission.succeed(Notice::Label(Label::OtpSent));
                let query = SetPasswordQuery {
                    otp_code: None,
                    email: Some(self.email.trim().to_string()),
                };
                vec![Effect::Navigate {
                    view: View::SetPassword(query),
                    after: self.timings.navigate_delay,
                }]
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
