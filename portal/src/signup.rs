//! Company signup form. After the company is registered the optional logo is
//! uploaded against the id the backend returned.

use crate::validation::{
    COMPANY_NAME_MAX_LEN, COMPANY_NAME_MIN_LEN, FieldError, ValidationErrors,
    is_valid_email, is_valid_phone, is_valid_website,
};
use crate::{
    Effect, Form, Label, Language, Lifecycle, Notice, Reply, Request,
    SubmissionState, Ticket, Timings, View,
};
use payloads::ClientError;
use payloads::requests::{CompanyRegistration, LogoFile};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    NameAr,
    NameEn,
    Email,
    PhoneNumber,
    WebsiteUrl,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Self::NameAr,
        Self::NameEn,
        Self::Email,
        Self::PhoneNumber,
        Self::WebsiteUrl,
    ];
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupFields {
    pub name_ar: String,
    pub name_en: String,
    pub email: String,
    pub phone_number: String,
    pub website_url: String,
}

impl SignupFields {
    fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::NameAr => &mut self.name_ar,
            Field::NameEn => &mut self.name_en,
            Field::Email => &mut self.email,
            Field::PhoneNumber => &mut self.phone_number,
            Field::WebsiteUrl => &mut self.website_url,
        }
    }

    pub fn to_request(&self) -> CompanyRegistration {
        CompanyRegistration {
            arabic_name: self.name_ar.trim().to_string(),
            english_name: self.name_en.trim().to_string(),
            email: self.email.trim().to_string(),
            phone_number: non_empty(&self.phone_number),
            website_url: non_empty(&self.website_url),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn check_name(
    errors: &mut ValidationErrors<Field>,
    field: Field,
    name: &str,
) {
    let len = name.trim().chars().count();
    if len == 0 {
        errors.add(field, FieldError::Required);
    } else if len < COMPANY_NAME_MIN_LEN {
        errors.add(field, FieldError::TooShort);
    } else if len > COMPANY_NAME_MAX_LEN {
        errors.add(field, FieldError::TooLong);
    }
}

pub fn validate(fields: &SignupFields) -> ValidationErrors<Field> {
    let mut errors = ValidationErrors::default();
    check_name(&mut errors, Field::NameAr, &fields.name_ar);
    check_name(&mut errors, Field::NameEn, &fields.name_en);

    let email = fields.email.trim();
    if email.is_empty() {
        errors.add(Field::Email, FieldError::Required);
    } else if !is_valid_email(email) {
        errors.add(Field::Email, FieldError::InvalidEmail);
    }

    let phone = fields.phone_number.trim();
    if phone.is_empty() {
        errors.add(Field::PhoneNumber, FieldError::Required);
    } else if !is_valid_phone(phone) {
        errors.add(Field::PhoneNumber, FieldError::InvalidFormat);
    }

    let website = fields.website_url.trim();
    if website.is_empty() {
        errors.add(Field::WebsiteUrl, FieldError::Required);
    } else if !is_valid_website(website) {
        errors.add(Field::WebsiteUrl, FieldError::InvalidFormat);
    }

    errors
}

pub fn error_label(field: Field, error: FieldError) -> Label {
    use FieldError::*;
    match (field, error) {
        (Field::NameAr, Required) => Label::NameArRequired,
        (Field::NameAr, TooShort) => Label::NameArMin,
        (Field::NameAr, _) => Label::NameArMax,
        (Field::NameEn, Required) => Label::NameEnRequired,
        (Field::NameEn, TooShort) => Label::NameEnMin,
        (Field::NameEn, _) => Label::NameEnMax,
        (Field::Email, Required) => Label::EmailRequired,
        (Field::Email, _) => Label::EmailInvalid,
        (Field::PhoneNumber, Required) => Label::PhoneRequired,
        (Field::PhoneNumber, _) => Label::PhoneInvalid,
        (Field::WebsiteUrl, Required) => Label::WebsiteRequired,
        (Field::WebsiteUrl, _) => Label::WebsiteInvalid,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    Edit(Field, String),
    Blur(Field),
    SelectLogo(LogoFile),
    ClearLogo,
    Submit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupForm {
    fields: SignupFields,
    logo: Option<LogoFile>,
    touched: BTreeSet<Field>,
    submission: SubmissionState,
    /// Success notice held back until the logo upload finishes.
    registered: Option<Notice>,
    timings: Timings,
    lifecycle: Lifecycle,
}

impl SignupForm {
    pub fn new(timings: Timings) -> Self {
        Self {
            fields: SignupFields::default(),
            logo: None,
            touched: BTreeSet::new(),
            submission: SubmissionState::default(),
            registered: None,
            timings,
            lifecycle: Lifecycle::default(),
        }
    }

    pub fn fields(&self) -> &SignupFields {
        &self.fields
    }

    pub fn logo(&self) -> Option<&LogoFile> {
        self.logo.as_ref()
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
            self.touched.extend(Field::ALL);
            return Vec::new();
        }

        let ticket = self.lifecycle.issue();
        self.submission.start(ticket);
        self.registered = None;
        tracing::debug!(%ticket, "registering company");
        vec![Effect::Call {
            ticket,
            request: Request::SignUp(self.fields.to_request()),
        }]
    }

    fn finish(&mut self, notice: Notice) -> Vec<Effect> {
        self.submission.succeed(notice);
        vec![Effect::Navigate {
            view: View::Login,
            after: self.timings.navigate_delay,
        }]
    }
}

impl Form for SignupForm {
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
                Vec::new()
            }
            Msg::Blur(field) => {
                self.touched.insert(field);
                Vec::new()
            }
            Msg::SelectLogo(logo) => {
                tracing::debug!(?logo, "logo selected");
                self.logo = Some(logo);
                Vec::new()
            }
            Msg::ClearLogo => {
                self.logo = None;
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
            return Vec::new();
        }

        let response = match reply {
            Err(e) => {
                self.registered = None;
                self.submission.fail(Notice::from(&e));
                return Vec::new();
            }
            // Reply to the logo upload.
            Ok(_) if self.registered.is_some() => {
                let notice = self
                    .registered
                    .take()
                    .unwrap_or(Notice::Label(Label::SignupSuccess));
                return self.finish(notice);
            }
            Ok(Reply::SignedUp(response)) => response,
            Ok(other) => {
                tracing::warn!(?other, "unexpected reply to signup");
                self.submission.fail(Notice::Label(Label::ErrorOccurred));
                return Vec::new();
            }
        };

        let notice = match response.message {
            Some(message) if !message.trim().is_empty() => {
                Notice::Server(message)
            }
            _ => Notice::Label(Label::SignupSuccess),
        };

        match (self.logo.clone(), response.company_id) {
            (Some(logo), Some(company_id)) => {
                let ticket = self.lifecycle.issue();
                self.submission.start(ticket);
                self.registered = Some(notice);
                tracing::debug!(%ticket, %company_id, "uploading logo");
                vec![Effect::Call {
                    ticket,
                    request: Request::UploadLogo { company_id, logo },
                }]
            }
            (Some(_), None) => {
                tracing::warn!("signup response has no company id, skipping logo");
                self.finish(notice)
            }
            (None, _) => self.finish(notice),
        }
    }

    fn dispose(&mut self) {
        self.lifecycle.dispose();
    }

    fn is_disposed(&self) -> bool {
        self.lifecycle.is_disposed()
    }
}
