//! Bilingual display of messages coming back from the backend.
//!
//! The backend only speaks English. Known messages are looked up by exact
//! text; anything else is shown verbatim in both languages.

use crate::Language;
use payloads::api_client::{
    DECODE_ERROR_MESSAGE, DEFAULT_ERROR_MESSAGE, NETWORK_ERROR_MESSAGE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translation {
    pub en: &'static str,
    pub ar: &'static str,
}

impl Translation {
    pub fn get(&self, language: Language) -> &'static str {
        match language {
            Language::En => self.en,
            Language::Ar => self.ar,
        }
    }
}

const fn entry(
    message: &'static str,
    en: &'static str,
    ar: &'static str,
) -> (&'static str, Translation) {
    (message, Translation { en, ar })
}

static TABLE: &[(&str, Translation)] = &[
    entry("OTP has expired", "OTP has expired", "انتهت صلاحية رمز التحقق"),
    entry("Invalid OTP", "Invalid OTP", "رمز التحقق غير صحيح"),
    entry("User not found", "User not found", "المستخدم غير موجود"),
    entry(
        "Email already exists",
        "Email already exists",
        "البريد الإلكتروني مستخدم بالفعل",
    ),
    entry(
        "Invalid email or password",
        "Invalid email or password",
        "البريد الإلكتروني أو كلمة المرور غير صحيحة",
    ),
    entry(
        "Passwords do not match",
        "Passwords do not match",
        "كلمات المرور غير متطابقة",
    ),
    entry(
        "Email is not confirmed",
        "Email is not confirmed",
        "البريد الإلكتروني غير مؤكد",
    ),
    entry(
        NETWORK_ERROR_MESSAGE,
        NETWORK_ERROR_MESSAGE,
        "خطأ في الشبكة، يرجى التحقق من الاتصال.",
    ),
    entry(
        DECODE_ERROR_MESSAGE,
        DECODE_ERROR_MESSAGE,
        "استجابة غير متوقعة من الخادم.",
    ),
    entry(
        DEFAULT_ERROR_MESSAGE,
        "An error occurred. Please try again.",
        "حدث خطأ، حاول مرة أخرى.",
    ),
];

pub fn lookup(message: &str) -> Option<Translation> {
    TABLE
        .iter()
        .find(|(known, _)| *known == message)
        .map(|(_, translation)| *translation)
}

/// Render a backend message in the given language. Joined multi-error
/// messages are translated line by line.
pub fn translate(message: &str, language: Language) -> String {
    message
        .split('\n')
        .map(|line| lookup(line).map_or(line, |t| t.get(language)))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_message_is_translated() {
        assert_eq!(
            translate("OTP has expired", Language::Ar),
            "انتهت صلاحية رمز التحقق"
        );
        assert_eq!(translate("OTP has expired", Language::En), "OTP has expired");
    }

    #[test]
    fn unknown_message_passes_through() {
        assert_eq!(translate("Custom failure", Language::Ar), "Custom failure");
        assert_eq!(translate("Custom failure", Language::En), "Custom failure");
    }

    #[test]
    fn lookup_is_exact() {
        assert!(lookup("otp has expired").is_none());
        assert!(lookup("OTP has expired ").is_none());
    }

    #[test]
    fn joined_errors_translate_per_line() {
        assert_eq!(
            translate("Invalid OTP\nSomething else", Language::Ar),
            "رمز التحقق غير صحيح\nSomething else"
        );
    }

    #[test]
    fn fallback_message_is_localized() {
        assert_eq!(
            translate(DEFAULT_ERROR_MESSAGE, Language::Ar),
            "حدث خطأ، حاول مرة أخرى."
        );
    }
}
