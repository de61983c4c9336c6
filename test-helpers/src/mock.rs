//! Canned behaviour of the company portal backend.
//!
//! The responses mirror the shapes the real backend sends, including its
//! several error formats:
//! - plain `{"message": ...}` bodies
//! - `{"errors": [...]}` lists
//! - ASP.NET validation problem details (`title` plus per-field `errors`)
//! - login bodies with `success: false`

use crate::{
    ALICE_COMPANY_ID, ALICE_EMAIL, ALICE_PASSWORD, EXPIRED_OTP, INVALID_OTP,
    TAKEN_EMAIL, UNKNOWN_EMAIL, make_token,
};
use serde_json::json;
use wiremock::matchers::{body_json, body_partial_json, method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Specific scenarios are mounted with a higher priority than the catch-all
/// success response of the same endpoint.
const SCENARIO: u8 = 1;

pub async fn mount_portal(server: &MockServer) {
    mount_cors(server).await;
    mount_signup(server).await;
    mount_login(server).await;
    mount_otp(server).await;
    mount_set_password(server).await;
}

/// Every response allows any origin, so a UI served from another port can
/// talk to the mock.
fn respond(status: u16) -> ResponseTemplate {
    ResponseTemplate::new(status)
        .insert_header("access-control-allow-origin", "*")
}

/// Browser preflight requests.
async fn mount_cors(server: &MockServer) {
    Mock::given(method("OPTIONS"))
        .and(path_regex(".*"))
        .respond_with(
            respond(204)
                .insert_header("access-control-allow-methods", "POST, OPTIONS")
                .insert_header(
                    "access-control-allow-headers",
                    "authorization, content-type",
                ),
        )
        .mount(server)
        .await;
}

/// Token returned for Alice's logins.
pub fn alice_token() -> String {
    make_token(&json!({
        "sub": "7",
        "email": ALICE_EMAIL,
        "companyId": ALICE_COMPANY_ID,
        "companyName": "Alice Trading",
        "exp": 4_102_444_800_i64,
    }))
}

async fn mount_signup(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/signUp-Company"))
        .and(body_partial_json(json!({ "email": TAKEN_EMAIL })))
        .respond_with(respond(400).set_body_json(json!({
            "type": "https://tools.ietf.org/html/rfc9110#section-15.5.1",
            "title": "One or more validation errors occurred.",
            "status": 400,
            "errors": { "Email": ["Email already exists"] }
        })))
        .with_priority(SCENARIO)
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path("/signUp-Company"))
        .respond_with(respond(200).set_body_json(json!({
            "message": "Company registered successfully",
            "companyId": ALICE_COMPANY_ID
        })))
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path(format!("/File/upload-logo/{ALICE_COMPANY_ID}")))
        .respond_with(
            respond(200)
                .set_body_json(json!({ "message": "Logo uploaded" })),
        )
        .mount(server)
        .await;
}

async fn mount_login(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/AccountPortal/login"))
        .and(body_json(json!({
            "email": ALICE_EMAIL,
            "password": ALICE_PASSWORD
        })))
        .respond_with(respond(200).set_body_json(json!({
            "success": true,
            "message": "Login successful",
            "data": {
                "token": alice_token(),
                "expiresInMinutes": 60,
                "userId": 7,
                "companyId": ALICE_COMPANY_ID,
                "email": ALICE_EMAIL,
                "companyName": "Alice Trading",
                "companyArabicName": "أليس للتجارة",
                "tokenType": "Bearer"
            },
            "errors": []
        })))
        .with_priority(SCENARIO)
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path("/AccountPortal/login"))
        .respond_with(respond(401).set_body_json(json!({
            "success": false,
            "message": "Invalid email or password",
            "data": null,
            "errors": []
        })))
        .mount(server)
        .await;
}

async fn mount_otp(server: &MockServer) {
    for endpoint in [
        "/AccountPortal/forget-password-portal",
        "/AccountPortal/resend-otp-portal",
    ] {
        Mock::given(method("POST"))
            .and(path(endpoint))
            .and(body_json(json!({ "email": UNKNOWN_EMAIL })))
            .respond_with(
                respond(404)
                    .set_body_json(json!({ "message": "User not found" })),
            )
            .with_priority(SCENARIO)
            .mount(server)
            .await;

        Mock::given(method("POST"))
            .and(path(endpoint))
            .respond_with(
                respond(200)
                    .set_body_json(json!({ "message": "OTP sent" })),
            )
            .mount(server)
            .await;
    }
}

async fn mount_set_password(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/AccountPortal/setpassword"))
        .and(body_partial_json(json!({ "otp": EXPIRED_OTP })))
        .respond_with(
            respond(400)
                .set_body_json(json!({ "message": "OTP has expired" })),
        )
        .with_priority(SCENARIO)
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path("/AccountPortal/setpassword"))
        .and(body_partial_json(json!({ "otp": INVALID_OTP })))
        .respond_with(
            respond(400)
                .set_body_json(json!({ "errors": ["Invalid OTP"] })),
        )
        .with_priority(SCENARIO)
        .mount(server)
        .await;

    // The real backend answers some successes with an empty body.
    Mock::given(method("POST"))
        .and(path("/AccountPortal/setpassword"))
        .respond_with(respond(200))
        .mount(server)
        .await;
}
