use futures::executor::block_on;

use super::*;
use crate::net::scripted::{ScriptedTransport, envelope, identity_json};
use crate::net::session_client::SessionEvent;
use crate::net::transport::Method;
use crate::net::types::{AlumniProfilePayload, HelpType, MatchStatus, Role, StudentProfilePayload};

fn student_payload() -> StudentProfilePayload {
    StudentProfilePayload {
        grad_year: 2026,
        major: "Computer Science".to_owned(),
        about_me: "Junior".to_owned(),
        career_interest: vec!["Technology".to_owned()],
        linkedin_profile: "https://linkedin.com/in/ada".to_owned(),
        resume_url: None,
    }
}

// =============================================================================
// Auth endpoints
// =============================================================================

#[test]
fn login_posts_form_encoded_credentials() {
    let transport = ScriptedTransport::new().reply(200, "");
    let (client, _rx) = SessionClient::new(transport.clone());
    let request = LoginRequest { email: "a@depauw.edu".to_owned(), password_hash: "abc12345".to_owned() };

    block_on(client.login(&request)).unwrap();

    let sent = transport.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].method, Method::Post);
    assert_eq!(sent[0].path, LOGIN_PATH);
    assert_eq!(sent[0].body, RequestBody::Form("email=a%40depauw.edu&passwordHash=abc12345".to_owned()));
}

#[test]
fn login_ignores_response_body() {
    let (client, _rx) = SessionClient::new(ScriptedTransport::new().reply(200, "<html>redirect</html>"));
    let request = LoginRequest { email: "a@depauw.edu".to_owned(), password_hash: "abc12345".to_owned() };
    assert_eq!(block_on(client.login(&request)), Ok(()));
}

#[test]
fn register_returns_created_identity() {
    let transport = ScriptedTransport::new().reply_json(201, &envelope(201, identity_json("STUDENT")));
    let (client, _rx) = SessionClient::new(transport.clone());
    let request = RegistrationRequest {
        full_name: "Ada Tiger".to_owned(),
        email: "a@depauw.edu".to_owned(),
        password_hash: "abc12345".to_owned(),
        role: Role::Student,
    };

    let identity = block_on(client.register(&request)).unwrap();
    assert_eq!(identity.full_name, "Ada Tiger");
    match &transport.sent()[0].body {
        RequestBody::Json(json) => {
            let value: serde_json::Value = serde_json::from_str(json).unwrap();
            assert_eq!(value["role"], "STUDENT");
            assert_eq!(value["passwordHash"], "abc12345");
        }
        other => panic!("expected JSON body, got {other:?}"),
    }
}

#[test]
fn register_duplicate_email_surfaces_backend_message() {
    let body = serde_json::json!({ "status": "error", "code": 409, "data": null, "message": "Email already in use" });
    let (client, _rx) = SessionClient::new(ScriptedTransport::new().reply_json(409, &body));
    let request = RegistrationRequest {
        full_name: "Ada Tiger".to_owned(),
        email: "a@depauw.edu".to_owned(),
        password_hash: "abc12345".to_owned(),
        role: Role::Student,
    };
    let err = block_on(client.register(&request)).unwrap_err();
    assert_eq!(err.user_message("Registration failed").as_deref(), Some("Email already in use"));
}

#[test]
fn me_without_session_is_unauthorized_and_signals() {
    let (client, mut rx) = SessionClient::new(ScriptedTransport::new().reply(401, ""));
    assert_eq!(block_on(client.me()), Err(ApiError::Unauthorized));
    assert_eq!(rx.try_next().unwrap(), Some(SessionEvent::Unauthorized { path: ME_PATH }));
}

#[test]
fn me_with_null_data_is_decode_error() {
    let (client, _rx) = SessionClient::new(ScriptedTransport::new().reply_json(200, &envelope(200, serde_json::Value::Null)));
    assert!(matches!(block_on(client.me()), Err(ApiError::Decode(_))));
}

#[test]
fn logout_posts_to_logout_path() {
    let transport = ScriptedTransport::new().reply(200, "");
    let (client, _rx) = SessionClient::new(transport.clone());
    block_on(client.logout()).unwrap();
    assert_eq!(transport.sent_paths(), vec![LOGOUT_PATH]);
}

// =============================================================================
// Profile endpoints
// =============================================================================

#[test]
fn fetch_profile_404_is_none_and_leaves_session_alone() {
    let (client, mut rx) = SessionClient::new(ScriptedTransport::new().reply(404, ""));
    assert_eq!(block_on(client.fetch_my_profile()), Ok(None));
    assert!(rx.try_next().is_err());
}

#[test]
fn fetch_profile_returns_data() {
    let data = serde_json::json!({ "userId": "u-1", "email": "a@depauw.edu", "role": "STUDENT", "major": "History" });
    let (client, _rx) = SessionClient::new(ScriptedTransport::new().reply_json(200, &envelope(200, data)));
    let profile = block_on(client.fetch_my_profile()).unwrap().unwrap();
    assert_eq!(profile.major.as_deref(), Some("History"));
}

#[test]
fn fetch_profile_server_error_is_still_an_error() {
    let (client, _rx) = SessionClient::new(ScriptedTransport::new().reply(500, ""));
    assert!(matches!(block_on(client.fetch_my_profile()), Err(ApiError::Rejected { status: 500, .. })));
}

#[test]
fn save_profile_dispatches_by_role() {
    let transport = ScriptedTransport::new().reply(200, "").reply(200, "");
    let (client, _rx) = SessionClient::new(transport.clone());

    block_on(client.save_profile(&ProfilePayload::Student(student_payload()))).unwrap();
    block_on(client.save_profile(&ProfilePayload::Alumni(AlumniProfilePayload {
        grad_year: 2010,
        major: "Economics".to_owned(),
        about_me: String::new(),
        current_company: "Acme".to_owned(),
        job_title: "Analyst".to_owned(),
        field_of_expertise: vec!["Finance".to_owned()],
        willingness_to_help: vec![HelpType::ResumeReview],
        linkedin_profile: "https://linkedin.com/in/bo".to_owned(),
    })))
    .unwrap();

    assert_eq!(transport.sent_paths(), vec![STUDENT_PROFILE_PATH, ALUMNI_PROFILE_PATH]);
}

// =============================================================================
// Match endpoints
// =============================================================================

#[test]
fn create_match_request_posts_type_and_message() {
    let transport = ScriptedTransport::new().reply(200, "");
    let (client, _rx) = SessionClient::new(transport.clone());
    let payload = MatchRequestPayload { kind: HelpType::CoffeeChat, message: "I would love a coffee chat".to_owned() };

    block_on(client.create_match_request(&payload)).unwrap();

    let sent = transport.sent();
    assert_eq!(sent[0].path, MATCH_REQUEST_PATH);
    assert_eq!(
        sent[0].body,
        RequestBody::Json(r#"{"type":"COFFEE_CHAT","message":"I would love a coffee chat"}"#.to_owned())
    );
}

#[test]
fn match_result_null_data_means_no_match_yet() {
    let (client, _rx) = SessionClient::new(ScriptedTransport::new().reply_json(200, &envelope(200, serde_json::Value::Null)));
    assert_eq!(block_on(client.fetch_match_result()), Ok(None));
}

#[test]
fn match_result_decodes_status() {
    let data = serde_json::json!({ "matchStatus": "ACCEPTED" });
    let (client, _rx) = SessionClient::new(ScriptedTransport::new().reply_json(200, &envelope(200, data)));
    let result = block_on(client.fetch_match_result()).unwrap().unwrap();
    assert_eq!(result.status, MatchStatus::Accepted);
}
