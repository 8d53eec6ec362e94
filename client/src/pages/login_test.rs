use futures::executor::block_on;
use leptos::reactive::owner::Owner;

use super::*;
use crate::net::api::{LOGIN_PATH, ME_PATH};
use crate::net::scripted::{ScriptedTransport, envelope, identity_json};
use crate::net::transport::RequestBody;
use crate::net::types::Role;

fn ada_login() -> LoginRequest {
    LoginDraft { email: "a@depauw.edu".to_owned(), password: "abc12345".to_owned() }
        .validate()
        .unwrap()
}

#[test]
fn sign_in_logs_in_then_fetches_identity() {
    Owner::new().with(|| {
        let session = AuthSession::new();
        let transport = ScriptedTransport::new()
            .reply_json(200, &envelope(200, serde_json::Value::Null))
            .reply_json(200, &envelope(200, identity_json("STUDENT")));
        let (client, _rx) = SessionClient::new(transport.clone());

        let identity = block_on(sign_in(session, &client, &ada_login())).unwrap();

        assert_eq!(identity.role, Role::Student);
        assert!(session.is_authenticated());
        assert_eq!(transport.sent_paths(), vec![LOGIN_PATH, ME_PATH]);
        assert_eq!(
            transport.sent()[0].body,
            RequestBody::Form("email=a%40depauw.edu&passwordHash=abc12345".to_owned())
        );
    });
}

#[test]
fn sign_in_stops_when_login_is_rejected() {
    Owner::new().with(|| {
        let session = AuthSession::new();
        let transport = ScriptedTransport::new().reply_json(
            400,
            &serde_json::json!({ "status": "error", "code": 400, "data": null, "message": "Bad credentials" }),
        );
        let (client, _rx) = SessionClient::new(transport.clone());

        let error = block_on(sign_in(session, &client, &ada_login())).unwrap_err();

        assert_eq!(error.user_message("Invalid email or password"), Some("Bad credentials".to_owned()));
        assert_eq!(transport.sent_paths(), vec![LOGIN_PATH]);
        assert!(session.is_loading(), "session untouched until an identity query runs");
    });
}

#[test]
fn sign_in_identity_failure_leaves_session_signed_out() {
    Owner::new().with(|| {
        let session = AuthSession::new();
        let transport = ScriptedTransport::new().reply(200, "").reply(500, "");
        let (client, _rx) = SessionClient::new(transport);

        let error = block_on(sign_in(session, &client, &ada_login())).unwrap_err();

        assert!(matches!(error, ApiError::Rejected { status: 500, .. }));
        assert!(!session.is_authenticated());
        assert!(!session.is_loading());
    });
}

#[test]
fn rejected_credentials_401_still_shows_login_notice() {
    Owner::new().with(|| {
        let session = AuthSession::new();
        let (client, mut rx) = SessionClient::new(ScriptedTransport::new().reply(401, ""));

        let error = block_on(sign_in(session, &client, &ada_login())).unwrap_err();
        assert_eq!(error, ApiError::Unauthorized);
        assert!(rx.try_next().unwrap().is_some(), "the session path still hears about it");

        let notice = sign_in_failure_notice(&error);
        assert_eq!(notice.tone, crate::state::notify::Tone::Error);
        assert_eq!(notice.title, "Login failed");
        assert_eq!(notice.description, "Invalid email or password");
    });
}

#[test]
fn login_notice_prefers_backend_message() {
    let error = ApiError::Rejected { status: 423, message: Some("Account locked".to_owned()) };
    assert_eq!(sign_in_failure_notice(&error).description, "Account locked");
    assert_eq!(sign_in_failure_notice(&ApiError::Network("offline".to_owned())).description, "Invalid email or password");
}
