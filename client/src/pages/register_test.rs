use futures::executor::block_on;
use leptos::reactive::owner::Owner;

use super::*;
use crate::net::api::{LOGIN_PATH, ME_PATH, REGISTER_PATH};
use crate::net::scripted::{ScriptedTransport, envelope, identity_json};
use crate::net::transport::RequestBody;

fn request() -> RegistrationRequest {
    RegistrationRequest {
        full_name: "Ada Tiger".to_owned(),
        email: "a@depauw.edu".to_owned(),
        password_hash: "abc12345".to_owned(),
        role: Role::Alumni,
    }
}

#[test]
fn register_then_login_then_identity() {
    Owner::new().with(|| {
        let session = AuthSession::new();
        let transport = ScriptedTransport::new()
            .reply_json(201, &envelope(201, identity_json("ALUMNI")))
            .reply(200, "")
            .reply_json(200, &envelope(200, identity_json("ALUMNI")));
        let (client, _rx) = SessionClient::new(transport.clone());

        let identity = block_on(register_and_sign_in(session, &client, &request())).unwrap();

        assert_eq!(identity.role, Role::Alumni);
        assert_eq!(session.role(), Some(Role::Alumni));
        assert_eq!(transport.sent_paths(), vec![REGISTER_PATH, LOGIN_PATH, ME_PATH]);
        assert_eq!(
            transport.sent()[1].body,
            RequestBody::Form("email=a%40depauw.edu&passwordHash=abc12345".to_owned())
        );
    });
}

#[test]
fn duplicate_email_stops_before_login() {
    Owner::new().with(|| {
        let session = AuthSession::new();
        let transport = ScriptedTransport::new().reply_json(
            409,
            &serde_json::json!({ "status": "error", "code": 409, "data": null, "message": "Email already registered" }),
        );
        let (client, mut rx) = SessionClient::new(transport.clone());

        let error = block_on(register_and_sign_in(session, &client, &request())).unwrap_err();

        assert_eq!(error.user_message("fallback"), Some("Email already registered".to_owned()));
        assert_eq!(transport.sent_paths(), vec![REGISTER_PATH]);
        assert!(rx.try_next().is_err());
    });
}
