use super::*;

fn user(role: Option<&str>) -> SessionUser {
    SessionUser {
        id: "u1".to_owned(),
        name: "Alice".to_owned(),
        email: "alice@example.com".to_owned(),
        role: role.map(str::to_owned),
    }
}

#[test]
fn session_maps_known_role_slug() {
    assert_eq!(user(Some("teacher")).session(), Session::sign_in(Some(Role::Teacher)));
    assert_eq!(user(Some("parent")).session(), Session::sign_in(Some(Role::Parent)));
}

#[test]
fn session_without_role_is_roleless_sign_in() {
    assert_eq!(user(None).session(), Session::sign_in(None));
}

#[test]
fn session_with_garbage_role_is_roleless_sign_in() {
    assert_eq!(user(Some("superuser")).session(), Session::sign_in(None));
    assert_eq!(user(Some("")).session(), Session::sign_in(None));
}

#[test]
fn deserializes_without_role_field() {
    let parsed: SessionUser =
        serde_json::from_str(r#"{"id":"u2","name":"Bo","email":"bo@example.com"}"#).expect("json");
    assert_eq!(parsed.role, None);
    assert_eq!(parsed.session(), Session::sign_in(None));
}
