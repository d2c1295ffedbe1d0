use super::*;

#[test]
fn user_without_role_decodes_as_tenant() {
    let user: User = serde_json::from_str(r#"{"id":"u1","name":"Ana","email":"ana@example.com"}"#).unwrap();
    assert!(user.role.is_none());
    assert_eq!(user.role(), Role::User);
}

#[test]
fn user_role_is_normalized() {
    let user: User =
        serde_json::from_str(r#"{"id":"u1","name":"Ana","email":"ana@example.com","role":"ADMIN"}"#).unwrap();
    assert_eq!(user.role(), Role::Admin);
}

#[test]
fn property_decodes_with_defaults() {
    let property: Property = serde_json::from_str(
        r#"{"id":"p1","title":"Loft","city":"Lima","price_per_night":12050,"ignored":true}"#,
    )
    .unwrap();
    assert_eq!(property.currency, "USD");
    assert!(property.photos.is_empty());
    assert!(property.reviews.is_empty());
    assert_eq!(property.price_label(), "USD 120.50");
}

#[test]
fn login_request_serializes_fields() {
    let body = serde_json::to_value(LoginRequest {
        email: "a@b.com".to_owned(),
        password: "secret".to_owned(),
    })
    .unwrap();
    assert_eq!(body["email"], "a@b.com");
    assert_eq!(body["password"], "secret");
}
