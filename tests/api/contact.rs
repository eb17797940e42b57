use reqwest::Method;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

use inner_edit_forms::utils::MAX_BODY_BYTES;

use crate::helpers::{
    InMemoryStore, Wiring, assert_has_cors_headers, assert_json_error, spawn_app, spawn_app_with,
};

fn valid_body() -> serde_json::Value {
    json!({
        "name": "Ursula Le Guin",
        "email": "ursula@example.com",
        "subject": "A question",
        "message": "Hello there,\nI have a question."
    })
}

#[actix_web::test]
async fn contact_returns_a_200_for_a_valid_submission() {
    // Arrange
    let app = spawn_app().await;

    Mock::given(path("/emails"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.email_server)
        .await;

    // Act
    let response = app.post_contact(&valid_body()).await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    assert_has_cors_headers(&response);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({ "success": true, "message": "Thank you for your message!" })
    );
}

#[actix_web::test]
async fn contact_stores_the_submission() {
    // Arrange
    let app = spawn_app().await;

    Mock::given(path("/emails"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&app.email_server)
        .await;

    // Act
    app.post_contact(&valid_body()).await;

    // Assert
    let contacts = app.store.contacts();
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].name, "Ursula Le Guin");
    assert_eq!(contacts[0].email.as_ref(), "ursula@example.com");
    assert_eq!(contacts[0].subject.as_deref(), Some("A question"));
    assert_eq!(contacts[0].message, "Hello there,\nI have a question.");
}

#[actix_web::test]
async fn contact_stores_duplicate_submissions_twice() {
    // Arrange
    let app = spawn_app().await;

    Mock::given(path("/emails"))
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&app.email_server)
        .await;

    // Act
    app.post_contact(&valid_body()).await;
    app.post_contact(&valid_body()).await;

    // Assert
    assert_eq!(app.store.contacts().len(), 2);
}

#[actix_web::test]
async fn contact_sends_a_notification_to_the_site_owner() {
    // Arrange
    let app = spawn_app().await;

    Mock::given(path("/emails"))
        .and(method("POST"))
        .and(header("Authorization", "Bearer re_test_token"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.email_server)
        .await;

    // Act
    app.post_contact(&valid_body()).await;

    // Assert
    let emails = app.sent_emails().await;
    assert_eq!(emails[0]["from"], "contact@theinneredit.com");
    assert_eq!(emails[0]["to"], "hello@theinneredit.com");
    assert_eq!(emails[0]["subject"], "Contact Form: A question");
    let html = emails[0]["html"].as_str().unwrap();
    assert!(html.contains("Ursula Le Guin (ursula@example.com)"));
    assert!(html.contains("Hello there,<br>I have a question."));
}

#[actix_web::test]
async fn contact_returns_a_400_when_required_fields_are_missing() {
    // Arrange
    let app = spawn_app().await;
    let test_cases = vec![
        (
            json!({"email": "ursula@example.com", "message": "Hi"}),
            "missing the name",
        ),
        (
            json!({"name": "Ursula", "message": "Hi"}),
            "missing the email",
        ),
        (
            json!({"name": "Ursula", "email": "ursula@example.com"}),
            "missing the message",
        ),
        (
            json!({"name": "", "email": "ursula@example.com", "message": "Hi"}),
            "an empty name",
        ),
        (
            json!({"name": "Ursula", "email": "ursula@example.com", "message": null}),
            "a null message",
        ),
        (json!({}), "an empty object"),
    ];

    Mock::given(path("/emails"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    for (invalid_body, description) in test_cases {
        // Act
        let response = app.post_contact(&invalid_body).await;

        // Assert
        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 Bad Request when the payload had {}.",
            description
        );
        assert_json_error(response, 400, "Missing required fields").await;
    }
    assert!(app.store.operations().is_empty());
}

#[actix_web::test]
async fn contact_returns_a_400_for_a_malformed_email() {
    // Arrange
    let app = spawn_app().await;
    let test_cases = vec![
        ("ursula.example.com", "no @"),
        ("ursula@example", "no dot after the @"),
        ("ursula @example.com", "whitespace before the @"),
        ("ursula@ example.com", "whitespace after the @"),
        ("ursula@@example.com", "two @"),
    ];

    Mock::given(path("/emails"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    for (email, description) in test_cases {
        // Act
        let response = app
            .post_contact(&json!({"name": "Ursula", "email": email, "message": "Hi"}))
            .await;

        // Assert
        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not reject an email with {}.",
            description
        );
        assert_json_error(response, 400, "Invalid email address").await;
    }
    assert!(app.store.contacts().is_empty());
}

#[actix_web::test]
async fn contact_returns_a_500_when_the_email_api_fails() {
    // Arrange
    let app = spawn_app().await;

    Mock::given(path("/emails"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.email_server)
        .await;

    // Act
    let response = app.post_contact(&valid_body()).await;

    // Assert
    assert_json_error(response, 500, "Internal server error").await;
}

#[actix_web::test]
async fn contact_returns_a_500_when_the_store_fails() {
    // Arrange
    let app = spawn_app_with(Wiring::EmailAndStore, InMemoryStore::failing()).await;

    Mock::given(path("/emails"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&app.email_server)
        .await;

    // Act
    let response = app.post_contact(&valid_body()).await;

    // Assert
    assert_json_error(response, 500, "Internal server error").await;
}

#[actix_web::test]
async fn contact_returns_a_500_for_a_body_that_is_not_json() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let response = app
        .post_raw("/api/contact", "name=Ursula&email=ursula%40example.com".into())
        .await;

    // Assert
    assert_json_error(response, 500, "Internal server error").await;
}

#[actix_web::test]
async fn contact_succeeds_without_any_integration() {
    // Arrange
    let app = spawn_app_with(Wiring::Nothing, InMemoryStore::default()).await;

    Mock::given(path("/emails"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    // Act
    let response = app.post_contact(&valid_body()).await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    assert!(app.store.operations().is_empty());
}

#[actix_web::test]
async fn contact_stores_the_submission_when_email_is_not_configured() {
    // Arrange
    let app = spawn_app_with(Wiring::StoreOnly, InMemoryStore::default()).await;

    // Act
    let response = app.post_contact(&valid_body()).await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    assert_eq!(app.store.contacts().len(), 1);
}

#[actix_web::test]
async fn contact_sends_the_email_when_no_store_is_configured() {
    // Arrange
    let app = spawn_app_with(Wiring::EmailOnly, InMemoryStore::default()).await;

    Mock::given(path("/emails"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.email_server)
        .await;

    // Act
    let response = app.post_contact(&valid_body()).await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    assert!(app.store.contacts().is_empty());
}

#[actix_web::test]
async fn contact_rejects_other_methods() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let response = app.request(Method::GET, "/api/contact").await;

    // Assert
    assert_eq!(405, response.status().as_u16());
}

#[actix_web::test]
async fn contact_accepts_a_message_larger_than_the_default_payload_limit() {
    // Arrange
    let app = spawn_app_with(Wiring::StoreOnly, InMemoryStore::default()).await;
    let mut body = valid_body();
    body["message"] = json!("a".repeat(300 * 1024));

    // Act
    let response = app.post_contact(&body).await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    assert_eq!(app.store.contacts()[0].message.len(), 300 * 1024);
}

#[actix_web::test]
async fn contact_returns_a_json_500_for_an_oversized_body() {
    // Arrange
    let app = spawn_app().await;
    let mut body = valid_body();
    body["message"] = json!("a".repeat(MAX_BODY_BYTES + 1));

    Mock::given(path("/emails"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    // Act
    let response = app.post_contact(&body).await;

    // Assert
    assert_json_error(response, 500, "Internal server error").await;
    assert!(app.store.operations().is_empty());
}

#[actix_web::test]
async fn contact_reads_a_json_array_as_a_form_without_fields() {
    // Arrange
    let app = spawn_app().await;

    Mock::given(path("/emails"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    // Act
    let response = app
        .post_raw(
            "/api/contact",
            r#"["Ursula","ursula@example.com","A question","Hello"]"#.into(),
        )
        .await;

    // Assert
    assert_json_error(response, 400, "Missing required fields").await;
    assert!(app.store.operations().is_empty());
}

#[actix_web::test]
async fn contact_reads_scalar_fields_as_strings() {
    // Arrange
    let app = spawn_app_with(Wiring::StoreOnly, InMemoryStore::default()).await;

    // Act
    let response = app
        .post_contact(&json!({
            "name": 42,
            "email": "ursula@example.com",
            "subject": true,
            "message": "Hello"
        }))
        .await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let contacts = app.store.contacts();
    assert_eq!(contacts[0].name, "42");
    assert_eq!(contacts[0].subject.as_deref(), Some("true"));
}
