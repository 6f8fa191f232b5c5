//! tests/api/email_config.rs

use crate::helpers::{json_body, setup};
use serde_json::json;

#[tokio::test]
async fn a_fresh_service_reports_the_default_configuration() {
    // Arrange
    let app = setup().await;

    // Act
    let response = app.get_email_config().await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let body = json_body(response).await;
    assert_eq!(body["provider"], "mailjet");
    assert_eq!(body["has_smtp_pass"], false);
    assert_eq!(body["has_mailjet_keys"], false);
}

#[tokio::test]
async fn every_supported_provider_is_accepted() {
    // Arrange
    let app = setup().await;

    for provider in ["smtp", "mailjet", "console", "disabled"] {
        // Act
        let response = app.put_email_config(json!({ "provider": provider })).await;

        // Assert
        assert_eq!(
            200,
            response.status().as_u16(),
            "The API did not accept the provider `{}`.",
            provider
        );
        let body = json_body(response).await;
        assert_eq!(body["provider"], provider);
    }
}

#[tokio::test]
async fn unsupported_payloads_are_rejected_with_a_400() {
    // Arrange
    let app = setup().await;
    let test_cases = vec![
        (json!({ "provider": "sendgrid" }), "an unknown provider"),
        (json!({ "provider": "SMTP" }), "an upper-case provider"),
        (json!({ "smtp_port": "twenty-five" }), "a textual port"),
        (json!({ "smtp_host": 42 }), "a numeric host"),
        (json!(["smtp"]), "a list instead of an object"),
    ];

    for (body, description) in test_cases {
        // Act
        let response = app.put_email_config(body).await;

        // Assert
        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 Bad Request when the payload was {}.",
            description
        );
    }
}

#[tokio::test]
async fn a_rejected_update_leaves_the_configuration_untouched() {
    // Arrange
    let app = setup().await;
    app.put_email_config(json!({ "provider": "console" })).await;

    // Act
    let response = app
        .put_email_config(json!({ "provider": "sendgrid", "smtp_pass": "pw" }))
        .await;
    let detail = json_body(response).await;

    // Assert
    assert!(detail["detail"].as_str().unwrap().contains("sendgrid"));
    let body = json_body(app.get_email_config().await).await;
    assert_eq!(body["provider"], "console");
    assert_eq!(body["has_smtp_pass"], false);
}

#[tokio::test]
async fn omitting_the_provider_resets_it_to_mailjet() {
    // Arrange
    let app = setup().await;
    app.put_email_config(json!({ "provider": "smtp" })).await;

    // Act
    let response = app
        .put_email_config(json!({ "from_email": "no-reply@example.com" }))
        .await;

    // Assert
    let body = json_body(response).await;
    assert_eq!(body["provider"], "mailjet");
    assert_eq!(body["from_email"], "no-reply@example.com");
}

#[tokio::test]
async fn secrets_are_never_echoed_back() {
    // Arrange
    let app = setup().await;
    let payload = json!({
        "provider": "smtp",
        "from_email": "no-reply@example.com",
        "smtp_host": "smtp.example.com",
        "smtp_port": 587,
        "smtp_user": "mailer",
        "smtp_pass": "smtp-password",
    });

    // Act
    let put = app.put_email_config(payload).await.text().await.unwrap();
    let get = app.get_email_config().await.text().await.unwrap();

    // Assert
    for body in [put, get] {
        assert!(!body.contains("\"smtp_pass\""));
        assert!(!body.contains("smtp-password"));

        let body: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(body["smtp_host"], "smtp.example.com");
        assert_eq!(body["smtp_port"], 587);
        assert_eq!(body["smtp_user"], "mailer");
        assert_eq!(body["has_smtp_pass"], true);
        assert_eq!(body["has_mailjet_keys"], false);
    }
}

#[tokio::test]
async fn mailjet_keys_are_reported_once_both_are_stored() {
    // Arrange
    let app = setup().await;

    // Act
    let only_key = app
        .put_email_config(json!({ "mailjet_api_key": "mj-key" }))
        .await;
    let only_key = json_body(only_key).await;
    let both = app
        .put_email_config(json!({ "mailjet_api_secret": "mj-secret" }))
        .await
        .text()
        .await
        .unwrap();

    // Assert
    assert_eq!(only_key["has_mailjet_keys"], false);
    assert!(!both.contains("mj-key"));
    assert!(!both.contains("mj-secret"));
    let both: serde_json::Value = serde_json::from_str(&both).unwrap();
    assert_eq!(both["has_mailjet_keys"], true);
}

#[tokio::test]
async fn smtp_provider_is_accepted_without_smtp_fields() {
    // Arrange
    let app = setup().await;

    // Act
    let response = app.put_email_config(json!({ "provider": "smtp" })).await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let body = json_body(response).await;
    assert_eq!(body["smtp_host"], serde_json::Value::Null);
}

#[tokio::test]
async fn unreadable_bodies_are_rejected_with_a_json_detail() {
    // Arrange
    let app = setup().await;
    let test_cases = vec![
        ("application/json", "{\"provider\": ", "truncated JSON"),
        ("text/plain", "provider=smtp", "a non-JSON content type"),
    ];

    for (content_type, body, description) in test_cases {
        // Act
        let response = app
            .put_raw("/system/email-config", content_type, body)
            .await;

        // Assert
        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 Bad Request when the body was {}.",
            description
        );
        let body = json_body(response).await;
        assert!(
            body["detail"].is_string(),
            "The 400 for {} had no `detail` message.",
            description
        );
    }
}

#[tokio::test]
async fn out_of_range_ports_are_stored_as_given() {
    // Arrange
    let app = setup().await;

    // Act
    let response = app.put_email_config(json!({ "smtp_port": 70000 })).await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    assert_eq!(json_body(response).await["smtp_port"], 70000);
}

#[tokio::test]
async fn blank_secrets_are_not_reported_as_set() {
    // Arrange
    let app = setup().await;

    // Act
    let response = app
        .put_email_config(json!({
            "smtp_pass": "",
            "mailjet_api_key": "",
            "mailjet_api_secret": "",
        }))
        .await;

    // Assert
    let body = json_body(response).await;
    assert_eq!(body["has_smtp_pass"], false);
    assert_eq!(body["has_mailjet_keys"], false);
}
