use crate::helpers::spawn_app;

#[tokio::test]
async fn login_redirects_to_the_dashboard() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let response = app
        .post_login(&[("email", "hello@example.com"), ("password", "hunter22")])
        .await;

    // Assert
    assert_eq!(303, response.status().as_u16());
    assert_eq!(
        Some("/dashboard"),
        response
            .headers()
            .get("Location")
            .and_then(|value| value.to_str().ok())
    );
}

#[tokio::test]
async fn login_returns_a_400_when_fields_are_present_but_invalid() {
    // Arrange
    let app = spawn_app().await;
    let test_cases = vec![
        (vec![("email", "hello"), ("password", "hunter22")], "invalid email"),
        (vec![("email", ""), ("password", "hunter22")], "empty email"),
        (vec![("email", "hello@example.com"), ("password", "")], "empty password"),
    ];

    for (form, description) in test_cases {
        // Act
        let response = app.post_login(&form).await;

        // Assert
        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not return a 400 Bad Request when the payload was {}.",
            description
        );
    }
}

#[tokio::test]
async fn login_returns_a_422_when_data_is_missing() {
    // Arrange
    let app = spawn_app().await;
    let test_cases = vec![
        (vec![("email", "hello@example.com")], "missing password"),
        (vec![("password", "hunter22")], "missing email"),
        (vec![], "missing both email and password"),
    ];

    for (form, description) in test_cases {
        // Act
        let response = app.post_login(&form).await;

        // Assert
        assert_eq!(
            422,
            response.status().as_u16(),
            "The API did not fail with 422 when the payload was {}.",
            description
        );
    }
}
