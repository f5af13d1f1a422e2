use serde_json::Value;

use crate::helpers::{MAX_UPLOAD_BYTES, recipients_of, spawn_app};

#[tokio::test]
async fn committing_a_typed_address_adds_it_lowercased() {
    // Arrange
    let app = spawn_app().await;
    let draft_id = app.create_draft().await;

    // Act
    let response = app
        .commit_recipient(&draft_id, "  Hamada@Yahoo.com ", "commit")
        .await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["committed"], true);
    assert_eq!(body["pending_input"], Value::Null);
    assert_eq!(body["count"], 1);
    assert_eq!(body["state"], "non_empty");
    assert_eq!(recipients_of(&body), vec!["hamada@yahoo.com"]);
}

#[tokio::test]
async fn rejected_input_is_handed_back_unchanged() {
    // Arrange
    let app = spawn_app().await;
    let draft_id = app.create_draft().await;
    app.commit_recipient(&draft_id, "x@y.com", "commit").await;
    let test_cases = vec![
        ("not-an-email", "an invalid address"),
        ("X@Y.com", "a case-insensitive duplicate"),
        ("alice@example.com bob@example.com", "two addresses at once"),
        ("", "an empty entry"),
    ];

    for (input, description) in test_cases {
        // Act
        let response = app.commit_recipient(&draft_id, input, "commit").await;

        // Assert
        assert_eq!(200, response.status().as_u16());
        let body: Value = response.json().await.unwrap();
        assert_eq!(
            body["committed"], false,
            "The entry was accepted when it was {}.",
            description
        );
        assert_eq!(body["pending_input"], input);
        assert_eq!(recipients_of(&body), vec!["x@y.com"]);
    }
}

#[tokio::test]
async fn commit_and_blur_with_the_same_text_add_it_once() {
    // Arrange
    let app = spawn_app().await;
    let draft_id = app.create_draft().await;

    // Act
    app.commit_recipient(&draft_id, "ursula@le-guin.org", "commit")
        .await;
    let response = app
        .commit_recipient(&draft_id, "ursula@le-guin.org", "blur")
        .await;

    // Assert
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["committed"], false);
    assert_eq!(app.recipients(&draft_id).await, vec!["ursula@le-guin.org"]);
}

#[tokio::test]
async fn a_blur_alone_commits_the_typed_address() {
    let app = spawn_app().await;
    let draft_id = app.create_draft().await;

    app.commit_recipient(&draft_id, "ursula@le-guin.org", "blur")
        .await;

    assert_eq!(app.recipients(&draft_id).await, vec!["ursula@le-guin.org"]);
}

#[tokio::test]
async fn uploading_a_file_mines_and_merges_addresses() {
    // Arrange
    let app = spawn_app().await;
    let draft_id = app.create_draft().await;
    app.commit_recipient(&draft_id, "zed@example.com", "commit")
        .await;

    // Act
    let response = app
        .upload_recipients(
            &draft_id,
            "Contact alice@example.com or BOB@Example.com today\nzed@EXAMPLE.com,alice@example.com",
        )
        .await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        recipients_of(&body),
        vec!["zed@example.com", "alice@example.com", "bob@example.com"]
    );
    assert_eq!(body["count"], 3);
}

#[tokio::test]
async fn uploading_the_same_file_twice_adds_nothing() {
    // Arrange
    let app = spawn_app().await;
    let draft_id = app.create_draft().await;
    let csv = "name,email\nUrsula,ursula@le-guin.org\nHamada,hamada@yahoo.com\n";

    // Act
    app.upload_recipients(&draft_id, csv).await;
    let first = app.recipients(&draft_id).await;
    app.upload_recipients(&draft_id, csv).await;
    let second = app.recipients(&draft_id).await;

    // Assert
    assert_eq!(first, vec!["ursula@le-guin.org", "hamada@yahoo.com"]);
    assert_eq!(first, second);
}

#[tokio::test]
async fn uploading_a_file_without_addresses_leaves_the_draft_empty() {
    let app = spawn_app().await;
    let draft_id = app.create_draft().await;

    let response = app.upload_recipients(&draft_id, "name,phone\nursula,555-0100").await;

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["state"], "empty");
    assert_eq!(body["count"], 0);
}

#[tokio::test]
async fn oversized_uploads_are_rejected() {
    let app = spawn_app().await;
    let draft_id = app.create_draft().await;
    let csv = "ursula@le-guin.org\n".repeat(MAX_UPLOAD_BYTES / 10);

    let response = app.upload_recipients(&draft_id, csv).await;

    assert_eq!(413, response.status().as_u16());
    assert!(app.recipients(&draft_id).await.is_empty());
}

#[tokio::test]
async fn uploads_that_are_not_utf8_are_rejected_and_change_nothing() {
    // Arrange
    let app = spawn_app().await;
    let draft_id = app.create_draft().await;
    app.commit_recipient(&draft_id, "zed@example.com", "commit")
        .await;

    // Act
    let response = app
        .upload_recipients(&draft_id, vec![0xff_u8, 0xfe, b'a'])
        .await;

    // Assert
    assert_eq!(400, response.status().as_u16());
    assert_eq!(app.recipients(&draft_id).await, vec!["zed@example.com"]);
}

#[tokio::test]
async fn removing_a_recipient_keeps_the_order_of_the_rest() {
    // Arrange
    let app = spawn_app().await;
    let draft_id = app.create_draft().await;
    app.upload_recipients(&draft_id, "a@b.com c@d.com e@f.com")
        .await;

    // Act
    let response = app.remove_recipient(&draft_id, 1).await;

    // Assert
    let body: Value = response.json().await.unwrap();
    assert_eq!(recipients_of(&body), vec!["a@b.com", "e@f.com"]);
}

#[tokio::test]
async fn removing_out_of_range_is_a_no_op() {
    let app = spawn_app().await;
    let draft_id = app.create_draft().await;
    app.upload_recipients(&draft_id, "a@b.com c@d.com").await;

    let response = app.remove_recipient(&draft_id, 2).await;

    assert_eq!(200, response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    assert_eq!(recipients_of(&body), vec!["a@b.com", "c@d.com"]);
}

#[tokio::test]
async fn removing_the_last_recipient_empties_the_set() {
    let app = spawn_app().await;
    let draft_id = app.create_draft().await;
    app.commit_recipient(&draft_id, "a@b.com", "commit").await;

    let response = app.remove_recipient(&draft_id, 0).await;

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["state"], "empty");
}

#[tokio::test]
async fn clearing_empties_the_set() {
    // Arrange
    let app = spawn_app().await;
    let draft_id = app.create_draft().await;
    app.upload_recipients(&draft_id, "a@b.com c@d.com e@f.com")
        .await;

    // Act
    let response = app.clear_recipients(&draft_id).await;

    // Assert
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["recipients"], serde_json::json!([]));
    assert_eq!(body["state"], "empty");

    let draft: Value = app.get_draft(&draft_id).await.json().await.unwrap();
    assert_eq!(draft["submittable"], false);
}
