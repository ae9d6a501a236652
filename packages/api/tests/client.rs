use api::{ApiError, ClientConfig, NoteDraft, NotesClient, Session, SignInDraft, SignUpDraft};
use stub::StubServer;

async fn setup() -> (StubServer, NotesClient) {
    let server = StubServer::spawn().await.unwrap();
    let config = ClientConfig::new(server.base_url());
    let client = NotesClient::new(&config, Session::in_memory()).unwrap();
    (server, client)
}

fn account() -> SignUpDraft {
    SignUpDraft {
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
        password: "Abcdef1!".to_string(),
        age: "36".to_string(),
        phone: "0123456789".to_string(),
    }
}

/// Sign up, sign in and persist the token like the login page does.
async fn signed_in(client: &NotesClient) {
    client.sign_up(&account().validate().unwrap()).await.unwrap();
    let credentials = SignInDraft::new("ada@example.com", "Abcdef1!")
        .validate()
        .unwrap();
    let response = client.sign_in(&credentials).await.unwrap();
    client.session().set(&response.token);
}

#[tokio::test]
async fn test_sign_up_then_sign_in_returns_token() {
    let (_server, client) = setup().await;

    let ack = client.sign_up(&account().validate().unwrap()).await.unwrap();
    assert_eq!(ack.message.as_deref(), Some("success"));

    let credentials = SignInDraft::new("ada@example.com", "Abcdef1!")
        .validate()
        .unwrap();
    let response = client.sign_in(&credentials).await.unwrap();
    assert!(!response.token.is_empty());

    // sign_in leaves persistence to the caller
    assert!(client.session().get().is_none());
}

#[tokio::test]
async fn test_sign_up_sends_fractional_age_as_number() {
    let (_server, client) = setup().await;
    let draft = SignUpDraft {
        age: "25.5".to_string(),
        ..account()
    };

    let request = draft.validate().unwrap();
    assert_eq!(request.age, 25.5);
    let ack = client.sign_up(&request).await.unwrap();
    assert_eq!(ack.message.as_deref(), Some("success"));
}

#[tokio::test]
async fn test_sign_in_with_wrong_password_is_unauthorized() {
    let (_server, client) = setup().await;
    client.sign_up(&account().validate().unwrap()).await.unwrap();

    let credentials = SignInDraft::new("ada@example.com", "Wrong123!")
        .validate()
        .unwrap();
    let err = client.sign_in(&credentials).await.unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized { status: 401, .. }));
    assert_eq!(err.user_message(), "incorrect email or password");
}

#[tokio::test]
async fn test_duplicate_sign_up_is_rejected_with_message() {
    let (_server, client) = setup().await;
    client.sign_up(&account().validate().unwrap()).await.unwrap();

    let err = client.sign_up(&account().validate().unwrap()).await.unwrap_err();
    match err {
        ApiError::Rejected { status, message } => {
            assert_eq!(status, 409);
            assert_eq!(message.as_deref(), Some("email already exists"));
        }
        other => panic!("expected Rejected, got {other:?}"),
    }
}

#[tokio::test]
async fn test_create_then_list_includes_note() {
    let (_server, client) = setup().await;
    signed_in(&client).await;

    assert!(client.list_notes().await.unwrap().is_empty());

    let created = client.create_note(&NoteDraft::new("T", "C")).await.unwrap();
    assert!(!created.id.is_empty());

    let notes = client.list_notes().await.unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].title, "T");
    assert_eq!(notes[0].content, "C");
    assert_eq!(notes[0].id, created.id);
}

#[tokio::test]
async fn test_list_keeps_server_order() {
    let (_server, client) = setup().await;
    signed_in(&client).await;

    for title in ["first", "second", "third"] {
        client.create_note(&NoteDraft::new(title, "body")).await.unwrap();
    }
    let titles: Vec<String> = client
        .list_notes()
        .await
        .unwrap()
        .into_iter()
        .map(|n| n.title)
        .collect();
    assert_eq!(titles, ["first", "second", "third"]);
}

#[tokio::test]
async fn test_update_replaces_title_and_content() {
    let (_server, client) = setup().await;
    signed_in(&client).await;

    let note = client.create_note(&NoteDraft::new("T", "C")).await.unwrap();
    let updated = client
        .update_note(&note.id, &NoteDraft::new("T2", "C2"))
        .await
        .unwrap();
    assert_eq!(updated.id, note.id);
    assert_eq!(updated.title, "T2");

    let notes = client.list_notes().await.unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].content, "C2");
}

#[tokio::test]
async fn test_delete_returns_id_and_removes_note() {
    let (server, client) = setup().await;
    signed_in(&client).await;

    let keep = client.create_note(&NoteDraft::new("keep", "k")).await.unwrap();
    let gone = client.create_note(&NoteDraft::new("gone", "g")).await.unwrap();

    let deleted = client.delete_note(&gone.id).await.unwrap();
    assert_eq!(deleted, gone.id);
    assert_eq!(server.state().note_count(), 1);

    let notes = client.list_notes().await.unwrap();
    assert_eq!(notes, vec![keep]);

    let err = client.delete_note(&gone.id).await.unwrap_err();
    assert!(matches!(err, ApiError::Rejected { status: 404, .. }));
}

#[tokio::test]
async fn test_authenticated_calls_send_prefixed_token_header() {
    let (server, client) = setup().await;
    signed_in(&client).await;
    let token = client.session().get().unwrap();

    client.list_notes().await.unwrap();

    let last = server.state().requests().pop().unwrap();
    assert_eq!(last.method, "GET");
    assert_eq!(last.path, "/api/v1/notes");
    assert_eq!(last.token, Some(format!("3b8ny__{token}")));
}

#[tokio::test]
async fn test_unauthenticated_calls_send_no_token_header() {
    let (server, client) = setup().await;
    client.session().set("stale");
    client.sign_up(&account().validate().unwrap()).await.unwrap();

    let requests = server.state().requests();
    assert_eq!(requests[0].path, "/api/v1/users/signUp");
    assert!(requests[0].token.is_none());
}

#[tokio::test]
async fn test_missing_session_fails_without_request() {
    let (server, client) = setup().await;

    let err = client.list_notes().await.unwrap_err();
    assert!(matches!(err, ApiError::NotAuthenticated));
    assert!(err.is_auth_failure());

    let err = client.delete_note("abc").await.unwrap_err();
    assert!(matches!(err, ApiError::NotAuthenticated));

    assert!(server.state().requests().is_empty());
}

#[tokio::test]
async fn test_wrong_prefix_is_unauthorized() {
    let server = StubServer::spawn().await.unwrap();
    let token = server.state().seed_session("ada@example.com", "Abcdef1!");

    let config = ClientConfig::new(server.base_url()).with_token_prefix("Bearer ");
    let client = NotesClient::new(&config, Session::in_memory()).unwrap();
    client.session().set(&token);

    let err = client.list_notes().await.unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized { status: 401, .. }));
}

#[tokio::test]
async fn test_sign_out_is_seen_by_next_call() {
    let (_server, client) = setup().await;
    signed_in(&client).await;
    client.list_notes().await.unwrap();

    client.session().clear();
    assert!(matches!(
        client.list_notes().await.unwrap_err(),
        ApiError::NotAuthenticated
    ));
}

#[tokio::test]
async fn test_status_classes_are_distinct() {
    let (server, client) = setup().await;
    signed_in(&client).await;

    server.state().fail_next(503);
    let err = client.list_notes().await.unwrap_err();
    assert!(matches!(err, ApiError::Server { status: 503, .. }));
    assert!(!err.is_auth_failure());

    server.state().fail_next(400);
    let err = client.create_note(&NoteDraft::new("T", "C")).await.unwrap_err();
    assert!(matches!(err, ApiError::Rejected { status: 400, .. }));

    server.state().fail_next(401);
    let err = client.list_notes().await.unwrap_err();
    assert!(err.is_auth_failure());

    // Nothing was created by the failed calls
    assert!(client.list_notes().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    let server = StubServer::spawn().await.unwrap();
    let config = ClientConfig::new(server.base_url());
    drop(server);
    // Give the aborted listener a moment to close
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;

    let client = NotesClient::new(&config, Session::in_memory()).unwrap();
    let credentials = SignInDraft::new("a@b.com", "12345678").validate().unwrap();
    let err = client.sign_in(&credentials).await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}
