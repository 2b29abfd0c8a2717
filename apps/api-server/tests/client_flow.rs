//! Drives `quill-client` against a live server on an ephemeral port.

mod common;

use actix_web::dev::ServerHandle;
use actix_web::{App, HttpServer, web};

use api_server::handlers::configure_routes;
use api_server::observability::RequestIdMiddleware;
use common::{User, state};
use quill_client::dto::{CreatePostRequest, DeletePostResponse, ListPostsQuery, UpdatePostRequest};
use quill_client::{BlogClient, ClientError, Session, SessionStore};

fn spawn_server() -> (BlogClient, ServerHandle) {
    let state = state();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(RequestIdMiddleware)
            .app_data(web::Data::new(state.clone()))
            .configure(configure_routes)
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .unwrap();

    let addr = server.addrs()[0];
    let server = server.run();
    let handle = server.handle();
    actix_web::rt::spawn(server);

    (BlogClient::new(format!("http://{addr}")), handle)
}

fn session_for(user: &User) -> Session {
    Session::new(user.token(), user.id, user.name)
}

fn travel_post(title: &str) -> CreatePostRequest {
    CreatePostRequest {
        title: title.to_string(),
        category: "Travel".to_string(),
        content: "Notes from the road.".to_string(),
        image: None,
    }
}

#[actix_web::test]
async fn test_client_crud_round_trip() {
    let (client, server) = spawn_server();
    let ada = User::new("Ada");

    let mut sessions = SessionStore::new();
    let session = sessions.login(session_for(&ada)).clone();

    let created = client
        .create_post(&session, &travel_post("Lisbon"))
        .await
        .unwrap();
    assert_eq!(created.user_id, ada.id);
    assert_eq!(created.author, "Ada");

    let other = client
        .create_post(&session, &travel_post("Porto"))
        .await
        .unwrap();

    let found = client.find_post(&session, created.id).await.unwrap();
    assert_eq!(found, Some(created.clone()));

    let patch = UpdatePostRequest {
        title: Some("Lisbon, again".to_string()),
        image: Some(Some("https://img.example/tram.jpg".to_string())),
        ..Default::default()
    };
    let updated = client
        .update_post(&session, created.id, &patch)
        .await
        .unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "Lisbon, again");
    assert_eq!(updated.image.as_deref(), Some("https://img.example/tram.jpg"));

    let removed = client.delete_post(&session, created.id).await.unwrap();
    assert_eq!(removed, DeletePostResponse::removed(created.id));

    assert_eq!(client.find_post(&session, created.id).await.unwrap(), None);
    let mine = client.my_posts(&session).await.unwrap();
    assert_eq!(mine, vec![other]);

    sessions.logout();
    assert!(sessions.current().is_none());

    server.stop(false).await;
}

#[actix_web::test]
async fn test_client_surfaces_api_errors() {
    let (client, server) = spawn_server();
    let ada = session_for(&User::new("Ada"));
    let grace = session_for(&User::new("Grace"));

    let post = client
        .create_post(&ada, &travel_post("Lisbon"))
        .await
        .unwrap();

    let err = client.delete_post(&grace, post.id).await.unwrap_err();
    match err {
        ClientError::Api { status, message } => {
            assert_eq!(status.as_u16(), 401);
            assert_eq!(message, "User not authorized");
        }
        other => panic!("unexpected error: {other:?}"),
    }

    let err = client
        .create_post(&ada, &CreatePostRequest::default())
        .await
        .unwrap_err();
    assert_eq!(err.status().map(|s| s.as_u16()), Some(400));
    assert!(err.to_string().contains("Please add all required fields"));

    let expired = Session::new("not-a-jwt", ada.user.id, "Ada");
    let err = client
        .list_posts(&expired, &ListPostsQuery::default())
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Not authorized, token failed"));

    server.stop(false).await;
}
