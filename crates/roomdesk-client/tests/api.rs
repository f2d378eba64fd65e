//! Live round trips between the API client and the real server.

mod fixtures;

use fixtures::TestServer;
use roomdesk_client::api::ApiClient;
use roomdesk_common::error::ApiError;
use roomdesk_common::room::RoomDraft;

fn draft(name: &str, building: &str, capacity: u32, resources: &[&str]) -> RoomDraft {
    RoomDraft {
        name: name.to_string(),
        building: building.to_string(),
        capacity,
        resources: resources.iter().map(|s| s.to_string()).collect(),
    }
}

#[tokio::test]
async fn test_list_rooms_starts_empty() {
    let server = TestServer::start().await;
    let api = ApiClient::new(server.base_url.clone());

    let rooms = api.list_rooms().await.unwrap();
    assert!(rooms.is_empty());
}

#[tokio::test]
async fn test_seeded_server_lists_sample_rooms() {
    let server = TestServer::start_seeded().await;
    let api = ApiClient::new(server.base_url.clone());

    let rooms = api.list_rooms().await.unwrap();
    assert!(!rooms.is_empty());
    assert!(rooms.iter().any(|r| r.name == "Alpha"));
}

#[tokio::test]
async fn test_create_then_refetch_shows_room() {
    let server = TestServer::start().await;
    let api = ApiClient::new(server.base_url.clone());

    api.create_room(&draft("Lab A", "Block X", 30, &["projector"]))
        .await
        .unwrap();

    let rooms = api.list_rooms().await.unwrap();
    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0].name, "Lab A");
    assert_eq!(rooms[0].building, "Block X");
    assert_eq!(rooms[0].capacity, 30);
    assert_eq!(rooms[0].resources, vec!["projector"]);
    assert_eq!(rooms[0].id, 1);
}

#[tokio::test]
async fn test_update_room() {
    let server = TestServer::start().await;
    let api = ApiClient::new(server.base_url.clone());

    api.create_room(&draft("Lab A", "Block X", 30, &[]))
        .await
        .unwrap();
    let id = api.list_rooms().await.unwrap()[0].id;

    api.update_room(id, &draft("Lab A+", "Block Y", 45, &["whiteboard", "screen"]))
        .await
        .unwrap();

    let rooms = api.list_rooms().await.unwrap();
    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0].id, id);
    assert_eq!(rooms[0].name, "Lab A+");
    assert_eq!(rooms[0].building, "Block Y");
    assert_eq!(rooms[0].capacity, 45);
    assert_eq!(rooms[0].resources, vec!["whiteboard", "screen"]);
}

#[tokio::test]
async fn test_update_unknown_room_is_remote_404() {
    let server = TestServer::start().await;
    let api = ApiClient::new(server.base_url.clone());

    let result = api.update_room(42, &draft("x", "y", 1, &[])).await;
    match result {
        Err(ApiError::Remote { status, .. }) => assert_eq!(status, 404),
        other => panic!("expected Remote 404, got {:?}", other),
    }
}

#[tokio::test]
async fn test_delete_room() {
    let server = TestServer::start().await;
    let api = ApiClient::new(server.base_url.clone());

    api.create_room(&draft("Lab A", "Block X", 30, &[]))
        .await
        .unwrap();
    let id = api.list_rooms().await.unwrap()[0].id;

    api.delete_room(id).await.unwrap();
    assert!(api.list_rooms().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_unknown_room_is_remote_404() {
    let server = TestServer::start().await;
    let api = ApiClient::new(server.base_url.clone());

    let result = api.delete_room(42).await;
    match result {
        Err(ApiError::Remote { status, .. }) => assert_eq!(status, 404),
        other => panic!("expected Remote 404, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    // Port 1 should never have a listener
    let api = ApiClient::new("http://127.0.0.1:1");
    let result = api.list_rooms().await;
    assert!(matches!(result, Err(ApiError::Network(_))));
}
