mod helpers;

use concierge_sdk::{
    APIError, HotelReview, KnowledgeItem, MenuItem, Role, Room, RoomStatus, RoomType, StatusCode,
    ID,
};
use helpers::setup::spawn_app;
use serde_json::{json, Value};

fn suite() -> RoomType {
    RoomType {
        name: "Ocean suite".into(),
        description: Some("Sea view with balcony".into()),
        base_price: 420.0,
        max_occupancy: 3,
        amenities: vec!["minibar".into(), "bathtub".into()],
    }
}

fn dish(name: &str) -> MenuItem {
    MenuItem {
        name: name.into(),
        description: None,
        category: "lunch".into(),
        price: 14.0,
        is_available: true,
        image_url: None,
    }
}

#[actix_web::test]
async fn test_status_ok() {
    let (_, sdk) = spawn_app().await;
    let res = sdk.status.check_health().await.expect("Expected healthy");
    assert_eq!(res.status, "ok");
}

#[actix_web::test]
async fn test_unknown_route_is_json_404() {
    let (app, _) = spawn_app().await;
    let res = reqwest::get(format!("{}/api/v1/minibar", app.address))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = res.json().await.unwrap();
    assert!(body["error"].is_string());
}

#[actix_web::test]
async fn test_resource_crud() {
    let (_, sdk) = spawn_app().await;

    let room_type = sdk
        .room_types
        .create(&suite())
        .await
        .expect("To create room type");
    assert_eq!(room_type.fields, suite());

    let mut room = Room {
        room_number: "1201".into(),
        room_type_id: room_type.id,
        floor: Some(12),
        status: RoomStatus::Available,
    };
    let created = sdk.rooms.create(&room).await.expect("To create room");
    let fetched = sdk.rooms.get(created.id).await.expect("To get room");
    assert_eq!(fetched, created);
    assert_eq!(fetched.fields, room);

    room.status = RoomStatus::Occupied;
    let updated = sdk
        .rooms
        .update(created.id, &room)
        .await
        .expect("To update room");
    assert_eq!(updated.fields.status, RoomStatus::Occupied);

    let deleted = sdk.rooms.delete(created.id).await.expect("To delete room");
    assert_eq!(deleted.id, created.id);
    assert_eq!(
        sdk.rooms.get(created.id).await,
        Err(APIError::UnexpectedStatusCode(StatusCode::NOT_FOUND))
    );
    assert_eq!(
        sdk.rooms.delete(created.id).await,
        Err(APIError::UnexpectedStatusCode(StatusCode::NOT_FOUND))
    );
    assert_eq!(
        sdk.rooms.update(created.id, &room).await,
        Err(APIError::UnexpectedStatusCode(StatusCode::NOT_FOUND))
    );
}

#[actix_web::test]
async fn test_list_is_ordered_and_paged() {
    let (_, sdk) = spawn_app().await;
    for name in ["Pad thai", "Green curry", "Som tam", "Mango sticky rice"] {
        sdk.menu_items.create(&dish(name)).await.unwrap();
    }

    let all = sdk.menu_items.list(None, None).await.unwrap();
    assert_eq!(all.len(), 4);
    assert!(all.windows(2).all(|pair| pair[0].id < pair[1].id));

    let page = sdk.menu_items.list(Some(1), Some(2)).await.unwrap();
    let names: Vec<_> = page.iter().map(|r| r.fields.name.as_str()).collect();
    assert_eq!(names, vec!["Green curry", "Som tam"]);
}

#[actix_web::test]
async fn test_invalid_input_is_rejected() {
    let (app, sdk) = spawn_app().await;

    let review = HotelReview {
        user_id: None,
        guest_name: "Ada".into(),
        rating: 0,
        comment: None,
    };
    assert_eq!(
        sdk.hotel_reviews.create(&review).await,
        Err(APIError::UnexpectedStatusCode(StatusCode::BAD_REQUEST))
    );

    let blank = KnowledgeItem {
        title: " ".into(),
        content: "Breakfast is served from 6:30".into(),
        category: None,
        tags: vec![],
    };
    assert_eq!(
        sdk.knowledge_items.create(&blank).await,
        Err(APIError::UnexpectedStatusCode(StatusCode::BAD_REQUEST))
    );

    let client = reqwest::Client::new();

    // Missing required fields
    let res = client
        .post(format!("{}/api/v1/menu-items", app.address))
        .json(&json!({ "name": "Soup" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert!(body["error"].is_string());

    // Malformed id
    let res = client
        .get(format!("{}/api/v1/menu-items/soup", app.address))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_register_login_and_me() {
    let (app, sdk) = spawn_app().await;
    let (guest_sdk, guest) = app.sdk_for("marie", Role::Guest).await;
    assert_eq!(guest.role, Role::Guest);

    let me = guest_sdk.auth.me().await.expect("To get me");
    assert_eq!(me.user, guest);

    let login = sdk
        .auth
        .login("marie".into(), "correct-horse-battery".into())
        .await
        .expect("To log in");
    assert_eq!(login.user.id, guest.id);

    assert_eq!(
        sdk.auth
            .login("marie".into(), "wrong-password".into())
            .await
            .map(|_| ()),
        Err(APIError::UnexpectedStatusCode(StatusCode::UNAUTHORIZED))
    );
    assert_eq!(
        sdk.auth.me().await.map(|_| ()),
        Err(APIError::UnexpectedStatusCode(StatusCode::UNAUTHORIZED))
    );
}

#[actix_web::test]
async fn test_register_rejects_admins_and_duplicates() {
    let (app, sdk) = spawn_app().await;
    app.sdk_for("pierre", Role::Staff).await;

    let res = sdk
        .auth
        .register(concierge_sdk::RegisterInput {
            username: "pierre".into(),
            password: "another-password".into(),
            full_name: "Pierre Curie".into(),
            role: None,
            room_id: None,
        })
        .await;
    assert_eq!(
        res.map(|_| ()),
        Err(APIError::UnexpectedStatusCode(StatusCode::CONFLICT))
    );

    let res = sdk
        .auth
        .register(concierge_sdk::RegisterInput {
            username: "irene".into(),
            password: "radioactivity".into(),
            full_name: "Irène Joliot-Curie".into(),
            role: Some(Role::Admin),
            room_id: Some(ID::new(3)),
        })
        .await;
    assert_eq!(
        res.map(|_| ()),
        Err(APIError::UnexpectedStatusCode(StatusCode::BAD_REQUEST))
    );
}
