mod helpers;

use chrono::{Duration, Utc};
use concierge_sdk::{
    APIError, CheckoutRemindersReport, Notification, Reservation, Role, StatusCode, ID,
};
use helpers::setup::spawn_app;

fn stay(user_id: ID, checkout_in: Duration) -> Reservation {
    let checkout_at = Utc::now() + checkout_in;
    Reservation {
        room_id: ID::new(808),
        user_id: Some(user_id),
        guest_name: "Hedy Lamarr".into(),
        check_in_at: checkout_at - Duration::days(3),
        checkout_at,
        reminded: false,
    }
}

#[actix_web::test]
async fn test_run_requires_staff() {
    let (app, sdk) = spawn_app().await;
    assert_eq!(
        sdk.checkout_reminders.run().await,
        Err(APIError::UnexpectedStatusCode(StatusCode::UNAUTHORIZED))
    );

    let (guest_sdk, _) = app.sdk_for("hedy", Role::Guest).await;
    assert_eq!(
        guest_sdk.checkout_reminders.run().await,
        Err(APIError::UnexpectedStatusCode(StatusCode::FORBIDDEN))
    );
}

#[actix_web::test]
async fn test_reminder_reaches_guest_inbox_once() {
    let (app, sdk) = spawn_app().await;
    let (staff_sdk, _) = app.sdk_for("frontdesk", Role::Staff).await;
    let (guest_sdk, guest) = app.sdk_for("hedy", Role::Guest).await;

    let due = sdk
        .reservations
        .create(&stay(guest.id, Duration::minutes(30)))
        .await
        .expect("To create reservation");
    let later = sdk
        .reservations
        .create(&stay(guest.id, Duration::hours(6)))
        .await
        .expect("To create reservation");

    // The scheduler sweeps once on start, this run picks up what is left
    staff_sdk
        .checkout_reminders
        .run()
        .await
        .expect("To run the sweep");
    let report = staff_sdk
        .checkout_reminders
        .run()
        .await
        .expect("To run the sweep");
    assert_eq!(report, CheckoutRemindersReport { sent: 0, failed: 0 });

    let inbox = guest_sdk
        .inbox
        .for_user(guest.id, true)
        .await
        .expect("To get inbox");
    assert_eq!(inbox.len(), 1);
    assert_eq!(inbox[0].fields.reservation_id, Some(due.id));
    assert!(inbox[0].fields.message.contains("Hedy Lamarr"));

    assert!(sdk.reservations.get(due.id).await.unwrap().fields.reminded);
    assert!(!sdk.reservations.get(later.id).await.unwrap().fields.reminded);

    let read = guest_sdk
        .inbox
        .mark_read(inbox[0].id)
        .await
        .expect("To mark read");
    assert!(read.fields.is_read);
    assert!(guest_sdk
        .inbox
        .for_user(guest.id, true)
        .await
        .unwrap()
        .is_empty());
    assert_eq!(guest_sdk.inbox.for_user(guest.id, false).await.unwrap().len(), 1);
}

#[actix_web::test]
async fn test_inbox_is_newest_first() {
    let (_, sdk) = spawn_app().await;
    let user_id = ID::new(42);
    for title in ["Welcome", "Spa discount", "Late checkout approved"] {
        sdk.notifications
            .create(&Notification {
                user_id: Some(user_id),
                room_id: None,
                reservation_id: None,
                title: title.into(),
                message: "Hello from the front desk".into(),
                is_read: false,
            })
            .await
            .unwrap();
    }

    let inbox = sdk.inbox.for_user(user_id, false).await.unwrap();
    let titles: Vec<_> = inbox.iter().map(|n| n.fields.title.as_str()).collect();
    assert_eq!(titles, vec!["Late checkout approved", "Spa discount", "Welcome"]);

    assert_eq!(
        sdk.inbox.mark_read(ID::new(999)).await.map(|_| ()),
        Err(APIError::UnexpectedStatusCode(StatusCode::NOT_FOUND))
    );
}
