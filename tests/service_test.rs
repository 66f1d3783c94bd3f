use std::time::Duration;

use seating_demo::database::Database;
use seating_demo::feed::MockSeatFeed;
use seating_demo::models::{
    LayoutRow, NewRoomConfig, NewSeatType, RoomLayout, SeatPosition, SeatType, SeatsUpdate,
};
use seating_demo::services::DataService;

// A period long enough that the feed stays quiet for the whole test.
const QUIET: Duration = Duration::from_secs(3600);

async fn service() -> DataService {
    let db = Database::in_memory().await.expect("in-memory store");
    db.run_migrations().await.expect("migrations");
    DataService::new(db, MockSeatFeed::start(QUIET))
}

fn room(name: &str, rows: i32, seats: i32) -> NewRoomConfig {
    NewRoomConfig {
        room_name: name.to_string(),
        row_count: rows,
        avg_seats_in_row: seats,
        room: None,
    }
}

#[tokio::test]
async fn saving_a_new_config_assigns_an_id_and_reads_back_equal() {
    let service = service().await;

    let saved = service
        .save_room_config(room("Main Hall", 5, 8))
        .await
        .unwrap();
    assert!(saved.id > 0);

    let loaded = service.room_config(Some(saved.id)).await.unwrap();
    assert_eq!(loaded, Some(saved));
}

#[tokio::test]
async fn saving_an_existing_config_overwrites_in_place() {
    let service = service().await;

    let first = service.save_room_config(room("One", 2, 2)).await.unwrap();
    service.save_room_config(room("Two", 3, 3)).await.unwrap();

    let mut renamed = first.clone();
    renamed.room_name = "One, renamed".to_string();
    let saved = service.save_room_config(renamed.clone()).await.unwrap();
    assert_eq!(saved, renamed);

    let all = service.room_configs().await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0], renamed);
}

#[tokio::test]
async fn save_room_is_an_alias_for_save_room_config() {
    let service = service().await;

    let saved = service.save_room(room("Aliased", 1, 1)).await.unwrap();
    let loaded = service.room_config(Some(saved.id)).await.unwrap();

    assert_eq!(loaded, Some(saved));
}

#[tokio::test]
async fn missing_ids_resolve_to_none_without_touching_the_store() {
    let db = Database::in_memory().await.expect("in-memory store");
    db.run_migrations().await.expect("migrations");
    let service = DataService::new(db.clone(), MockSeatFeed::start(QUIET));

    // With the store closed, only a real lookup can fail.
    db.close().await;

    assert_eq!(service.room_config(None).await.unwrap(), None);
    assert_eq!(service.room_config(Some(0)).await.unwrap(), None);
    assert!(service.room_config(Some(3)).await.is_err());
    assert!(service.room(Some(3)).await.is_err());
}

#[tokio::test]
async fn room_synthesizes_a_layout_when_none_is_stored() {
    let service = service().await;

    let saved = service.save_room(room("Small", 2, 3)).await.unwrap();
    let view = service.room(Some(saved.id)).await.unwrap().unwrap();

    assert_eq!(view.room_name, "Small");
    assert_eq!(view.room.rows.len(), 2);
    for row in &view.room.rows {
        assert_eq!(row.seat_count, Some(3));
        assert_eq!(row.seats.len(), 3);
        assert!(row.seats.iter().all(|seat| seat.is_none()));
    }
}

#[tokio::test]
async fn room_passes_a_stored_layout_through_unchanged() {
    let service = service().await;

    let layout = RoomLayout {
        rows: vec![LayoutRow {
            seat_count: None,
            seats: vec![Some(1), Some(1), None],
        }],
    };
    let saved = service
        .save_room(NewRoomConfig {
            room_name: "Custom".to_string(),
            row_count: 9,
            avg_seats_in_row: 9,
            room: Some(layout.clone()),
        })
        .await
        .unwrap();

    let view = service.room(Some(saved.id)).await.unwrap().unwrap();
    assert_eq!(view.room, layout);
}

#[tokio::test]
async fn room_resolves_to_none_for_unknown_or_missing_ids() {
    let service = service().await;

    assert_eq!(service.room(None).await.unwrap(), None);
    assert_eq!(service.room(Some(777)).await.unwrap(), None);
}

#[tokio::test]
async fn update_seat_types_replaces_the_table_wholesale() {
    let service = service().await;

    // Start from seed + one extra row that the update must wipe out.
    service
        .update_seat_types(vec![
            SeatType {
                id: 1,
                name: "regular".to_string(),
                color: "#666666".to_string(),
                price: None,
            }
            .into(),
            NewSeatType {
                name: "balcony".to_string(),
                color: "#884400".to_string(),
                price: Some(10.0),
            }
            .into(),
        ])
        .await
        .unwrap();

    let updated_regular = SeatType {
        id: 1,
        name: "regular".to_string(),
        color: "#333333".to_string(),
        price: Some(5.0),
    };
    service
        .update_seat_types(vec![
            updated_regular.clone().into(),
            NewSeatType {
                name: "vip".to_string(),
                color: "#ffcc00".to_string(),
                price: Some(25.0),
            }
            .into(),
        ])
        .await
        .unwrap();

    let types = service.seat_types().await.unwrap();
    assert_eq!(types.len(), 2);
    assert_eq!(types[0], updated_regular);
    assert_eq!(types[1].name, "vip");
    assert!(types[1].id > 1, "vip must get a fresh store-assigned id");
    assert!(types.iter().all(|t| t.name != "balcony"));
}

#[tokio::test]
async fn a_failed_seat_type_update_rolls_back_completely() {
    let service = service().await;

    let clash = SeatType {
        id: 7,
        name: "first".to_string(),
        color: "#111111".to_string(),
        price: None,
    };
    let mut duplicate = clash.clone();
    duplicate.name = "second".to_string();

    let result = service
        .update_seat_types(vec![clash.into(), duplicate.into()])
        .await;
    assert!(result.is_err());

    // The seeded table is still intact, not cleared or half-replaced.
    let types = service.seat_types().await.unwrap();
    assert_eq!(types.len(), 1);
    assert_eq!(types[0].name, "regular");
}

#[tokio::test]
async fn every_seat_reports_occupied() {
    let service = service().await;

    assert!(service.is_seat_occupied(1, 1, 1).await);
    assert!(service.is_seat_occupied(99, 0, -4).await);
}

#[tokio::test]
async fn seats_update_channel_starts_empty_and_fans_out() {
    let service = service().await;

    let mut first = service.seats_updates();
    let mut second = service.seats_updates();
    assert!(first.borrow().is_none());
    assert!(second.borrow().is_none());

    let update = SeatsUpdate {
        occupied: vec![SeatPosition { row_id: 1, seat_id: 2 }],
        released: vec![],
    };
    service.publish_seats_update(update.clone());

    first.changed().await.unwrap();
    second.changed().await.unwrap();
    assert_eq!(*first.borrow(), Some(update.clone()));
    assert_eq!(*second.borrow(), Some(update));
}
