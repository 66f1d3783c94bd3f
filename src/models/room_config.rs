use serde::{Deserialize, Serialize};

// Layouts are stored as JSON in the `layout` column, so the serde shapes
// here double as the persisted format. Field names stay camelCase to match
// the records the room form works with.

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutRow {
    // Present on synthesized rows only; stored rows carry just their seats.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seat_count: Option<i32>,
    pub seats: Vec<Option<i64>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomLayout {
    #[serde(default)]
    pub rows: Vec<LayoutRow>,
}

// A room layout as entered in the form, before the store has assigned it
// an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRoomConfig {
    pub room_name: String,
    pub row_count: i32,
    pub avg_seats_in_row: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<RoomLayout>,
}

// A saved room layout. The id is assigned by the store on first insert
// and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomConfig {
    pub id: i64,
    pub room_name: String,
    pub row_count: i32,
    pub avg_seats_in_row: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<RoomLayout>,
}

/// Input to the save operation. Inserting a brand new config and
/// overwriting a saved one are distinct cases instead of an id presence
/// check at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RoomConfigUpsert {
    Saved(RoomConfig),
    New(NewRoomConfig),
}

impl From<NewRoomConfig> for RoomConfigUpsert {
    fn from(config: NewRoomConfig) -> Self {
        RoomConfigUpsert::New(config)
    }
}

impl From<RoomConfig> for RoomConfigUpsert {
    fn from(config: RoomConfig) -> Self {
        RoomConfigUpsert::Saved(config)
    }
}

/// A config in the shape the room form renders: the layout is always
/// present, synthesized from `row_count` and `avg_seats_in_row` when none
/// was stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomView {
    pub id: i64,
    pub room_name: String,
    pub row_count: i32,
    pub avg_seats_in_row: i32,
    pub room: RoomLayout,
}

impl From<RoomConfig> for RoomView {
    fn from(config: RoomConfig) -> Self {
        let seats_per_row = config.avg_seats_in_row.max(0) as usize;
        let room = config.room.unwrap_or_else(|| RoomLayout {
            rows: (0..config.row_count.max(0))
                .map(|_| LayoutRow {
                    seat_count: Some(config.avg_seats_in_row),
                    seats: vec![None; seats_per_row],
                })
                .collect(),
        });

        RoomView {
            id: config.id,
            room_name: config.room_name,
            row_count: config.row_count,
            avg_seats_in_row: config.avg_seats_in_row,
            room,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn synthesized_layout_matches_requested_dimensions(
            rows in 0i32..40,
            seats in 0i32..40,
        ) {
            let view = RoomView::from(RoomConfig {
                id: 1,
                room_name: "hall".to_string(),
                row_count: rows,
                avg_seats_in_row: seats,
                room: None,
            });

            prop_assert_eq!(view.room.rows.len(), rows as usize);
            for row in &view.room.rows {
                prop_assert_eq!(row.seat_count, Some(seats));
                prop_assert_eq!(row.seats.len(), seats as usize);
                prop_assert!(row.seats.iter().all(|seat| seat.is_none()));
            }
        }
    }

    #[test]
    fn stored_layout_passes_through_unchanged() {
        let layout = RoomLayout {
            rows: vec![LayoutRow {
                seat_count: None,
                seats: vec![Some(1), None, Some(2)],
            }],
        };
        let view = RoomView::from(RoomConfig {
            id: 7,
            room_name: "club".to_string(),
            row_count: 10,
            avg_seats_in_row: 20,
            room: Some(layout.clone()),
        });

        // The stored layout wins over the row_count/avg_seats_in_row hints.
        assert_eq!(view.room, layout);
        assert_eq!(view.row_count, 10);
        assert_eq!(view.avg_seats_in_row, 20);
    }

    #[test]
    fn layout_json_omits_seat_count_on_stored_rows() {
        let layout = RoomLayout {
            rows: vec![LayoutRow {
                seat_count: None,
                seats: vec![None, Some(3)],
            }],
        };
        let json = serde_json::to_value(&layout).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "rows": [ { "seats": [null, 3] } ] })
        );
    }
}
