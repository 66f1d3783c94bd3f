use sqlx::types::Json;
use sqlx::FromRow;

use crate::database::Database;
use crate::models::{NewRoomConfig, RoomConfig, RoomLayout};

// Layout is kept as a JSON text column; everything else maps to plain
// columns.
#[derive(FromRow)]
struct RoomConfigRow {
    id: i64,
    room_name: String,
    row_count: i32,
    avg_seats_in_row: i32,
    layout: Option<Json<RoomLayout>>,
}

impl From<RoomConfigRow> for RoomConfig {
    fn from(row: RoomConfigRow) -> Self {
        RoomConfig {
            id: row.id,
            room_name: row.room_name,
            row_count: row.row_count,
            avg_seats_in_row: row.avg_seats_in_row,
            room: row.layout.map(|layout| layout.0),
        }
    }
}

#[derive(Clone)]
pub struct RoomConfigStore {
    db: Database,
}

impl RoomConfigStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub async fn get(&self, id: i64) -> Result<Option<RoomConfig>, sqlx::Error> {
        let row = sqlx::query_as::<_, RoomConfigRow>(
            "SELECT id, room_name, row_count, avg_seats_in_row, layout
             FROM room_configs
             WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.db.pool)
        .await?;

        Ok(row.map(RoomConfig::from))
    }

    // Insert with a store-assigned id.
    pub async fn insert(&self, config: NewRoomConfig) -> Result<RoomConfig, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO room_configs (room_name, row_count, avg_seats_in_row, layout)
             VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(&config.room_name)
        .bind(config.row_count)
        .bind(config.avg_seats_in_row)
        .bind(config.room.as_ref().map(Json))
        .execute(&self.db.pool)
        .await?;

        Ok(RoomConfig {
            id: result.last_insert_rowid(),
            room_name: config.room_name,
            row_count: config.row_count,
            avg_seats_in_row: config.avg_seats_in_row,
            room: config.room,
        })
    }

    // Overwrite the row at the config's id, inserting it if missing.
    pub async fn put(&self, config: &RoomConfig) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO room_configs (id, room_name, row_count, avg_seats_in_row, layout)
             VALUES (?1, ?2, ?3, ?4, ?5)
             ON CONFLICT(id) DO UPDATE SET
                 room_name = excluded.room_name,
                 row_count = excluded.row_count,
                 avg_seats_in_row = excluded.avg_seats_in_row,
                 layout = excluded.layout",
        )
        .bind(config.id)
        .bind(&config.room_name)
        .bind(config.row_count)
        .bind(config.avg_seats_in_row)
        .bind(config.room.as_ref().map(Json))
        .execute(&self.db.pool)
        .await?;

        Ok(())
    }

    // Insert-only; an existing id surfaces as a uniqueness error.
    pub async fn add(&self, config: &RoomConfig) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO room_configs (id, room_name, row_count, avg_seats_in_row, layout)
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .bind(config.id)
        .bind(&config.room_name)
        .bind(config.row_count)
        .bind(config.avg_seats_in_row)
        .bind(config.room.as_ref().map(Json))
        .execute(&self.db.pool)
        .await?;

        Ok(())
    }

    pub async fn all(&self) -> Result<Vec<RoomConfig>, sqlx::Error> {
        let rows = sqlx::query_as::<_, RoomConfigRow>(
            "SELECT id, room_name, row_count, avg_seats_in_row, layout
             FROM room_configs
             ORDER BY id",
        )
        .fetch_all(&self.db.pool)
        .await?;

        Ok(rows.into_iter().map(RoomConfig::from).collect())
    }

    pub async fn clear(&self) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM room_configs")
            .execute(&self.db.pool)
            .await?;
        Ok(())
    }
}
