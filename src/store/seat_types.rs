use crate::database::Database;
use crate::models::{NewSeatType, SeatType, SeatTypeUpsert};

#[derive(Clone)]
pub struct SeatTypeStore {
    db: Database,
}

impl SeatTypeStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub async fn get(&self, id: i64) -> Result<Option<SeatType>, sqlx::Error> {
        sqlx::query_as::<_, SeatType>(
            "SELECT id, name, color, price FROM seat_types WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.db.pool)
        .await
    }

    // Insert with a store-assigned id.
    pub async fn insert(&self, seat_type: NewSeatType) -> Result<SeatType, sqlx::Error> {
        let result = sqlx::query("INSERT INTO seat_types (name, color, price) VALUES (?1, ?2, ?3)")
            .bind(&seat_type.name)
            .bind(&seat_type.color)
            .bind(seat_type.price)
            .execute(&self.db.pool)
            .await?;

        Ok(SeatType {
            id: result.last_insert_rowid(),
            name: seat_type.name,
            color: seat_type.color,
            price: seat_type.price,
        })
    }

    // Overwrite the row at the seat type's id, inserting it if missing.
    pub async fn put(&self, seat_type: &SeatType) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO seat_types (id, name, color, price)
             VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(id) DO UPDATE SET
                 name = excluded.name,
                 color = excluded.color,
                 price = excluded.price",
        )
        .bind(seat_type.id)
        .bind(&seat_type.name)
        .bind(&seat_type.color)
        .bind(seat_type.price)
        .execute(&self.db.pool)
        .await?;

        Ok(())
    }

    // Insert-only; an existing id surfaces as a uniqueness error.
    pub async fn add(&self, seat_type: &SeatType) -> Result<(), sqlx::Error> {
        sqlx::query("INSERT INTO seat_types (id, name, color, price) VALUES (?1, ?2, ?3, ?4)")
            .bind(seat_type.id)
            .bind(&seat_type.name)
            .bind(&seat_type.color)
            .bind(seat_type.price)
            .execute(&self.db.pool)
            .await?;

        Ok(())
    }

    pub async fn all(&self) -> Result<Vec<SeatType>, sqlx::Error> {
        sqlx::query_as::<_, SeatType>("SELECT id, name, color, price FROM seat_types ORDER BY id")
            .fetch_all(&self.db.pool)
            .await
    }

    pub async fn clear(&self) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM seat_types")
            .execute(&self.db.pool)
            .await?;
        Ok(())
    }

    // Wholesale replace inside one transaction: the table ends up holding
    // exactly `types`, saved entries keeping their ids and new ones
    // getting fresh ids. A failure on any entry rolls the whole update
    // back.
    pub async fn replace_all(&self, types: Vec<SeatTypeUpsert>) -> Result<(), sqlx::Error> {
        let mut tx = self.db.pool.begin().await?;

        sqlx::query("DELETE FROM seat_types")
            .execute(&mut *tx)
            .await?;

        for entry in types {
            match entry {
                SeatTypeUpsert::Saved(seat_type) => {
                    sqlx::query(
                        "INSERT INTO seat_types (id, name, color, price) VALUES (?1, ?2, ?3, ?4)",
                    )
                    .bind(seat_type.id)
                    .bind(&seat_type.name)
                    .bind(&seat_type.color)
                    .bind(seat_type.price)
                    .execute(&mut *tx)
                    .await?;
                }
                SeatTypeUpsert::New(seat_type) => {
                    sqlx::query("INSERT INTO seat_types (name, color, price) VALUES (?1, ?2, ?3)")
                        .bind(&seat_type.name)
                        .bind(&seat_type.color)
                        .bind(seat_type.price)
                        .execute(&mut *tx)
                        .await?;
                }
            }
        }

        tx.commit().await
    }
}
