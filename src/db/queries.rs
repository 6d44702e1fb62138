use rusqlite::{params, Connection};

use crate::models::{Reservation, ReservationDraft};

/// Idempotent: creates the reservations table if absent, a no-op otherwise.
pub fn ensure_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS reservations (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT,
            phone TEXT,
            email TEXT,
            guests TEXT,
            baby_seats TEXT,
            date TEXT,
            time TEXT
        );",
    )
}

pub fn insert_reservation(conn: &Connection, draft: &ReservationDraft) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT INTO reservations (name, phone, email, guests, baby_seats, date, time)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            draft.name,
            draft.phone,
            draft.email,
            draft.guests,
            draft.baby_seats,
            draft.date,
            draft.time,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn list_reservations(conn: &Connection) -> rusqlite::Result<Vec<Reservation>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, phone, email, guests, baby_seats, date, time
         FROM reservations ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(Reservation {
            id: row.get(0)?,
            name: row.get(1)?,
            phone: row.get(2)?,
            email: row.get(3)?,
            guests: row.get(4)?,
            baby_seats: row.get(5)?,
            date: row.get(6)?,
            time: row.get(7)?,
        })
    })?;

    let mut reservations = vec![];
    for row in rows {
        reservations.push(row?);
    }
    Ok(reservations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;

    fn setup_db() -> Connection {
        db::init_db(":memory:").unwrap()
    }

    fn draft(name: &str) -> ReservationDraft {
        ReservationDraft {
            name: name.to_string(),
            phone: "555-0000".to_string(),
            email: "x@example.com".to_string(),
            guests: "2".to_string(),
            baby_seats: "0".to_string(),
            date: "2024-03-10".to_string(),
            time: "19:30".to_string(),
        }
    }

    #[test]
    fn test_ensure_schema_is_idempotent() {
        let conn = setup_db();
        ensure_schema(&conn).unwrap();
        ensure_schema(&conn).unwrap();
    }

    #[test]
    fn test_list_empty() {
        let conn = setup_db();
        let reservations = list_reservations(&conn).unwrap();
        assert!(reservations.is_empty());
    }

    #[test]
    fn test_insert_and_list_in_order() {
        let conn = setup_db();

        let first = insert_reservation(&conn, &draft("Ann")).unwrap();
        let second = insert_reservation(&conn, &draft("Ben")).unwrap();
        let third = insert_reservation(&conn, &draft("Cleo")).unwrap();
        assert!(first < second && second < third);

        let reservations = list_reservations(&conn).unwrap();
        assert_eq!(reservations.len(), 3);
        assert_eq!(reservations[0].name, "Ann");
        assert_eq!(reservations[1].name, "Ben");
        assert_eq!(reservations[2].name, "Cleo");
        assert_eq!(reservations[0].id, first);
        assert_eq!(reservations[2].id, third);
    }

    #[test]
    fn test_insert_preserves_fields() {
        let conn = setup_db();
        insert_reservation(&conn, &draft("Ann")).unwrap();

        let stored = &list_reservations(&conn).unwrap()[0];
        assert_eq!(stored.phone, "555-0000");
        assert_eq!(stored.email, "x@example.com");
        assert_eq!(stored.guests, "2");
        assert_eq!(stored.baby_seats, "0");
        assert_eq!(stored.date, "2024-03-10");
        assert_eq!(stored.time, "19:30");
    }
}
