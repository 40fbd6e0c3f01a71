use anyhow::{Context, Result};
use rusqlite::{Connection, OptionalExtension};
use std::path::Path;

use crate::models::{Frequency, History};

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS kv (
    key    TEXT PRIMARY KEY,
    value  TEXT NOT NULL
);
";

pub const KEY_HISTORY: &str = "lotto_history";
pub const KEY_FREQUENCY: &str = "lotto_frequency";

pub fn db_path() -> std::path::PathBuf {
    let mut path = std::env::current_dir().unwrap_or_default();
    path.push("data");
    path.push("loto45.db");
    path
}

pub fn open_db(path: &Path) -> Result<Connection> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Impossible de créer le répertoire {:?}", parent))?;
    }
    let conn = Connection::open(path)
        .with_context(|| format!("Impossible d'ouvrir la base {:?}", path))?;
    Ok(conn)
}

pub fn migrate(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA)
        .context("Échec de la migration")?;
    Ok(())
}

fn read_key(conn: &Connection, key: &str) -> Result<Option<String>> {
    let value = conn
        .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| {
            row.get(0)
        })
        .optional()
        .with_context(|| format!("Échec de la lecture de '{}'", key))?;
    Ok(value)
}

/// Une valeur absente ou illisible est traitée comme vide.
pub fn load(conn: &Connection) -> Result<(History, Frequency)> {
    let history = read_key(conn, KEY_HISTORY)?
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default();
    let frequency = read_key(conn, KEY_FREQUENCY)?
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default();
    Ok((history, frequency))
}

pub fn save(conn: &Connection, history: &History, frequency: &Frequency) -> Result<()> {
    let tx = conn
        .unchecked_transaction()
        .context("Impossible de démarrer la transaction")?;

    tx.execute(
        "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
        rusqlite::params![KEY_HISTORY, serde_json::to_string(history)?],
    )
    .context("Échec de l'écriture de l'historique")?;
    tx.execute(
        "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
        rusqlite::params![KEY_FREQUENCY, serde_json::to_string(frequency)?],
    )
    .context("Échec de l'écriture des fréquences")?;

    tx.commit().context("Échec du commit")?;
    Ok(())
}

pub fn reset(conn: &Connection) -> Result<()> {
    let tx = conn
        .unchecked_transaction()
        .context("Impossible de démarrer la transaction")?;
    tx.execute("DELETE FROM kv WHERE key = ?1", [KEY_HISTORY])
        .context("Échec de la suppression de l'historique")?;
    tx.execute("DELETE FROM kv WHERE key = ?1", [KEY_FREQUENCY])
        .context("Échec de la suppression des fréquences")?;
    tx.commit().context("Échec du commit")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Draw;

    fn test_conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        migrate(&conn).unwrap();
        conn
    }

    fn test_draw(bonus: u8) -> Draw {
        Draw {
            numbers: [1, 2, 3, 4, 5, 6],
            bonus,
            time: "09:41".to_string(),
        }
    }

    #[test]
    fn test_load_empty_defaults() {
        let conn = test_conn();
        let (history, frequency) = load(&conn).unwrap();
        assert!(history.is_empty());
        assert!(frequency.is_empty());
    }

    #[test]
    fn test_save_load_round_trip() {
        let conn = test_conn();

        let mut history = History::default();
        let mut frequency = Frequency::default();
        for bonus in [7, 8] {
            let draw = test_draw(bonus);
            frequency.record(&draw);
            history.record(draw);
        }

        save(&conn, &history, &frequency).unwrap();
        let (loaded_history, loaded_frequency) = load(&conn).unwrap();

        assert_eq!(loaded_history, history);
        assert_eq!(loaded_frequency, frequency);
    }

    #[test]
    fn test_save_overwrites() {
        let conn = test_conn();

        let mut history = History::default();
        let mut frequency = Frequency::default();
        let draw = test_draw(7);
        frequency.record(&draw);
        history.record(draw);
        save(&conn, &history, &frequency).unwrap();

        let draw = test_draw(8);
        frequency.record(&draw);
        history.record(draw);
        save(&conn, &history, &frequency).unwrap();

        let (loaded_history, loaded_frequency) = load(&conn).unwrap();
        assert_eq!(loaded_history.len(), 2);
        assert_eq!(loaded_frequency.count(1), 2);
    }

    #[test]
    fn test_malformed_value_treated_as_empty() {
        let conn = test_conn();
        conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)",
            rusqlite::params![KEY_HISTORY, "{pas du json"],
        )
        .unwrap();
        conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)",
            rusqlite::params![KEY_FREQUENCY, "[1, 2, 3]"],
        )
        .unwrap();

        let (history, frequency) = load(&conn).unwrap();
        assert!(history.is_empty());
        assert!(frequency.is_empty());
    }

    #[test]
    fn test_reset_clears_both_keys() {
        let conn = test_conn();

        let mut history = History::default();
        let mut frequency = Frequency::default();
        let draw = test_draw(7);
        frequency.record(&draw);
        history.record(draw);
        save(&conn, &history, &frequency).unwrap();

        reset(&conn).unwrap();

        let (history, frequency) = load(&conn).unwrap();
        assert!(history.is_empty());
        assert!(frequency.is_empty());
    }

    #[test]
    fn test_reset_on_empty_store() {
        let conn = test_conn();
        assert!(reset(&conn).is_ok());
    }
}
