//! SQLite access for the `species` table.
//!
//! Handlers open a fresh connection per operation through [`open`]; the schema
//! is created once at startup by [`initialize`].

use std::path::Path;

use common::model::species::Species;
use log::info;
use rusqlite::{params, Connection, OptionalExtension, Row};

/// Column list matching [`species_from_row`].
pub const SPECIES_COLUMNS: &str = "id, scientific_name, common_name, description, kingdom, \
     total_population, image, endangered, author";

pub fn open(db_path: &Path) -> Result<Connection, rusqlite::Error> {
    let conn = Connection::open(db_path)?;
    conn.execute_batch("PRAGMA busy_timeout=3000;")?;
    Ok(conn)
}

/// Creates the `species` table if needed. When `seed_author` is given and the
/// table is empty, a few demo rows owned by that author are inserted.
pub fn initialize(db_path: &Path, seed_author: Option<&str>) -> Result<(), rusqlite::Error> {
    let conn = open(db_path)?;
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS species (
            id               INTEGER PRIMARY KEY AUTOINCREMENT,
            scientific_name  TEXT NOT NULL,
            common_name      TEXT,
            description      TEXT,
            kingdom          TEXT,
            total_population INTEGER,
            image            TEXT,
            endangered       INTEGER NOT NULL DEFAULT 0,
            author           TEXT NOT NULL
        );
        CREATE INDEX IF NOT EXISTS species_scientific_name ON species (scientific_name);
        ",
    )?;

    if let Some(author) = seed_author {
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM species", [], |row| row.get(0))?;
        if count == 0 {
            seed(&conn, author)?;
            info!("Seeded species table with demo rows for {}", author);
        }
    }

    info!("Database ready at {}", db_path.display());
    Ok(())
}

pub fn species_from_row(row: &Row<'_>) -> Result<Species, rusqlite::Error> {
    Ok(Species {
        id: row.get(0)?,
        scientific_name: row.get(1)?,
        common_name: row.get(2)?,
        description: row.get(3)?,
        kingdom: row.get(4)?,
        total_population: row.get(5)?,
        image: row.get(6)?,
        endangered: row.get(7)?,
        author: row.get(8)?,
    })
}

pub fn find_species(conn: &Connection, id: i64) -> Result<Option<Species>, rusqlite::Error> {
    conn.query_row(
        &format!("SELECT {SPECIES_COLUMNS} FROM species WHERE id = ?1"),
        params![id],
        species_from_row,
    )
    .optional()
}

/// Inserts a row and returns its id. Used by seeding and tests.
pub fn insert_species(conn: &Connection, species: &Species) -> Result<i64, rusqlite::Error> {
    conn.execute(
        "INSERT INTO species (scientific_name, common_name, description, kingdom, \
         total_population, image, endangered, author) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            species.scientific_name,
            species.common_name,
            species.description,
            species.kingdom,
            species.total_population,
            species.image,
            species.endangered,
            species.author,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

fn seed(conn: &Connection, author: &str) -> Result<(), rusqlite::Error> {
    let rows = [
        (
            "Ara macao",
            "Scarlet macaw",
            "Animalia",
            Some(50_000),
            false,
            "A large, red, yellow, and blue Central and South American parrot. It is native to humid evergreen forests of tropical Central and South America, and is one of the most recognisable birds of the Neotropics.",
        ),
        (
            "Panthera onca",
            "Jaguar",
            "Animalia",
            Some(173_000),
            true,
            "The largest cat species in the Americas.",
        ),
        (
            "Ceiba pentandra",
            "Kapok tree",
            "Plantae",
            None,
            false,
            "Tropical tree of the order Malvales, native to Mexico, Central America and the Caribbean.",
        ),
    ];

    for (scientific_name, common_name, kingdom, population, endangered, description) in rows {
        insert_species(
            conn,
            &Species {
                id: 0,
                scientific_name: scientific_name.to_string(),
                common_name: Some(common_name.to_string()),
                description: Some(description.to_string()),
                kingdom: Some(kingdom.to_string()),
                total_population: population,
                image: None,
                endangered,
                author: author.to_string(),
            },
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initialize_is_idempotent_and_seeds_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("species.sqlite");

        initialize(&path, Some("owner")).unwrap();
        initialize(&path, Some("owner")).unwrap();

        let conn = open(&path).unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM species", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 3);
    }

    #[test]
    fn insert_and_find_round_trip_optional_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("species.sqlite");
        initialize(&path, None).unwrap();
        let conn = open(&path).unwrap();

        let mut species = Species {
            id: 0,
            scientific_name: "Morpho peleides".to_string(),
            common_name: None,
            description: None,
            kingdom: None,
            total_population: None,
            image: Some("https://example.org/morpho.png".to_string()),
            endangered: true,
            author: "someone".to_string(),
        };
        species.id = insert_species(&conn, &species).unwrap();

        assert_eq!(find_species(&conn, species.id).unwrap(), Some(species));
        assert_eq!(find_species(&conn, 9_999).unwrap(), None);
    }
}
