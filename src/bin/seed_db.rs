use business_registry::DbConfig;
use rusqlite::Connection;
use std::fs;

// Sample rows shaped like a real filing feed.
struct SeedDirector {
    id: i64,
    first_name: &'static str,
    last_name: &'static str,
    occupation: &'static str,
    date_of_birth: &'static str,
}

struct SeedBusiness {
    id: i64,
    name: &'static str,
    registered_address: &'static str,
    registration_date: &'static str,
    registration_number: &'static str,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = DbConfig::load();
    let db_path = config.path;

    // Ensure parent directory exists
    if let Some(parent) = db_path.parent() {
        fs::create_dir_all(parent)?;
    }

    println!("Connecting to database at: {}", db_path.display());

    let conn = Connection::open(&db_path)?;

    // In production the register schema is owned by the upstream feed;
    // this dev tool recreates it for local work.
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS directors (
            id INTEGER PRIMARY KEY,
            first_name TEXT NOT NULL,
            last_name TEXT NOT NULL,
            occupation TEXT NOT NULL,
            date_of_birth TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS businesses (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            registered_address TEXT NOT NULL,
            registration_date TEXT NOT NULL,
            registration_number TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS director_businesses (
            director_id INTEGER NOT NULL,
            business_id INTEGER NOT NULL,
            PRIMARY KEY(director_id, business_id),
            FOREIGN KEY(director_id) REFERENCES directors(id),
            FOREIGN KEY(business_id) REFERENCES businesses(id)
        );
        "#,
    )?;

    let directors = [
        SeedDirector {
            id: 1,
            first_name: "Margaret",
            last_name: "Hamilton",
            occupation: "Software Engineer",
            date_of_birth: "1936-08-17",
        },
        SeedDirector {
            id: 2,
            first_name: "Grace",
            last_name: "Hopper",
            occupation: "Computer Scientist",
            date_of_birth: "1906-12-09",
        },
        SeedDirector {
            id: 3,
            first_name: "Tommy",
            last_name: "Flowers",
            occupation: "Electrical Engineer",
            date_of_birth: "1905-12-22",
        },
    ];

    let businesses = [
        SeedBusiness {
            id: 1,
            name: "Apollo Guidance Systems Ltd",
            registered_address: "75 Cambridge Pkwy, Cambridge",
            registration_date: "1965-03-04",
            registration_number: "REG-100001",
        },
        SeedBusiness {
            id: 2,
            name: "Compiler Works Inc",
            registered_address: "12 Harbor St, New York",
            registration_date: "1952-05-02",
            registration_number: "REG-100002",
        },
        SeedBusiness {
            id: 3,
            name: "Colossus Computing Co",
            registered_address: "3 Dollis Hill Ln, London",
            registration_date: "1944-02-29",
            registration_number: "REG-100003",
        },
    ];

    for d in &directors {
        conn.execute(
            "INSERT OR REPLACE INTO directors (id, first_name, last_name, occupation, date_of_birth)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            (d.id, d.first_name, d.last_name, d.occupation, d.date_of_birth),
        )?;
    }

    for b in &businesses {
        conn.execute(
            "INSERT OR REPLACE INTO businesses (id, name, registered_address, registration_date, registration_number)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            (
                b.id,
                b.name,
                b.registered_address,
                b.registration_date,
                b.registration_number,
            ),
        )?;
    }

    // Compiler Works has two directors; Margaret sits on two boards.
    let links = [(1i64, 1i64), (1, 2), (2, 2), (3, 3)];
    for (director_id, business_id) in links {
        conn.execute(
            "INSERT OR REPLACE INTO director_businesses (director_id, business_id) VALUES (?1, ?2)",
            (director_id, business_id),
        )?;
    }

    println!(
        "Seeded {} directors, {} businesses, {} links",
        directors.len(),
        businesses.len(),
        links.len()
    );

    Ok(())
}
