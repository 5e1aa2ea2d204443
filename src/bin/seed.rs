//! Seed script for development — populates a fresh database with sample data.
//!
//! Usage: `cargo run --bin seed`
//!
//! Requires `DATABASE_URL` and `JWT_SECRET` environment variables (reads .env).

use gearguard::models::user::UserRole;
use gearguard::services::auth::issue_access_token;
use sqlx::PgPool;
use uuid::Uuid;

/// Lifetime of the printed development token.
const DEV_TOKEN_EXPIRY_SECS: i64 = 7 * 24 * 3600;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = gearguard::config::AppConfig::from_env()?;
    let pool = gearguard::db::create_pool(&config.database_url, 5).await?;

    // Run migrations first
    gearguard::db::run_migrations(&pool).await?;

    println!("=== GearGuard Seed Script ===");

    let manager_id = seed_users(&pool).await?;
    seed_equipment(&pool).await?;
    seed_teams(&pool).await?;
    seed_requests(&pool).await?;

    let token = issue_access_token(
        manager_id,
        "Morgan Manager",
        UserRole::Manager,
        &config.jwt_secret,
        DEV_TOKEN_EXPIRY_SECS,
    )?;

    println!("\n=== Seed complete! ===");
    println!("Manager access token (GEARGUARD_TOKEN):\n{token}");

    Ok(())
}

async fn seed_users(pool: &PgPool) -> anyhow::Result<Uuid> {
    let users = [
        ("Morgan Manager", "manager@gearguard.local", "Manager", Some("Maintenance")),
        ("Tess Technician", "tess@gearguard.local", "Technician", Some("Mechanical")),
        ("Eli Electric", "eli@gearguard.local", "Technician", Some("Electrical")),
        ("Ivy Support", "ivy@gearguard.local", "Technician", Some("IT Support")),
        ("Uma User", "uma@gearguard.local", "User", None),
    ];

    for (name, email, role, department) in users {
        sqlx::query(
            "INSERT INTO users (name, email, role, department)
             VALUES ($1, $2, $3::user_role, $4)
             ON CONFLICT (email) DO NOTHING",
        )
        .bind(name)
        .bind(email)
        .bind(role)
        .bind(department)
        .execute(pool)
        .await?;
    }

    let manager_id: Uuid =
        sqlx::query_scalar("SELECT id FROM users WHERE email = 'manager@gearguard.local'")
            .fetch_one(pool)
            .await?;

    println!("[done] Users ({} upserted)", users.len());
    Ok(manager_id)
}

async fn seed_equipment(pool: &PgPool) -> anyhow::Result<()> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM equipment")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        println!("[skip] Equipment already seeded ({count} rows)");
        return Ok(());
    }

    let equipment = [
        ("CNC Lathe", "CNC-001", "Machinery", "Production", "Hall A"),
        ("Hydraulic Press", "HP-014", "Machinery", "Manufacturing", "Hall B"),
        ("Rooftop AC Unit", "HVAC-203", "HVAC", "Facilities", "Roof"),
        ("Office Printer", "PRN-330", "IT", "IT", "Floor 2"),
        ("Forklift", "FL-007", "Vehicles", "Logistics", "Warehouse"),
    ];

    for (name, serial, category, department, location) in equipment {
        sqlx::query(
            "INSERT INTO equipment (name, serial_number, category, department, location)
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(name)
        .bind(serial)
        .bind(category)
        .bind(department)
        .bind(location)
        .execute(pool)
        .await?;
    }

    println!("[done] Created {} equipment records", equipment.len());
    Ok(())
}

async fn seed_teams(pool: &PgPool) -> anyhow::Result<()> {
    let teams = [
        ("Mechanics Crew", "Mechanics", true),
        ("IT Helpdesk", "IT Support", true),
        ("Legacy Plumbing", "Plumbing", false),
    ];

    for (name, team_type, is_active) in teams {
        sqlx::query(
            "INSERT INTO maintenance_teams (name, team_type, is_active)
             VALUES ($1, $2::team_type, $3)
             ON CONFLICT (name) DO NOTHING",
        )
        .bind(name)
        .bind(team_type)
        .bind(is_active)
        .execute(pool)
        .await?;
    }

    println!("[done] Teams ({} upserted)", teams.len());
    Ok(())
}

async fn seed_requests(pool: &PgPool) -> anyhow::Result<()> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM maintenance_requests")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        println!("[skip] Requests already seeded ({count} rows)");
        return Ok(());
    }

    let requests = [
        ("Spindle vibration", "CNC-001", "Mechanics Crew", "New", "Corrective"),
        ("Oil leak on ram", "HP-014", "Mechanics Crew", "In Progress", "Corrective"),
        ("Quarterly filter change", "HVAC-203", "Mechanics Crew", "Repaired", "Preventive"),
        ("Paper jam sensor", "PRN-330", "IT Helpdesk", "Scrap", "Corrective"),
    ];

    for (subject, serial, team, status, request_type) in requests {
        sqlx::query(
            r#"
            INSERT INTO maintenance_requests (subject, equipment_id, team_id, status, request_type)
            VALUES (
                $1,
                (SELECT id FROM equipment WHERE serial_number = $2),
                (SELECT id FROM maintenance_teams WHERE name = $3),
                $4::request_status,
                $5::request_type
            )
            "#,
        )
        .bind(subject)
        .bind(serial)
        .bind(team)
        .bind(status)
        .bind(request_type)
        .execute(pool)
        .await?;
    }

    println!("[done] Created {} maintenance requests", requests.len());
    Ok(())
}
