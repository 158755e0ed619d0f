//! Database Seed Tool
//!
//! Applies migrations and inserts the rows a fresh deployment needs:
//! an admin account, a sample user, mining plans, payment methods, and
//! settings. Every insert targets a natural unique key with
//! `ON CONFLICT DO NOTHING`, so re-running is a no-op.

use anyhow::Context;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::env;
use uuid::Uuid;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&database_url)
        .await
        .context("failed to connect to database")?;

    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await
        .context("failed to run migrations")?;
    println!("migrations applied");

    seed_plans(&pool).await?;
    seed_accounts(&pool).await?;
    seed_payment_methods(&pool).await?;
    seed_settings(&pool).await?;

    println!("seed complete");
    Ok(())
}

async fn seed_plans(pool: &PgPool) -> anyhow::Result<()> {
    let plans = [
        ("Starter", 99.0, 0.25),
        ("Advanced", 499.0, 1.5),
        ("Professional", 1999.0, 7.0),
    ];

    let mut inserted = 0u64;
    for (name, price, earnings_per_cycle) in plans {
        inserted += sqlx::query(
            r#"
            INSERT INTO mining_plans (plan_id, name, price, earnings_per_cycle)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (name) DO NOTHING
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(price)
        .bind(earnings_per_cycle)
        .execute(pool)
        .await?
        .rows_affected();
    }

    println!("mining plans seeded ({inserted} inserted)");
    Ok(())
}

async fn seed_accounts(pool: &PgPool) -> anyhow::Result<()> {
    let admin_password =
        env::var("SEED_ADMIN_PASSWORD").unwrap_or_else(|_| "admin12345".to_string());
    let user_password = env::var("SEED_USER_PASSWORD").unwrap_or_else(|_| "user12345".to_string());

    // Role 1 = admin, no plan
    let inserted = sqlx::query(
        r#"
        INSERT INTO users (
            user_id, email, display_name, password_hash,
            user_role, created_at, updated_at
        ) VALUES ($1, $2, $3, $4, 1, now(), now())
        ON CONFLICT (email) DO NOTHING
        "#,
    )
    .bind(Uuid::new_v4())
    .bind("admin@example.com")
    .bind("Administrator")
    .bind(platform::password::hash_password(&admin_password)?)
    .execute(pool)
    .await?
    .rows_affected();
    println!("admin account seeded ({inserted} inserted)");

    // Sample user on the cheapest plan
    let inserted = sqlx::query(
        r#"
        INSERT INTO users (
            user_id, email, display_name, password_hash,
            user_role, plan_id, created_at, updated_at
        ) VALUES (
            $1, $2, $3, $4, 0,
            (SELECT plan_id FROM mining_plans WHERE name = 'Starter'),
            now(), now()
        )
        ON CONFLICT (email) DO NOTHING
        "#,
    )
    .bind(Uuid::new_v4())
    .bind("miner@example.com")
    .bind("Sample Miner")
    .bind(platform::password::hash_password(&user_password)?)
    .execute(pool)
    .await?
    .rows_affected();
    println!("sample user seeded ({inserted} inserted)");

    Ok(())
}

async fn seed_payment_methods(pool: &PgPool) -> anyhow::Result<()> {
    let methods = ["Bitcoin", "Ethereum", "Bank Transfer"];

    let mut inserted = 0u64;
    for name in methods {
        inserted += sqlx::query(
            r#"
            INSERT INTO payment_methods (payment_method_id, name)
            VALUES ($1, $2)
            ON CONFLICT (name) DO NOTHING
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .execute(pool)
        .await?
        .rows_affected();
    }

    println!("payment methods seeded ({inserted} inserted)");
    Ok(())
}

async fn seed_settings(pool: &PgPool) -> anyhow::Result<()> {
    let settings = [
        ("base_earnings_per_cycle", "0.1"),
        ("maintenance_mode", "off"),
    ];

    let mut inserted = 0u64;
    for (key, value) in settings {
        inserted += sqlx::query(
            r#"
            INSERT INTO settings (key, value)
            VALUES ($1, $2)
            ON CONFLICT (key) DO NOTHING
            "#,
        )
        .bind(key)
        .bind(value)
        .execute(pool)
        .await?
        .rows_affected();
    }

    println!("settings seeded ({inserted} inserted)");
    Ok(())
}
