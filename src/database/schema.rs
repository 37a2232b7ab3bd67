//! Schema PostgreSQL del taller
//!
//! `create_all` y `drop_all` son idempotentes y se ejecutan sobre la conexión
//! recibida, respetando su `search_path`.

use sqlx::PgConnection;

use crate::utils::errors::AppResult;

const CREATE_STATEMENTS: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS user_roles (
        id SMALLINT PRIMARY KEY,
        role VARCHAR(32) NOT NULL UNIQUE
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id SERIAL PRIMARY KEY,
        username VARCHAR(255) NOT NULL UNIQUE,
        hashed_password VARCHAR(255) NOT NULL,
        first_name VARCHAR(100),
        last_name VARCHAR(100),
        role SMALLINT NOT NULL REFERENCES user_roles (id),
        is_active BOOLEAN NOT NULL DEFAULT TRUE
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS addresses (
        id SERIAL PRIMARY KEY,
        street VARCHAR(255) NOT NULL,
        city VARCHAR(100) NOT NULL,
        state CHAR(2) NOT NULL,
        complement VARCHAR(255) NOT NULL DEFAULT '',
        zipcode CHAR(8) NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS customers (
        id INTEGER PRIMARY KEY REFERENCES users (id) ON DELETE CASCADE,
        address_id INTEGER REFERENCES addresses (id)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS vehicles (
        id SERIAL PRIMARY KEY,
        brand VARCHAR(100) NOT NULL,
        model VARCHAR(100) NOT NULL,
        color VARCHAR(50) NOT NULL,
        year INTEGER NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS customer_vehicles (
        id SERIAL PRIMARY KEY,
        customer_id INTEGER NOT NULL REFERENCES customers (id) ON DELETE CASCADE,
        vehicle_id INTEGER NOT NULL REFERENCES vehicles (id),
        plate_code VARCHAR(16) NOT NULL DEFAULT '',
        UNIQUE (customer_id, vehicle_id)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS services (
        id SERIAL PRIMARY KEY,
        name VARCHAR(100) NOT NULL,
        price NUMERIC(10, 2) NOT NULL CHECK (price >= 0),
        description TEXT NOT NULL,
        image TEXT,
        estimated_time INTEGER NOT NULL CHECK (estimated_time >= 0)
    )
    "#,
    r#"
    DO $$
    BEGIN
        CREATE TYPE order_status AS ENUM (
            'UNDER_REVIEW', 'APPROVED', 'IN_PROGRESS', 'COMPLETED', 'CANCELED'
        );
    EXCEPTION
        WHEN duplicate_object THEN NULL;
    END
    $$
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS orders (
        id SERIAL PRIMARY KEY,
        customer_id INTEGER NOT NULL REFERENCES customers (id),
        customer_vehicle_ids INTEGER[] NOT NULL DEFAULT '{}',
        service_ids INTEGER[] NOT NULL DEFAULT '{}',
        employee_ids INTEGER[] NOT NULL DEFAULT '{}',
        start_date TIMESTAMPTZ NOT NULL,
        estimated_time TIMESTAMPTZ NOT NULL,
        status order_status NOT NULL DEFAULT 'UNDER_REVIEW'
    )
    "#,
];

const DROP_STATEMENTS: &[&str] = &[
    "DROP TABLE IF EXISTS orders",
    "DROP TYPE IF EXISTS order_status",
    "DROP TABLE IF EXISTS services",
    "DROP TABLE IF EXISTS customer_vehicles",
    "DROP TABLE IF EXISTS vehicles",
    "DROP TABLE IF EXISTS customers",
    "DROP TABLE IF EXISTS addresses",
    "DROP TABLE IF EXISTS users",
    "DROP TABLE IF EXISTS user_roles",
];

/// Crear todas las tablas, constraints y tipos
pub async fn create_all(conn: &mut PgConnection) -> AppResult<()> {
    for statement in CREATE_STATEMENTS {
        sqlx::query(statement).execute(&mut *conn).await?;
    }
    tracing::debug!("Schema creado ({} sentencias)", CREATE_STATEMENTS.len());
    Ok(())
}

/// Eliminar todo lo creado por `create_all`, dependientes primero
pub async fn drop_all(conn: &mut PgConnection) -> AppResult<()> {
    for statement in DROP_STATEMENTS {
        sqlx::query(statement).execute(&mut *conn).await?;
    }
    tracing::debug!("Schema eliminado");
    Ok(())
}
