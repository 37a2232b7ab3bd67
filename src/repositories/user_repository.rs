use sqlx::PgConnection;
use validator::Validate;

use crate::config::environment::RoleNames;
use crate::models::user::{NewUser, RoleRow, User, UserRole};
use crate::utils::errors::{map_db_error, AppError};

pub struct RoleRepository<'a> {
    conn: &'a mut PgConnection,
}

impl<'a> RoleRepository<'a> {
    pub fn new(conn: &'a mut PgConnection) -> Self {
        Self { conn }
    }

    /// Insertar (o renombrar) las tres filas de roles
    pub async fn seed(&mut self, names: &RoleNames) -> Result<Vec<RoleRow>, AppError> {
        for role in UserRole::ALL {
            sqlx::query(
                r#"
                INSERT INTO user_roles (id, role)
                VALUES ($1, $2)
                ON CONFLICT (id) DO UPDATE SET role = EXCLUDED.role
                "#,
            )
            .bind(role.id())
            .bind(names.name_of(role))
            .execute(&mut *self.conn)
            .await
            .map_err(|e| map_db_error(e, "Error seeding roles"))?;
        }

        self.list().await
    }

    pub async fn list(&mut self) -> Result<Vec<RoleRow>, AppError> {
        let roles = sqlx::query_as::<_, RoleRow>("SELECT * FROM user_roles ORDER BY id")
            .fetch_all(&mut *self.conn)
            .await?;

        Ok(roles)
    }
}

pub struct UserRepository<'a> {
    conn: &'a mut PgConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(conn: &'a mut PgConnection) -> Self {
        Self { conn }
    }

    pub async fn create(&mut self, user: &NewUser) -> Result<User, AppError> {
        user.validate()?;

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, hashed_password, first_name, last_name, role, is_active)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(&user.username)
        .bind(&user.hashed_password)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(user.role)
        .bind(user.is_active)
        .fetch_one(&mut *self.conn)
        .await
        .map_err(|e| map_db_error(e, "Error creating user"))?;

        Ok(user)
    }

    pub async fn find_by_id(&mut self, id: i32) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *self.conn)
            .await?;

        Ok(user)
    }

    pub async fn find_by_username(&mut self, username: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&mut *self.conn)
            .await?;

        Ok(user)
    }

    pub async fn username_exists(&mut self, username: &str) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)")
                .bind(username)
                .fetch_one(&mut *self.conn)
                .await?;

        Ok(result.0)
    }
}
