use sqlx::PgConnection;
use validator::Validate;

use crate::models::service::{NewService, Service};
use crate::utils::errors::{map_db_error, AppError};

pub struct ServiceRepository<'a> {
    conn: &'a mut PgConnection,
}

impl<'a> ServiceRepository<'a> {
    pub fn new(conn: &'a mut PgConnection) -> Self {
        Self { conn }
    }

    pub async fn create(&mut self, service: &NewService) -> Result<Service, AppError> {
        service.validate()?;

        let service = sqlx::query_as::<_, Service>(
            r#"
            INSERT INTO services (name, price, description, image, estimated_time)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&service.name)
        .bind(service.price)
        .bind(&service.description)
        .bind(&service.image)
        .bind(service.estimated_time)
        .fetch_one(&mut *self.conn)
        .await
        .map_err(|e| map_db_error(e, "Error creating service"))?;

        Ok(service)
    }

    pub async fn find_by_id(&mut self, id: i32) -> Result<Option<Service>, AppError> {
        let service = sqlx::query_as::<_, Service>("SELECT * FROM services WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *self.conn)
            .await?;

        Ok(service)
    }
}
