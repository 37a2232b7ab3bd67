use sqlx::PgConnection;
use validator::Validate;

use crate::models::order::{NewOrder, Order};
use crate::utils::errors::{map_db_error, AppError};

pub struct OrderRepository<'a> {
    conn: &'a mut PgConnection,
}

impl<'a> OrderRepository<'a> {
    pub fn new(conn: &'a mut PgConnection) -> Self {
        Self { conn }
    }

    pub async fn create(&mut self, order: &NewOrder) -> Result<Order, AppError> {
        order.validate()?;

        let order = sqlx::query_as::<_, Order>(
            r#"
            INSERT INTO orders (
                customer_id, customer_vehicle_ids, service_ids, employee_ids,
                start_date, estimated_time, status
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(order.customer_id)
        .bind(&order.customer_vehicle_ids)
        .bind(&order.service_ids)
        .bind(&order.employee_ids)
        .bind(order.start_date)
        .bind(order.estimated_time)
        .bind(order.status)
        .fetch_one(&mut *self.conn)
        .await
        .map_err(|e| map_db_error(e, "Error creating order"))?;

        Ok(order)
    }

    pub async fn find_by_id(&mut self, id: i32) -> Result<Option<Order>, AppError> {
        let order = sqlx::query_as::<_, Order>("SELECT * FROM orders WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *self.conn)
            .await?;

        Ok(order)
    }

    pub async fn list_by_customer(&mut self, customer_id: i32) -> Result<Vec<Order>, AppError> {
        let orders = sqlx::query_as::<_, Order>(
            "SELECT * FROM orders WHERE customer_id = $1 ORDER BY start_date",
        )
        .bind(customer_id)
        .fetch_all(&mut *self.conn)
        .await?;

        Ok(orders)
    }
}
