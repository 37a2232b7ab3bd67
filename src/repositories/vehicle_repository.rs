use sqlx::PgConnection;
use validator::Validate;

use crate::models::vehicle::{CustomerVehicle, NewCustomerVehicle, NewVehicle, Vehicle};
use crate::utils::errors::{map_db_error, AppError};

pub struct VehicleRepository<'a> {
    conn: &'a mut PgConnection,
}

impl<'a> VehicleRepository<'a> {
    pub fn new(conn: &'a mut PgConnection) -> Self {
        Self { conn }
    }

    pub async fn create(&mut self, vehicle: &NewVehicle) -> Result<Vehicle, AppError> {
        vehicle.validate()?;

        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (brand, model, color, year)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&vehicle.brand)
        .bind(&vehicle.model)
        .bind(&vehicle.color)
        .bind(vehicle.year)
        .fetch_one(&mut *self.conn)
        .await
        .map_err(|e| map_db_error(e, "Error creating vehicle"))?;

        Ok(vehicle)
    }

    pub async fn find_by_id(&mut self, id: i32) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *self.conn)
            .await?;

        Ok(vehicle)
    }

    /// Asignar un vehículo a un cliente
    pub async fn assign_to_customer(
        &mut self,
        link: &NewCustomerVehicle,
    ) -> Result<CustomerVehicle, AppError> {
        link.validate()?;

        let customer_vehicle = sqlx::query_as::<_, CustomerVehicle>(
            r#"
            INSERT INTO customer_vehicles (customer_id, vehicle_id, plate_code)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(link.customer_id)
        .bind(link.vehicle_id)
        .bind(&link.plate_code)
        .fetch_one(&mut *self.conn)
        .await
        .map_err(|e| map_db_error(e, "Error assigning vehicle"))?;

        Ok(customer_vehicle)
    }

    pub async fn find_customer_vehicle(
        &mut self,
        id: i32,
    ) -> Result<Option<CustomerVehicle>, AppError> {
        let customer_vehicle =
            sqlx::query_as::<_, CustomerVehicle>("SELECT * FROM customer_vehicles WHERE id = $1")
                .bind(id)
                .fetch_optional(&mut *self.conn)
                .await?;

        Ok(customer_vehicle)
    }

    pub async fn list_by_customer(
        &mut self,
        customer_id: i32,
    ) -> Result<Vec<CustomerVehicle>, AppError> {
        let vehicles = sqlx::query_as::<_, CustomerVehicle>(
            "SELECT * FROM customer_vehicles WHERE customer_id = $1 ORDER BY id",
        )
        .bind(customer_id)
        .fetch_all(&mut *self.conn)
        .await?;

        Ok(vehicles)
    }
}
