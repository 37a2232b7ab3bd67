use sqlx::PgConnection;
use validator::Validate;

use crate::models::customer::{Address, Customer, NewAddress};
use crate::utils::errors::{map_db_error, AppError};

pub struct AddressRepository<'a> {
    conn: &'a mut PgConnection,
}

impl<'a> AddressRepository<'a> {
    pub fn new(conn: &'a mut PgConnection) -> Self {
        Self { conn }
    }

    pub async fn create(&mut self, address: &NewAddress) -> Result<Address, AppError> {
        address.validate()?;

        let address = sqlx::query_as::<_, Address>(
            r#"
            INSERT INTO addresses (street, city, state, complement, zipcode)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&address.street)
        .bind(&address.city)
        .bind(&address.state)
        .bind(&address.complement)
        .bind(&address.zipcode)
        .fetch_one(&mut *self.conn)
        .await
        .map_err(|e| map_db_error(e, "Error creating address"))?;

        Ok(address)
    }

    pub async fn find_by_id(&mut self, id: i32) -> Result<Option<Address>, AppError> {
        let address = sqlx::query_as::<_, Address>("SELECT * FROM addresses WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *self.conn)
            .await?;

        Ok(address)
    }
}

pub struct CustomerRepository<'a> {
    conn: &'a mut PgConnection,
}

impl<'a> CustomerRepository<'a> {
    pub fn new(conn: &'a mut PgConnection) -> Self {
        Self { conn }
    }

    /// El id tiene que ser el de un User existente
    pub async fn create(&mut self, customer: &Customer) -> Result<Customer, AppError> {
        let customer = sqlx::query_as::<_, Customer>(
            r#"
            INSERT INTO customers (id, address_id)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(customer.id)
        .bind(customer.address_id)
        .fetch_one(&mut *self.conn)
        .await
        .map_err(|e| map_db_error(e, "Error creating customer"))?;

        Ok(customer)
    }

    pub async fn find_by_id(&mut self, id: i32) -> Result<Option<Customer>, AppError> {
        let customer = sqlx::query_as::<_, Customer>("SELECT * FROM customers WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *self.conn)
            .await?;

        Ok(customer)
    }
}
