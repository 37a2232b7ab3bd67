use validator::Validate;

use crate::database::Session;
use crate::models::customer::{Customer, NewCustomer};
use crate::models::user::{NewUser, User, UserRole};
use crate::repositories::{AddressRepository, CustomerRepository, UserRepository};
use crate::services::password_service::PasswordHasher;
use crate::utils::errors::{AppError, AppResult};

/// Alta de usuarios y clientes
#[derive(Debug, Clone, Copy)]
pub struct UserService {
    hasher: PasswordHasher,
}

impl UserService {
    pub fn new(hasher: PasswordHasher) -> Self {
        Self { hasher }
    }

    /// Crear un usuario con el rol indicado
    pub async fn create_user(
        &self,
        session: &mut Session,
        username: &str,
        password: &str,
        role: UserRole,
    ) -> AppResult<User> {
        if password.is_empty() {
            return Err(AppError::MalformedCredentials("password is required".to_string()));
        }

        let hashed_password = self.hasher.hash_async(password).await?;
        UserRepository::new(session)
            .create(&NewUser::new(username, hashed_password, role))
            .await
    }

    /// Registrar User + Address + Customer en una sola transacción
    pub async fn create_customer(
        &self,
        session: &mut Session,
        customer: &NewCustomer,
    ) -> AppResult<(User, Customer)> {
        customer.validate()?;

        let hashed_password = self.hasher.hash_async(&customer.password).await?;
        let mut new_user = NewUser::new(&customer.username, hashed_password, UserRole::Customer);
        new_user.first_name = customer.first_name.clone();
        new_user.last_name = customer.last_name.clone();

        let mut uow = session.begin().await?;

        if UserRepository::new(&mut uow)
            .username_exists(&customer.username)
            .await?
        {
            return Err(AppError::Conflict(format!(
                "User with username '{}' already exists",
                customer.username
            )));
        }

        let user = UserRepository::new(&mut uow).create(&new_user).await?;

        let address_id = match &customer.address {
            Some(address) => Some(AddressRepository::new(&mut uow).create(address).await?.id),
            None => None,
        };

        let created = CustomerRepository::new(&mut uow)
            .create(&Customer {
                id: user.id,
                address_id,
            })
            .await?;

        uow.commit().await?;
        tracing::info!(customer_id = created.id, "Cliente registrado");

        Ok((user, created))
    }
}
