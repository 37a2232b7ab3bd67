//! Base de datos aislada para tests
//!
//! Cada instancia crea su propio schema PostgreSQL, apunta el `search_path` de
//! todas las conexiones del pool a él y crea las tablas. `teardown` lo elimina
//! con todo su contenido; si la instancia se descarta sin `teardown` (un test
//! que hace panic), `Drop` elimina el schema desde una conexión nueva.

use sqlx::{postgres::PgPool, Connection, Executor, PgConnection};
use uuid::Uuid;

use crate::config::database::DatabaseConfig;
use crate::database::{connection::Database, schema};
use crate::utils::errors::AppResult;

#[derive(Debug)]
pub struct IsolatedDatabase {
    schema_name: String,
    config: DatabaseConfig,
    database: Database,
    torn_down: bool,
}

impl IsolatedDatabase {
    pub async fn create(config: &DatabaseConfig) -> AppResult<Self> {
        let schema_name = format!("test_{}", Uuid::new_v4().simple());

        let mut admin = PgConnection::connect_with(&config.connect_options()?).await?;
        admin
            .execute(format!("CREATE SCHEMA {}", schema_name).as_str())
            .await?;
        admin.close().await?;

        let search_path = format!("SET search_path TO {}", schema_name);
        let pool: PgPool = config
            .pool_options()
            .after_connect(move |conn, _meta| {
                let search_path = search_path.clone();
                Box::pin(async move {
                    conn.execute(search_path.as_str()).await?;
                    Ok(())
                })
            })
            .connect_with(config.connect_options()?)
            .await?;

        let database = Database::from_pool(pool);
        let mut session = database.session().await?;
        schema::create_all(&mut session).await?;
        session.close();

        tracing::info!("🧪 Schema de test {} listo", schema_name);

        Ok(Self {
            schema_name,
            config: config.clone(),
            database,
            torn_down: false,
        })
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn schema_name(&self) -> &str {
        &self.schema_name
    }

    /// Eliminar tablas y schema, cerrar el pool
    pub async fn teardown(mut self) -> AppResult<()> {
        {
            let mut session = self.database.session().await?;
            schema::drop_all(&mut session).await?;
        }
        self.database.close().await;

        drop_schema(&self.config, &self.schema_name).await?;
        self.torn_down = true;

        tracing::info!("🧹 Schema de test {} eliminado", self.schema_name);
        Ok(())
    }
}

impl Drop for IsolatedDatabase {
    fn drop(&mut self) {
        if self.torn_down {
            return;
        }

        // Drop puede ejecutarse dentro de un runtime: el schema se elimina desde
        // un hilo con su propio runtime
        let config = self.config.clone();
        let schema_name = self.schema_name.clone();
        let cleanup = std::thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()?;
            runtime
                .block_on(drop_schema(&config, &schema_name))
                .map_err(std::io::Error::other)
        });

        match cleanup.join() {
            Ok(Ok(())) => {
                tracing::warn!("🧹 Schema de test {} eliminado sin teardown", self.schema_name)
            }
            Ok(Err(e)) => tracing::warn!(
                "⚠️ No se pudo eliminar el schema de test {}: {}",
                self.schema_name,
                e
            ),
            Err(_) => tracing::warn!(
                "⚠️ El hilo de limpieza del schema {} hizo panic",
                self.schema_name
            ),
        }
    }
}

async fn drop_schema(config: &DatabaseConfig, schema_name: &str) -> AppResult<()> {
    let mut admin = PgConnection::connect_with(&config.connect_options()?).await?;
    // Conexiones del pool que sigan vivas no deben bloquear la limpieza
    admin.execute("SET lock_timeout = '10s'").await?;
    admin
        .execute(format!("DROP SCHEMA IF EXISTS {} CASCADE", schema_name).as_str())
        .await?;
    admin.close().await?;
    Ok(())
}
