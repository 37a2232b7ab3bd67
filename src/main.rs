use anyhow::Result;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};
use dotenvy::dotenv;

use repair_shop_api::{
    config::{DatabaseConfig, EnvironmentConfig},
    database::Database,
    repositories::RoleRepository,
    routes::create_router,
    AppState,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::from_env()?;

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(config.log_level())
        .init();

    info!("🔧 Repair Shop API");
    info!("================================================");
    info!("Entorno: {}", config.environment);

    // Inicializar base de datos
    let db_config = DatabaseConfig::from_environment(&config);
    let db = match Database::connect(&db_config).await {
        Ok(db) => db,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    // Roles fijos, con los nombres configurados
    {
        let mut session = db.session().await?;
        let roles = RoleRepository::new(&mut session).seed(&config.roles).await?;
        info!("👥 {} roles registrados", roles.len());
    }

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let server_url = config.server_url();
    let app = create_router(AppState::new(db.clone(), config));

    info!("🌐 Servidor iniciando en http://{}", server_url);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("   POST /auth/signin - Autenticación");
    info!("   GET  /auth/me - Usuario actual");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Error del servidor: {}", e);
    }

    db.close().await;
    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("No se pudo instalar el handler de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("No se pudo instalar el handler de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
