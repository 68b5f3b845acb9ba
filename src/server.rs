use actix_cors::Cors;
use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use log::info;
use sqlx::PgPool;

use crate::api;
use crate::config::Config;
use crate::db;
use crate::errors::StartupError;

/// Full bootstrap: the initialization phase (optional database connect),
/// then the listen phase, which is only entered on success.
pub async fn run(config: Config) -> Result<(), StartupError> {
    let pool = db::init(&config).await?;
    listen(config, pool).await
}

/// Builds the application with its middleware stages in order: JSON body
/// decoding, routes, then request logging and permissive CORS wrapped
/// around them. Shared between `main` and the integration tests.
pub fn build_app(
    pool: Option<PgPool>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new().app_data(web::JsonConfig::default());
    let app = match pool {
        Some(pool) => app.app_data(web::Data::new(pool)),
        None => app,
    };

    app.configure(api::config)
        .wrap(Logger::default())
        .wrap(Cors::permissive())
}

/// Listen phase of startup. Only reached once initialization has succeeded.
pub async fn listen(config: Config, pool: Option<PgPool>) -> Result<(), StartupError> {
    let server = HttpServer::new(move || build_app(pool.clone()))
        .bind(("0.0.0.0", config.port))?
        .run();

    info!("Server is running at http://localhost:{}", config.port);

    server.await.map_err(StartupError::Serve)?;
    Ok(())
}
