use dotenv::dotenv;
use env_logger::Env;
use log::error;

use liveness_server::config::Config;
use liveness_server::errors::StartupError;
use liveness_server::server;

#[actix_web::main]
async fn main() {
    dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    if let Err(err) = run().await {
        error!("startup failed: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StartupError> {
    let config = Config::from_env()?;
    server::run(config).await
}
