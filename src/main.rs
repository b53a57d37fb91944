use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use evensplit::{
    api::{self, GroupStore},
    config::Config,
    logging::init_logging,
};
use tracing::info;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let config = Config::from_env().map_err(std::io::Error::other)?;
    init_logging(config.log_format, &config.log_level);

    let store = web::Data::new(GroupStore::new());
    info!(host = %config.host, port = config.port, "starting evensplit");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .app_data(store.clone())
            .configure(api::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
