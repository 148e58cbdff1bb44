use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use satgen_server::{app_state::AppState, config::Config, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            log::error!("failed to load configuration: {}", err);
            std::process::exit(1);
        }
    };

    let host = config.web_server_host.clone();
    let port = config.web_server_port;
    let state = AppState::new(config);

    log::info!("starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .service(handlers::index_page)
            .service(handlers::health_check)
            .service(handlers::get_subtests)
            .service(handlers::get_domains)
            .service(handlers::generate_question)
    })
    .bind((host, port))?
    .run()
    .await
}
