//! src/startup.rs
use crate::configuration::Settings;
use crate::routes::{
    get_email_config, get_email_templates, health_check, json_error_handler,
    update_email_config, update_email_templates,
};
use crate::store::{SettingsStore, StoredEmailConfig};
use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run(self) -> std::io::Result<()> {
        self.server.await
    }
}

pub fn build(config: Settings) -> Result<Application, std::io::Error> {
    let tcp_listener = TcpListener::bind(config.application.address())?;
    let port = tcp_listener.local_addr()?.port();

    let email_config = match config.email {
        Some(seed) => {
            tracing::info!(provider = %seed.provider, "Seeding email configuration from environment");
            StoredEmailConfig::from(seed)
        }
        None => StoredEmailConfig::default(),
    };
    let store = SettingsStore::new(email_config);

    let server = run(tcp_listener, store)?;

    Ok(Application { port, server })
}

pub fn run(listener: TcpListener, store: SettingsStore) -> Result<Server, std::io::Error> {
    let store = web::Data::new(store);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/health_check", web::get().to(health_check))
            .service(
                web::scope("/system")
                    .route("/email-config", web::get().to(get_email_config))
                    .route("/email-config", web::put().to(update_email_config))
                    .route("/email-templates", web::get().to(get_email_templates))
                    .route("/email-templates", web::put().to(update_email_templates)),
            )
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(store.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
