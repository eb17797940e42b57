use std::io;
use std::net::TcpListener;

use actix_web::dev::Server;
use actix_web::http::Method;
use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

use crate::configuration::Settings;
use crate::integrations::Integrations;
use crate::routes::{health_check, preflight, submit_contact, subscribe};

// Application struct representing the running application.
pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(configuration: Settings) -> Result<Self, anyhow::Error> {
        let integrations = Integrations::from_settings(&configuration)?;

        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener = TcpListener::bind(address)?;
        let port = listener.local_addr()?.port();
        let server = run(listener, integrations)?;

        Ok(Self { port, server })
    }

    /// Get the port that the application is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> Result<(), io::Error> {
        self.server.await
    }
}

/// Run the HTTP server.
/// # Arguments
/// * `listener` - A TcpListener for incoming connections.
/// * `integrations` - The email sender and record store available to the handlers.
/// # Returns
/// A Result containing the Server or an io::Error.
pub fn run(listener: TcpListener, integrations: Integrations) -> Result<Server, io::Error> {
    let integrations = web::Data::new(integrations);
    let server = HttpServer::new(move || {
        App::new()
            // Middleware logger
            .wrap(TracingLogger::default())
            .route("/health_check", web::get().to(health_check))
            .service(
                web::scope("/api")
                    .service(
                        web::resource("/contact")
                            .route(web::post().to(submit_contact))
                            .route(web::method(Method::OPTIONS).to(preflight)),
                    )
                    .service(
                        web::resource("/newsletter")
                            .route(web::post().to(subscribe))
                            .route(web::method(Method::OPTIONS).to(preflight)),
                    ),
            )
            .app_data(integrations.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
