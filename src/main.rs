use inner_edit_forms::configuration::get_configuration;
use inner_edit_forms::startup::Application;
use inner_edit_forms::telemetry::{get_subscriber, init_subscriber};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("inner-edit-forms".into(), "info", std::io::stdout);
    init_subscriber(subscriber)?;

    let configuration = get_configuration()?;
    let application = Application::build(configuration).await?;
    tracing::info!(port = application.port(), "Form endpoints are listening");
    application.run_until_stopped().await?;
    Ok(())
}
