use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use jet_directory::{config::Settings, seed};

mod api;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let settings = Settings::from_env().context("fail to load settings")?;

    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(settings.log_level)
        .with_ansi(true)
        .with_file(false)
        .pretty()
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("fail to setup logging")?;

    // built once, read by every worker, never mutated
    let catalog = seed::catalog().context("fail to build operator catalog")?;
    tracing::info!(
        operators = catalog.list_operators().len(),
        "operator catalog loaded"
    );
    let state = web::Data::new(api::ApiState::new(catalog, settings.asset_base.clone()));

    let origin = settings.cors_origin.clone();
    tracing::info!("listening on {}", settings.bind);
    HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allowed_origin(&origin)
                    .allow_any_method()
                    .allow_any_header(),
            )
            .app_data(state.clone())
            .configure(api::routes)
    })
    .bind(settings.bind.as_str())
    .with_context(|| format!("fail to bind {}", settings.bind))?
    .run()
    .await?;
    Ok(())
}
