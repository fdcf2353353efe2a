use std::net::SocketAddr;

use image_studio::{api, config, openai};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    image_studio::init_tracing();

    config::Config::dotenv_load();
    let config = config::Config::new()?;
    config.log_summary();

    let client = openai::OpenAIClient::from_config(&config);
    let app = api::routes::build_router(api::routes::AppState { client });

    let ip: std::net::IpAddr = config.api_host.parse().unwrap_or_else(|_| {
        tracing::warn!("Invalid API_HOST '{}', falling back to 127.0.0.1", config.api_host);
        std::net::IpAddr::from([127, 0, 0, 1])
    });
    let port: u16 = config.api_port.parse().unwrap_or_else(|_| {
        tracing::warn!("Invalid API_PORT '{}', falling back to 8501", config.api_port);
        8501
    });
    let socket_address = SocketAddr::new(ip, port);
    tracing::info!("listening on {}", socket_address);
    axum::Server::bind(&socket_address)
        .serve(app.into_make_service())
        .await?;
    Ok(())
}
