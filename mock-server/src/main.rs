use mock_server::MockState;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("127.0.0.1:{port}");

    let mut state = MockState::new();
    if let Ok(token) = std::env::var("MOCK_REQUIRED_TOKEN") {
        state = state.with_required_token(token);
    }

    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "serving /xmlapi2/{{command}}");
    mock_server::run(listener, state).await
}
