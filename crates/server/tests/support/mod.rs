use std::net::SocketAddr;

use configs::DatabaseConfig;
use tokio::net::TcpListener;

pub struct TestApp {
    pub base_url: String,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Real router over a private in-memory SQLite database on an ephemeral port.
pub async fn start_server() -> anyhow::Result<TestApp> {
    start_server_with_seed(false).await
}

#[allow(dead_code)]
pub async fn start_server_with_seed(seed: bool) -> anyhow::Result<TestApp> {
    let app = server::startup::build_app(&DatabaseConfig::sqlite_memory(), seed).await?;
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .build()
        .expect("reqwest client")
}
