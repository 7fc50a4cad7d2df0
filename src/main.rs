mod api;
mod core;
mod error;
mod infra;
mod models;

use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::infra::config::Config;
use crate::infra::groq::GroqClient;

pub mod ax_state {
    use crate::infra::groq::CompletionClient;
    use std::path::PathBuf;
    use std::sync::Arc;

    pub struct AppState {
        pub faq_path: PathBuf,
        pub client: Arc<dyn CompletionClient>,
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;
    debug!("配置加载完成: {:?}", config);
    if config.completion_timeout.is_none() {
        info!("未设置 COMPLETION_TIMEOUT_SECS，补全调用不设超时");
    }

    // 客户端在入口处显式构造后注入，生命周期由进程持有
    let client = GroqClient::new(&config)?;
    let state = Arc::new(ax_state::AppState {
        faq_path: config.faq_path.clone(),
        client: Arc::new(client),
    });

    let app = api::router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("🚀 FAQ Chat Backend 运行在 http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("无法监听 Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("无法监听 SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::warn!("收到退出信号，开始优雅关闭");
}
