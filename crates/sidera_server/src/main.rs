use anyhow::Context;
use sidera_config::SideraConfig;
use sidera_server::{dispatch, split_url};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = SideraConfig::load().context("loading configuration")?;
    let addr = config.server.bind_addr();
    let server = tiny_http::Server::http(addr.as_str())
        .map_err(|e| anyhow::anyhow!("failed to bind {addr}: {e}"))?;
    tracing::info!(%addr, "sidera server listening");

    loop {
        let request = match server.recv() {
            Ok(request) => request,
            Err(e) => {
                tracing::warn!("recv error: {e}");
                continue;
            }
        };
        handle(request, &config);
    }
}

fn handle(request: tiny_http::Request, config: &SideraConfig) {
    let method = request.method().as_str().to_string();
    let url = request.url().to_string();
    let (path, query) = split_url(&url);

    let response = dispatch(&method, path, query, config);
    tracing::info!(%method, %path, status = response.status, "request");

    let mut out = tiny_http::Response::from_string(response.body)
        .with_status_code(response.status);
    if let Ok(header) =
        tiny_http::Header::from_bytes("Content-Type", response.content_type)
    {
        out = out.with_header(header);
    }
    for (name, value) in &response.headers {
        if let Ok(header) = tiny_http::Header::from_bytes(name.as_bytes(), value.as_bytes()) {
            out = out.with_header(header);
        }
    }

    if let Err(e) = request.respond(out) {
        tracing::warn!("respond error: {e}");
    }
}
