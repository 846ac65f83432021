mod api;
mod config;
mod models;
mod render;

use axum::{
    response::Redirect,
    routing::{get, get_service},
    Router,
};
use chrono::Utc;
use clap::Parser;
use std::net::SocketAddr;
use std::path::Path;
use tower_http::services::ServeDir;

use crate::api::fetch_leaderboard;
use crate::config::{load_config, AppConfig, DEFAULT_ENDPOINT};
use crate::render::{render_dashboard, render_error};

/// CLI arguments
#[derive(Parser)]
#[command(
    name = "downtime-board",
    about = "Validator downtime leaderboard page generator"
)]
struct Cli {
    /// Leaderboard API endpoint to fetch from
    #[arg(long)]
    endpoint: Option<String>,

    /// Directory the static bundle is written to
    #[arg(long)]
    output_dir: Option<String>,

    /// Serve the generated bundle after building it
    #[arg(long)]
    serve: bool,

    /// IP address to bind the preview server to
    #[arg(long)]
    listen_ip: Option<String>,

    /// Port to bind the preview server to
    #[arg(long)]
    port: Option<u16>,
}

fn write_bundle(dir: &Path, page: &str) -> std::io::Result<()> {
    std::fs::create_dir_all(dir)?;
    std::fs::write(dir.join("index.html"), page)?;
    std::fs::write(dir.join("styles.css"), include_str!("static/styles.css"))?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Cli::parse();
    let mut config: AppConfig = load_config()?;

    // CLI arguments override TOML config
    if let Some(endpoint) = args.endpoint {
        config.api.endpoint = Some(endpoint);
    }
    if let Some(dir) = args.output_dir {
        config.output.dir = Some(dir);
    }
    if let Some(ip) = args.listen_ip {
        config.server.listen_ip = Some(ip);
    }
    if let Some(port) = args.port {
        config.server.port = Some(port);
    }

    let endpoint = config
        .api
        .endpoint
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
    let out_dir = config.output.dir.unwrap_or_else(|| "site".to_string());
    let out_dir = Path::new(&out_dir);

    // One fetch, one render. A failed fetch still produces a page; it never
    // fails the build.
    let page = match fetch_leaderboard(&endpoint).await {
        Ok(board) => {
            println!(
                "[{}] Fetched {} validators from {}",
                Utc::now().to_rfc3339(),
                board.data.len(),
                endpoint
            );
            render_dashboard(&board)
        }
        Err(e) => {
            eprintln!(
                "[{}] Leaderboard fetch failed: {}",
                Utc::now().to_rfc3339(),
                e
            );
            render_error(&e)
        }
    };

    write_bundle(out_dir, &page)?;
    println!(
        "[{}] Wrote static bundle to {}",
        Utc::now().to_rfc3339(),
        out_dir.display()
    );

    if args.serve {
        // Mirror the published layout: the bundle lives under the same
        // sub-path prefix the static host uses.
        let app = Router::new()
            .route(
                "/",
                get(|| async { Redirect::to("/downtime-board/index.html") }),
            )
            .nest_service(
                "/downtime-board",
                get_service(ServeDir::new(out_dir.to_path_buf())),
            );

        let ip = config
            .server
            .listen_ip
            .unwrap_or_else(|| "127.0.0.1".to_string());
        let port = config.server.port.unwrap_or(3000);
        let addr: SocketAddr = format!("{}:{}", ip, port).parse()?;

        println!("🚀 Preview running on http://{}", addr);
        axum::Server::bind(&addr)
            .serve(app.into_make_service())
            .await?;
    }

    Ok(())
}
