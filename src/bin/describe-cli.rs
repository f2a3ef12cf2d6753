use clap::Parser;
use reqwest::{Method, StatusCode};

use route_describer::describe::RouteList;

#[derive(Parser)]
#[command(name = "describe-cli")]
#[command(about = "List the routes a self-describing server exposes", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    /// Scope to describe.
    #[arg(default_value = "/")]
    path: String,

    /// Print the response body as returned.
    #[arg(long)]
    raw: bool,
}

#[derive(Debug, thiserror::Error)]
#[error("{target} returned status {status}")]
struct StatusError {
    target: String,
    status: StatusCode,
}

fn ensure_success(target: &str, status: StatusCode) -> Result<(), StatusError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(StatusError {
            target: target.to_string(),
            status,
        })
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let target = format!("{}{}", cli.url.trim_end_matches('/'), cli.path);
    let res = client.request(Method::OPTIONS, &target).send().await?;

    if let Err(e) = ensure_success(&target, res.status()) {
        if let Ok(text) = res.text().await {
            if !text.is_empty() {
                eprintln!("Response: {}", text);
            }
        }
        return Err(e.into());
    }

    if cli.raw {
        println!("{}", res.text().await?);
        return Ok(());
    }

    let mut routes: RouteList = res.json().await?;
    routes.sort_by_path();
    print_table(&routes);
    Ok(())
}

fn print_table(routes: &RouteList) {
    let width = routes
        .iter()
        .map(|r| r.method.len())
        .max()
        .unwrap_or(0)
        .max("METHOD".len());

    println!("{:<width$}  URI", "METHOD", width = width);
    for route in routes {
        match &route.description {
            Some(text) => println!("{:<width$}  {}  # {}", route.method, route.path, text, width = width),
            None => println!("{:<width$}  {}", route.method, route.path, width = width),
        }
    }
}
