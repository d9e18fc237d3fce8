mod html_output;
mod output;

use anyhow::{bail, Result};
use bookmakers_api::{pipeline, sort, Client, SortMode, Tab, TabSet};
use clap::Parser;
use url::Url;

use crate::html_output::HtmlRenderer;
use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "bookmakers")]
#[command(about = "Render the bookmakers board from a JSON data source")]
struct Cli {
    /// Base URL the data source is served under (env: BOOKMAKERS_URL)
    #[arg(long)]
    source: Option<String>,

    /// Sort mode: byuser, byeditors, bybonus, bysubrating
    #[arg(long, default_value = "byuser")]
    sort: String,

    /// Sub-rating for --sort bysubrating (currently: reliability)
    #[arg(long)]
    id: Option<String>,

    /// Tab-style href to take the sort parameters from instead,
    /// resolved against --source (e.g. "?type=bysubrating&id=reliability")
    #[arg(long, conflicts_with_all = ["sort", "id"])]
    tab: Option<String>,

    /// Output format: html, table, or json
    #[arg(long, default_value = "html")]
    output: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("bookmakers_api=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let source = match cli.source.or_else(|| std::env::var("BOOKMAKERS_URL").ok()) {
        Some(source) => source,
        None => bail!("no data source given: pass --source or set BOOKMAKERS_URL"),
    };

    let format = match cli.output.as_str() {
        "table" => OutputFormat::Table,
        "json" => OutputFormat::Json,
        _ => OutputFormat::Html,
    };

    let mode = match &cli.tab {
        Some(href) => {
            let base = Url::parse(&source)?;
            let mut tabs = TabSet::new(base, vec![Tab::new(href.clone())]);
            tabs.activate(0).unwrap_or_default()
        }
        None => SortMode::from_params(Some(cli.sort.as_str()), cli.id.as_deref()),
    };

    let client = Client::with_base_url(&source);

    match format {
        OutputFormat::Html => {
            let mut renderer = HtmlRenderer::new();
            pipeline::load(&client, mode, &mut renderer).await;
            println!("{}", renderer.container().contents());
        }
        OutputFormat::Table => {
            let entries = sort::sorted(&client.get_bookmakers().await?, mode);
            output::print_bookmakers_table(&entries);
        }
        OutputFormat::Json => {
            let entries = sort::sorted(&client.get_bookmakers().await?, mode);
            output::print_json(&entries);
        }
    }

    Ok(())
}
