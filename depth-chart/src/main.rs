use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing::warn;

use depth_chart::chart::position_coverage;
use depth_chart::display::{print_coverage, print_depth_chart, write_depth_chart_to_file};
use depth_chart::export::export_depth_chart_to_csv;
use depth_chart::{telemetry, web, ApiConfig, DepthChartSession, HttpRosterApi};

#[derive(Parser)]
#[command(name = "depth-chart", version, about = "Depth charts for amateur baseball rosters")]
struct Cli {
    /// Base URL of the roster service
    #[arg(long, env = "ROSTER_API_URL", default_value = "http://localhost:3000", global = true)]
    api_url: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 10, global = true)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print a team's depth chart
    Show {
        #[arg(long)]
        team: String,
        /// Also write the chart to this file
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Export a team's depth chart as CSV
    Export {
        #[arg(long)]
        team: String,
        #[arg(long, default_value = "depth_chart.csv")]
        out: PathBuf,
    },
    /// Print player counts and allocation per position
    Coverage {
        #[arg(long)]
        team: String,
    },
    /// Run the depth chart web API
    Serve {
        #[arg(long, env = "PORT", default_value_t = 8080)]
        port: u16,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    telemetry::init_tracing();
    let cli = Cli::parse();

    let config = ApiConfig::new(&cli.api_url)?.with_timeout(Duration::from_secs(cli.timeout_secs));
    let api = HttpRosterApi::new(config)?;

    match cli.command {
        Command::Serve { port } => {
            println!("Starting web server on port {}...", port);
            println!("Roster service: {}", api.config().base_url);
            web::start_server(port, Arc::new(api)).await?;
        }
        Command::Show { team, output } => {
            let session = DepthChartSession::load(&api, &team).await;
            if let Some(error) = session.roster_error() {
                warn!(team_id = %team, "{}", error);
                eprintln!("⚠️  {}", error);
            }
            let title = format!("Depth Chart: team {}", team);
            print_depth_chart(&title, session.lists());
            if let Some(output) = output {
                write_depth_chart_to_file(&title, session.lists(), &output.to_string_lossy())?;
                println!("Depth chart saved to {}", output.display());
            }
        }
        Command::Export { team, out } => {
            let session = DepthChartSession::load(&api, &team).await;
            if let Some(error) = session.roster_error() {
                return Err(error.into());
            }
            export_depth_chart_to_csv(session.lists(), &out)?;
            println!("Exported depth chart for team {} to {}", team, out.display());
        }
        Command::Coverage { team } => {
            let session = DepthChartSession::load(&api, &team).await;
            if let Some(error) = session.roster_error() {
                return Err(error.into());
            }
            print_coverage(&position_coverage(session.roster()));
        }
    }

    Ok(())
}
