mod error;
mod pipeline;


use clap::{Parser, ValueEnum};
use tracing::info;

use roster_core::RosterConfig;
use roster_publish::DashboardClient;
use roster_schedule::SheetValuesClient;
use roster_status::TicketingClient;

use crate::pipeline::Reconciler;

#[derive(Parser)]
#[command(
    name = "rosterboard",
    about = "Reconcile the agent schedule sheet with live availability and publish it to the dashboard",
    version
)]
struct Cli {
    /// Maintenance directive instead of a normal run
    directive: Option<Directive>,

    #[command(flatten)]
    config: ConfigArgs,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Directive {
    /// Delete the published dataset and exit without reconciling
    Reset,
}

/// All run configuration, flag-or-environment sourced.  Collected into a
/// [`RosterConfig`] before any component is constructed.
#[derive(clap::Args)]
struct ConfigArgs {
    /// Name of the dashboard dataset to publish
    #[arg(long, env = "ROSTER_DATASET_NAME", default_value = "agents.active_groups")]
    dataset_name: String,

    /// Dashboard API base URL
    #[arg(long, env = "ROSTER_DASHBOARD_URL", default_value = "https://api.geckoboard.com")]
    dashboard_url: String,

    /// Dashboard API key
    #[arg(long, env = "ROSTER_DASHBOARD_API_KEY")]
    dashboard_api_key: String,

    /// Spreadsheet values API base URL
    #[arg(long, env = "ROSTER_SHEET_URL", default_value = "https://sheets.googleapis.com")]
    sheet_url: String,

    /// Spreadsheet document id holding the schedule
    #[arg(long, env = "ROSTER_SHEET_ID")]
    sheet_id: String,

    /// Spreadsheet API key
    #[arg(long, env = "ROSTER_SHEET_API_KEY")]
    sheet_api_key: String,

    /// Named range containing the time-axis row
    #[arg(long, env = "ROSTER_TIMELINE_RANGE", default_value = "ScheduleTimeline")]
    timeline_range: String,

    /// Named range containing the agent schedule rows
    #[arg(long, env = "ROSTER_SCHEDULES_RANGE", default_value = "AgentSchedules")]
    schedules_range: String,

    /// Ticketing platform API base URL
    #[arg(long, env = "ROSTER_TICKETING_URL")]
    ticketing_url: String,

    /// Ticketing API login email
    #[arg(long, env = "ROSTER_TICKETING_EMAIL")]
    ticketing_email: String,

    /// Ticketing API token
    #[arg(long, env = "ROSTER_TICKETING_TOKEN")]
    ticketing_token: String,

    /// Directory role filter for agents
    #[arg(long, env = "ROSTER_AGENT_ROLE", default_value = "agent")]
    agent_role: String,

    /// Schedule sheet timezone, as minutes east of UTC (e.g. -300 for UTC-5)
    #[arg(long, env = "ROSTER_UTC_OFFSET_MINUTES", default_value_t = 0, allow_hyphen_values = true)]
    utc_offset_minutes: i32,

    /// HTTP timeout applied to every outbound call, in seconds
    #[arg(long, env = "ROSTER_HTTP_TIMEOUT_SECS", default_value_t = 30)]
    http_timeout_secs: u64,

    /// Log the full merged dataset before publishing
    #[arg(long, env = "ROSTER_DEBUG")]
    debug: bool,
}

impl ConfigArgs {
    fn into_config(self) -> RosterConfig {
        RosterConfig {
            dataset_name: self.dataset_name,
            dashboard_base_url: self.dashboard_url,
            dashboard_api_key: self.dashboard_api_key,
            sheet_base_url: self.sheet_url,
            sheet_id: self.sheet_id,
            sheet_api_key: self.sheet_api_key,
            timeline_range: self.timeline_range,
            schedules_range: self.schedules_range,
            ticketing_base_url: self.ticketing_url,
            ticketing_email: self.ticketing_email,
            ticketing_token: self.ticketing_token,
            agent_role: self.agent_role,
            utc_offset_minutes: self.utc_offset_minutes,
            http_timeout_secs: self.http_timeout_secs,
            debug: self.debug,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.config.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .init();

    if let Err(err) = run(cli) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.config.into_config();

    let source = SheetValuesClient::new(&config);
    let provider = TicketingClient::new(&config);
    let publisher = DashboardClient::new(&config);
    let reconciler = Reconciler::new(&config, source, provider, publisher)?;

    match cli.directive {
        Some(Directive::Reset) => reconciler.reset()?,
        None => {
            info!(dataset = %config.dataset_name, "reconciling schedule");
            reconciler.run()?;
        }
    }
    Ok(())
}
