use clap::Parser;
use dnsv_domain::QueryType;
use std::ffi::OsString;
use tracing::debug;

mod bootstrap;
mod di;

const USAGE: &str = "Usage: dnsv <domain> <query>";

#[derive(Debug, Parser)]
#[command(name = "dnsv")]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Domain to trace
    #[arg(allow_hyphen_values = true)]
    domain: String,

    /// "NS" for a nameserver lookup, anything else for a host lookup
    #[arg(allow_hyphen_values = true)]
    query: String,
}

/// Exactly two raw arguments after the program name. They are counted
/// before clap sees them, so a `--` separator counts as one of the two.
fn parse_args<I, T>(args: I) -> Option<Cli>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    if args.len() != 3 {
        return None;
    }
    Cli::try_parse_from(args).ok()
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let Some(cli) = parse_args(std::env::args_os()) else {
        println!("{USAGE}");
        std::process::exit(1);
    };

    let config = bootstrap::load_config()?;
    bootstrap::init_logging(&config);

    println!("Starting DNS visualization...");

    let services = di::TraceServices::new(&config);
    let report = services
        .run_trace
        .execute(
            &cli.domain,
            QueryType::from(cli.query.as_str()),
            1,
            config.trace.initial_budget(),
        )
        .await;

    debug!(
        steps = report.steps,
        stop_reason = ?report.stop_reason,
        "Trace complete"
    );

    Ok(())
}
