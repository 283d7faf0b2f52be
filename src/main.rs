use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use reeltune::config::RunProfile;
use std::path::PathBuf;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

use reports::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON run profile; explicit flags override its values.
    #[arg(global = true, long)]
    params: Option<PathBuf>,

    #[arg(global = true, long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check a spec file and list every problem found.
    Validate(cmd::validate::ValidateArgs),
    /// Play a single spin.
    Spin(cmd::spin::SpinArgs),
    /// Measure RTP, hit rate and volatility over many spins.
    Simulate(cmd::simulate::SimulateArgs),
    /// Reorder reel strips toward a target RTP / volatility.
    Optimize(cmd::optimize::OptimizeArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let mut profile = match &cli.params {
        Some(path) => {
            info!("⚙️  Loading run profile: {}", path.display());
            RunProfile::load_from_file(path).unwrap_or_else(|e| {
                error!("{}", e);
                process::exit(1);
            })
        }
        None => RunProfile::default(),
    };

    // Flags typed on the command line win over the profile.
    let Some((_, sub_matches)) = matches.subcommand() else {
        error!("No subcommand given");
        process::exit(2);
    };

    let result = match &cli.command {
        Commands::Validate(args) => cmd::validate::run(args, cli.format),
        Commands::Spin(args) => {
            profile.spin.merge_from_cli(&args.params, sub_matches);
            cmd::spin::run(args, &profile.spin, cli.format)
        }
        Commands::Simulate(args) => {
            profile.simulate.merge_from_cli(&args.params, sub_matches);
            cmd::simulate::run(args, &profile.simulate, cli.format)
        }
        Commands::Optimize(args) => {
            profile.optimize.merge_from_cli(&args.params, sub_matches);
            cmd::optimize::run(args, &profile.optimize, cli.format)
        }
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
