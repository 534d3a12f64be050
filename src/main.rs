mod cli;

use clap::Parser;
use riskcycle::aggregate::{self, validate_groups};
use riskcycle::config;
use riskcycle::cyclic;
use riskcycle::error::RiskError;
use riskcycle::generate::DatasetGenerator;
use riskcycle::input::{read_json, write_json};
use riskcycle::records::{self, ObservationRecord};
use riskcycle::report::{self, OutputFormat};
use riskcycle::types::config::RiskConfig;
use riskcycle::types::scoring::{Group, GroupMean, ScoreBounds};
use riskcycle::wealth::{self, WealthRecord};
use std::collections::HashMap;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const REJECTED_INPUT: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn resolve_bounds(cfg: &RiskConfig, args: &cli::BoundsArgs) -> Result<ScoreBounds, RiskError> {
    let configured = cfg.bounds()?;
    ScoreBounds::new(
        args.low.unwrap_or(configured.low),
        args.high.unwrap_or(configured.high),
    )
}

fn output_format(format: &cli::ReportFormat) -> OutputFormat {
    match format {
        cli::ReportFormat::Json => OutputFormat::Json,
        cli::ReportFormat::Md => OutputFormat::Md,
    }
}

fn run(cli: cli::Cli) -> Result<i32, RiskError> {
    info!("riskcycle v{}", env!("CARGO_PKG_VERSION"));
    let cfg = match config::load_config(&cli.config_root)? {
        Some(cfg) => cfg,
        None => {
            debug!(root = %cli.config_root.display(), "no riskcycle.toml, using defaults");
            RiskConfig::default()
        }
    };

    match cli.command {
        cli::Commands::Aggregate(cmd) => {
            let bounds = resolve_bounds(&cfg, &cmd.bounds)?;
            let groups: Vec<Group> = read_json(&cmd.path)?;
            if cmd.no_validate {
                warn!("observation validation disabled");
            } else {
                validate_groups(&groups, bounds)?;
            }

            let summary = aggregate::summarize(&groups, bounds);
            info!(
                groups = groups.len(),
                skipped = summary.skipped_groups,
                score = summary.score,
                "aggregated"
            );
            println!("{}", report::render(&summary, output_format(&cmd.format))?);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Means(cmd) => {
            let bounds = resolve_bounds(&cfg, &cmd.bounds)?;
            let means: Vec<GroupMean> = read_json(&cmd.path)?;
            let score = aggregate::aggregate_means(&means, bounds);
            println!("score: {score:.3}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Records(cmd) => {
            let bounds = resolve_bounds(&cfg, &cmd.bounds)?;
            let observations: Vec<ObservationRecord> = read_json(&cmd.path)?;
            let sizes = cmd
                .sizes
                .as_deref()
                .map(read_json::<HashMap<u32, u32>>)
                .transpose()?;

            let groups = records::group_records(&observations, sizes.as_ref())
                .into_iter()
                .map(|(group_id, group)| {
                    debug!(group_id, size = group.size, records = group.observations.len());
                    group
                })
                .collect::<Vec<_>>();
            validate_groups(&groups, bounds)?;

            let summary = aggregate::summarize(&groups, bounds);
            println!("{}", report::render(&summary, output_format(&cmd.format))?);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Encode(cmd) => {
            let point = cyclic::encode(cmd.hours)?;
            println!("sin: {:.6}", point.sin);
            println!("cos: {:.6}", point.cos);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Distance(cmd) => {
            let hours = cyclic::circular_distance(cmd.first, cmd.second)?;
            println!("{hours:.6}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Generate(cmd) => {
            let mut settings = cfg.generator_settings();
            if let Some(groups) = cmd.groups {
                settings.groups = groups;
            }
            if let Some(seed) = cmd.seed {
                settings.seed = seed;
            }
            let mut generator = DatasetGenerator::new(settings, cfg.bounds()?)?;
            let dataset = generator.dataset();

            match cmd.out {
                Some(path) => {
                    write_json(&path, &dataset.groups)?;
                    info!(groups = dataset.groups.len(), seed = dataset.seed, "dataset generated");
                    println!("dataset file: {}", path.display());
                }
                None => println!("{}", serde_json::to_string_pretty(&dataset)?),
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Wealth(cmd) => {
            let entries: Vec<WealthRecord> = read_json(&cmd.path)?;
            let top = cmd.top.unwrap_or_else(|| cfg.wealth_top());
            let ranked = wealth::rank_threats(&entries, &cfg.wealth_policy(), top);

            if ranked.is_empty() {
                println!("wealth: no records");
                return Ok(exit_code::SUCCESS);
            }
            println!("Top {} threat scores:", ranked.len());
            for entry in &ranked {
                println!("{}: threat score = {}", entry.name, entry.threat_score);
            }
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match run(cli) {
        Ok(code) => {
            if code != exit_code::SUCCESS {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            let code = if e.is_contract_violation() {
                exit_code::REJECTED_INPUT
            } else {
                exit_code::RUNTIME_FAILURE
            };
            std::process::exit(code);
        }
    }
}
