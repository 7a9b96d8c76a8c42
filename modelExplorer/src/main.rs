use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};

use franchise_explorer::analysis::reporting;
use franchise_explorer::analysis::summary::summarize;
use franchise_explorer::cli::cli::Args;
use franchise_explorer::config::explorer_config::ExplorerConfig;
use franchise_explorer::config::parameter_set::{self, ParameterSet};
use franchise_explorer::core::evaluation::Evaluation;
use franchise_explorer::core::explorer::{Explorer, ParameterChange};
use franchise_explorer::core::sweep::{self, SweepSpec};
use franchise_explorer::utils::csv_export::CurveExporter;
use franchise_explorer::utils::logging::{self, FileIOType, OperationCategory};

fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_logging(args.enable_timing(), args.debug_logging())
        .context("failed to set up tracing subscriber")?;

    println!("Interactive Profitability Model");

    let config = ExplorerConfig {
        grid_points: args.grid_points(),
        fallback_span: args.fallback_span(),
        output_dir: args.output_dir().to_string(),
        ..ExplorerConfig::default()
    };
    config.validate().context("invalid explorer configuration")?;
    let params = initial_parameters(&args)?;

    if let Some(spec) = args.sweep() {
        run_sweep(&args, &config, &params, spec)?;
    } else {
        let mut explorer = Explorer::new(params, config)
            .context("parameters are outside the model's domain")?;
        report(&explorer);
        if args.show_equations() {
            reporting::print_model_equations();
        }
        if args.interactive() {
            run_interactive(&mut explorer)?;
        }
        export(&args, explorer.config(), explorer.evaluation())?;
    }

    logging::print_timing_report();
    Ok(())
}

fn initial_parameters(args: &Args) -> Result<ParameterSet> {
    let mut params = if let Some(path) = args.params() {
        let _timing = logging::start_timing("load_parameters",
            OperationCategory::FileIO { subcategory: FileIOType::ParameterLoad });
        parameter_set::load_parameters(path)
            .with_context(|| format!("failed to load parameters from {}", path.display()))?
    } else if args.random() {
        let mut rng = match args.seed() {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        ParameterSet::sample(&mut rng)
    } else {
        ParameterSet::default()
    };

    for (key, value) in args.overrides() {
        params = params
            .with(key, value)
            .with_context(|| format!("invalid value for --{}", key.as_str().replace('_', "-")))?;
    }

    info!(?params, "initial parameters");
    Ok(params)
}

fn report(explorer: &Explorer) {
    reporting::print_parameters(explorer.params());
    let summary = summarize(explorer.evaluation());
    reporting::print_evaluation_summary(&summary, explorer.config().fallback_span);
}

fn run_interactive(explorer: &mut Explorer) -> Result<()> {
    println!("\nEnter changes as key=value or key+/-steps (e.g. delta=0.25, n+2).");
    println!("Commands: show, equations, reset, quit");

    let fallback_span = explorer.config().fallback_span;
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let command = line.trim();

        match command {
            "" => continue,
            "quit" | "q" | "exit" => break,
            "show" => report(explorer),
            "equations" => reporting::print_model_equations(),
            "reset" => {
                explorer.reset()?;
                report(explorer);
            }
            _ => match command.parse::<ParameterChange>() {
                Ok(change) => match explorer.apply(change) {
                    Ok(evaluation) => {
                        let summary = summarize(evaluation);
                        reporting::print_evaluation_summary(&summary, fallback_span);
                    }
                    Err(e) => println!("Rejected: {}", e),
                },
                Err(e) => println!("{}", e),
            },
        }
    }

    info!(passes = explorer.passes(), "interactive session finished");
    Ok(())
}

fn run_sweep(args: &Args, config: &ExplorerConfig, params: &ParameterSet, spec: &SweepSpec) -> Result<()> {
    let values = spec.values();

    let progress = if args.progress() {
        let bar = ProgressBar::new(values.len() as u64);
        match ProgressStyle::with_template("{bar:40} {pos}/{len} passes") {
            Ok(style) => bar.set_style(style),
            Err(e) => warn!("progress template rejected: {}", e),
        }
        Some(bar)
    } else {
        None
    };

    let points = sweep::sweep(params, spec.key, &values, config, progress.as_ref())
        .with_context(|| format!("sweep {} failed", spec))?;
    if let Some(bar) = progress {
        bar.finish_and_clear();
    }

    reporting::print_sweep(&points);

    if args.export_csv() {
        let exporter = CurveExporter::new(config.output_dir.as_str(), true)?;
        let path = exporter.export_sweep(&points)?;
        println!("Sweep exported to {}", path.display());
    }
    Ok(())
}

fn export(args: &Args, config: &ExplorerConfig, evaluation: &Evaluation) -> Result<()> {
    if !args.export_csv() && !args.export_json() {
        return Ok(());
    }

    let exporter = CurveExporter::new(config.output_dir.as_str(), true)?;
    if args.export_csv() {
        exporter.export_evaluation(evaluation)?;
    }
    if args.export_json() {
        exporter.export_json(evaluation)?;
    }
    println!("Results exported to {}", exporter.output_dir().display());
    Ok(())
}
