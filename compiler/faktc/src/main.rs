//! Fakt pipeline CLI.
//!
//! Not a compiler-plugin host binding (that glue is out of scope, spec
//! §1) — `generate` drives the orchestrator over the canned sample
//! compilation in [`faktc::demo`], exercising the full pipeline the way
//! a real host binding's per-declaration callback would.

use faktc::telemetry::TelemetryLevel;
use faktc::{demo, DeclarationOutcome, Orchestrator};

struct GenerateArgs {
    context: String,
    jobs: usize,
    telemetry_level: TelemetryLevel,
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "generate" => run_generate(&args[2..]),
        "help" | "--help" | "-h" => print_usage(),
        "version" | "--version" => println!("faktc 0.1.0-alpha.1"),
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Fakt fake-generation pipeline");
    println!();
    println!("Usage: faktc generate --context <base64> [options]");
    println!();
    println!("Options:");
    println!("  --context <base64>         base64(JSON) sourceSetContext routing record (required)");
    println!("  --jobs <n>                 number of worker threads to fan declarations across (default: 1)");
    println!("  --telemetry-level <level>  quiet | normal | verbose (default: normal)");
    println!();
    println!("  help, --help, -h           show this help message");
    println!("  version, --version         show version information");
}

fn parse_generate_args(args: &[String]) -> GenerateArgs {
    let mut context = None;
    let mut jobs = 1usize;
    let mut telemetry_level = TelemetryLevel::Normal;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--context" => context = iter.next().cloned(),
            "--jobs" => {
                let Some(value) = iter.next() else {
                    eprintln!("--jobs requires a value");
                    std::process::exit(1);
                };
                jobs = value.parse().unwrap_or_else(|_| {
                    eprintln!("--jobs expects a positive integer, got '{value}'");
                    std::process::exit(1);
                });
            }
            "--telemetry-level" => {
                let Some(value) = iter.next() else {
                    eprintln!("--telemetry-level requires a value");
                    std::process::exit(1);
                };
                telemetry_level = TelemetryLevel::parse(value).unwrap_or_else(|| {
                    eprintln!("--telemetry-level expects quiet, normal, or verbose, got '{value}'");
                    std::process::exit(1);
                });
            }
            other => {
                eprintln!("Unknown option: {other}");
                std::process::exit(1);
            }
        }
    }

    let Some(context) = context else {
        eprintln!("Usage: faktc generate --context <base64> [options]");
        std::process::exit(1);
    };

    GenerateArgs { context, jobs, telemetry_level }
}

fn run_generate(raw_args: &[String]) {
    let args = parse_generate_args(raw_args);
    faktc::tracing_setup::init();

    let routing = match faktc::decode_routing_record(&args.context) {
        Ok(routing) => routing,
        Err(error) => {
            eprintln!("error: malformed routing record: {error}");
            std::process::exit(1);
        }
    };

    let orchestrator = match Orchestrator::new(&routing) {
        Ok(orchestrator) => orchestrator,
        Err(error) => {
            eprintln!("error: {error}");
            std::process::exit(1);
        }
    };

    let source = demo::sample_compilation();
    let handles = source.all_declared();

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(args.jobs.max(1))
        .build()
        .unwrap_or_else(|error| {
            eprintln!("error: failed to build worker pool: {error}");
            std::process::exit(1);
        });

    pool.install(|| {
        use rayon::prelude::*;
        handles.par_iter().for_each(|&decl| {
            let outcome = orchestrator.process(&source, &source, decl);
            report_outcome(&source, decl, &outcome);
        });
    });

    println!("{}", orchestrator.telemetry().report(args.telemetry_level));
}

fn report_outcome(source: &fakt_fixtures::FixtureSource, decl: fakt_ir::DeclHandle, outcome: &DeclarationOutcome) {
    use fakt_ir::DeclarationSource as _;
    match outcome {
        DeclarationOutcome::Rejected(diagnostic) => {
            eprintln!("{}: {}", source.qualified_id(decl), diagnostic.rendered());
        }
        DeclarationOutcome::Internal(error) => {
            eprintln!("{}: internal error: {error}", source.qualified_id(decl));
        }
        DeclarationOutcome::Io { qualified_id, error } => {
            eprintln!("{qualified_id}: failed to write generated file: {error}");
        }
        DeclarationOutcome::Generated { .. } | DeclarationOutcome::CacheHit => {}
    }
}
