// src/main.rs
use std::io::Read;

use clap::Parser;

use trialtext::concepts;
use trialtext::utils::{self, AppError};
use trialtext::Finding;

/// Command Line Interface for the tiered clinical statement finders
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Concept family to run (e.g. trial_registration); omit to run all
    #[arg(short, long)]
    concept: Option<String>,

    /// Tier to run: v1..v5, high_recall or high_precision
    #[arg(short, long, default_value = "v1")]
    tier: String,

    /// Input file; reads stdin when omitted
    #[arg(short, long)]
    input: Option<String>,

    /// Emit findings as JSON instead of tab-separated lines
    #[arg(long)]
    json: bool,

    /// List available concept families and exit
    #[arg(long)]
    list: bool,
}

#[derive(serde::Serialize)]
struct ConceptFindings<'a> {
    concept: &'a str,
    tier: &'a str,
    findings: Vec<Finding>,
}

fn read_input(path: Option<&str>) -> Result<String, AppError> {
    match path {
        Some(p) => Ok(std::fs::read_to_string(p)?),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::debug!("Starting with args: {:?}", args);

    if args.list {
        for family in concepts::registry() {
            println!("{}", family.concept);
        }
        return Ok(());
    }

    // 3. Resolve the families to run
    let families: Vec<_> = match &args.concept {
        Some(name) => {
            let family = concepts::family(name)
                .ok_or_else(|| AppError::Config(format!("unknown concept: {name}")))?;
            vec![family]
        }
        None => concepts::registry().to_vec(),
    };

    // 4. Read input text
    let text = read_input(args.input.as_deref())?;
    tracing::info!("Read {} bytes of input", text.len());

    // 5. Run the requested tier of each family
    let mut results = Vec::with_capacity(families.len());
    for family in families {
        let finder = family.get(&args.tier).ok_or_else(|| {
            AppError::Config(format!(
                "unknown tier {:?} (expected v1..v5, high_recall or high_precision)",
                args.tier
            ))
        })?;
        let findings = finder(&text);
        tracing::info!(
            "{}/{}: {} finding(s)",
            family.concept,
            args.tier,
            findings.len()
        );
        results.push(ConceptFindings {
            concept: family.concept,
            tier: &args.tier,
            findings,
        });
    }

    // 6. Emit to stdout (logs go to stderr)
    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        for result in &results {
            for f in &result.findings {
                println!(
                    "{}\t{}\t{}\t{}\t{}",
                    result.concept, result.tier, f.start_word, f.end_word, f.snippet
                );
            }
        }
    }

    Ok(())
}
