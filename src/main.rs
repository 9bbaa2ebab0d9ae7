//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `seo_kit` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use seo_kit::audit::{audit_html, audit_text, AuditReport};
use seo_kit::config::{AuditCommand, Cli, Command, DensityCommand, FitCommand, MetaCommand};
use seo_kit::initialization::init_logger_with;
use seo_kit::input::read_input;
use seo_kit::keywords::{analyze_all, by_category, catalog, classify, generate_variations};
use seo_kit::meta::{generate, render_head, Language, PageMetaRequest};
use seo_kit::parse::extract_page_text;
use seo_kit::{fit_with_outcome, SiteConfig};

fn main() -> Result<()> {
    // A missing .env is normal; SEO_KIT_BASE_URL may come from the real environment
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("Warning: ignoring unreadable .env file: {}", e);
        }
    }

    let cli = Cli::parse();
    init_logger_with(cli.log_level.clone().into(), cli.log_format.clone())
        .context("Failed to initialize logger")?;

    if let Err(e) = run(cli.command) {
        eprintln!("seo_kit error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Fit(cmd) => run_fit(&cmd),
        Command::Density(cmd) => run_density(&cmd),
        Command::Variations { keyword } => {
            for variation in generate_variations(&keyword) {
                println!("{}", variation);
            }
            Ok(())
        }
        Command::Audit(cmd) => run_audit(&cmd),
        Command::Meta(cmd) => run_meta(&cmd),
        Command::Keywords { category } => {
            let entries = match category {
                Some(category) => by_category(category),
                None => catalog().to_vec(),
            };
            for entry in entries {
                println!("{}\t{}", entry.category, entry.phrase);
            }
            Ok(())
        }
    }
}

fn run_fit(cmd: &FitCommand) -> Result<()> {
    let band = cmd.band().context("Invalid length band")?;
    let (fitted, outcome) = fit_with_outcome(&cmd.text, band, cmd.suffix())?;
    log::info!(
        "{} to {} chars (band {}..={})",
        outcome,
        fitted.chars().count(),
        band.min,
        band.max
    );
    println!("{}", fitted);
    Ok(())
}

fn run_density(cmd: &DensityCommand) -> Result<()> {
    let raw = read_input(&cmd.input)?;
    let text = if cmd.html {
        extract_page_text(&raw).body_text
    } else {
        raw
    };

    for result in analyze_all(&text, cmd.keywords.as_slice()) {
        if cmd.json {
            println!(
                "{}",
                serde_json::to_string(&result).context("Failed to serialize density result")?
            );
        } else {
            println!(
                "{}\t{}\t{:.2}\t{}",
                result.keyword,
                result.count,
                result.density,
                classify(result.density)
            );
        }
    }
    Ok(())
}

fn run_audit(cmd: &AuditCommand) -> Result<()> {
    let raw = read_input(&cmd.input)?;
    let report = if cmd.html {
        audit_html(&raw, catalog())
    } else {
        audit_text(&raw, catalog())
    };

    if cmd.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to serialize audit report")?
        );
    } else {
        print_audit(&report);
    }
    log::info!(
        "Audit finished: {} words, {} warnings",
        report.word_count,
        report.warning_total()
    );
    Ok(())
}

fn print_audit(report: &AuditReport) {
    println!("Words: {}", report.word_count);
    for (label, check) in [("Title", &report.title), ("Description", &report.description)] {
        if let Some(check) = check {
            println!(
                "{}: {} chars (band {}..={}){}",
                label,
                check.length,
                check.band.min,
                check.band.max,
                if check.within_band { "" } else { " OUT OF BAND" }
            );
        }
    }
    if let Some(canonical) = &report.canonical {
        println!("Canonical: {}", canonical);
    }
    if !report.schema_types.is_empty() {
        println!("Structured data: {}", report.schema_types.join(", "));
    }
    println!();
    for keyword in &report.keywords {
        println!(
            "{:<40} {:>4} {:>7.2}% {}",
            keyword.keyword, keyword.count, keyword.density, keyword.rating
        );
    }
    if !report.warnings.is_empty() {
        println!();
        for warning in &report.warnings {
            println!("⚠️  {}: {}", warning.warning, warning.count);
        }
    }
}

fn run_meta(cmd: &MetaCommand) -> Result<()> {
    let language = Language::from_code(&cmd.lang)?;
    let site = SiteConfig {
        base_url: cmd.base_url.clone(),
        ..SiteConfig::default()
    };

    let mut request = PageMetaRequest::new(cmd.page, language);
    if let Some(path) = &cmd.path {
        request = request.with_path(path.as_str());
    }
    if let Some(title) = &cmd.title {
        request = request.with_title(title.as_str());
    }
    if let Some(description) = &cmd.description {
        request = request.with_description(description.as_str());
    }

    let meta = generate(&request, &site)
        .with_context(|| format!("Failed to generate metadata for {} page", cmd.page))?;
    if cmd.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&meta).context("Failed to serialize metadata")?
        );
    } else {
        println!("{}", render_head(&meta));
    }
    Ok(())
}
