//! CLI entry point for the app market analytics pipeline.

use anyhow::{anyhow, Result};
use clap::Parser;
use market_analytics::{
    filter_apps, loader, Analytics, AnalyticsPipeline, FilterCriteria, PipelineConfig,
};
use std::path::Path;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "App market analytics over app-store CSV exports",
    long_about = "Cleans app and review CSV exports, then computes market analytics:\n\
                  category performance, market share, rating distribution, sentiment,\n\
                  correlations, and rule-based insights.\n\n\
                  EXAMPLES:\n  \
                  # Full analytics over both exports\n  \
                  market-analytics --apps googleplaystore.csv --reviews reviews.csv\n\n  \
                  # Only one category, machine-readable output\n  \
                  market-analytics --apps apps.csv --category GAME --json | jq .overview\n\n  \
                  # Save the full report next to the inputs\n  \
                  market-analytics --apps apps.csv --emit-report -o outputs/"
)]
struct Args {
    /// Path to the apps CSV export
    #[arg(long)]
    apps: String,

    /// Path to the user reviews CSV export
    ///
    /// Optional; without it, sentiment analytics are empty.
    #[arg(long)]
    reviews: Option<String>,

    /// Restrict analytics to one category (exact match)
    #[arg(long)]
    category: Option<String>,

    /// Minimum rating; unrated apps are excluded
    #[arg(long)]
    min_rating: Option<f64>,

    /// Restrict to one app type ("Free" or "Paid")
    #[arg(long = "type")]
    app_type: Option<String>,

    /// Restrict to one content rating (exact match)
    #[arg(long)]
    content_rating: Option<String>,

    /// Restrict to paid (true) or free (false) apps
    #[arg(long)]
    paid: Option<bool>,

    /// Number of entries in the top/low rated app lists
    #[arg(long, default_value = "10")]
    top_apps: usize,

    /// Output JSON to stdout instead of a human-readable summary
    ///
    /// Disables all logs; only the final JSON report reaches stdout.
    #[arg(long)]
    json: bool,

    /// Write the full JSON report to the output directory
    ///
    /// The report is saved as <apps_name>_analytics.json
    #[arg(short = 'r', long)]
    emit_report: bool,

    /// Output directory for reports
    #[arg(short, long, default_value = "./outputs")]
    output: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Suppress progress output (only show warnings and errors)
    #[arg(short, long)]
    quiet: bool,
}

/// Initialize the tracing subscriber for logging.
///
/// When `json_output` is true, logging is completely disabled to ensure
/// only JSON is written to stdout.
fn init_logging(level: &str, quiet: bool, json_output: bool) {
    if json_output {
        return;
    }

    use tracing_subscriber::EnvFilter;

    let effective_level = if quiet { "warn" } else { level };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(effective_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args.log_level, args.quiet, args.json);

    if !Path::new(&args.apps).exists() {
        return Err(anyhow!("Apps file not found: {}", args.apps));
    }
    if let Some(ref reviews) = args.reviews {
        if !Path::new(reviews).exists() {
            return Err(anyhow!("Reviews file not found: {}", reviews));
        }
    }

    info!("Loading apps from: {}", args.apps);
    let raw_apps = loader::load_app_rows(&args.apps)?;
    let raw_reviews = match args.reviews {
        Some(ref path) => {
            info!("Loading reviews from: {}", path);
            loader::load_review_rows(path)?
        }
        None => Vec::new(),
    };

    let config = PipelineConfig::builder().top_app_limit(args.top_apps).build()?;
    let pipeline = AnalyticsPipeline::new(config)?;

    let (apps, reviews) = pipeline.prepare(&raw_apps, &raw_reviews);

    let criteria = build_criteria(&args);
    let apps = if criteria.is_empty() {
        apps
    } else {
        let filtered = filter_apps(&apps, &criteria);
        info!("Filter matched {} of {} apps", filtered.len(), apps.len());
        filtered
    };

    let analytics = pipeline.analyze(&apps, &reviews)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&analytics)?);
        return Ok(());
    }

    if args.emit_report {
        let report_path = write_report(&analytics, &args)?;
        info!("Report written to: {}", report_path);
    }

    print_summary(&analytics);
    Ok(())
}

fn build_criteria(args: &Args) -> FilterCriteria {
    let mut criteria = FilterCriteria::new();
    if let Some(ref category) = args.category {
        criteria = criteria.category(category.clone());
    }
    if let Some(min_rating) = args.min_rating {
        criteria = criteria.min_rating(min_rating);
    }
    if let Some(ref app_type) = args.app_type {
        criteria = criteria.app_type(app_type.clone());
    }
    if let Some(ref content_rating) = args.content_rating {
        criteria = criteria.content_rating(content_rating.clone());
    }
    if let Some(paid) = args.paid {
        criteria = criteria.is_paid(paid);
    }
    criteria
}

/// Write the full JSON report as <apps_name>_analytics.json.
fn write_report(analytics: &Analytics, args: &Args) -> Result<String> {
    if !Path::new(&args.output).exists() {
        std::fs::create_dir_all(&args.output)?;
        info!("Created output directory: {}", args.output);
    }
    let stem = Path::new(&args.apps)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("analytics");
    let path = format!("{}/{}_analytics.json", args.output, stem);
    std::fs::write(&path, serde_json::to_string_pretty(analytics)?)?;
    Ok(path)
}

/// Print a human-readable summary of the analytics result.
///
/// This is the default output when `--json` is not specified; it uses
/// `println!` intentionally so it is visible regardless of log level.
fn print_summary(analytics: &Analytics) {
    let overview = &analytics.overview;

    println!();
    println!("{}", "=".repeat(80));
    println!("MARKET ANALYTICS");
    println!("{}", "=".repeat(80));
    println!();

    println!("OVERVIEW");
    println!("{}", "-".repeat(40));
    println!("  Apps: {}", overview.total_apps);
    println!(
        "  Rated: {} ({:.1}%)",
        overview.rated_apps, overview.rated_percentage
    );
    println!(
        "  Paid: {} ({:.1}%)",
        overview.paid_apps, overview.paid_percentage
    );
    println!(
        "  Popular: {} ({:.1}%)",
        overview.popular_apps, overview.popular_percentage
    );
    println!("  Total installs: {}", overview.total_installs);
    println!("  Average rating: {:.2}", overview.avg_rating);
    println!();

    println!("TOP CATEGORIES");
    println!("{}", "-".repeat(40));
    println!(
        "{:<24} {:>6} {:>12} {:>10}",
        "Category", "Apps", "Installs", "Avg rating"
    );
    for stats in analytics.categories.iter().take(10) {
        println!(
            "{:<24} {:>6} {:>12} {:>10.2}",
            stats.category, stats.app_count, stats.total_installs, stats.avg_rating
        );
    }
    println!();

    println!("RATINGS");
    println!("{}", "-".repeat(40));
    for band in &analytics.ratings.distribution {
        println!("  {:<10} {:>6} ({:.1}%)", band.label, band.count, band.percentage);
    }
    println!();

    if analytics.sentiment.total_reviews > 0 {
        let sentiment = &analytics.sentiment;
        println!("SENTIMENT ({} reviews)", sentiment.total_reviews);
        println!("{}", "-".repeat(40));
        println!(
            "  Positive: {:.1}%  Negative: {:.1}%  Neutral: {:.1}%",
            sentiment.percentages.positive,
            sentiment.percentages.negative,
            sentiment.percentages.neutral
        );
        println!("  Mean polarity: {:.3}", sentiment.polarity.mean);
        println!();
    }

    if !analytics.insights.insights.is_empty() {
        println!("INSIGHTS");
        println!("{}", "-".repeat(40));
        for insight in &analytics.insights.insights {
            println!("  - {}", insight.description);
        }
        println!();
    }

    if !analytics.insights.recommendations.is_empty() {
        println!("RECOMMENDATIONS");
        println!("{}", "-".repeat(40));
        for rec in &analytics.insights.recommendations {
            println!("  - {}", rec.description);
        }
        println!();
    }

    println!("Use --json for machine-readable output");
    println!("Use --emit-report to save the full JSON report");
    println!("{}", "=".repeat(80));
}
