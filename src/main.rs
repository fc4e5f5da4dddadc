use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use color_vision::contrast::{AAA_LARGE, AAA_NORMAL, AA_LARGE, AA_NORMAL};
use color_vision::extract::POLICY;
use color_vision::{transform_buffer, transformed, Rgb, VisionDeficiency};

use huelens::models::{AppConfig, ConfigSource, ContrastReport, CONFIG_ENV_VAR};
use huelens::rendering::{read_png, side_by_side, write_png};
use huelens::services::{extract_report, lch_report, theme_export, theme_json, ReportService};

#[derive(Parser)]
#[command(name = "huelens")]
#[command(about = "Inspect colors and images under color-vision deficiency and WCAG contrast rules")]
struct Cli {
    /// Config file (YAML). Overrides HUELENS_CONFIG and must load.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate a deficiency over a PNG image
    Simulate {
        /// Input PNG file path
        #[arg(short, long)]
        input: PathBuf,

        /// Output PNG file path
        #[arg(short, long)]
        output: PathBuf,

        /// normal, protanopia, deuteranopia, tritanopia or achromatopsia
        #[arg(short, long, default_value = "protanopia")]
        deficiency: VisionDeficiency,

        /// Write the original and the simulated image side by side
        #[arg(long)]
        compare: bool,
    },
    /// Show how one color appears under each deficiency
    Color {
        /// Hex color (e.g. "#d32f2f" or "f80")
        color: Rgb,

        /// Only this deficiency (default: the configured report set)
        #[arg(short, long)]
        deficiency: Option<VisionDeficiency>,

        #[arg(long)]
        json: bool,
    },
    /// WCAG contrast ratio between two colors
    Contrast {
        first: Rgb,
        second: Rgb,

        #[arg(long)]
        json: bool,
    },
    /// Contrast of every pair in a palette
    Palette {
        /// Hex colors, in palette order
        #[arg(required = true, num_args = 1..)]
        colors: Vec<Rgb>,

        /// Simulate this deficiency before measuring contrast
        #[arg(short, long, conflicts_with = "all")]
        deficiency: Option<VisionDeficiency>,

        /// Audit normal vision plus every configured deficiency
        #[arg(long)]
        all: bool,

        #[arg(long)]
        json: bool,
    },
    /// Dominant colors of a PNG image by exact pixel frequency
    Extract {
        /// Input PNG file path
        #[arg(short, long)]
        input: PathBuf,

        /// Number of colors (default: extract_count from config)
        #[arg(short, long)]
        count: Option<usize>,

        /// Write the colors as a JSON theme to this path
        #[arg(long)]
        theme: Option<PathBuf>,

        #[arg(long)]
        json: bool,
    },
    /// Convert a color to CIE LCh and back
    Lch {
        color: Rgb,

        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "huelens=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time().with_writer(std::io::stderr))
        .init();

    let env_config = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);
    let (config, source) = AppConfig::resolve(cli.config.as_deref(), env_config.as_deref())
        .context("Failed to load configuration")?;
    let service = ReportService::default();

    match cli.command {
        Some(Commands::Simulate {
            input,
            output,
            deficiency,
            compare,
        }) => run_simulate_command(&input, &output, deficiency, compare),
        Some(Commands::Color {
            color,
            deficiency,
            json,
        }) => run_color_command(&service, &config, color, deficiency, json),
        Some(Commands::Contrast {
            first,
            second,
            json,
        }) => run_contrast_command(&service, first, second, json),
        Some(Commands::Palette {
            colors,
            deficiency,
            all,
            json,
        }) => run_palette_command(&service, &config, &colors, deficiency, all, json),
        Some(Commands::Extract {
            input,
            count,
            theme,
            json,
        }) => run_extract_command(&config, &input, count, theme.as_deref(), json),
        Some(Commands::Lch { color, json }) => run_lch_command(color, json),
        None => {
            run_status_command(&config, &source);
            Ok(())
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn verdict(pass: bool) -> &'static str {
    if pass {
        "pass"
    } else {
        "fail"
    }
}

/// Simulate a deficiency over a PNG file
fn run_simulate_command(
    input: &Path,
    output: &Path,
    deficiency: VisionDeficiency,
    compare: bool,
) -> anyhow::Result<()> {
    let original =
        read_png(input).with_context(|| format!("Failed to read {}", input.display()))?;

    let image = if compare {
        let simulated = transformed(&original, deficiency);
        side_by_side(&[&original, &simulated])?
    } else {
        let mut buffer = original;
        transform_buffer(&mut buffer, deficiency);
        buffer
    };

    let written =
        write_png(output, &image).with_context(|| format!("Failed to write {}", output.display()))?;
    println!(
        "Simulated {deficiency} {}x{} -> {} ({written} bytes)",
        image.width(),
        image.height(),
        output.display()
    );
    Ok(())
}

fn run_color_command(
    service: &ReportService<'_>,
    config: &AppConfig,
    color: Rgb,
    deficiency: Option<VisionDeficiency>,
    json: bool,
) -> anyhow::Result<()> {
    let mut deficiencies = vec![VisionDeficiency::Normal];
    match deficiency {
        Some(d) if !d.is_normal() => deficiencies.push(d),
        Some(_) => {}
        None => deficiencies.extend(config.report.deficiencies.iter().filter(|d| !d.is_normal())),
    }

    let report = service.color(color, &deficiencies);
    if json {
        return print_json(&report);
    }

    println!("{}", report.color);
    for view in &report.views {
        println!(
            "  {:<14} {}  dE {:>5.1}  {}",
            view.deficiency.name(),
            view.seen,
            view.delta_e,
            view.description
        );
    }
    Ok(())
}

fn print_contrast(report: &ContrastReport) {
    let result = &report.result;
    println!(
        "{} on {}: {:.2}:1 ({})",
        result.first,
        result.second,
        result.ratio,
        report.level.label()
    );
    println!("  AA  normal text (>= {AA_NORMAL}):  {}", verdict(result.meets_aa));
    println!("  AAA normal text (>= {AAA_NORMAL}):  {}", verdict(result.meets_aaa));
    println!("  AA  large text  (>= {AA_LARGE}):  {}", verdict(result.meets_aa_large));
    println!("  AAA large text  (>= {AAA_LARGE}):  {}", verdict(result.meets_aaa_large));
}

fn run_contrast_command(
    service: &ReportService<'_>,
    first: Rgb,
    second: Rgb,
    json: bool,
) -> anyhow::Result<()> {
    let report = service.contrast(first, second);
    if json {
        return print_json(&report);
    }
    print_contrast(&report);
    Ok(())
}

fn run_palette_command(
    service: &ReportService<'_>,
    config: &AppConfig,
    colors: &[Rgb],
    deficiency: Option<VisionDeficiency>,
    all: bool,
    json: bool,
) -> anyhow::Result<()> {
    let deficiencies = if all {
        let mut list = vec![VisionDeficiency::Normal];
        list.extend(config.report.deficiencies.iter().filter(|d| !d.is_normal()));
        list
    } else {
        vec![deficiency.unwrap_or_default()]
    };

    let audit = service.palette_audit(colors, &deficiencies);
    if json {
        return print_json(&audit);
    }

    for report in &audit {
        println!(
            "{} ({} of {} pairs below AA)",
            report.deficiency,
            report.failing_aa,
            report.pairs.len()
        );
        for pair in &report.pairs {
            let result = &pair.result;
            println!(
                "  [{}] {} vs [{}] {}  {:>5.2}:1  {}",
                result.first_index,
                result.first,
                result.second_index,
                result.second,
                result.ratio,
                pair.level.label()
            );
        }
    }
    Ok(())
}

fn run_extract_command(
    config: &AppConfig,
    input: &Path,
    count: Option<usize>,
    theme: Option<&Path>,
    json: bool,
) -> anyhow::Result<()> {
    let buffer = read_png(input).with_context(|| format!("Failed to read {}", input.display()))?;
    let report = extract_report(&buffer, count.unwrap_or(config.extract_count));

    if let Some(theme_path) = theme {
        let colors: Vec<Rgb> = report.colors.iter().map(|c| c.color).collect();
        let theme = theme_export(&colors, &config.theme.keys);
        std::fs::write(theme_path, theme_json(&theme)?)
            .with_context(|| format!("Failed to write {}", theme_path.display()))?;
        tracing::info!(path = %theme_path.display(), colors = colors.len(), "Wrote theme");
    }

    if json {
        return print_json(&report);
    }

    println!(
        "{}x{} image, {} distinct colors (policy: {POLICY:?})",
        report.width, report.height, report.distinct
    );
    for (rank, color) in report.colors.iter().enumerate() {
        println!(
            "  {:>2}. {}  {:>8} px  {:>5.1}%",
            rank + 1,
            color.color,
            color.pixels,
            color.share * 100.0
        );
    }
    if let Some(theme_path) = theme {
        println!("Theme written to {}", theme_path.display());
    }
    Ok(())
}

fn run_lch_command(color: Rgb, json: bool) -> anyhow::Result<()> {
    let report = lch_report(color);
    if json {
        return print_json(&report);
    }
    println!(
        "{}  L {:.2}  C {:.2}  H {:.2}",
        report.color, report.lch.l, report.lch.c, report.lch.h
    );
    println!("  round trip: {}", report.round_trip);
    Ok(())
}

/// Print version, configuration and engine constants
fn run_status_command(config: &AppConfig, source: &ConfigSource) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    println!("huelens v{VERSION}");
    println!("Color-vision deficiency simulation and WCAG contrast analysis\n");

    println!("Environment Variables:");
    println!(
        "  {CONFIG_ENV_VAR} = {}",
        std::env::var(CONFIG_ENV_VAR)
            .as_deref()
            .unwrap_or("(not set)")
    );

    println!("\nConfiguration:");
    match source {
        ConfigSource::Defaults => println!("  Source:        defaults"),
        ConfigSource::File(path) => println!("  Source:        {}", path.display()),
    }
    println!("  Extract count: {}", config.extract_count);
    println!("  Theme keys:    {}", config.theme.keys.join(", "));
    let report_set: Vec<&str> = config.report.deficiencies.iter().map(|d| d.name()).collect();
    println!("  Report set:    {}", report_set.join(", "));

    println!("\nDeficiencies:");
    for deficiency in VisionDeficiency::ALL {
        println!("  {:<14} {}", deficiency.name(), deficiency.describe());
    }

    println!("\nWCAG Thresholds:");
    println!("  AA  {AA_NORMAL} (large text {AA_LARGE})");
    println!("  AAA {AAA_NORMAL} (large text {AAA_LARGE})");
    println!("\nExtraction policy: {POLICY:?}");

    println!("\nCommands:");
    println!("  huelens simulate   Simulate a deficiency over a PNG image");
    println!("  huelens color      Show a color under each deficiency");
    println!("  huelens contrast   WCAG contrast between two colors");
    println!("  huelens palette    Pairwise contrast of a palette");
    println!("  huelens extract    Dominant colors of a PNG image");
    println!("  huelens lch        Convert a color to LCh and back");
    println!("\nRun 'huelens --help' for more details.");
}
