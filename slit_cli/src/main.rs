//! # Doppelspalt CLI
//!
//! Headless evaluation of the double-slit intensity pattern on the default
//! angle grid:
//!
//! ```sh
//! slit_cli --separation-mm 0.2 --wavelength-nm 633
//! slit_cli --format json
//! slit_cli --two-slit-only --format csv > pattern.csv
//! ```
//!
//! Parameters are checked against the same ranges as the GUI sliders.

use clap::{Parser, ValueEnum};

use slit_core::analysis::PatternSummary;
use slit_core::config::{DEFAULT_SEPARATION_MM, DEFAULT_SLIT_WIDTH_UM, DEFAULT_WAVELENGTH_NM};
use slit_core::units::{Micrometers, Millimeters, Nanometers, Radians};
use slit_core::{PatternConfig, PatternSession, SlitError, SlitParameters, SlitResult, Variant};

#[derive(Parser, Debug)]
#[command(name = "slit_cli")]
#[command(about = "Beugung am Doppelspalt: evaluate the double-slit intensity pattern")]
#[command(version)]
struct Cli {
    /// Slit-center separation in mm (0.01 - 0.30)
    #[arg(long, default_value_t = DEFAULT_SEPARATION_MM)]
    separation_mm: f64,

    /// Wavelength in nm (380 - 740)
    #[arg(long, default_value_t = DEFAULT_WAVELENGTH_NM)]
    wavelength_nm: f64,

    /// Slit width in µm (0.01 - 50)
    #[arg(long, default_value_t = DEFAULT_SLIT_WIDTH_UM)]
    width_um: f64,

    /// Ideal narrow slits: interference term only, width ignored
    #[arg(long)]
    two_slit_only: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Summary)]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Human readable landmarks
    Summary,
    /// Landmarks as JSON
    Json,
    /// `angle,intensity` rows for every grid sample
    Csv,
}

impl Cli {
    fn config(&self) -> PatternConfig {
        PatternConfig {
            defaults: SlitParameters::new(
                Millimeters(self.separation_mm),
                Nanometers(self.wavelength_nm),
                Micrometers(self.width_um),
            ),
            variant: if self.two_slit_only {
                Variant::TwoParameter
            } else {
                Variant::ThreeParameter
            },
            ..PatternConfig::default()
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let session = match PatternSession::new(cli.config()) {
        Ok(session) => session,
        Err(e) => {
            report_error(&e);
            std::process::exit(2);
        }
    };
    log::debug!(
        "evaluated {} samples for {} ({:?})",
        session.grid().len(),
        session.parameters(),
        session.variant()
    );

    match cli.format {
        OutputFormat::Summary => print_summary(&session.summary()),
        OutputFormat::Json => match summary_json(&session.summary()) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                report_error(&e);
                std::process::exit(1);
            }
        },
        OutputFormat::Csv => print_csv(&session),
    }

    Ok(())
}

fn summary_json(summary: &PatternSummary) -> SlitResult<String> {
    Ok(serde_json::to_string_pretty(summary)?)
}

fn report_error(e: &SlitError) {
    eprintln!("Error: {}", e);
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}

fn print_summary(summary: &PatternSummary) {
    println!("═══════════════════════════════════════");
    println!("  BEUGUNG AM DOPPELSPALT");
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    println!("  Model:        {}", summary.variant.display_name());
    println!("  Separation:   {:.3} mm", summary.parameters.separation.0);
    println!("  Wavelength:   {:.0} nm", summary.parameters.wavelength.0);
    if summary.variant.uses_slit_width() {
        println!("  Slit width:   {:.2} µm", summary.parameters.slit_width.0);
    }
    println!();
    println!("Pattern ({} samples):", summary.samples);
    println!("  Peak I/I0:          {:.4}", summary.peak_intensity);
    println!("  Mean I/I0:          {:.4}", summary.mean_intensity);
    println!("  Fringe spacing:     {:.3} mm", summary.fringe_spacing_m * 1e3);
    println!(
        "  1st interference 0: {}",
        format_angle(summary.first_interference_zero_rad)
    );
    if summary.variant.uses_slit_width() {
        println!(
            "  1st diffraction 0:  {}",
            format_angle(summary.first_diffraction_zero_rad)
        );
    }
    if let Some(fringes) = summary.fringes_in_central_envelope {
        println!("  Central fringes:    {}", fringes);
    }
    println!("  Sampled maxima:     {}", summary.maxima_angles_rad.len());
    println!("═══════════════════════════════════════");
}

fn print_csv(session: &PatternSession) {
    println!("angle_rad,intensity");
    for (angle, intensity) in session.curve().points(session.grid()) {
        println!("{:.8},{:.10}", angle, intensity);
    }
}

fn format_angle(angle: Option<Radians>) -> String {
    match angle {
        Some(rad) => format!("{:.5} rad ({:.3}°)", rad.0, rad.to_degrees()),
        None => "none".to_string(),
    }
}
