//! leap_cloud: interactive entry point.

use clap::Parser;
use leap_cloud::cli::Args;
use leap_cloud::{run, AppConfig, AppError};
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_level()));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║        Leap Cloud - Gesture-Driven Particle Memories         ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    #[cfg(feature = "leap")]
    println!("  Mode: LeapMotion hardware");
    #[cfg(not(feature = "leap"))]
    println!("  Mode: Keyboard simulation  (use --features leap for hardware)");
    println!();

    if let Err(e) = configure(&args).and_then(start) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn configure(args: &Args) -> Result<AppConfig, AppError> {
    let mut cfg = AppConfig::load(&args.config)?;
    args.apply(&mut cfg)?;
    cfg.morph.validate()?;
    Ok(cfg)
}

fn start(cfg: AppConfig) -> Result<(), AppError> {
    println!(
        "  {} particles, {} photos, shape {}, theme {}",
        cfg.morph.particle_count, cfg.morph.photo_count, cfg.shape.label(), cfg.theme,
    );
    println!("  Opening viewer window…");
    println!();
    run(cfg)
}
