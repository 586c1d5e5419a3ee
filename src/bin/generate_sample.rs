//! Writes a synthetic sensor log to try snip-tsv on.
//!
//! Columns: `t` (seconds, increasing), `temperature`, `pressure`, `phase`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generate a deterministic noisy time series as tab-separated text.
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// Output path
    #[arg(default_value = "sample_data.tsv")]
    output: PathBuf,

    /// Number of data rows
    #[arg(short, long, default_value_t = 2000)]
    rows: usize,

    /// Sampling interval in seconds
    #[arg(short, long, default_value_t = 0.5)]
    step: f64,

    /// PRNG seed
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

/// Bell-shaped bump centred on `centre`.
fn bump(t: f64, centre: f64, width: f64, height: f64) -> f64 {
    let z = (t - centre) / width;
    height * (-0.5 * z * z).exp()
}

/// Zero-mean noise with roughly the given spread (sum of uniforms).
fn noise(rng: &mut StdRng, spread: f64) -> f64 {
    let sum: f64 = (0..4).map(|_| rng.gen_range(-1.0..1.0)).sum();
    sum * spread * 0.87
}

/// Phase label for a point in the run, so the file also has a text column.
fn phase(t: f64, duration: f64) -> &'static str {
    match t / duration {
        f if f < 0.2 => "warmup",
        f if f < 0.8 => "steady",
        _ => "cooldown",
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut rng = StdRng::seed_from_u64(args.seed);
    let duration = args.rows as f64 * args.step;

    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .from_path(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;

    writer.write_record(["t", "temperature", "pressure", "phase"])?;

    for i in 0..args.rows {
        let t = i as f64 * args.step;
        // Slow drift plus a heating bump in the middle of the run.
        let temperature = 20.0
            + 0.002 * t
            + bump(t, duration * 0.5, duration * 0.1, 15.0)
            + noise(&mut rng, 0.3);
        let pressure = 101.3 + 0.8 * (t / 60.0).sin() + noise(&mut rng, 0.05);

        writer
            .write_record([
                format!("{t:.1}"),
                format!("{temperature:.3}"),
                format!("{pressure:.3}"),
                phase(t, duration).to_string(),
            ])
            .with_context(|| format!("writing row {i}"))?;
    }
    writer.flush()?;

    println!(
        "Wrote {} rows ({:.1} s of data) to {}",
        args.rows,
        duration,
        args.output.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_noise() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        let xs: Vec<f64> = (0..10).map(|_| noise(&mut a, 0.3)).collect();
        let ys: Vec<f64> = (0..10).map(|_| noise(&mut b, 0.3)).collect();
        assert_eq!(xs, ys);
        assert!(xs.iter().all(|x| x.abs() <= 4.0 * 0.3 * 0.87));
    }

    #[test]
    fn test_bump_peaks_at_centre() {
        assert_eq!(bump(50.0, 50.0, 10.0, 15.0), 15.0);
        assert!(bump(80.0, 50.0, 10.0, 15.0) < 0.2);
    }

    #[test]
    fn test_phase_labels() {
        assert_eq!(phase(0.0, 100.0), "warmup");
        assert_eq!(phase(50.0, 100.0), "steady");
        assert_eq!(phase(90.0, 100.0), "cooldown");
    }
}
