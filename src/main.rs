use anyhow::{Context, Result};
use clap::Parser;
use mathsheet::{worksheet, Settings};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

/// Generate a printable arithmetic worksheet PDF, with each problem drawn
/// inside a decorative shape
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path to a JSON settings file; omitted keys keep their defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Where to write the worksheet
    #[arg(short, long, default_value = "worksheet.pdf")]
    output: PathBuf,

    /// Seed for the random number generator, for reproducible sheets
    #[arg(long)]
    seed: Option<u64>,

    /// Override the configured operator (one of +, -, *, /)
    #[arg(long)]
    operator: Option<String>,

    /// Override the configured worksheet title
    #[arg(long)]
    title: Option<String>,

    /// Override the configured number of problems per column
    #[arg(long)]
    problems_per_column: Option<usize>,
}

/// Flags beat the settings file; anything not flagged keeps its loaded value
fn apply_overrides(settings: &mut Settings, args: &Args) {
    if let Some(operator) = &args.operator {
        settings.math_operator = operator.clone();
    }
    if let Some(title) = &args.title {
        settings.title = title.clone();
    }
    if let Some(problems) = args.problems_per_column {
        settings.problems_per_column = problems;
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut settings = match &args.config {
        Some(path) => Settings::load(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => Settings::default(),
    };
    apply_overrides(&mut settings, &args);

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let document = worksheet::generate(&settings, &mut rng).context("generating the worksheet")?;

    let out = std::fs::File::create(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    document.write(out).context("writing the PDF")?;

    log::info!(
        "wrote {} problems to {}",
        settings.problem_count(),
        args.output.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_loaded_settings() {
        let args = Args::parse_from(["mathsheet", "--operator", "*", "--title", "Times Tables"]);
        let mut settings = Settings {
            math_operator: "+".to_string(),
            title: "Math Practice".to_string(),
            ..Settings::default()
        };
        apply_overrides(&mut settings, &args);

        assert_eq!(settings.math_operator, "*");
        assert_eq!(settings.title, "Times Tables");
        // unflagged keys keep their loaded values
        assert_eq!(settings.problems_per_column, 8);
    }

    #[test]
    fn absent_flags_change_nothing() {
        let args = Args::parse_from(["mathsheet", "-o", "out.pdf"]);
        let mut settings = Settings::default();
        apply_overrides(&mut settings, &args);
        assert_eq!(settings, Settings::default());
    }
}
