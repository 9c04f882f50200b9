use bmi_core::*;
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bmitrack")]
#[command(about = "BMI calculator and history tracker", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Act as this user (required for save/history/chart/export/delete)
    #[arg(long, global = true)]
    user: Option<String>,

    /// Override the history database file
    #[arg(long, global = true)]
    db: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate BMI from weight (kg) and height (ft, in)
    Calc {
        weight: String,
        feet: String,
        inches: String,
    },

    /// Calculate and save a BMI entry for the current user
    Save {
        weight: String,
        feet: String,
        inches: String,
    },

    /// List saved entries for the current user
    History {
        /// Emit the history as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Draw a weight-vs-BMI trend chart for the current user
    Chart,

    /// Export the current user's history to a CSV file
    Export { path: PathBuf },

    /// Delete every entry for the current user
    Delete {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Show the BMI classification scale
    Scale,
}

fn main() {
    // Initialize logging
    bmi_core::logging::init();

    let cli = Cli::parse();

    // All errors are recovered here and surfaced as a message
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let db_path = cli.db.unwrap_or_else(|| config.database_path());
    tracing::debug!("Using history database at {:?}", db_path);

    match cli.command {
        Commands::Calc {
            weight,
            feet,
            inches,
        } => cmd_calc(&weight, &feet, &inches),
        Commands::Save {
            weight,
            feet,
            inches,
        } => cmd_save(&db_path, current_user(&cli.user)?, &weight, &feet, &inches),
        Commands::History { json } => cmd_history(&db_path, current_user(&cli.user)?, json),
        Commands::Chart => cmd_chart(&db_path, current_user(&cli.user)?, &config),
        Commands::Export { path } => cmd_export(&db_path, current_user(&cli.user)?, &path),
        Commands::Delete { yes } => cmd_delete(&db_path, current_user(&cli.user)?, yes),
        Commands::Scale => cmd_scale(),
    }
}

/// The "Select User" action: every history operation needs a non-empty user
fn current_user(user: &Option<String>) -> Result<&str> {
    match user.as_deref().map(str::trim) {
        Some(name) if !name.is_empty() => Ok(name),
        _ => Err(Error::MissingUser),
    }
}

fn parse_inputs(weight: &str, feet: &str, inches: &str) -> Result<(f64, f64, f64)> {
    let weight_kg = parse_measurement("weight", weight)?;
    let height_ft = parse_measurement("height (ft)", feet)?;
    let height_in = parse_measurement("height (in)", inches)?;
    Ok((weight_kg, height_ft, height_in))
}

fn cmd_calc(weight: &str, feet: &str, inches: &str) -> Result<()> {
    let (weight_kg, height_ft, height_in) = parse_inputs(weight, feet, inches)?;
    let reading = compute(weight_kg, height_ft, height_in)?;

    println!(
        "Your BMI is {:.2}. Classification: {}",
        reading.bmi, reading.classification
    );
    Ok(())
}

fn cmd_save(db_path: &PathBuf, user: &str, weight: &str, feet: &str, inches: &str) -> Result<()> {
    let (weight_kg, height_ft, height_in) = parse_inputs(weight, feet, inches)?;
    let reading = compute(weight_kg, height_ft, height_in)?;

    let record = BmiRecord {
        user_name: user.to_string(),
        weight_kg,
        height_m: height_to_meters(height_ft, height_in),
        bmi: reading.bmi,
    };

    let store = HistoryStore::open(db_path)?;
    store.save(&record)?;

    println!(
        "✓ BMI data saved for {} (BMI {:.2}, {})",
        user, reading.bmi, reading.classification
    );
    Ok(())
}

fn cmd_history(db_path: &PathBuf, user: &str, json: bool) -> Result<()> {
    let store = HistoryStore::open(db_path)?;
    let records = store.list_all(user)?;

    if records.is_empty() {
        println!("No history found for {}", user);
        return Ok(());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    println!("BMI History for {}", user);
    println!();
    for (idx, record) in records.iter().enumerate() {
        println!(
            "{}. Weight: {} kg, Height: {:.2} m, BMI: {:.2}",
            idx + 1,
            record.weight_kg,
            record.height_m,
            record.bmi
        );
    }
    Ok(())
}

fn cmd_chart(db_path: &PathBuf, user: &str, config: &Config) -> Result<()> {
    let store = HistoryStore::open(db_path)?;
    let points = store.for_visualization(user)?;

    if points.is_empty() {
        println!("No data available to visualize for {}", user);
        return Ok(());
    }

    println!("BMI Trend for {}", user);
    println!();
    print!(
        "{}",
        render_trend(&points, config.chart.width, config.chart.height)
    );
    Ok(())
}

fn cmd_export(db_path: &PathBuf, user: &str, csv_path: &PathBuf) -> Result<()> {
    let store = HistoryStore::open(db_path)?;
    let count = history_to_csv(&store, user, csv_path)?;

    if count == 0 {
        println!("No history found for {}", user);
    } else {
        println!("✓ Exported {} entries to {}", count, csv_path.display());
    }
    Ok(())
}

fn cmd_delete(db_path: &PathBuf, user: &str, yes: bool) -> Result<()> {
    if !yes && !confirm_deletion(user)? {
        println!("Aborted - no data was deleted.");
        return Ok(());
    }

    let store = HistoryStore::open(db_path)?;
    let count = store.delete_all(user)?;

    println!("✓ Deleted {} entries for {}", count, user);
    Ok(())
}

fn cmd_scale() -> Result<()> {
    println!("BMI Classification Scale");
    println!();
    for class in Classification::all() {
        println!("  {}: {}", class.label(), class.range_text());
    }
    Ok(())
}

fn confirm_deletion(user: &str) -> Result<bool> {
    print!("Delete all BMI data for '{}'? [y/N] ", user);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(matches!(input.trim().to_lowercase().as_str(), "y" | "yes"))
}

/// Render (weight, bmi) points as a fixed-size character grid
///
/// Weight runs along the x axis, BMI along the y axis; the grid is
/// scaled to the data's bounding box. A single point (or a degenerate
/// range) lands in the middle of its axis.
fn render_trend(points: &[(f64, f64)], width: usize, height: usize) -> String {
    // Keep degenerate config values drawable
    let width = width.max(8);
    let height = height.max(3);

    let (mut min_w, mut max_w) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut min_b, mut max_b) = (f64::INFINITY, f64::NEG_INFINITY);
    for &(w, b) in points {
        min_w = min_w.min(w);
        max_w = max_w.max(w);
        min_b = min_b.min(b);
        max_b = max_b.max(b);
    }

    let place = |value: f64, min: f64, max: f64, cells: usize| -> usize {
        if max <= min {
            return cells / 2;
        }
        let frac = (value - min) / (max - min);
        ((frac * (cells - 1) as f64).round() as usize).min(cells - 1)
    };

    let mut grid = vec![vec![' '; width]; height];
    for &(w, b) in points {
        let col = place(w, min_w, max_w, width);
        let row = height - 1 - place(b, min_b, max_b, height);
        grid[row][col] = '*';
    }

    let mut out = String::new();
    for (i, row) in grid.iter().enumerate() {
        let label = if i == 0 {
            format!("{:>6.1}", max_b)
        } else if i == height - 1 {
            format!("{:>6.1}", min_b)
        } else {
            "      ".to_string()
        };
        out.push_str(&label);
        out.push_str(" │");
        out.extend(row.iter());
        out.push('\n');
    }
    out.push_str("       ╰");
    out.push_str(&"─".repeat(width));
    out.push('\n');
    out.push_str(&format!(
        "        {:<w$}{:>w$}\n",
        format!("{} kg", min_w),
        format!("{} kg", max_w),
        w = width / 2
    ));
    out
}
