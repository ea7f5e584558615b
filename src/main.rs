use clap::Parser;
use max_spacing::{Clustering, MaxSpacing};
use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;
use std::{fs, process};

/// Maximum-spacing clustering of a CSV distance matrix
#[derive(Parser)]
#[command(name = "max-spacing")]
#[command(about = "Cut the heaviest minimum spanning tree edges into k clusters")]
#[command(long_about = None)]
struct Cli {
    /// CSV file holding a square, symmetrical distance matrix, one row per line
    distance_matrix: PathBuf,
    /// Number of clusters, between 1 and the number of points
    n_clusters: usize,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        eprintln!("{err}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let contents = fs::read_to_string(&cli.distance_matrix)?;
    let dist_matrix = read_dist_matrix(&contents)?;
    log::info!(
        "Read {} rows from {}",
        dist_matrix.len(),
        cli.distance_matrix.display()
    );

    let clustering = MaxSpacing::new(&dist_matrix, cli.n_clusters).cluster()?;
    write_report(&mut io::stdout().lock(), &clustering)?;
    Ok(())
}

fn read_dist_matrix(contents: &str) -> Result<Vec<Vec<f64>>, Box<dyn Error>> {
    contents
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(n, line)| {
            line.split(',')
                .map(|num| num.trim().parse::<f64>())
                .collect::<Result<Vec<_>, _>>()
                .map_err(|err| Box::<dyn Error>::from(format!("Line {}: {err}", n + 1)))
        })
        .collect()
}

/// One label per line, followed by the spacing.
fn write_report<W: Write>(out: &mut W, clustering: &Clustering<f64>) -> io::Result<()> {
    for label in clustering.labels() {
        writeln!(out, "{label}")?;
    }
    match clustering.cost() {
        Some(cost) => writeln!(out, "spacing: {cost}"),
        None => writeln!(out, "spacing: not applicable for a single cluster"),
    }
}
