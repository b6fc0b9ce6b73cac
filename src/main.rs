use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use fpick::core::telemetry::logging::init_logging;
use fpick::services::select::cache::SelectionCache;
use fpick::services::select::picker::{FilePicker, PickItem};
use fpick::services::select::{filter_files, select_file, SelectParams};

/// Recursively list files under a directory, filter them by name, and pick one.
#[derive(Parser)]
#[command(name = "fpick", version)]
struct Cli {
    /// Root directory to search.
    root: String,

    /// Regex matched against file names; repeatable, a file is kept when any
    /// pattern matches.
    #[arg(short, long = "filter", default_value = ".*")]
    filters: Vec<String>,

    /// Prompt shown above the candidate list.
    #[arg(short, long, default_value = "Select a file")]
    prompt: String,

    /// Print the matching files as JSON instead of picking interactively.
    #[arg(long)]
    json: bool,
}

/// Numbered-list picker on stdout/stdin.
struct ConsolePicker;

impl FilePicker for ConsolePicker {
    fn pick(&self, items: &[PickItem], place_holder: &str) -> Option<usize> {
        if items.is_empty() {
            return None;
        }

        println!("{place_holder}");
        for (index, item) in items.iter().enumerate() {
            println!("{:>4}  {}", index + 1, item.label);
        }
        print!("> ");
        io::stdout().flush().ok()?;

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line).ok()?;
        let choice: usize = line.trim().parse().ok()?;
        // 1-based on screen, empty or non-numeric input cancels.
        if (1..=items.len()).contains(&choice) {
            Some(choice - 1)
        } else {
            None
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    if cli.json {
        let entries = filter_files(&cli.root, &cli.filters).await?;
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    let params = SelectParams {
        dir_path: cli.root.clone(),
        filters: cli.filters,
        place_holder: cli.prompt,
    };

    let mut cache = SelectionCache::new();
    match select_file(&params, &ConsolePicker).await? {
        Some(chosen) => {
            cache.set(Path::new(&cli.root), &chosen);
            debug!(root = %cli.root, chosen = %chosen.display(), "selection stored");
            println!("{}", chosen.display());
        }
        None => debug!(root = %cli.root, "selection cancelled"),
    }

    Ok(())
}
