// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2025 Daniel Negri
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

use clap::Parser;
use collectible_store::{
    LoadSummary, Store, ValidationContext, load_customers, load_inventory, replay_commands,
};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use std::process;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Collectible Store - Replay store commands against an inventory
///
/// Loads customers and inventory, replays the command file, and writes the
/// reports it asks for to stdout. Rejected records are logged to stderr.
#[derive(Parser, Debug)]
#[command(name = "collectible-store")]
#[command(about = "Simulates a collectibles store from customer, inventory and command files", long_about = None)]
struct Args {
    /// Customer file, one `id, name` record per line
    #[arg(value_name = "CUSTOMERS")]
    customers: PathBuf,

    /// Inventory file, one `symbol, count, year, grade, ...` record per line
    #[arg(value_name = "INVENTORY")]
    inventory: PathBuf,

    /// Command file, one `S`, `B`, `C`, `H` or `D` record per line
    #[arg(value_name = "COMMANDS")]
    commands: PathBuf,

    /// Latest year accepted on item records (defaults to the local calendar year)
    #[arg(long, value_name = "YEAR")]
    current_year: Option<u16>,
}

impl Args {
    fn context(&self) -> ValidationContext {
        self.current_year
            .map_or_else(ValidationContext::from_clock, ValidationContext::new)
    }
}

fn main() {
    init_tracing();

    let args = Args::parse();
    let context = args.context();
    let mut store = Store::new();

    let summary = load_customers(&mut store, open(&args.customers));
    report("customers", summary);

    let summary = load_inventory(&mut store, open(&args.inventory), &context);
    report("inventory", summary);

    let summary = replay_commands(&mut store, open(&args.commands), &context, io::stdout().lock());
    report("commands", summary);
}

/// Logs to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn open(path: &Path) -> BufReader<File> {
    match File::open(path) {
        Ok(file) => BufReader::new(file),
        Err(e) => {
            eprintln!("Error opening file '{}': {}", path.display(), e);
            process::exit(1);
        }
    }
}

fn report(source: &str, summary: Result<LoadSummary, csv::Error>) {
    match summary {
        Ok(summary) => info!(source, applied = summary.applied, rejected = summary.rejected, "processed"),
        Err(e) => {
            eprintln!("Error processing {source}: {e}");
            process::exit(1);
        }
    }
}
