// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::num::NonZeroUsize;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use flightlog::{batch, discover, export, Filter, Flight, Summary};

#[derive(Parser, Debug)]
#[command(version, about = "Logbook tools for IGC flight recorder files")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Count flights and flight hours of all IGC files below a directory.
    Count {
        /// Logbook directory searched recursively.
        dir: PathBuf,

        /// Only count flights whose glider type starts with this name.
        #[arg(short, long)]
        wing: Option<String>,

        /// Only count flights of this pilot.
        #[arg(short, long)]
        pilot: Option<String>,

        /// Number of files decoded in parallel [default: available cores].
        #[arg(short, long)]
        jobs: Option<NonZeroUsize>,
    },

    /// Export the track of an IGC file as CSV.
    Export {
        file: PathBuf,

        /// Output file [default: the input file with extension csv].
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    match Args::parse().command {
        Command::Count {
            dir,
            wing,
            pilot,
            jobs,
        } => {
            let filter = Filter {
                glider_type: wing,
                pilot_name: pilot,
            };
            count(dir, filter, jobs.unwrap_or_else(batch::default_jobs))
        }
        Command::Export { file, output } => {
            let output = export::export_file(&file, output.as_deref())?;
            println!("{}", output.display());
            Ok(())
        }
    }
}

fn count(dir: PathBuf, filter: Filter, jobs: NonZeroUsize) -> Result<()> {
    let paths = discover::igc_files(&dir)
        .with_context(|| format!("failed to read directory {}", dir.display()))?;
    println!("{} igc file found.", paths.len());

    let summary = Summary::from_results(batch::map(&paths, jobs, |path| {
        Flight::open_if(path, |header| filter.matches(header))
    }));

    for error in &summary.failed {
        eprintln!("{error}");
    }

    println!("{} flights", summary.flights);
    println!("{:.2} hours", summary.hours());
    Ok(())
}
