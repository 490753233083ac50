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

//! Logbook tools for IGC flight recorder files.
//!
//! Builds on the [`igc`] parser to find the IGC files of a logbook
//! directory, decode them on several threads, sum up flight hours and export
//! tracks as CSV.
//!
//! # Example
//!
//! ```no_run
//! use flightlog::{batch, discover, Filter, Flight, Summary};
//!
//! let paths = discover::igc_files("logbook")?;
//! let filter = Filter {
//!     glider_type: Some("photon".to_string()),
//!     pilot_name: None,
//! };
//!
//! let summary = Summary::from_results(batch::map(&paths, batch::default_jobs(), |path| {
//!     Flight::open_if(path, |header| filter.matches(header))
//! }));
//! println!("{} flights in {:.1} h", summary.flights, summary.hours());
//! # Ok::<(), std::io::Error>(())
//! ```

mod error;
mod flight;

pub mod batch;
pub mod discover;
pub mod export;
pub mod summary;

pub use error::Error;
pub use flight::Flight;
pub use summary::{Filter, Summary};
