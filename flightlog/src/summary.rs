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

//! Flight hours of a logbook.
//!
//! The summary is a fold over the results of decoding each file. Files that
//! failed are listed but never add to the totals.

use chrono::TimeDelta;
use igc::IgcHeader;

use crate::{Error, Flight};

/// Selects flights by their header.
#[derive(Clone, Default, Debug)]
pub struct Filter {
    /// Glider type the flight's type must start with, ignoring case.
    pub glider_type: Option<String>,
    /// Pilot name that must match exactly.
    pub pilot_name: Option<String>,
}

impl Filter {
    pub fn matches(&self, header: &IgcHeader) -> bool {
        let glider = self.glider_type.as_ref().is_none_or(|wing| {
            header
                .glider_type
                .to_lowercase()
                .starts_with(&wing.to_lowercase())
        });
        let pilot = self
            .pilot_name
            .as_ref()
            .is_none_or(|pilot| *pilot == header.pilot_name);

        glider && pilot
    }
}

#[derive(Clone, PartialEq, Default, Debug)]
pub struct Summary {
    /// Number of flights with at least one fix.
    pub flights: usize,
    /// Sum of the flights' durations.
    pub total: TimeDelta,
    /// Number of files not selected by the filter.
    pub filtered: usize,
    /// Number of selected files without any fix.
    pub empty: usize,
    /// Files that failed to decode.
    pub failed: Vec<Error>,
}

impl Summary {
    /// Adds the result of one file, `None` meaning the file was not selected.
    pub fn add(mut self, result: Result<Option<Flight>, Error>) -> Self {
        match result {
            Ok(Some(flight)) => match flight.duration() {
                Some(duration) => {
                    self.flights += 1;
                    self.total += duration;
                }
                None => self.empty += 1,
            },
            Ok(None) => self.filtered += 1,
            Err(e) => self.failed.push(e),
        }
        self
    }

    /// Folds the results of all files into one summary.
    pub fn from_results<I>(results: I) -> Self
    where
        I: IntoIterator<Item = Result<Option<Flight>, Error>>,
    {
        results.into_iter().fold(Self::default(), Self::add)
    }

    /// Total flight time in hours.
    pub fn hours(&self) -> f64 {
        self.total.num_seconds() as f64 / 3600.0
    }
}

impl FromIterator<Result<Option<Flight>, Error>> for Summary {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Result<Option<Flight>, Error>>,
    {
        Self::from_results(iter)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn flight(glider: &str, pilot: &str, fixes: &[&str]) -> Flight {
        let mut data = format!("AXXX\nHFPLTPILOTINCHARGE:{pilot}\nHFGTYGLIDERTYPE:{glider}\n");
        for time in fixes {
            data.push_str(&format!("B{time}5207650N00610100EA0012300150\n"));
        }
        Flight::from_reader(data.as_bytes()).expect("flight should decode")
    }

    #[test]
    fn filter_by_glider_prefix_and_pilot() {
        let header = flight("Photon 2", "JuM", &[]).header;

        assert!(Filter::default().matches(&header));
        assert!(Filter {
            glider_type: Some("photon".to_string()),
            pilot_name: None,
        }
        .matches(&header));
        assert!(Filter {
            glider_type: Some("PHOTON".to_string()),
            pilot_name: Some("JuM".to_string()),
        }
        .matches(&header));
        assert!(!Filter {
            glider_type: Some("enzo".to_string()),
            pilot_name: None,
        }
        .matches(&header));
        assert!(!Filter {
            glider_type: None,
            pilot_name: Some("jum".to_string()),
        }
        .matches(&header));
    }

    #[test]
    fn sums_flight_hours() {
        let failed = Error::Decode {
            path: PathBuf::from("broken.igc"),
            error: igc::Error::MalformedHeader,
        };

        let summary: Summary = vec![
            Ok(Some(flight("photon", "JuM", &["100000", "113000"]))),
            Ok(Some(flight("photon", "JuM", &["140000", "150000"]))),
            Ok(Some(flight("photon", "JuM", &[]))),
            Ok(None),
            Err(failed.clone()),
        ]
        .into_iter()
        .collect();

        assert_eq!(summary.flights, 2);
        assert_eq!(summary.total, TimeDelta::minutes(150));
        assert_eq!(summary.hours(), 2.5);
        assert_eq!(summary.filtered, 1);
        assert_eq!(summary.empty, 1);
        assert_eq!(summary.failed, vec![failed]);
    }

    #[test]
    fn failures_add_nothing() {
        let summary = Summary::from_results([Err(Error::Decode {
            path: PathBuf::from("a.igc"),
            error: igc::Error::UnreadableSource("permission denied".to_string()),
        })]);

        assert_eq!(summary.flights, 0);
        assert_eq!(summary.total, TimeDelta::zero());
        assert_eq!(summary.failed.len(), 1);
    }
}
