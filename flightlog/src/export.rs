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

//! CSV export of a flight's track.
//!
//! Each track point is written as one row without a header row:
//!
//! ```text
//! timestamp,latitude,longitude,validity,pressure altitude,GNSS altitude,extension
//! ```
//!
//! The timestamp is `YYYY-MM-DD HH:MM:SS` or only `HH:MM:SS` if the flight has
//! no date. Absent values are empty fields.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use igc::TrackPoint;
use log::debug;

use crate::{Error, Flight};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Writes the track of `flight` as CSV.
///
/// # Errors
///
/// Returns an error if writing to `writer` fails.
pub fn write_csv<W: io::Write>(flight: &Flight, writer: W) -> Result<(), csv::Error> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    for point in &flight.track.points {
        csv_writer.write_record(row(flight, point))?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Decodes the IGC file `input` and writes its track as CSV.
///
/// The CSV is written to `output` or, if none is given, next to the input
/// with the extension `csv`. Returns the path written to.
///
/// # Errors
///
/// Returns [`Error::Decode`] if the input can't be decoded and
/// [`Error::Export`] if the CSV can't be written.
pub fn export_file(input: &Path, output: Option<&Path>) -> Result<PathBuf, Error> {
    let flight = Flight::open(input)?;
    let output = output.map_or_else(|| input.with_extension("csv"), Path::to_path_buf);

    let export_error = |error: csv::Error| Error::Export {
        path: output.clone(),
        error: Arc::new(error),
    };

    let file = File::create(&output).map_err(|e| export_error(e.into()))?;
    write_csv(&flight, file).map_err(export_error)?;

    debug!(
        "exported {} track point(s) to {}",
        flight.track.points.len(),
        output.display()
    );
    Ok(output)
}

fn row(flight: &Flight, point: &TrackPoint) -> [String; 7] {
    let timestamp = match flight.timestamp(point) {
        Some(datetime) => datetime.format(TIMESTAMP_FORMAT).to_string(),
        None => time_of_day(point),
    };

    [
        timestamp,
        point.latitude.to_string(),
        point.longitude.to_string(),
        point.validity.as_char().to_string(),
        optional(point.pressure_altitude),
        optional(point.gnss_altitude),
        point.extension.clone().unwrap_or_default(),
    ]
}

fn time_of_day(point: &TrackPoint) -> String {
    let secs = point.time.num_seconds();
    format!("{:02}:{:02}:{:02}", secs / 3600, secs % 3600 / 60, secs % 60)
}

fn optional<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
