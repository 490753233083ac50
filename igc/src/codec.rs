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

//! Conversion of the fixed-width coordinate and time fields.

use chrono::TimeDelta;

use crate::Error;

/// Length of a `DDMMmmmN` latitude field.
pub const LATITUDE_LENGTH: usize = 8;

/// Length of a `DDDMMmmmE` longitude field.
pub const LONGITUDE_LENGTH: usize = 9;

/// Length of a `HHMMSS` time field.
pub const TIME_LENGTH: usize = 6;

const THOUSANDTHS_PER_DEGREE: f64 = 60_000.0;

/// Decodes a WGS84 coordinate field to decimal degrees.
///
/// The field is `DDMMmmmH` with a hemisphere of `N`, `S`, `E` or `W`, or a
/// longitude `DDDMMmmmE` with three degree digits. The result is
/// `degrees + (minutes + thousandths / 1000) / 60` and negative on the
/// southern and western hemisphere.
///
/// # Errors
///
/// Returns [`Error::MalformedCoordinate`] if the field has neither length,
/// a digit group is not numeric or the hemisphere is invalid.
///
/// # Examples
///
/// ```
/// let lat = igc::decode_wgs84(b"5207650N")?;
/// let lon = igc::decode_wgs84(b"0610100W")?;
/// assert!((lat - 52.1275).abs() < 1e-9);
/// assert!((lon + 6.168333333).abs() < 1e-9);
/// assert_eq!(igc::decode_wgs84(b"00610100W")?, lon);
/// # Ok::<(), igc::Error>(())
/// ```
pub fn decode_wgs84(field: &[u8]) -> Result<f64, Error> {
    match field.len() {
        LATITUDE_LENGTH => decode(field, "coordinate", 2, b"NE", b"SW"),
        LONGITUDE_LENGTH => decode(field, "longitude", 3, b"E", b"W"),
        _ => Err(Error::MalformedCoordinate {
            field: "coordinate",
            bytes: field.to_vec(),
        }),
    }
}

/// Decodes the latitude of a B record, which must be `N` or `S`.
pub(crate) fn decode_latitude(field: &[u8; LATITUDE_LENGTH]) -> Result<f64, Error> {
    decode(field, "latitude", 2, b"N", b"S")
}

/// Decodes the longitude of a B record, which must be `E` or `W`.
///
/// Some recorders write only two degree digits after a separator byte, so
/// the degrees start at the second byte if the first is not a digit.
pub(crate) fn decode_longitude(field: &[u8; LONGITUDE_LENGTH]) -> Result<f64, Error> {
    match field {
        [hundreds, ..] if hundreds.is_ascii_digit() => decode(field, "longitude", 3, b"E", b"W"),
        [_, rest @ ..] => decode(rest, "longitude", 2, b"E", b"W"),
    }
}

/// Decodes `deg_len` degree digits, five minute digits and the hemisphere.
///
/// `field` must be `deg_len + 6` bytes long.
fn decode(
    field: &[u8],
    axis: &'static str,
    deg_len: usize,
    positive: &[u8],
    negative: &[u8],
) -> Result<f64, Error> {
    let malformed = || Error::MalformedCoordinate {
        field: axis,
        bytes: field.to_vec(),
    };

    let deg = parse_numeric!(u32, &field[..deg_len], malformed())? as f64;
    let min = parse_numeric!(u32, &field[deg_len..deg_len + 2], malformed())? as f64;
    let thousandths = parse_numeric!(u32, &field[deg_len + 2..deg_len + 5], malformed())? as f64;

    let decimal = deg + (min + thousandths / 1000.0) / 60.0;

    match field[deg_len + 5] {
        hem if positive.contains(&hem) => Ok(decimal),
        hem if negative.contains(&hem) => Ok(-decimal),
        _ => Err(malformed()),
    }
}

/// Decodes a `HHMMSS` field to the time elapsed since midnight.
///
/// Only the digits are validated. Recorders roll over past midnight UTC
/// so hours of 24 or more are accepted as is.
///
/// # Errors
///
/// Returns [`Error::MalformedTimestamp`] if the field is not six digits.
pub fn decode_time_of_day(field: &[u8]) -> Result<TimeDelta, Error> {
    let malformed = || Error::MalformedTimestamp {
        bytes: field.to_vec(),
    };

    if field.len() != TIME_LENGTH {
        return Err(malformed());
    }

    let hh = parse_numeric!(i64, &field[0..2], malformed())?;
    let mm = parse_numeric!(i64, &field[2..4], malformed())?;
    let ss = parse_numeric!(i64, &field[4..6], malformed())?;

    Ok(TimeDelta::hours(hh) + TimeDelta::minutes(mm) + TimeDelta::seconds(ss))
}

/// Encodes decimal degrees as a `DDMMmmmN` latitude field.
pub fn encode_latitude(value: f64) -> String {
    encode(value, 2, if value < 0.0 { 'S' } else { 'N' })
}

/// Encodes decimal degrees as a `DDDMMmmmE` longitude field.
pub fn encode_longitude(value: f64) -> String {
    encode(value, 3, if value < 0.0 { 'W' } else { 'E' })
}

fn encode(value: f64, deg_len: usize, hem: char) -> String {
    // round once on the smallest unit so minutes never end up as 60
    let total = (value.abs() * THOUSANDTHS_PER_DEGREE).round() as u64;
    let deg = total / 60_000;
    let min = total % 60_000 / 1000;
    let thousandths = total % 1000;

    format!("{deg:0deg_len$}{min:02}{thousandths:03}{hem}")
}

/// Encodes the time since midnight as a `HHMMSS` field.
///
/// Fractional seconds are truncated.
pub fn encode_time_of_day(time: TimeDelta) -> String {
    let secs = time.num_seconds();
    format!(
        "{:02}{:02}{:02}",
        secs / 3600,
        secs % 3600 / 60,
        secs % 60
    )
}
