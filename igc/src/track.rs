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

use chrono::TimeDelta;
use log::{debug, trace, warn};

use crate::fields::Validity;
use crate::records::{Fix, RecordKind};
use crate::{Error, LineSource, RecordError};

/// One GNSS fix of the track.
#[derive(Clone, PartialEq, Debug)]
pub struct TrackPoint {
    /// Time elapsed since midnight UTC of the track date.
    pub time: TimeDelta,
    /// Latitude in decimal degrees, negative on the southern hemisphere.
    pub latitude: f64,
    /// Longitude in decimal degrees, negative on the western hemisphere.
    pub longitude: f64,
    pub validity: Validity,
    /// Barometric altitude in meters (ISA 1013.25 hPa).
    pub pressure_altitude: Option<i32>,
    /// GNSS altitude in meters above the ellipsoid.
    pub gnss_altitude: Option<i32>,
    /// Raw bytes following the GNSS altitude.
    pub extension: Option<String>,
}

impl TrackPoint {
    /// Decodes a track point from one B record line.
    ///
    /// # Errors
    ///
    /// Returns an error if the line is truncated or a field is malformed.
    pub fn decode(line: &[u8]) -> Result<Self, Error> {
        Fix::try_from(line)?.try_into()
    }
}

impl<'a> TryFrom<Fix<'a>> for TrackPoint {
    type Error = Error;

    fn try_from(fix: Fix<'a>) -> Result<Self, Self::Error> {
        Ok(Self {
            time: fix.time.time_of_day()?,
            latitude: fix.latitude.as_decimal()?,
            longitude: fix.longitude.as_decimal()?,
            validity: fix.validity,
            pressure_altitude: fix.pressure_altitude.map(|a| a.as_meters()).transpose()?,
            gnss_altitude: fix.gnss_altitude.map(|a| a.as_meters()).transpose()?,
            extension: fix.extension.map(|e| e.to_string_lossy().into_owned()),
        })
    }
}

/// Lazy iterator over the track points of a line source.
///
/// Every remaining line of the source is read; lines that are not B records
/// are skipped. A B record that fails to decode is yielded as
/// [`RecordError`] and iteration continues with the next line. If the source
/// becomes unreadable, that error is yielded once and iteration ends.
///
/// # Examples
///
/// ```
/// use igc::{Fixes, IgcHeader, LineReader};
///
/// let data = b"AXXX\nHFDTE090824\nB1015305207650N00610100EA0012300150\nB10153\n";
/// let mut source = LineReader::new(&data[..]);
/// IgcHeader::decode(&mut source)?;
///
/// let mut fixes = Fixes::new(&mut source);
/// assert!(fixes.next().is_some_and(|fix| fix.is_ok()));
/// assert!(fixes.next().is_some_and(|fix| fix.is_err()));
/// assert!(fixes.next().is_none());
/// # Ok::<(), igc::Error>(())
/// ```
pub struct Fixes<S> {
    source: S,
    done: bool,
}

impl<S: LineSource> Fixes<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            done: false,
        }
    }
}

impl<S: LineSource> Iterator for Fixes<S> {
    type Item = Result<TrackPoint, RecordError>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            let line = match self.source.next_line() {
                Ok(Some(line)) => line,
                Ok(None) => {
                    self.done = true;
                    break;
                }
                Err(error) => {
                    self.done = true;
                    return Some(Err(RecordError {
                        line: self.source.line_number() + 1,
                        error,
                    }));
                }
            };

            match RecordKind::of(&line) {
                RecordKind::Fix => {
                    return Some(TrackPoint::decode(&line).map_err(|error| RecordError {
                        line: self.source.line_number(),
                        error,
                    }));
                }
                kind => trace!("skipping {:?} record on line {}", kind, self.source.line_number()),
            }
        }

        None
    }
}

/// The track points of a file and the B records that failed to decode.
#[derive(Clone, PartialEq, Default, Debug)]
pub struct Track {
    /// Track points in the order of their lines.
    pub points: Vec<TrackPoint>,
    pub errors: Vec<RecordError>,
}

impl Track {
    /// Decodes all remaining lines of the source into a track.
    ///
    /// Malformed B records are logged, collected in [`errors`](Track::errors)
    /// and don't end decoding.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnreadableSource`] if reading fails.
    pub fn decode<S>(source: &mut S) -> Result<Self, Error>
    where
        S: LineSource + ?Sized,
    {
        let mut track = Self::default();

        for fix in Fixes::new(source) {
            match fix {
                Ok(point) => track.points.push(point),
                Err(e) if e.error.is_fatal() => return Err(e.error),
                Err(e) => {
                    warn!("skipping B record: {e}");
                    track.errors.push(e);
                }
            }
        }

        debug!(
            "track decoded: {} fix(es), {} skipped",
            track.points.len(),
            track.errors.len()
        );
        Ok(track)
    }

    /// Time between the first and the last fix.
    ///
    /// Returns `None` for a track without fixes.
    pub fn duration(&self) -> Option<TimeDelta> {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => Some(last.time - first.time),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LineReader;

    fn decode(data: &[u8]) -> Track {
        Track::decode(&mut LineReader::new(data)).expect("track should decode")
    }

    #[test]
    fn decodes_track_point() {
        let point = TrackPoint::decode(b"B1015305207650N00610100EA0012300150")
            .expect("track point should decode");

        assert_eq!(point.time, TimeDelta::seconds(10 * 3600 + 15 * 60 + 30));
        assert!((point.latitude - 52.1275).abs() < 1e-9);
        assert!((point.longitude - 6.168333333).abs() < 1e-9);
        assert_eq!(point.validity, Validity::Valid);
        assert_eq!(point.pressure_altitude, Some(123));
        assert_eq!(point.gnss_altitude, Some(150));
        assert_eq!(point.extension, None);
    }

    #[test]
    fn decodes_south_west_with_extension() {
        let point = TrackPoint::decode(b"B0000003330000S12030000WV-001200050  042")
            .expect("track point should decode");

        assert_eq!(point.latitude, -33.5);
        assert_eq!(point.longitude, -120.5);
        assert_eq!(point.validity, Validity::Invalid);
        assert_eq!(point.pressure_altitude, Some(-12));
        assert_eq!(point.gnss_altitude, Some(50));
        assert_eq!(point.extension.as_deref(), Some("  042"));
    }

    #[test]
    fn decodes_longitude_after_separator() {
        let point = TrackPoint::decode(b"B1015305207650N 0610100EA0012300150")
            .expect("track point should decode");

        assert!((point.latitude - 52.1275).abs() < 1e-9);
        assert!((point.longitude - 6.168333333).abs() < 1e-9);
        assert_eq!(point.validity, Validity::Valid);
        assert_eq!(point.pressure_altitude, Some(123));
        assert_eq!(point.gnss_altitude, Some(150));
    }

    #[test]
    fn rejects_longitude_on_latitude_hemisphere() {
        assert_eq!(
            TrackPoint::decode(b"B1015305207650N00610100NA0012300150"),
            Err(Error::MalformedCoordinate {
                field: "longitude",
                bytes: b"00610100N".to_vec()
            })
        );
    }

    #[test]
    fn skips_other_records() {
        let track = decode(
            b"LXXXCOMMENT\n\
              \n\
              B1015305207650N00610100EA0012300150\n\
              E101531PEV\n\
              B1015315207651N00610101EA0012400151\n\
              GABCDEF0123\n",
        );

        assert_eq!(track.points.len(), 2);
        assert!(track.errors.is_empty());
        assert_eq!(track.duration(), Some(TimeDelta::seconds(1)));
    }

    #[test]
    fn malformed_records_do_not_end_decoding() {
        let track = decode(
            b"B1015305207650N00610100EA0012300150\n\
              B101531520765\n\
              B10153X5207650N00610100EA0012300150\n\
              B1015335207650N00610100EA00X2300150\n\
              B1015345207650N00610100EA0012300150\n",
        );

        // 5 B records of which 3 are malformed
        assert_eq!(track.points.len(), 2);
        assert_eq!(
            track.errors,
            vec![
                RecordError {
                    line: 2,
                    error: Error::TruncatedRecord { actual: 13 }
                },
                RecordError {
                    line: 3,
                    error: Error::MalformedTimestamp {
                        bytes: b"10153X".to_vec()
                    }
                },
                RecordError {
                    line: 4,
                    error: Error::MalformedAltitude {
                        bytes: b"00X23".to_vec()
                    }
                },
            ]
        );
        assert_eq!(track.points[1].time, TimeDelta::seconds(36934));
    }

    #[test]
    fn optional_altitudes_depend_on_line_length() {
        let track = decode(
            b"B1015305207650N00610100EA0012300150\n\
              B1015305207650N00610100EA00123\n\
              B1015305207650N00610100EA\n",
        );

        let altitudes: Vec<_> = track
            .points
            .iter()
            .map(|p| (p.pressure_altitude, p.gnss_altitude))
            .collect();

        assert_eq!(
            altitudes,
            vec![(Some(123), Some(150)), (Some(123), None), (None, None)]
        );
    }

    #[test]
    fn keeps_line_order() {
        let track = decode(
            b"B1200005207650N00610100EA0012300150\n\
              B1100005207650N00610100EA0012300150\n\
              B1300005207650N00610100EA0012300150\n",
        );

        let hours: Vec<_> = track.points.iter().map(|p| p.time.num_hours()).collect();
        assert_eq!(hours, vec![12, 11, 13]);
    }

    #[test]
    fn empty_track_has_no_duration() {
        let track = decode(b"");
        assert_eq!(track, Track::default());
        assert_eq!(track.duration(), None);
    }
}
