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

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use chrono::{NaiveDateTime, NaiveTime, TimeDelta};
use igc::{IgcHeader, LineReader, LineSource, Track, TrackPoint};
use log::debug;

use crate::Error;

/// A decoded IGC file: its header and its track.
#[derive(Clone, PartialEq, Debug)]
pub struct Flight {
    pub header: IgcHeader,
    pub track: Track,
}

impl Flight {
    /// Decodes header and track from a line source.
    ///
    /// # Errors
    ///
    /// Returns an error if the header is malformed or the source is
    /// unreadable.
    pub fn decode<S>(source: &mut S) -> Result<Self, igc::Error>
    where
        S: LineSource + ?Sized,
    {
        let header = IgcHeader::decode(source)?;
        let track = Track::decode(source)?;
        Ok(Self { header, track })
    }

    /// Decodes a flight from a reader.
    ///
    /// # Errors
    ///
    /// See [`decode`](Flight::decode).
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, igc::Error> {
        Self::decode(&mut LineReader::new(BufReader::new(reader)))
    }

    /// Opens and decodes an IGC file. The file is closed before returning.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] if the file can't be opened or decoded.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let mut source = open_source(path)?;
        Self::decode(&mut source).map_err(|error| decode_error(path, error))
    }

    /// Opens an IGC file and decodes the track only if `accept` returns
    /// `true` for the header. Otherwise the file is closed right after its
    /// header and `None` is returned.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] if the file can't be opened or decoded.
    pub fn open_if<P, F>(path: P, accept: F) -> Result<Option<Self>, Error>
    where
        P: AsRef<Path>,
        F: FnOnce(&IgcHeader) -> bool,
    {
        let path = path.as_ref();
        let mut source = open_source(path)?;

        let header = IgcHeader::decode(&mut source).map_err(|error| decode_error(path, error))?;
        if !accept(&header) {
            debug!("{} not selected", path.display());
            return Ok(None);
        }

        let track = Track::decode(&mut source).map_err(|error| decode_error(path, error))?;
        Ok(Some(Self { header, track }))
    }

    /// Time between the first and the last fix.
    pub fn duration(&self) -> Option<TimeDelta> {
        self.track.duration()
    }

    /// Returns the UTC date and time of a track point.
    ///
    /// Returns `None` if the header has no date.
    pub fn timestamp(&self, point: &TrackPoint) -> Option<NaiveDateTime> {
        self.header
            .track_date
            .map(|date| date.and_time(NaiveTime::MIN) + point.time)
    }
}

fn open_source(path: &Path) -> Result<LineReader<BufReader<File>>, Error> {
    let file = File::open(path).map_err(|e| decode_error(path, e.into()))?;
    Ok(LineReader::new(BufReader::new(file)))
}

fn decode_error(path: &Path, error: igc::Error) -> Error {
    Error::Decode {
        path: path.to_path_buf(),
        error,
    }
}
