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

//! IGC flight recorder log parser.
//!
//! This crate decodes the header and the track of [IGC] files, the format
//! written by glider and paraglider flight recorders. A file is read as a
//! sequence of lines from a [`LineSource`]: first the [`IgcHeader`] from the
//! A and H records, then the [`Track`] from the B records. The header decoder
//! leaves the source at the first line it doesn't consume, so the header of
//! a file can be read without reading its track.
//!
//! # Examples
//!
//! Lets decode a short flight and print where it started:
//!
//! ```
//! use igc::{IgcHeader, LineReader, Track};
//!
//! # fn main() -> Result<(), igc::Error> {
//! let data = b"AXSDUB4963\r\n\
//!              HFDTE090824\r\n\
//!              HFPLTPILOTINCHARGE:JuM\r\n\
//!              B1015305207650N00610100EA0012300150\r\n";
//!
//! let mut source = LineReader::new(&data[..]);
//! let header = IgcHeader::decode(&mut source)?;
//! let track = Track::decode(&mut source)?;
//!
//! let start = &track.points[0];
//! println!(
//!     "{} took off at {:.4}, {:.4}",
//!     header.pilot_name, start.latitude, start.longitude
//! ); // => "JuM took off at 52.1275, 6.1683"
//! #     Ok(())
//! # }
//! ```
//!
//! A B record that can't be decoded doesn't stop the track decoder. It is
//! skipped and reported in [`Track::errors`] instead. Only an unreadable
//! source or a file not starting with an A record fail the whole decode.
//!
//! [IGC]: https://xp-soaring.github.io/igc_file_format/igc_format_2008.html

#[macro_use]
mod macros;

mod codec;
mod error;
mod field;
mod header;
mod record;
mod source;
mod track;

pub(crate) use igc_derive::Record;

pub mod fields;
pub mod records;
pub use codec::{
    decode_time_of_day, decode_wgs84, encode_latitude, encode_longitude, encode_time_of_day,
};
pub use error::{Error, RecordError};
pub use field::{Bytes, FixedField};
pub use header::IgcHeader;
pub use source::{LineReader, LineSource};
pub use track::{Fixes, Track, TrackPoint};
