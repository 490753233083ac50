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

use chrono::NaiveDate;
use log::{debug, warn};

use crate::records::RecordKind;
use crate::{Error, LineSource};

const DATE: &[u8] = b"HFDTE";
const PILOT_IN_CHARGE: &[u8] = b"HFPLTPILOTINCHARGE:";
const GLIDER_TYPE: &[u8] = b"HFGTYGLIDERTYPE:";
const GLIDER_ID: &[u8] = b"HFGIDGLIDERID:";
const FR_TYPE: &[u8] = b"HFFTYFRTYPE:";

/// Header of an IGC file as given by its H records.
///
/// Fields whose H record is missing keep their default, i.e. no date and
/// empty strings.
#[derive(Clone, Eq, PartialEq, Hash, Default, Debug)]
pub struct IgcHeader {
    /// UTC date of the recording (`HFDTE`).
    pub track_date: Option<NaiveDate>,
    /// Pilot in charge (`HFPLT`).
    pub pilot_name: String,
    /// Glider model (`HFGTY`).
    pub glider_type: String,
    /// Glider registration or other identification (`HFGID`).
    pub glider_id: String,
    /// Flight recorder manufacturer and model (`HFFTY`).
    pub hardware_type: String,
}

impl IgcHeader {
    /// Decodes the header from the A record and the H records following it.
    ///
    /// Reading stops at the first line that is not an H record. That line is
    /// pushed back to the source, which is then positioned for the
    /// [track decoder](crate::Track::decode). Unknown H records are ignored
    /// and malformed fields are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedHeader`] if the first line is not an A record
    /// and [`Error::UnreadableSource`] if reading fails.
    pub fn decode<S>(source: &mut S) -> Result<Self, Error>
    where
        S: LineSource + ?Sized,
    {
        match source.next_line()? {
            Some(line) if RecordKind::of(&line) == RecordKind::Manufacturer => {
                debug!("header decode: {}", String::from_utf8_lossy(&line));
            }
            _ => return Err(Error::MalformedHeader),
        }

        let mut header = Self::default();

        while let Some(line) = source.next_line()? {
            if RecordKind::of(&line) != RecordKind::Header {
                source.push_back(line);
                break;
            }

            if let Err(e) = header.add_record(&line) {
                warn!("skipping header field on line {}: {e}", source.line_number());
            }
        }

        debug!("header decoded: {:?}", header);
        Ok(header)
    }

    fn add_record(&mut self, line: &[u8]) -> Result<(), Error> {
        if let Some(value) = line.strip_prefix(DATE) {
            self.track_date = Some(parse_date(value)?);
        } else if let Some(value) = line.strip_prefix(PILOT_IN_CHARGE) {
            self.pilot_name = text(value);
        } else if let Some(value) = line.strip_prefix(GLIDER_TYPE) {
            self.glider_type = text(value);
        } else if let Some(value) = line.strip_prefix(GLIDER_ID) {
            self.glider_id = text(value);
        } else if let Some(value) = line.strip_prefix(FR_TYPE) {
            self.hardware_type = text(value);
        }

        Ok(())
    }
}

fn text(value: &[u8]) -> String {
    String::from_utf8_lossy(value.trim_ascii()).into_owned()
}

/// Parses `DDMMYY`, optionally tagged as `DATE:DDMMYY,NN` by newer recorders.
fn parse_date(value: &[u8]) -> Result<NaiveDate, Error> {
    let value = value.strip_prefix(b"DATE:").unwrap_or(value);
    let malformed = || Error::MalformedDate {
        bytes: value.to_vec(),
    };

    let digits = value.get(..6).ok_or_else(malformed)?;
    let dd = parse_numeric!(u32, &digits[0..2], malformed())?;
    let mm = parse_numeric!(u32, &digits[2..4], malformed())?;
    let yy = parse_numeric!(i32, &digits[4..6], malformed())?;

    // two digit years above 80 are from the last century
    let year = if yy > 80 { 1900 + yy } else { 2000 + yy };

    NaiveDate::from_ymd_opt(year, mm, dd).ok_or_else(malformed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LineReader;

    fn decode(data: &[u8]) -> Result<IgcHeader, Error> {
        IgcHeader::decode(&mut LineReader::new(data))
    }

    #[test]
    fn decodes_header_fields() {
        let header = decode(
            b"AXSDUB4963\r\n\
              HFDTE090824\r\n\
              HFPLTPILOTINCHARGE:JuM\r\n\
              HFCM2CREW2:NIL\r\n\
              HFGTYGLIDERTYPE:photon\r\n\
              HFGIDGLIDERID:NKN\r\n\
              HFFTYFRTYPE:STODEUS,ULTRABIP\r\n\
              LMMMGPSPERIOD1000MSEC\r\n",
        )
        .expect("header should decode");

        assert_eq!(header.track_date, NaiveDate::from_ymd_opt(2024, 8, 9));
        assert_eq!(header.pilot_name, "JuM");
        assert_eq!(header.glider_type, "photon");
        assert_eq!(header.glider_id, "NKN");
        assert_eq!(header.hardware_type, "STODEUS,ULTRABIP");
    }

    #[test]
    fn missing_fields_are_defaults() {
        let header = decode(b"AXXXSOAR\r\n").expect("header should decode");
        assert_eq!(header, IgcHeader::default());
    }

    #[test]
    fn first_record_must_be_manufacturer() {
        assert_eq!(decode(b"HFDTE090824\r\n"), Err(Error::MalformedHeader));
        assert_eq!(decode(b""), Err(Error::MalformedHeader));
    }

    #[test]
    fn expands_two_digit_years() {
        let year = |yy: &str| {
            decode(format!("AXXX\nHFDTE0101{yy}\n").as_bytes())
                .expect("header should decode")
                .track_date
                .map(|d| chrono::Datelike::year(&d))
        };

        assert_eq!(year("81"), Some(1981));
        assert_eq!(year("99"), Some(1999));
        assert_eq!(year("24"), Some(2024));
        assert_eq!(year("80"), Some(2080));
        assert_eq!(year("00"), Some(2000));
    }

    #[test]
    fn accepts_tagged_date() {
        let header = decode(b"AXXX\nHFDTEDATE:150723,01\n").expect("header should decode");
        assert_eq!(header.track_date, NaiveDate::from_ymd_opt(2023, 7, 15));
    }

    #[test]
    fn skips_malformed_date() {
        let header = decode(
            b"AXXX\n\
              HFDTE09O824\n\
              HFPLTPILOTINCHARGE:JuM\n",
        )
        .expect("header should decode");

        assert_eq!(header.track_date, None);
        assert_eq!(header.pilot_name, "JuM");

        let header = decode(b"AXXX\nHFDTE310224\n").expect("header should decode");
        assert_eq!(header.track_date, None);

        let header = decode(b"AXXX\nHFDTE0908\n").expect("header should decode");
        assert_eq!(header.track_date, None);
    }

    #[test]
    fn prefixes_are_case_sensitive() {
        let header = decode(b"AXXX\nHFPLTPilotInCharge:JuM\n").expect("header should decode");
        assert_eq!(header.pilot_name, "");
    }

    #[test]
    fn stops_at_first_non_header_line() {
        let mut source = LineReader::new(
            &b"AXXX\n\
               HFPLTPILOTINCHARGE:JuM\n\
               B1015305207650N00610100EA0012300150\n\
               HFGTYGLIDERTYPE:photon\n"[..],
        );

        let header = IgcHeader::decode(&mut source).expect("header should decode");
        assert_eq!(header.glider_type, "");
        assert_eq!(source.line_number(), 2);
        assert_eq!(
            source.next_line(),
            Ok(Some(b"B1015305207650N00610100EA0012300150".to_vec()))
        );
    }
}
