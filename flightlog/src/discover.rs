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

//! Discovery of IGC files below a directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{trace, warn};

/// Returns `true` if the path has an `igc` extension in any case.
pub fn is_igc(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("igc"))
}

/// Recursively collects all IGC files below `root`.
///
/// The paths are sorted, so the result doesn't depend on the order in which
/// the file system lists directories. Subdirectories that can't be read are
/// logged and skipped.
///
/// # Errors
///
/// Returns an error if `root` itself can't be read.
pub fn igc_files<P: AsRef<Path>>(root: P) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    visit_dir(root.as_ref(), &mut files)?;
    files.sort();
    Ok(files)
}

fn visit_dir(dir: &Path, files: &mut Vec<PathBuf>) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();

        if path.is_dir() {
            if let Err(e) = visit_dir(&path, files) {
                warn!("skipping directory {}: {e}", path.display());
            }
        } else if is_igc(&path) {
            trace!("found {}", path.display());
            files.push(path);
        }
    }

    Ok(())
}
