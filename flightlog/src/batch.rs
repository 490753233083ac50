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

//! Decoding of many files on worker threads.
//!
//! Each file is decoded independently, so the workers share nothing but the
//! index of the next file to pick.

use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use log::debug;

use crate::{Error, Flight};

/// Returns the number of workers to use if none is configured.
pub fn default_jobs() -> NonZeroUsize {
    thread::available_parallelism().unwrap_or(NonZeroUsize::MIN)
}

/// Applies `f` to every path on up to `jobs` threads.
///
/// The results are in the order of `paths`, the same as if `f` was applied
/// sequentially.
pub fn map<T, F>(paths: &[PathBuf], jobs: NonZeroUsize, f: F) -> Vec<T>
where
    T: Send,
    F: Fn(&Path) -> T + Sync,
{
    let workers = jobs.get().min(paths.len());
    if workers <= 1 {
        return paths.iter().map(|path| f(path.as_path())).collect();
    }

    debug!("decoding {} file(s) on {} threads", paths.len(), workers);
    let next = AtomicUsize::new(0);

    let mut results: Vec<(usize, T)> = thread::scope(|s| {
        let handles: Vec<_> = (0..workers)
            .map(|_| {
                s.spawn(|| {
                    let mut done = Vec::new();
                    loop {
                        let i = next.fetch_add(1, Ordering::Relaxed);
                        match paths.get(i) {
                            Some(path) => done.push((i, f(path.as_path()))),
                            None => break done,
                        }
                    }
                })
            })
            .collect();

        handles
            .into_iter()
            .flat_map(|h| h.join().unwrap_or_else(|e| std::panic::resume_unwind(e)))
            .collect()
    });

    results.sort_unstable_by_key(|(i, _)| *i);
    results.into_iter().map(|(_, result)| result).collect()
}

/// Opens and decodes every file on up to `jobs` threads.
///
/// A file that fails doesn't affect the others.
pub fn open_all(paths: &[PathBuf], jobs: NonZeroUsize) -> Vec<Result<Flight, Error>> {
    map(paths, jobs, |path| Flight::open(path))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn jobs(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).expect("jobs should not be zero")
    }

    #[test]
    fn keeps_order_of_paths() {
        let paths: Vec<PathBuf> = (0..100).map(|i| PathBuf::from(format!("{i}.igc"))).collect();
        let names = map(&paths, jobs(7), |path| path.display().to_string());
        let expected: Vec<_> = (0..100).map(|i| format!("{i}.igc")).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn handles_no_paths() {
        let results = map(&[], jobs(4), |path| path.to_path_buf());
        assert!(results.is_empty());
    }

    #[test]
    fn concurrent_decoding_matches_sequential() {
        let dir = tempfile::tempdir().expect("temp dir should be created");
        let mut paths = Vec::new();

        for n in 0..12 {
            let path = dir.path().join(format!("{n:02}.igc"));
            let data = if n % 5 == 4 {
                // not an IGC file
                "<gpx/>\n".to_string()
            } else {
                let mut data = format!("AXXX\nHFDTE0908{:02}\nHFPLTPILOTINCHARGE:P{n}\n", 10 + n);
                for s in 0..=n {
                    data.push_str(&format!("B1200{s:02}5207650N00610100EA0012300150\n"));
                }
                data
            };
            fs::write(&path, data).expect("file should be written");
            paths.push(path);
        }

        let sequential = open_all(&paths, jobs(1));
        let concurrent = open_all(&paths, jobs(4));

        assert_eq!(sequential, concurrent);
        assert_eq!(concurrent.iter().filter(|r| r.is_err()).count(), 2);
        assert!(concurrent[11]
            .as_ref()
            .is_ok_and(|f| f.header.pilot_name == "P11" && f.track.points.len() == 12));
    }
}
