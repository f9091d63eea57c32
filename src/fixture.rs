//! Read-side access to generated fixtures.
//!
//! Files are memory-mapped and scanned in place, so checking the 10,000,000
//! value tier does not need a second copy of it in memory.

use std::fs::File;
use std::io;
use std::os::fd::AsRawFd;
use std::path::{Path, PathBuf};
use std::ptr;
use std::slice;

use crate::error::{Error, Result};
use crate::tier::Tier;

#[cfg(target_os = "linux")]
const MAP_POPULATE: libc::c_int = libc::MAP_POPULATE;

#[cfg(not(target_os = "linux"))]
const MAP_POPULATE: libc::c_int = 0;

/// Read-only private mapping of a whole file. Unmapped on drop.
struct Mapping {
    ptr: *mut libc::c_void,
    len: usize,
}

impl Mapping {
    fn of(file: &File) -> io::Result<Mapping> {
        let len = map_len(file.metadata()?.len())?;
        if len == 0 {
            // mmap rejects zero-length mappings.
            return Ok(Mapping {
                ptr: ptr::null_mut(),
                len: 0,
            });
        }

        let ptr = unsafe {
            libc::mmap(
                ptr::null_mut(),
                len,
                libc::PROT_READ,
                libc::MAP_PRIVATE | MAP_POPULATE,
                file.as_raw_fd(),
                0,
            )
        };
        if ptr == libc::MAP_FAILED {
            return Err(io::Error::last_os_error());
        }
        let mapping = Mapping { ptr, len };

        for advice in [libc::MADV_SEQUENTIAL, libc::MADV_WILLNEED] {
            if unsafe { libc::madvise(ptr, len, advice) } == -1 {
                return Err(io::Error::last_os_error());
            }
        }

        Ok(mapping)
    }

    fn as_bytes(&self) -> &[u8] {
        if self.len == 0 {
            return &[];
        }
        // SAFETY: ptr is a live PROT_READ mapping of len bytes until drop.
        unsafe { slice::from_raw_parts(self.ptr as *const u8, self.len) }
    }
}

impl Drop for Mapping {
    fn drop(&mut self) {
        if self.len != 0 {
            unsafe {
                libc::munmap(self.ptr, self.len);
            }
        }
    }
}

/// File size as a mapping length; refuses files the address space cannot hold.
fn map_len(size: u64) -> io::Result<usize> {
    usize::try_from(size).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("file of {size} bytes does not fit in the address space"),
        )
    })
}

/// Summary of a fixture that passed verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixtureReport {
    pub tokens: u64,
    pub min: u64,
    pub max: u64,
}

/// A fixture file mapped into memory.
pub struct Fixture {
    path: PathBuf,
    map: Mapping,
}

impl Fixture {
    pub fn open(path: impl AsRef<Path>) -> Result<Fixture> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path).map_err(|source| Error::Open {
            path: path.clone(),
            source,
        })?;
        let map = Mapping::of(&file).map_err(|source| Error::Map {
            path: path.clone(),
            source,
        })?;
        Ok(Fixture { path, map })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.map.as_bytes()
    }

    /// Parses every value in file order.
    pub fn numbers(&self) -> Result<Vec<u64>> {
        let mut numbers = Vec::new();
        self.scan(|value| {
            numbers.push(value);
            Ok(())
        })?;
        Ok(numbers)
    }

    /// Checks layout, value range and value count against `tier`.
    pub fn verify(&self, tier: Tier) -> Result<FixtureReport> {
        let max_allowed = tier.count();
        let mut report = FixtureReport {
            tokens: 0,
            min: u64::MAX,
            max: 0,
        };

        self.scan(|value| {
            if value > max_allowed {
                return Err(Error::OutOfRange {
                    path: self.path.clone(),
                    value,
                    max: max_allowed,
                });
            }
            report.tokens += 1;
            report.min = report.min.min(value);
            report.max = report.max.max(value);
            Ok(())
        })?;

        if report.tokens != tier.count() {
            return Err(Error::TokenCount {
                path: self.path.clone(),
                expected: tier.count(),
                found: report.tokens,
            });
        }

        Ok(report)
    }

    /// Walks `<digits>( <digits>)*`, handing each value to `f`.
    fn scan<F>(&self, mut f: F) -> Result<()>
    where
        F: FnMut(u64) -> Result<()>,
    {
        let bytes = self.as_bytes();
        let malformed = |offset, reason| Error::Format {
            path: self.path.clone(),
            offset,
            reason,
        };

        let mut pos = 0;
        while pos < bytes.len() {
            let start = pos;
            let mut value: u64 = 0;
            while let Some(&b) = bytes.get(pos).filter(|b| b.is_ascii_digit()) {
                value = value
                    .checked_mul(10)
                    .and_then(|v| v.checked_add(u64::from(b - b'0')))
                    .ok_or_else(|| malformed(start, "value overflows u64"))?;
                pos += 1;
            }

            match pos - start {
                0 => {
                    let reason = match bytes[pos] {
                        b' ' if start == 0 => "leading separator",
                        b' ' => "repeated separator",
                        b'\n' | b'\r' => "line break",
                        _ => "non-digit byte",
                    };
                    return Err(malformed(pos, reason));
                }
                len if len > 1 && bytes[start] == b'0' => {
                    return Err(malformed(start, "leading zero"));
                }
                _ => {}
            }
            f(value)?;

            match bytes.get(pos) {
                None => break,
                Some(b' ') if pos + 1 == bytes.len() => {
                    return Err(malformed(pos, "trailing separator"));
                }
                Some(b' ') => pos += 1,
                Some(b'\n' | b'\r') => return Err(malformed(pos, "line break")),
                Some(_) => return Err(malformed(pos, "non-digit byte")),
            }
        }

        Ok(())
    }
}

/// Verifies `dir/numbers_<count>.txt` for each tier, stopping at the first
/// missing or invalid file.
pub fn verify_dir(dir: &Path, tiers: &[Tier]) -> Result<Vec<FixtureReport>> {
    tiers
        .iter()
        .map(|&tier| Fixture::open(dir.join(tier.file_name()))?.verify(tier))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn fixture(contents: &str) -> (tempfile::TempDir, Fixture) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("numbers_10.txt");
        fs::write(&path, contents).unwrap();
        let fixture = Fixture::open(&path).unwrap();
        (dir, fixture)
    }

    fn tier10() -> Tier {
        Tier::new(0).unwrap()
    }

    fn format_reason(contents: &str) -> &'static str {
        let (_dir, f) = fixture(contents);
        match f.verify(tier10()) {
            Err(Error::Format { reason, .. }) => reason,
            other => panic!("expected format error for {contents:?}, got {other:?}"),
        }
    }

    #[test]
    fn valid_ten() {
        let (_dir, f) = fixture("3 10 0 7 2 9 1 4 6 0");
        let report = f.verify(tier10()).unwrap();
        assert_eq!(
            report,
            FixtureReport {
                tokens: 10,
                min: 0,
                max: 10
            }
        );
        assert_eq!(f.numbers().unwrap(), [3, 10, 0, 7, 2, 9, 1, 4, 6, 0]);
    }

    #[test]
    fn layout_errors() {
        assert_eq!(format_reason(" 3 10 0 7 2 9 1 4 6 0"), "leading separator");
        assert_eq!(format_reason("3 10 0 7 2 9 1 4 6 0 "), "trailing separator");
        assert_eq!(format_reason("3 10  0 7 2 9 1 4 6 0"), "repeated separator");
        assert_eq!(format_reason("3 10 0 7 2 9 1 4 6 0\n"), "line break");
        assert_eq!(format_reason("3 10 0 7\n2 9 1 4 6 0"), "line break");
        assert_eq!(format_reason("3 10 0 7 2 9 1 4 6 -0"), "non-digit byte");
        assert_eq!(format_reason("3 10 0 7 2 9 1 4 6 05"), "leading zero");
        assert_eq!(format_reason("3,10"), "non-digit byte");
    }

    #[test]
    fn out_of_range() {
        let (_dir, f) = fixture("3 11 0 7 2 9 1 4 6 0");
        assert!(matches!(
            f.verify(tier10()),
            Err(Error::OutOfRange {
                value: 11,
                max: 10,
                ..
            })
        ));
    }

    #[test]
    fn wrong_count() {
        let (_dir, f) = fixture("3 10 0 7 2 9 1 4 6");
        assert!(matches!(
            f.verify(tier10()),
            Err(Error::TokenCount {
                expected: 10,
                found: 9,
                ..
            })
        ));
    }

    #[test]
    fn empty_file() {
        let (_dir, f) = fixture("");
        assert!(f.as_bytes().is_empty());
        assert!(f.numbers().unwrap().is_empty());
        assert!(matches!(
            f.verify(tier10()),
            Err(Error::TokenCount { found: 0, .. })
        ));
    }

    #[test]
    fn map_len_accepts_address_sized_files() {
        assert_eq!(map_len(0).unwrap(), 0);
        assert_eq!(map_len(78_888_890).unwrap(), 78_888_890);
    }

    #[cfg(target_pointer_width = "32")]
    #[test]
    fn map_len_rejects_files_past_usize() {
        let err = map_len(u64::from(u32::MAX) + 1).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn path_is_the_opened_path() {
        let (dir, f) = fixture("0");
        assert_eq!(f.path(), dir.path().join("numbers_10.txt"));
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = verify_dir(dir.path(), &[tier10()]).unwrap_err();
        assert!(matches!(err, Error::Open { .. }));
    }
}
