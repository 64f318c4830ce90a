use std::io::{Read, Write};

use anyhow::Context;

use crate::window::WindowScanner;

pub const PACKET_MARKER_SIZE: usize = 4;
pub const MESSAGE_MARKER_SIZE: usize = 14;

/// Reads all of `reader`, scans it, and writes the marker position to
/// `writer` as bare decimal digits.
pub fn solve<R: Read, W: Write>(
    mut reader: R,
    mut writer: W,
    scanner: &WindowScanner,
) -> anyhow::Result<usize> {
    let mut input = Vec::new();
    reader
        .read_to_end(&mut input)
        .context("could not read input")?;
    log::debug!("read {} bytes", input.len());
    let position = scanner.find_first_unique_window(&input)?;
    write!(writer, "{}", position).context("could not write position")?;
    writer.flush()?;
    Ok(position)
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::{solve, MESSAGE_MARKER_SIZE, PACKET_MARKER_SIZE};
    use crate::error::ScanError;
    use crate::window::{Strategy, WindowScanner};

    #[test]
    fn test_writes_bare_position() {
        let mut out = Vec::new();
        let scanner = WindowScanner::new(MESSAGE_MARKER_SIZE);
        let position = solve(&b"bvwbjplbgvbhsrlpgdmjqwftvncz"[..], &mut out, &scanner).unwrap();
        assert_eq!(position, 23);
        assert_eq!(out, b"23");
    }

    #[test]
    fn test_trailing_newline_is_input() {
        let mut out = Vec::new();
        let scanner = WindowScanner::new(PACKET_MARKER_SIZE).with_strategy(Strategy::Sliding);
        solve(&b"mjqjpqmgbljsphdztnvjfqwrcgsmlb\n"[..], &mut out, &scanner).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "7");
    }

    #[test]
    fn test_not_found_writes_nothing() {
        let mut out = Vec::new();
        let scanner = WindowScanner::new(PACKET_MARKER_SIZE);
        let err = solve(&b"aaaa"[..], &mut out, &scanner).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ScanError>(),
            Some(&ScanError::NotFound { size: 4, len: 4 })
        );
        assert!(out.is_empty());
    }

    struct FailingReader;

    impl io::Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "boom"))
        }
    }

    #[test]
    fn test_read_failure() {
        let scanner = WindowScanner::new(PACKET_MARKER_SIZE);
        let err = solve(FailingReader, io::sink(), &scanner).unwrap_err();
        assert_eq!(err.to_string(), "could not read input");
    }
}
