use std::io::BufRead;

use tracing::debug;

use crate::error::{Error, Result};
use crate::parser::LineParser;
use crate::tally::Tally;

pub struct Scanner {
    parser: LineParser,
}

impl Scanner {
    pub fn new() -> Result<Self> {
        Ok(Scanner {
            parser: LineParser::new()?,
        })
    }

    /// Reads `reader` to the end and returns the (ip, url) tallies. Lines
    /// without the expected shape are counted under the empty key in both.
    /// The first read error aborts the scan and nothing is returned.
    pub fn scan<R: BufRead>(&self, mut reader: R) -> Result<(Tally, Tally)> {
        let mut ips = Tally::new();
        let mut urls = Tally::new();

        let mut buffer = Vec::with_capacity(1024);
        let mut lines: u64 = 0;
        let mut unmatched: u64 = 0;

        loop {
            buffer.clear();
            let bytes_read = reader.read_until(b'\n', &mut buffer).map_err(Error::Read)?;
            if bytes_read == 0 {
                break;
            }

            if buffer.ends_with(b"\n") {
                buffer.pop();
                if buffer.ends_with(b"\r") {
                    buffer.pop();
                }
            }

            lines += 1;
            let line = String::from_utf8_lossy(&buffer);
            let entry = self.parser.parse(&line);

            if entry.is_unmatched() {
                unmatched += 1;
            }

            ips.increment(&entry.ip);
            urls.increment(&entry.path);
        }

        debug!(
            lines,
            unmatched,
            distinct_ips = ips.len(),
            distinct_urls = urls.len(),
            "scan complete"
        );

        Ok((ips, urls))
    }
}

pub fn scan<R: BufRead>(reader: R) -> Result<(Tally, Tally)> {
    Scanner::new()?.scan(reader)
}
