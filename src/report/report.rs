use std::fs::File;
use std::io::{self, BufReader, Write};

use tracing::info;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::models::RankedEntry;
use crate::rank::top_k;
use crate::scanner::Scanner;
use crate::tally::Tally;

/// Rows printed under each "Top 3" header.
pub const TOP_COUNT: usize = 3;

/// Everything printed at the end of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub distinct_ips: usize,
    pub top_ips: Vec<RankedEntry>,
    pub top_urls: Vec<RankedEntry>,
}

impl Report {
    pub fn from_tallies(ips: &Tally, urls: &Tally) -> Self {
        Report {
            distinct_ips: ips.len(),
            top_ips: top_k(ips, TOP_COUNT),
            top_urls: top_k(urls, TOP_COUNT),
        }
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Number of IP's:")?;
        writeln!(out, "{}", self.distinct_ips)?;

        writeln!(out, "Top 3 IP's:")?;
        for entry in &self.top_ips {
            writeln!(out, "{}", entry)?;
        }

        writeln!(out, "Top 3 URL's")?;
        for entry in &self.top_urls {
            writeln!(out, "{}", entry)?;
        }

        out.flush()
    }
}

pub fn render<W: Write>(out: &mut W, ips: &Tally, urls: &Tally) -> Result<()> {
    Report::from_tallies(ips, urls)
        .write_to(out)
        .map_err(Error::Write)
}

/// Open, scan, rank and print the log named by `config` to `out`.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<()> {
    // compile before touching the file so a bad pattern fails first
    let scanner = Scanner::new()?;

    let file = File::open(&config.log_path).map_err(|source| Error::Open {
        path: config.log_path.clone(),
        source,
    })?;
    info!("reading {}", config.log_path.display());

    let (ips, urls) = scanner.scan(BufReader::with_capacity(16384, file))?;

    render(out, &ips, &urls)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tally(pairs: &[(&str, u64)]) -> Tally {
        let mut tally = Tally::new();
        for &(key, n) in pairs {
            for _ in 0..n {
                tally.increment(key);
            }
        }
        tally
    }

    #[test]
    fn renders_fixed_layout() {
        let ips = tally(&[("1.1.1.1", 5), ("2.2.2.2", 3), ("3.3.3.3", 2), ("4.4.4.4", 1)]);
        let urls = tally(&[("/a", 7), ("/b", 2), ("/c", 1)]);
        let mut out = Vec::new();

        render(&mut out, &ips, &urls).unwrap();

        let expected = "Number of IP's:\n4\nTop 3 IP's:\n{1.1.1.1 5}\n{2.2.2.2 3}\n{3.3.3.3 2}\nTop 3 URL's\n{/a 7}\n{/b 2}\n{/c 1}\n";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn short_tallies_print_fewer_rows() {
        let ips = tally(&[("1.1.1.1", 1)]);
        let report = Report::from_tallies(&ips, &Tally::new());

        assert_eq!(report.distinct_ips, 1);
        assert_eq!(report.top_ips.len(), 1);
        assert!(report.top_urls.is_empty());
    }

    #[test]
    fn missing_file_is_open_error() {
        let config = Config::default().with_log_path(Some("/nonexistent/access.log".into()));
        let mut out = Vec::new();

        let err = run(&config, &mut out).unwrap_err();

        assert!(matches!(err, Error::Open { .. }));
        assert!(out.is_empty());
    }

    #[test]
    fn unmatched_lines_show_up_under_empty_key() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "garbage").unwrap();
        writeln!(file, "79.125.00.21 - - [10/Jul/2018:20:03:40 +0200] \"GET /newsletter/ HTTP/1.1\" 200 3574 \"-\" \"UA\"").unwrap();
        writeln!(file, "more garbage").unwrap();

        let config = Config::default().with_log_path(Some(file.path().to_path_buf()));
        let mut out = Vec::new();
        run(&config, &mut out).unwrap();

        let expected = "Number of IP's:\n2\nTop 3 IP's:\n{ 2}\n{79.125.00.21 1}\nTop 3 URL's\n{ 2}\n{/newsletter/ 1}\n";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }
}
