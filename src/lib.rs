// walk the tree under root, one record per non-directory entry
// sort the records by size, largest first
// print the top N in right-aligned columns: size, extension, path

use clap::Parser;
use std::io::Write;
use std::path::PathBuf;

pub mod collect;
pub mod logger;
pub mod rank;
pub mod record;
pub mod report;
pub mod size;
pub mod types;

pub use crate::collect::collect;
pub use crate::logger::init_logger;
pub use crate::rank::{rank, top};
pub use crate::record::FileRecord;
pub use crate::report::{report, FlushMode};
pub use crate::size::{format_size, ByteSize};
pub use crate::types::{ScanError, ScanResult};

#[derive(Parser, Debug)]
#[command(version)]
#[command(about = "list the largest files under a directory", long_about = None)]
pub struct Cli {
    /// the root directory to run from
    #[arg(long, value_name = "PATH", default_value = "/")]
    pub root: PathBuf,

    /// the top number of files to output
    #[arg(long, value_name = "N", default_value_t = 10, allow_negative_numbers = true)]
    pub top: i64,

    /// print the whole report at once so every column lines up
    #[arg(long)]
    pub rightjustify: bool,

    /// show debug diagnostics on stderr
    #[arg(short, long)]
    pub debug: bool,
}

/// Collects, ranks and reports the largest files under `cli.root` to `out`.
///
/// # Errors
///
/// Fails on any traversal error other than a permission error, or if the
/// report cannot be written. Nothing is written when the walk fails.
pub fn run<W: Write>(cli: &Cli, out: W) -> ScanResult<W> {
    let mut records = collect(&cli.root)?;
    rank(&mut records);

    let mode = FlushMode::from_right_justify(cli.rightjustify);
    let out = report(top(&records, cli.top), mode, out)?;

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["bigfiles"]);
        assert_eq!(cli.root, PathBuf::from("/"));
        assert_eq!(cli.top, 10);
        assert!(!cli.rightjustify);
        assert!(!cli.debug);
    }

    #[test]
    fn test_cli_options() {
        let cli = Cli::parse_from(["bigfiles", "--root", "/tmp", "--top", "3", "--rightjustify"]);
        assert_eq!(cli.root, PathBuf::from("/tmp"));
        assert_eq!(cli.top, 3);
        assert!(cli.rightjustify);
    }

    #[test]
    fn test_cli_accepts_negative_top() {
        let cli = Cli::try_parse_from(["bigfiles", "--top", "-1"]).unwrap();
        assert_eq!(cli.top, -1);
    }

    #[test]
    fn test_cli_verify() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
