use crate::header::{DEFAULT_AUTHOR, DEFAULT_PROJECT};
use clap::Parser;
use std::path::PathBuf;

/// Generate curry boilerplate
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output file path
    #[arg(short, long = "file_path", value_name = "FILE")]
    pub file_path: PathBuf,
    /// Project name written into the header
    #[arg(short, long, default_value = DEFAULT_PROJECT)]
    pub project: String,
    /// Author written into the header
    #[arg(short, long, default_value = DEFAULT_AUTHOR)]
    pub author: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["curry-ladder", "-f", "out/Curry.swift"]).unwrap();
        assert_eq!(cli.file_path, PathBuf::from("out/Curry.swift"));
        assert_eq!(cli.project, "MonadicParser");
        assert_eq!(cli.author, "Artem Bobrov");
    }

    #[test]
    fn long_flags() {
        let cli = Cli::try_parse_from([
            "curry-ladder",
            "--file_path",
            "Curry.swift",
            "--project",
            "Parser",
            "--author",
            "Jane Doe",
        ])
        .unwrap();
        assert_eq!(cli.file_path, PathBuf::from("Curry.swift"));
        assert_eq!(cli.project, "Parser");
        assert_eq!(cli.author, "Jane Doe");
    }

    #[test]
    fn file_path_is_required() {
        assert!(Cli::try_parse_from(["curry-ladder", "-p", "Parser"]).is_err());
    }
}
