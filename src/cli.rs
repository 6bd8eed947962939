use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "edgar13f")]
#[command(about = "Extract the latest 13F holdings table for a fund from SEC EDGAR into a tab-delimited file")]
#[command(version)]
pub struct Cli {
    /// Ticker symbol or CIK of the filer
    pub identifier: String,

    /// Directory the <identifier>_13F.txt file is written to
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_identifier() {
        let cli = Cli::try_parse_from(["edgar13f", "0001067983"]).unwrap();
        assert_eq!(cli.identifier, "0001067983");
        assert_eq!(cli.output_dir, PathBuf::from("."));
    }

    #[test]
    fn test_output_dir_flag() {
        let cli = Cli::try_parse_from(["edgar13f", "BRK", "--output-dir", "/tmp/out"]).unwrap();
        assert_eq!(cli.identifier, "BRK");
        assert_eq!(cli.output_dir, PathBuf::from("/tmp/out"));
    }

    #[test]
    fn test_identifier_arity() {
        assert!(Cli::try_parse_from(["edgar13f"]).is_err());
        assert!(Cli::try_parse_from(["edgar13f", "BRK", "AAPL"]).is_err());
    }
}
