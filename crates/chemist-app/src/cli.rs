use std::path::PathBuf;

use clap::Parser;

/// Chemist: a retrosynthesis assistant backed by Gemini.
#[derive(Parser, Debug)]
#[command(name = "chemist", version, about)]
pub struct Args {
    /// Gemini API key (overrides config file and environment).
    #[arg(long)]
    pub api_key: Option<String>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Model id override (e.g. gemini-2.0-flash).
    #[arg(long)]
    pub model: Option<String>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Disable colored output.
    #[arg(long)]
    pub no_color: bool,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_empty() {
        let args = Args::try_parse_from(["chemist"]).unwrap();
        assert!(args.api_key.is_none());
        assert!(args.config.is_none());
        assert!(args.model.is_none());
        assert!(!args.no_color);
    }

    #[test]
    fn parses_all_flags() {
        let args = Args::try_parse_from([
            "chemist",
            "--api-key",
            "k",
            "--config",
            "/tmp/c.toml",
            "--model",
            "gemini-1.5-pro",
            "--log-level",
            "debug",
            "--no-color",
        ])
        .unwrap();
        assert_eq!(args.api_key.as_deref(), Some("k"));
        assert_eq!(args.config, Some(PathBuf::from("/tmp/c.toml")));
        assert_eq!(args.model.as_deref(), Some("gemini-1.5-pro"));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert!(args.no_color);
    }

    #[test]
    fn rejects_unknown_flag() {
        assert!(Args::try_parse_from(["chemist", "--stream"]).is_err());
    }
}
