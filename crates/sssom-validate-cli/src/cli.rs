//! CLI argument definitions using clap.

use std::net::{IpAddr, SocketAddr};

use clap::Parser;
use sssom_validate::{DEFAULT_LIMIT_LINES_DISPLAYED, DEFAULT_LIMIT_LINES_EVALUATED};

/// Web form that validates SSSOM/TSV mapping sets
#[derive(Parser, Debug)]
#[command(name = "sssom-validate-ui")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Address to bind the web server to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: IpAddr,

    /// Port for the web server
    #[arg(short, long, default_value_t = 8501)]
    pub port: u16,

    /// Maximum number of input lines that are validated
    #[arg(long, default_value_t = DEFAULT_LIMIT_LINES_EVALUATED)]
    pub limit_lines_evaluated: usize,

    /// Number of mappings shown in the preview and converted
    #[arg(long, default_value_t = DEFAULT_LIMIT_LINES_DISPLAYED)]
    pub limit_lines_displayed: usize,

    /// Open the form in a browser once the server starts
    #[arg(long)]
    pub open: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Where and how the web server runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub open: bool,
}

impl ServerConfig {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Cli {
    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            host: self.host,
            port: self.port,
            open: self.open,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["sssom-validate-ui"]).unwrap();

        assert_eq!(cli.server_config().addr().to_string(), "127.0.0.1:8501");
        assert_eq!(cli.limit_lines_evaluated, 1000);
        assert_eq!(cli.limit_lines_displayed, 5);
        assert!(!cli.open);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "sssom-validate-ui",
            "--host",
            "0.0.0.0",
            "-p",
            "9000",
            "--limit-lines-evaluated",
            "200",
            "--limit-lines-displayed",
            "10",
            "--open",
            "-v",
        ])
        .unwrap();

        assert_eq!(cli.server_config().addr().to_string(), "0.0.0.0:9000");
        assert_eq!(cli.limit_lines_evaluated, 200);
        assert_eq!(cli.limit_lines_displayed, 10);
        assert!(cli.server_config().open);
        assert!(cli.verbose);
    }

    #[test]
    fn test_rejects_invalid_host() {
        assert!(Cli::try_parse_from(["sssom-validate-ui", "--host", "localhost:80"]).is_err());
    }
}
