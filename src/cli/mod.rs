// Command-line interface for the server binary

use clap::Parser;

/// Items REST API server
///
/// Flags override the matching environment variables.
#[derive(Parser, Debug)]
#[command(name = "items-backend")]
#[command(about = "REST API over a single items table", long_about = None)]
pub struct Cli {
    /// Address to bind (overrides HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (overrides PORT)
    #[arg(long)]
    pub port: Option<u16>,

    /// Database connection string (overrides DATABASE_URL)
    #[arg(long)]
    pub database_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags() {
        let cli = Cli::try_parse_from(["items-backend"]).unwrap();

        assert!(cli.host.is_none());
        assert!(cli.port.is_none());
        assert!(cli.database_url.is_none());
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::try_parse_from([
            "items-backend",
            "--host",
            "127.0.0.1",
            "--port",
            "8080",
            "--database-url",
            "sqlite://other.db?mode=rwc",
        ])
        .unwrap();

        assert_eq!(cli.host.as_deref(), Some("127.0.0.1"));
        assert_eq!(cli.port, Some(8080));
        assert_eq!(cli.database_url.as_deref(), Some("sqlite://other.db?mode=rwc"));
    }

    #[test]
    fn test_port_must_be_numeric() {
        assert!(Cli::try_parse_from(["items-backend", "--port", "http"]).is_err());
    }
}
