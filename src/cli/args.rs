//! CLI argument definitions using clap
//!
//! Commands:
//! - phonebook serve [--port <port>]

use clap::{Parser, Subcommand};

/// phonebook - a small phonebook REST service
#[derive(Parser, Debug)]
#[command(name = "phonebook")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the phonebook HTTP server
    Serve {
        /// Listening port; overrides the PORT environment variable
        #[arg(long)]
        port: Option<u16>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serve_accepts_a_port_override() {
        let cli = Cli::try_parse_from(["phonebook", "serve", "--port", "8080"]).unwrap();
        let Command::Serve { port } = cli.command;
        assert_eq!(port, Some(8080));
    }

    #[test]
    fn serve_port_is_optional() {
        let cli = Cli::try_parse_from(["phonebook", "serve"]).unwrap();
        let Command::Serve { port } = cli.command;
        assert_eq!(port, None);
    }
}
