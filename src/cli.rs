use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "clips")]
#[command(version, about = "Copy text between devices through a named clipboard", long_about = None)]
pub struct Cli {
    /// Port to listen on [default: 80]
    pub port: Option<u16>,

    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments() {
        let cli = Cli::try_parse_from(["clips"]).unwrap();
        assert_eq!(cli.port, None);
        assert_eq!(cli.config, None);
    }

    #[test]
    fn positional_port() {
        let cli = Cli::try_parse_from(["clips", "8080"]).unwrap();
        assert_eq!(cli.port, Some(8080));
    }

    #[test]
    fn config_flag() {
        let cli = Cli::try_parse_from(["clips", "--config", "/etc/clips.toml", "9000"]).unwrap();
        assert_eq!(cli.port, Some(9000));
        assert_eq!(cli.config, Some(PathBuf::from("/etc/clips.toml")));
    }

    #[test]
    fn invalid_port_is_rejected() {
        assert!(Cli::try_parse_from(["clips", "http"]).is_err());
        assert!(Cli::try_parse_from(["clips", "65536"]).is_err());
    }
}
