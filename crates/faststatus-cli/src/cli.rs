use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use faststatus_resource::{ResourceId, Status};

#[derive(Parser)]
#[command(
    name = "faststatus",
    about = "Track the occupancy status of people, rooms, and machines",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "faststatus.redb")]
    pub db: PathBuf,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP status server
    Serve(ServeArgs),
    /// Print the named resources
    Get(GetArgs),
    /// Create or update a resource
    Set(SetArgs),
    /// Print every resource
    List(ListArgs),
    /// Remove resources
    Rm(RmArgs),
}

#[derive(Args)]
pub struct ServeArgs {
    #[arg(long, default_value = "127.0.0.1:8080")]
    pub bind: SocketAddr,
}

#[derive(Args)]
pub struct GetArgs {
    #[arg(required = true, value_parser = parse_resource_id)]
    pub ids: Vec<ResourceId>,
}

#[derive(Args)]
pub struct SetArgs {
    #[arg(value_parser = parse_resource_id)]
    pub id: ResourceId,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long, value_parser = parse_status)]
    pub status: Option<Status>,
}

#[derive(Args)]
pub struct ListArgs {}

#[derive(Args)]
pub struct RmArgs {
    #[arg(required = true, value_parser = parse_resource_id)]
    pub ids: Vec<ResourceId>,
}

fn parse_resource_id(raw: &str) -> Result<ResourceId, String> {
    ResourceId::from_hex(raw).map_err(|e| e.to_string())
}

/// Accepts either the pretty names (any case) or the compact digits.
fn parse_status(raw: &str) -> Result<Status, String> {
    match raw.to_ascii_lowercase().as_str() {
        "free" | "0" => Ok(Status::FREE),
        "busy" | "1" => Ok(Status::BUSY),
        "occupied" | "2" => Ok(Status::OCCUPIED),
        _ => Err(format!("expected free, busy, occupied, or 0-2, got {raw:?}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_serve_defaults() {
        let cli = Cli::try_parse_from(["faststatus", "serve"]).unwrap();
        if let Command::Serve(args) = cli.command {
            assert_eq!(args.bind, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
        } else { panic!("wrong command"); }
        assert_eq!(cli.db, PathBuf::from("faststatus.redb"));
    }

    #[test]
    fn parse_serve_bind() {
        let cli = Cli::try_parse_from(["faststatus", "serve", "--bind", "0.0.0.0:9000"]).unwrap();
        if let Command::Serve(args) = cli.command {
            assert_eq!(args.bind, "0.0.0.0:9000".parse::<SocketAddr>().unwrap());
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_serve_rejects_bad_bind() {
        assert!(Cli::try_parse_from(["faststatus", "serve", "--bind", "nonsense"]).is_err());
    }

    #[test]
    fn parse_get_multiple_ids() {
        let cli = Cli::try_parse_from(["faststatus", "get", "AB", "ff", "1"]).unwrap();
        if let Command::Get(args) = cli.command {
            assert_eq!(
                args.ids,
                vec![ResourceId::new(0xAB), ResourceId::new(0xFF), ResourceId::new(0x1)]
            );
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_get_requires_an_id() {
        assert!(Cli::try_parse_from(["faststatus", "get"]).is_err());
    }

    #[test]
    fn parse_get_rejects_non_hex_id() {
        assert!(Cli::try_parse_from(["faststatus", "get", "zz"]).is_err());
    }

    #[test]
    fn parse_set_name_and_status() {
        let cli = Cli::try_parse_from([
            "faststatus", "set", "AB", "--name", "Conference Room", "--status", "busy",
        ])
        .unwrap();
        if let Command::Set(args) = cli.command {
            assert_eq!(args.id, ResourceId::new(0xAB));
            assert_eq!(args.name, Some("Conference Room".into()));
            assert_eq!(args.status, Some(Status::BUSY));
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_set_numeric_status() {
        let cli = Cli::try_parse_from(["faststatus", "set", "1", "--status", "2"]).unwrap();
        if let Command::Set(args) = cli.command {
            assert_eq!(args.status, Some(Status::OCCUPIED));
            assert_eq!(args.name, None);
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_set_rejects_unknown_status() {
        assert!(Cli::try_parse_from(["faststatus", "set", "1", "--status", "3"]).is_err());
        assert!(Cli::try_parse_from(["faststatus", "set", "1", "--status", "full"]).is_err());
    }

    #[test]
    fn parse_list() {
        let cli = Cli::try_parse_from(["faststatus", "list"]).unwrap();
        assert!(matches!(cli.command, Command::List(_)));
    }

    #[test]
    fn parse_rm() {
        let cli = Cli::try_parse_from(["faststatus", "rm", "AB", "CD"]).unwrap();
        if let Command::Rm(args) = cli.command {
            assert_eq!(args.ids, vec![ResourceId::new(0xAB), ResourceId::new(0xCD)]);
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_global_db() {
        let cli = Cli::try_parse_from(["faststatus", "--db", "/tmp/r.redb", "list"]).unwrap();
        assert_eq!(cli.db, PathBuf::from("/tmp/r.redb"));
    }

    #[test]
    fn parse_db_after_subcommand() {
        let cli = Cli::try_parse_from(["faststatus", "serve", "--db", "/tmp/r.redb"]).unwrap();
        assert_eq!(cli.db, PathBuf::from("/tmp/r.redb"));
    }

    #[test]
    fn parse_json_format() {
        let cli = Cli::try_parse_from(["faststatus", "--format", "json", "list"]).unwrap();
        assert!(matches!(cli.format, OutputFormat::Json));
    }

    #[test]
    fn parse_verbose() {
        let cli = Cli::try_parse_from(["faststatus", "--verbose", "list"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn status_parser_accepts_names_and_numbers() {
        assert_eq!(parse_status("free").unwrap(), Status::FREE);
        assert_eq!(parse_status("Busy").unwrap(), Status::BUSY);
        assert_eq!(parse_status("OCCUPIED").unwrap(), Status::OCCUPIED);
        assert_eq!(parse_status("0").unwrap(), Status::FREE);
        assert_eq!(parse_status("1").unwrap(), Status::BUSY);
        assert_eq!(parse_status("2").unwrap(), Status::OCCUPIED);
    }

    #[test]
    fn status_parser_rejects_out_of_range_and_junk() {
        assert!(parse_status("3").is_err());
        assert!(parse_status("available").is_err());
        assert!(parse_status("").is_err());
    }
}
