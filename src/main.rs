//! Command-line interface for urn-rs

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
use urn::Urn;

#[cfg(feature = "cli")]
#[derive(Parser, Debug)]
#[command(name = "urn")]
#[command(author, version = urn::VERSION, about = "URN parsing and validation tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand, Debug)]
enum Commands {
    /// Parse URNs and print their components
    Parse {
        /// URNs to parse
        #[arg(value_name = "URN", required = true)]
        urns: Vec<String>,

        /// Also apply the NID length and prefix rules
        #[arg(short, long)]
        strict: bool,

        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Build a URN from a namespace identifier and a namespace-specific string
    New {
        /// Namespace identifier
        #[arg(value_name = "NID")]
        nid: String,

        /// Namespace-specific string
        #[arg(value_name = "NSS")]
        nss: String,

        /// Output as a JSON string
        #[arg(short, long)]
        json: bool,
    },

    /// Report whether each URN is valid
    Check {
        /// URNs to check
        #[arg(value_name = "URN", required = true)]
        urns: Vec<String>,

        /// Also apply the NID length and prefix rules
        #[arg(short, long)]
        strict: bool,
    },
}

#[cfg(feature = "cli")]
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Parse { urns, strict, json } => cmd_parse(&urns, strict, json),
        Commands::New { nid, nss, json } => cmd_new(&nid, &nss, json),
        Commands::Check { urns, strict } => cmd_check(&urns, strict),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(feature = "cli")]
fn parse_with_mode(raw: &str, strict: bool) -> urn::Result<Urn> {
    if strict {
        Urn::parse_strict(raw)
    } else {
        Urn::parse(raw)
    }
}

#[cfg(feature = "cli")]
fn cmd_parse(urns: &[String], strict: bool, json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    use serde_json::json;

    for raw in urns {
        let urn = parse_with_mode(raw, strict)?;

        if json_output {
            let value = json!({
                "urn": urn,
                "nid": urn.nid(),
                "nss": urn.nss(),
            });
            println!("{}", serde_json::to_string(&value)?);
        } else {
            println!("urn: {}", urn);
            println!("  nid: {}", urn.nid());
            println!("  nss: {}", urn.nss());
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn cmd_new(nid: &str, nss: &str, json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    let urn = Urn::new(nid, nss)?;

    if json_output {
        println!("{}", String::from_utf8(urn.to_json())?);
    } else {
        println!("{}", urn);
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn cmd_check(urns: &[String], strict: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut invalid = 0;

    for raw in urns {
        match parse_with_mode(raw, strict) {
            Ok(_) => println!("✓ {}", raw),
            Err(e) => {
                invalid += 1;
                println!("✗ {}: {}", raw, e);
            }
        }
    }

    if invalid > 0 {
        return Err(format!("{} of {} URNs are invalid", invalid, urns.len()).into());
    }

    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Rebuild with --features cli");
    std::process::exit(1);
}
