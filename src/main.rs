use clap::Parser;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use env_logger::Env;
use log::info;

use reglookup::registry::Registry;
use reglookup::request;
use reglookup::resolver::{Credentials, LookupResolver};

/// Company registration number lookup helper for procurement data enrichment
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Registry service username (accepted for interface compatibility, unused)
    username: String,

    /// Registry service password (accepted for interface compatibility, unused)
    password: String,

    /// JSON-encoded array of registration numbers, e.g. ["40002053568"]
    reg_nums: String,
}

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Parse command-line arguments
    let args = Args::parse();

    // Initialize logging with default filter level of "info"
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    info!("Starting registration number lookup");

    let reg_nums = request::parse_reg_nums(&args.reg_nums)
        .wrap_err("Failed to parse registration number payload")?;
    info!("Resolving {} registration number(s)", reg_nums.len());

    let resolver = LookupResolver::new(
        Registry::bundled(),
        Credentials {
            username: args.username,
            password: args.password,
        },
    );
    let results = resolver.resolve(&reg_nums);

    // The result mapping is the only line written to stdout; logging goes
    // to stderr.
    let encoded = serde_json::to_string(&results).wrap_err("Failed to encode result mapping")?;
    println!("{}", encoded);

    info!("Lookup completed successfully");
    Ok(())
}
