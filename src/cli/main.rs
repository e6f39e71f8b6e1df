use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::*;

use gcp_resource::config::{Config, CONFIG_PATH};
use gcp_resource::EnvironmentResolver;

#[derive(Parser)]
#[command(about = "Print the monitored resource for the current Google Cloud environment")]
struct CliArgs {
    #[clap(long = "config", default_value = CONFIG_PATH)]
    config: PathBuf,

    #[clap(long = "pretty")]
    pretty: bool,

    #[clap(long = "detect-only")]
    detect_only: bool,
}

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();

    if let Err(err) = run(&args).await {
        eprintln!("err: {err}");
        for cause in err.chain().skip(1) {
            eprintln!("src: {cause}");
        }
        std::process::exit(1);
    }
}

async fn run(args: &CliArgs) -> Result<()> {
    let config = Config::load(&args.config)?;

    pretty_env_logger::formatted_builder()
        .parse_filters(&config.log_level())
        .init();

    let version = env!("CARGO_PKG_VERSION");
    info!("gcp-resource v{version}");

    let resolver = EnvironmentResolver::from_config(&config);

    if args.detect_only {
        println!("{}", resolver.environment().await?);
        return Ok(());
    }

    let resource = resolver.default_resource().await?;
    info!("Resolved {} resource", resource.resource_type);

    let out = if args.pretty {
        serde_json::to_string_pretty(&resource)?
    } else {
        serde_json::to_string(&resource)?
    };
    println!("{out}");

    Ok(())
}
