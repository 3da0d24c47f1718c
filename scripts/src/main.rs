use clap::Parser;
use scripts::{
    cli::{Cli, ScriptConfig},
    errors::ScriptError,
    utils::setup_client,
};

#[tokio::main]
async fn main() -> Result<(), ScriptError> {
    let Cli {
        priv_key,
        rpc_url,
        deployments_path,
        network_tags,
        command,
    } = Cli::parse();

    tracing_subscriber::fmt().pretty().init();

    let client = setup_client(&priv_key, &rpc_url).await?;
    let config = ScriptConfig {
        rpc_url,
        deployments_path,
        network_tags,
    };

    command.run(client, &config).await
}
