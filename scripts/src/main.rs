use std::process;

use boost_scripts::{cli::Cli, errors::ScriptError};
use clap::Parser;
use dotenv::dotenv;
use tokio::signal;

#[tokio::main]
async fn main() -> Result<(), ScriptError> {
    // Load .env file
    dotenv().ok();

    let Cli {
        priv_key,
        rpc_url,
        command,
    } = Cli::parse();

    tracing_subscriber::fmt().pretty().init();

    let result = tokio::select! {
        result = command.run(priv_key.as_deref(), rpc_url.as_deref()) => result,
        _ = signal::ctrl_c() => Err(ScriptError::Interrupted),
    };

    // Exit right away, a pending stdin read would hold the runtime shutdown
    if let Err(ScriptError::Interrupted) = result {
        println!("^C");
        process::exit(1);
    }

    result
}
