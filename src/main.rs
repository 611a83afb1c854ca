use clap::{CommandFactory, Parser};
use clap_complete::CompleteEnv;

use cli::{Cli, Command};

mod cli;
mod ec2_client;
mod error;
mod iam_client;
mod import;
mod kind;
mod naming;
mod output;
mod s3_client;
mod scan;
mod util;

#[tokio::main()]
async fn main() -> anyhow::Result<()> {
    CompleteEnv::with_factory(Cli::command).complete();

    let subscriber = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    let clients = scan::connect().await;

    match cli.command {
        Command::Generate { output, compact } => {
            let manifest = scan::generate_manifest(&clients).await?;
            output::write_manifest(&manifest, &output::Target::from_path(output), compact)
        }
        Command::List => {
            let manifest = scan::generate_manifest(&clients).await?;
            output::write_records(&manifest.resources, &output::Target::Stdout)
        }
    }
}
