//! CLI entry point for jdevtools.

mod cli;
mod cmd;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.quiet {
        std::env::set_var("JDEVTOOLS_QUIET", "1");
    }

    match cli.command {
        Commands::Dispatch { existing, output, os } => {
            cmd::dispatch::cmd_dispatch(existing.as_deref(), &output, os.as_deref())
        }
        Commands::Init {
            name,
            group_id,
            app_version,
            minimal,
            force,
        } => cmd::init::cmd_init(name, group_id, app_version, minimal, force),
        Commands::Config { validate } => cmd::config::cmd_config(validate),
        Commands::Version { verbose } => cmd::util::cmd_version(verbose),
        Commands::Man { out_dir } => cmd::util::cmd_man(out_dir.as_ref()),
        Commands::Completion { shell } => cmd::util::cmd_completion(shell),
    }
}
