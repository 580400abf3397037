use crate::cmds::{build_cli, run};
use clap::{App, ArgMatches};

use utility::Error;

pub mod cmds;
pub(crate) mod error;
pub(crate) mod function;
pub(crate) mod kubeless;
pub mod list;
pub mod list_format;
pub(crate) mod priority;

type Result = std::result::Result<(), State>;

#[derive(thiserror::Error, Debug)]
pub enum State {
    #[error("command matched")]
    Matched,
    #[error("{0}")]
    Custom(String),
    #[error("{0}")]
    Error(#[from] Error),
}

/// parses the process arguments and runs the matching command
pub async fn exec() -> utility::Result<()> {
    let app = build_cli();
    let args: ArgMatches = app.get_matches();
    let chain = kubeless::matches_chain(&args);
    kubeless::init_logging(kubeless::global_value(&chain, "log-level").unwrap_or("off"));
    run(&args).await
}

pub(crate) trait CommandAppend {
    fn append_subcommand(app: App<'static, 'static>) -> App<'static, 'static>;
}
pub(crate) trait SubCommandAppend {
    fn append_subcommand() -> App<'static, 'static>;
}
