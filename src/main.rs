use std::process;

use clap::Parser;
use colored::Colorize;

use ado_link::app;
use ado_link::cli::{Args, Command, ConfigAction};
use ado_link::config::FileStore;
use ado_link::error::Error;
use ado_link::model::LinkParams;

fn main() {
    let args = Args::parse();

    if let Err(err) = run(args) {
        match err {
            Error::Cancelled => {}
            err => println!("{}", err.to_string().red()),
        }
        process::exit(1);
    }
}

fn run(args: Args) -> ado_link::Result<()> {
    let mut store = FileStore::open_default()?;

    match args.command {
        Command::Init => app::run_init(&mut store),
        Command::Link {
            work_item,
            clean,
            name,
        } => app::run_link(
            &store,
            &LinkParams {
                work_item_id: work_item,
                branch_name: name,
                clean,
            },
        ),
        Command::Config { action } => match action {
            ConfigAction::Get { key } => app::run_config_get(&store, &key),
            ConfigAction::Set { key, value } => app::run_config_set(&mut store, &key, &value),
        },
    }
}
