use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Configure the organization URL and PAT for your Azure DevOps account
    ///
    /// The PAT must have Work Items (Read & Write) and Code (Read & Write)
    /// permissions.
    Init,

    /// Link the current branch to a work item
    Link {
        /// Work item ID to link to the branch
        #[clap(short = 'w', long, value_parser)]
        work_item: i32,

        /// Branch from a clean version of the default branch
        #[clap(short, long, value_parser, default_value_t = true)]
        clean: bool,

        /// Branch name to link; defaults to the branch HEAD points at
        #[clap(short, long, value_parser)]
        name: Option<String>,
    },

    /// Read or write a stored setting (org_url, pat)
    Config {
        #[clap(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the value of a setting
    Get { key: String },
    /// Set the value of a setting
    Set { key: String, value: String },
}
