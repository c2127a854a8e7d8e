use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use vt_core::{FilterCriteria, MaskKind};

#[derive(Debug, Parser)]
#[command(name = "voluntar", version, about = "Browse social actions and check form inputs")]
pub struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Backend base URL, overrides `[api] base_url`
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Format and check a masked input value
    Mask {
        #[arg(value_enum)]
        kind: MaskArg,
        /// Raw text as typed or pasted
        raw: String,
    },
    /// Fetch, filter and page through social actions
    Actions(ActionsArgs),
    /// Notification dropdown operations
    Notifications {
        #[command(subcommand)]
        command: NotificationsCommand,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum MaskArg {
    TaxId,
    Phone,
}

impl From<MaskArg> for MaskKind {
    fn from(arg: MaskArg) -> Self {
        match arg {
            MaskArg::TaxId => MaskKind::TaxId,
            MaskArg::Phone => MaskKind::Phone,
        }
    }
}

#[derive(Debug, Args)]
pub struct ActionsArgs {
    /// Case-insensitive text searched in title and description
    #[arg(long, default_value = "")]
    pub search: String,
    #[arg(long, default_value = "")]
    pub area: String,
    #[arg(long, default_value = "")]
    pub city: String,
    #[arg(long, default_value = "")]
    pub state: String,
    /// Earliest date, YYYY-MM-DD
    #[arg(long, default_value = "")]
    pub from: String,
    /// Latest date, YYYY-MM-DD
    #[arg(long, default_value = "")]
    pub to: String,
    /// Viewport width in px; decides cards per slide
    #[arg(long)]
    pub width: Option<u32>,
    /// Zero-based slide to show
    #[arg(long, default_value_t = 0)]
    pub slide: usize,
    /// Print the dropdown options instead of a page
    #[arg(long)]
    pub options: bool,
}

impl ActionsArgs {
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            search: self.search.clone(),
            area: self.area.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            date_from: self.from.clone(),
            date_to: self.to.clone(),
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum NotificationsCommand {
    List,
    /// Mark one notification as read
    Read { id: String },
    ReadAll,
}
