use clap::{Parser, Subcommand};

/// Command-line interface definition for projtrack
/// CLI application to track client project records with SQLite
#[derive(Parser)]
#[command(
    name = "projtrack",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple project tracking CLI: manage client records, deadlines and daily check-ins using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Sign in against the stored credential list
    Login {
        /// Email address
        #[arg(long)]
        email: String,

        /// Password
        #[arg(long)]
        password: String,
    },

    /// List project records with their overdue status
    List,

    /// Show every field of a single record
    Show {
        /// Zero-based record index
        index: usize,
    },

    /// Add a new project record
    Add {
        /// Project name (required)
        #[arg(long)]
        project: Option<String>,

        /// Client name (required)
        #[arg(long)]
        client: Option<String>,

        /// Project manager: Komal, Pankaj, Rahul, Khanak, Shubham, Kajal
        #[arg(long = "pm")]
        project_manager: Option<String>,

        /// Sales discussion channel: Email, Whatsapp, Slack
        #[arg(long = "sales")]
        sales_discussion: Option<String>,

        /// Team lead
        #[arg(long = "lead")]
        team_lead: Option<String>,

        /// Status: "Not started", "ON TRACK", "At Risk", "Off Track", ...
        #[arg(long)]
        status: Option<String>,

        /// Category: "Redesign/Theme update", "Troubleshoot", "Audit", ...
        #[arg(long)]
        category: Option<String>,

        /// Team lead discussion channel: "No group", "On Whatsapp", ...
        #[arg(long)]
        discussion: Option<String>,

        /// Start date (YYYY-MM-DD, required)
        #[arg(long)]
        start: Option<String>,

        /// End date (YYYY-MM-DD, required); drives the overdue badge
        #[arg(long)]
        end: Option<String>,

        /// Target month (YYYY-MM)
        #[arg(long)]
        month: Option<String>,

        /// Group: "Group A" .. "Group E"
        #[arg(long)]
        group: Option<String>,

        /// Priority: High, Medium, Low
        #[arg(long)]
        priority: Option<String>,

        /// Additional comments from the team lead
        #[arg(long)]
        comments: Option<String>,
    },

    /// Edit one field of a record
    Edit {
        /// Zero-based record index
        index: usize,

        /// Field key (project, dailyCheck, status, endDate, ...)
        field: String,

        /// New value; date fields take the YYYY-MM-DD picker format
        value: String,
    },
}
