use crate::models::punch::PunchKind;
use clap::{Parser, Subcommand};

/// Command-line interface definition for punchclock
#[derive(Parser)]
#[command(
    name = "punchclock",
    version = env!("CARGO_PKG_VERSION"),
    about = "A personal time clock: punch in/out, lunch and breaks, bi-weekly pay period totals",
    long_about = None
)]
pub struct Cli {
    /// Override the data directory (punch files and audit log)
    #[arg(global = true, long = "data-dir")]
    pub data_dir: Option<String>,

    /// Override the users file
    #[arg(global = true, long = "users")]
    pub users: Option<String>,

    /// Username to log in as (or PUNCHCLOCK_USER)
    #[arg(global = true, long = "user", short = 'u')]
    pub user: Option<String>,

    /// Password (or PUNCHCLOCK_PASSWORD; prompted when neither is set)
    #[arg(global = true, long = "password")]
    pub password: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize configuration, data directory and users file
    Init {
        #[arg(
            long = "admin",
            requires = "admin_password",
            help = "Seed the users file with this administrator"
        )]
        admin: Option<String>,

        #[arg(
            long = "admin-password",
            requires = "admin",
            help = "Password for the seeded administrator"
        )]
        admin_password: Option<String>,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use")]
        editor: Option<String>,
    },

    /// Show the last punch and which actions are available now
    Status,

    /// Record a punch
    Punch {
        /// clock-in, clock-out, start-lunch, end-lunch, start-break, end-break
        #[arg(value_enum)]
        action: PunchKind,

        #[arg(long = "at", help = "Punch time instead of now (YYYY-MM-DD HH:MM)")]
        at: Option<String>,

        #[arg(
            long = "force",
            help = "Record even if the action is not available now (admins only)"
        )]
        force: bool,
    },

    /// Worked hours for a pay period
    Hours {
        #[arg(long = "date", help = "Any day inside the period (YYYY-MM-DD), default today")]
        date: Option<String>,

        #[arg(long = "previous", help = "The period before the selected one")]
        previous: bool,
    },

    /// Delete a punch (admins only)
    Del {
        /// 1-based position as listed by `hours`
        index: usize,

        #[arg(long = "date", help = "Any day inside the period (YYYY-MM-DD), default today")]
        date: Option<String>,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print the internal audit log")]
        print: bool,
    },

    /// Print the stored form of a password for the users file
    HashPassword { password: String },
}
