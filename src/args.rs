//! These structs provide the CLI interface for the expenses CLI.

use crate::model::{Amount, Category};
use clap::{Parser, Subcommand};
use std::convert::Infallible;
use std::fmt::{Display, Formatter};
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::error;
use tracing_subscriber::filter::LevelFilter;

/// expenses: A command-line tool for tracking personal spending.
///
/// Expenses are recorded in a single local data directory; each record has a date, a positive
/// amount, one of a fixed set of categories, and a description. Subcommands cover recording and
/// editing expenses, filtered listings, aggregate summaries, and CSV export/import.
///
/// Run `expenses init` once to create the data directory before using the other subcommands.
#[derive(Debug, Parser, Clone)]
pub struct Args {
    #[clap(flatten)]
    common: Common,

    #[command(subcommand)]
    command: Command,
}

impl Args {
    pub fn new(common: Common, command: Command) -> Self {
        Self { common, command }
    }

    pub fn common(&self) -> &Common {
        &self.common
    }

    pub fn command(&self) -> &Command {
        &self.command
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Create the data directory and initialize the configuration file.
    ///
    /// This is the first command you should run. By default the data directory is
    /// $HOME/.expenses; pass --home or set EXPENSES_HOME to put it somewhere else.
    Init,
    /// Record a new expense.
    Add(AddArgs),
    /// Change fields on an existing expense.
    Update(UpdateArgs),
    /// Remove an expense by id.
    Delete(DeleteArgs),
    /// List expenses, optionally filtered, most recent first.
    List(FilterArgs),
    /// Show aggregate statistics for the recorded expenses.
    Summary(SummaryArgs),
    /// Write expenses to a CSV file, optionally filtered.
    Export(ExportArgs),
    /// Read expenses back from a previously exported CSV file.
    Import(ImportArgs),
    /// Remove all recorded expenses.
    Clear,
}

/// Arguments common to all subcommands.
#[derive(Debug, Parser, Clone)]
pub struct Common {
    /// The logging verbosity. One of, from least to most verbose:
    /// off, error, warn, info, debug, trace
    ///
    /// This can be overridden by RUST_LOG. See the tracing-subscriber crate for instructions.
    #[arg(long, default_value_t = LevelFilter::INFO)]
    log_level: LevelFilter,

    /// The directory where expense data and configuration are held. Defaults to ~/.expenses
    #[arg(long, env = "EXPENSES_HOME", default_value_t = default_expenses_home())]
    home: DisplayPath,
}

impl Common {
    pub fn new(log_level: LevelFilter, home: PathBuf) -> Self {
        Self {
            log_level,
            home: home.into(),
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    pub fn home(&self) -> &DisplayPath {
        &self.home
    }
}

/// Args for the `expenses add` command.
#[derive(Debug, Parser, Clone)]
pub struct AddArgs {
    /// The amount spent, e.g. '12.50'. A leading '$' and thousands commas are accepted.
    #[arg(long)]
    amount: Amount,

    /// The expense category.
    #[arg(long, value_enum)]
    category: Category,

    /// What the money was spent on. At least three characters.
    #[arg(long)]
    description: String,

    /// The date of the expense, as YYYY-MM-DD or RFC 3339. Defaults to now. May not be in the
    /// future.
    #[arg(long)]
    date: Option<String>,
}

impl AddArgs {
    pub fn new(
        amount: Amount,
        category: Category,
        description: impl Into<String>,
        date: Option<String>,
    ) -> Self {
        Self {
            amount,
            category,
            description: description.into(),
            date,
        }
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }
}

/// Args for the `expenses update` command.
#[derive(Debug, Parser, Clone)]
pub struct UpdateArgs {
    /// The id of the expense to change.
    id: String,

    /// A new date, as YYYY-MM-DD or RFC 3339.
    #[arg(long)]
    date: Option<String>,

    /// A new amount.
    #[arg(long)]
    amount: Option<Amount>,

    /// A new category.
    #[arg(long, value_enum)]
    category: Option<Category>,

    /// A new description.
    #[arg(long)]
    description: Option<String>,
}

impl UpdateArgs {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            date: None,
            amount: None,
            category: None,
            description: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    pub fn amount(&self) -> Option<Amount> {
        self.amount
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn with_amount(mut self, amount: Amount) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Args for the `expenses delete` command.
#[derive(Debug, Parser, Clone)]
pub struct DeleteArgs {
    /// The id of the expense to remove.
    id: String,
}

impl DeleteArgs {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

/// Filtering options, shared by the `list` and `export` commands.
#[derive(Debug, Default, Parser, Clone)]
pub struct FilterArgs {
    /// Keep only expenses with this category.
    #[arg(long, value_enum)]
    category: Option<Category>,

    /// Keep only expenses whose description contains this text (case-insensitive).
    #[arg(long)]
    search: Option<String>,

    /// Keep only expenses dated on or after this date (inclusive).
    #[arg(long)]
    from: Option<String>,

    /// Keep only expenses dated on or before this date (inclusive).
    #[arg(long)]
    to: Option<String>,
}

impl FilterArgs {
    pub fn new(
        category: Option<Category>,
        search: Option<String>,
        from: Option<String>,
        to: Option<String>,
    ) -> Self {
        Self {
            category,
            search,
            from,
            to,
        }
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }

    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    pub fn from(&self) -> Option<&str> {
        self.from.as_deref()
    }

    pub fn to(&self) -> Option<&str> {
        self.to.as_deref()
    }
}

/// Args for the `expenses summary` command.
#[derive(Debug, Default, Parser, Clone)]
pub struct SummaryArgs {
    /// Compute the "this month" figure relative to this date instead of now.
    #[arg(long)]
    as_of: Option<String>,
}

impl SummaryArgs {
    pub fn new(as_of: Option<String>) -> Self {
        Self { as_of }
    }

    pub fn as_of(&self) -> Option<&str> {
        self.as_of.as_deref()
    }
}

/// Args for the `expenses export` command.
#[derive(Debug, Default, Parser, Clone)]
pub struct ExportArgs {
    #[clap(flatten)]
    filters: FilterArgs,

    /// Where to write the CSV file. Defaults to ./expenses-<today>.csv
    #[arg(long)]
    output: Option<PathBuf>,
}

impl ExportArgs {
    pub fn new(filters: FilterArgs, output: Option<PathBuf>) -> Self {
        Self { filters, output }
    }

    pub fn filters(&self) -> &FilterArgs {
        &self.filters
    }

    pub fn output(&self) -> Option<&Path> {
        self.output.as_deref()
    }
}

/// Args for the `expenses import` command.
#[derive(Debug, Parser, Clone)]
pub struct ImportArgs {
    /// The CSV file to read, in the same format `expenses export` writes.
    file: PathBuf,
}

impl ImportArgs {
    pub fn new(file: impl Into<PathBuf>) -> Self {
        Self { file: file.into() }
    }

    pub fn file(&self) -> &Path {
        &self.file
    }
}

fn default_expenses_home() -> DisplayPath {
    DisplayPath(match dirs::home_dir() {
        Some(home) => home.join(".expenses"),
        None => {
            error!(
                "There was an error when trying to get your home directory. You can get around \
                this by providing --home or EXPENSES_HOME instead of relying on the default \
                expenses home directory. If you continue using the program right now, you may \
                have problems!",
            );
            PathBuf::from(".expenses")
        }
    })
}

#[derive(Debug, Default, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct DisplayPath(PathBuf);

impl From<PathBuf> for DisplayPath {
    fn from(value: PathBuf) -> Self {
        DisplayPath(value)
    }
}

impl Deref for DisplayPath {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<Path> for DisplayPath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl Display for DisplayPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_string_lossy())
    }
}

impl FromStr for DisplayPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(PathBuf::from(s)))
    }
}

impl DisplayPath {
    pub fn new(path: PathBuf) -> Self {
        Self(path)
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}
