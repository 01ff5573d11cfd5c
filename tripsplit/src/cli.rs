use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tripsplit_application::{ReportPeriod, SortKey};
use tripsplit_domain::Money;

/// Track shared travel expenses and work out who pays whom.
#[derive(Parser, Debug)]
#[command(name = "tripsplit", version, about, long_about = None)]
pub struct Cli {
    /// Snapshot file; overrides TRIPSPLIT_DATA_FILE.
    #[arg(long, global = true)]
    pub data_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Record, list, edit, and remove expenses.
    #[command(subcommand)]
    Expense(ExpenseCommand),

    /// Manage trip members.
    #[command(subcommand)]
    Member(MemberCommand),

    /// Manage trip groups.
    #[command(subcommand)]
    Group(GroupCommand),

    /// Show balances and the payments that settle them.
    Split(SplitArgs),

    /// Spending report for a period.
    Report(ReportArgs),

    /// Totals, counts, and the most recent expenses.
    Dashboard,

    /// Spending grouped by location.
    Locations(LocationsArgs),
}

#[derive(Subcommand, Debug)]
pub enum ExpenseCommand {
    Add(ExpenseAddArgs),
    List(ExpenseListArgs),
    Update(ExpenseUpdateArgs),
    Delete { id: u64 },
}

#[derive(Args, Debug)]
pub struct ExpenseAddArgs {
    #[arg(long)]
    pub description: String,
    #[arg(long)]
    pub amount: Money,
    #[arg(long, default_value = "Other")]
    pub category: String,
    /// Defaults to today.
    #[arg(long)]
    pub date: Option<NaiveDate>,
    #[arg(long)]
    pub paid_by: Option<String>,
    #[command(flatten)]
    pub details: ExpenseDetails,
}

#[derive(Args, Debug)]
pub struct ExpenseUpdateArgs {
    pub id: u64,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub amount: Option<Money>,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long)]
    pub date: Option<NaiveDate>,
    /// Pass an empty value to clear the payer.
    #[arg(long)]
    pub paid_by: Option<String>,
    #[command(flatten)]
    pub details: ExpenseDetails,
}

#[derive(Args, Debug, Default)]
pub struct ExpenseDetails {
    /// Comma separated names.
    #[arg(long, value_delimiter = ',')]
    pub split_with: Vec<String>,
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long, requires = "address", allow_hyphen_values = true)]
    pub lat: Option<f64>,
    #[arg(long, requires = "address", allow_hyphen_values = true)]
    pub lng: Option<f64>,
    #[arg(long)]
    pub receipt: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Args, Debug, Default)]
pub struct ExpenseListArgs {
    /// Case-insensitive match on the description.
    #[arg(long, default_value = "")]
    pub search: String,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long, value_enum, default_value_t = SortArg::Date)]
    pub sort: SortArg,
}

#[derive(Subcommand, Debug)]
pub enum MemberCommand {
    Add(MemberArgs),
    List,
    Update {
        id: u64,
        #[command(flatten)]
        member: MemberUpdateArgs,
    },
    Delete { id: u64 },
}

#[derive(Args, Debug)]
pub struct MemberArgs {
    pub name: String,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
}

#[derive(Args, Debug)]
pub struct MemberUpdateArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum GroupCommand {
    Add(GroupArgs),
    List,
    Update {
        id: u64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    Delete { id: u64 },
}

#[derive(Args, Debug)]
pub struct GroupArgs {
    pub name: String,
    #[arg(long)]
    pub description: Option<String>,
}

#[derive(Args, Debug, Default)]
pub struct SplitArgs {
    /// Members to split between. Defaults to everyone who can be selected.
    pub names: Vec<String>,
}

#[derive(Args, Debug)]
pub struct ReportArgs {
    #[arg(long, value_enum, default_value_t = PeriodArg::Month)]
    pub period: PeriodArg,
}

#[derive(Args, Debug, Default)]
pub struct LocationsArgs {
    #[arg(long)]
    pub category: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    #[default]
    Date,
    Amount,
    Category,
}

impl From<SortArg> for SortKey {
    fn from(value: SortArg) -> Self {
        match value {
            SortArg::Date => SortKey::Date,
            SortArg::Amount => SortKey::Amount,
            SortArg::Category => SortKey::Category,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum PeriodArg {
    Week,
    #[default]
    Month,
    Year,
    All,
}

impl From<PeriodArg> for ReportPeriod {
    fn from(value: PeriodArg) -> Self {
        match value {
            PeriodArg::Week => ReportPeriod::Week,
            PeriodArg::Month => ReportPeriod::Month,
            PeriodArg::Year => ReportPeriod::Year,
            PeriodArg::All => ReportPeriod::All,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("tripsplit").chain(args.iter().copied()))
            .expect("arguments parse")
    }

    #[test]
    fn expense_add_parses_money_and_split() {
        let cli = parse(&[
            "expense",
            "add",
            "--description",
            "Dinner",
            "--amount",
            "42.50",
            "--paid-by",
            "Alice",
            "--split-with",
            "Alice,Bob",
            "--date",
            "2024-07-01",
        ]);

        let Command::Expense(ExpenseCommand::Add(args)) = cli.command else {
            panic!("expected expense add");
        };
        assert_eq!(args.amount, Money::new(4250, 2));
        assert_eq!(args.category, "Other");
        assert_eq!(args.details.split_with, vec!["Alice", "Bob"]);
        assert_eq!(args.date, NaiveDate::from_ymd_opt(2024, 7, 1));
    }

    #[test]
    fn invalid_amount_is_rejected() {
        let result = Cli::try_parse_from([
            "tripsplit",
            "expense",
            "add",
            "--description",
            "Dinner",
            "--amount",
            "lots",
        ]);

        assert!(result.is_err());
    }

    #[rstest]
    #[case::week("week", ReportPeriod::Week)]
    #[case::all("all", ReportPeriod::All)]
    fn report_period(#[case] value: &str, #[case] expected: ReportPeriod) {
        let cli = parse(&["report", "--period", value]);

        let Command::Report(args) = cli.command else {
            panic!("expected report");
        };
        assert_eq!(ReportPeriod::from(args.period), expected);
    }

    #[test]
    fn split_names_and_global_data_file() {
        let cli = parse(&["split", "Alice", "Bob", "--data-file", "/tmp/trip.json"]);

        assert_eq!(cli.data_file, Some(PathBuf::from("/tmp/trip.json")));
        let Command::Split(args) = cli.command else {
            panic!("expected split");
        };
        assert_eq!(args.names, vec!["Alice", "Bob"]);
    }
}
