#![warn(clippy::uninlined_format_args)]

pub mod draft;
pub mod error;
pub mod expense_query;
pub mod model;
pub mod ports;
pub mod reducer;
pub mod reports;
pub mod split_summary;
pub mod store;

pub use draft::{ExpenseDraft, GroupDraft, MemberDraft};
pub use error::{DraftError, RecordKind, RepositoryError, StoreError};
pub use expense_query::{ExpenseQuery, LocationGroup, QueryResult, SortKey, location_groups};
pub use model::{Action, AppState, DEFAULT_CATEGORIES};
pub use ports::{IdGenerator, StateRepository};
pub use reducer::reduce;
pub use reports::{CategoryTotal, DashboardSummary, LocationTotal, Report, ReportBuilder, ReportPeriod};
pub use split_summary::{ParticipantPaid, SplitSummary, SplitSummaryService};
pub use store::ExpenseStore;
