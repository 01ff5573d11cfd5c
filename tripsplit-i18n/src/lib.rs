#[cfg(all(feature = "ja", feature = "en"))]
compile_error!("Cannot enable both 'ja' and 'en' features at the same time");

#[cfg(feature = "ja")]
pub mod strings {
    pub const MEMBER: &str = "メンバー";
    pub const PAID: &str = "支払額";
    pub const SHARE: &str = "負担額";
    pub const STATUS: &str = "状態";
    pub const FROM: &str = "支払人";
    pub const TO: &str = "受取人";
    pub const AMOUNT: &str = "金額";
    pub const CATEGORY: &str = "カテゴリ";
    pub const PERCENT: &str = "割合";
    pub const DATE: &str = "日付";
    pub const DESCRIPTION: &str = "内容";
    pub const PAID_BY: &str = "支払者";
    pub const LOCATION: &str = "場所";
    pub const EXPENSES: &str = "件数";
    pub const NAME: &str = "名前";
    pub const EMAIL: &str = "メール";
    pub const PHONE: &str = "電話";
    pub const ID: &str = "ID";
    pub const TOTAL: &str = "合計";
    pub const SETTLED: &str = "清算済み";
    pub const ALL_SETTLED: &str = "清算完了！";
    pub const NO_PAYMENTS_NEEDED: &str = "支払いは必要ありません。";
    pub const SELECT_MEMBERS: &str = "清算するメンバーを選択してください。";
    pub const NO_EXPENSES: &str = "支出はありません。";
    pub const NO_LOCATIONS: &str = "場所の記録がある支出はありません。";
    pub const TOTAL_EXPENSES: &str = "支出合計";
    pub const AVERAGE_DAILY: &str = "1日平均";
    pub const THIS_MONTH: &str = "今月";
    pub const GROUPS: &str = "グループ数";
    pub const MEMBERS: &str = "メンバー数";
    pub const LOCATIONS: &str = "場所数";
    pub const RECENT_EXPENSES: &str = "最近の支出";
    pub const BY_CATEGORY: &str = "カテゴリ別";
    pub const DAILY_SPENDING: &str = "日別支出";
    pub const TOP_LOCATIONS: &str = "よく使った場所";
    pub const EXPENSE: &str = "支出";
    pub const GROUP: &str = "グループ";
    pub const MISSING_DESCRIPTION: &str = "内容を入力してください";
    pub const MISSING_CATEGORY: &str = "カテゴリを選択してください";
    pub const MISSING_NAME: &str = "名前を入力してください";
    pub const PERIOD_WEEK: &str = "週間";
    pub const PERIOD_MONTH: &str = "月間";
    pub const PERIOD_YEAR: &str = "年間";
    pub const PERIOD_ALL: &str = "全期間";
}

#[cfg(feature = "en")]
pub mod strings {
    pub const MEMBER: &str = "Member";
    pub const PAID: &str = "Paid";
    pub const SHARE: &str = "Share";
    pub const STATUS: &str = "Status";
    pub const FROM: &str = "From";
    pub const TO: &str = "To";
    pub const AMOUNT: &str = "Amount";
    pub const CATEGORY: &str = "Category";
    pub const PERCENT: &str = "Percent";
    pub const DATE: &str = "Date";
    pub const DESCRIPTION: &str = "Description";
    pub const PAID_BY: &str = "Paid By";
    pub const LOCATION: &str = "Location";
    pub const EXPENSES: &str = "Expenses";
    pub const NAME: &str = "Name";
    pub const EMAIL: &str = "Email";
    pub const PHONE: &str = "Phone";
    pub const ID: &str = "ID";
    pub const TOTAL: &str = "Total";
    pub const SETTLED: &str = "Settled";
    pub const ALL_SETTLED: &str = "All settled!";
    pub const NO_PAYMENTS_NEEDED: &str = "No payments needed.";
    pub const SELECT_MEMBERS: &str = "Select members to split expenses between.";
    pub const NO_EXPENSES: &str = "No expenses.";
    pub const NO_LOCATIONS: &str = "No expenses with a location.";
    pub const TOTAL_EXPENSES: &str = "Total Expenses";
    pub const AVERAGE_DAILY: &str = "Average Daily";
    pub const THIS_MONTH: &str = "This Month";
    pub const GROUPS: &str = "Groups";
    pub const MEMBERS: &str = "Members";
    pub const LOCATIONS: &str = "Locations";
    pub const RECENT_EXPENSES: &str = "Recent Expenses";
    pub const BY_CATEGORY: &str = "By Category";
    pub const DAILY_SPENDING: &str = "Daily Spending";
    pub const TOP_LOCATIONS: &str = "Top Locations";
    pub const EXPENSE: &str = "Expense";
    pub const GROUP: &str = "Group";
    pub const MISSING_DESCRIPTION: &str = "Description is required";
    pub const MISSING_CATEGORY: &str = "Category is required";
    pub const MISSING_NAME: &str = "Name is required";
    pub const PERIOD_WEEK: &str = "week";
    pub const PERIOD_MONTH: &str = "month";
    pub const PERIOD_YEAR: &str = "year";
    pub const PERIOD_ALL: &str = "all";
}

#[cfg(not(any(feature = "ja", feature = "en")))]
pub mod strings {
    pub const MEMBER: &str = "Member";
    pub const PAID: &str = "Paid";
    pub const SHARE: &str = "Share";
    pub const STATUS: &str = "Status";
    pub const FROM: &str = "From";
    pub const TO: &str = "To";
    pub const AMOUNT: &str = "Amount";
    pub const CATEGORY: &str = "Category";
    pub const PERCENT: &str = "Percent";
    pub const DATE: &str = "Date";
    pub const DESCRIPTION: &str = "Description";
    pub const PAID_BY: &str = "Paid By";
    pub const LOCATION: &str = "Location";
    pub const EXPENSES: &str = "Expenses";
    pub const NAME: &str = "Name";
    pub const EMAIL: &str = "Email";
    pub const PHONE: &str = "Phone";
    pub const ID: &str = "ID";
    pub const TOTAL: &str = "Total";
    pub const SETTLED: &str = "Settled";
    pub const ALL_SETTLED: &str = "All settled!";
    pub const NO_PAYMENTS_NEEDED: &str = "No payments needed.";
    pub const SELECT_MEMBERS: &str = "Select members to split expenses between.";
    pub const NO_EXPENSES: &str = "No expenses.";
    pub const NO_LOCATIONS: &str = "No expenses with a location.";
    pub const TOTAL_EXPENSES: &str = "Total Expenses";
    pub const AVERAGE_DAILY: &str = "Average Daily";
    pub const THIS_MONTH: &str = "This Month";
    pub const GROUPS: &str = "Groups";
    pub const MEMBERS: &str = "Members";
    pub const LOCATIONS: &str = "Locations";
    pub const RECENT_EXPENSES: &str = "Recent Expenses";
    pub const BY_CATEGORY: &str = "By Category";
    pub const DAILY_SPENDING: &str = "Daily Spending";
    pub const TOP_LOCATIONS: &str = "Top Locations";
    pub const EXPENSE: &str = "Expense";
    pub const GROUP: &str = "Group";
    pub const MISSING_DESCRIPTION: &str = "Description is required";
    pub const MISSING_CATEGORY: &str = "Category is required";
    pub const MISSING_NAME: &str = "Name is required";
    pub const PERIOD_WEEK: &str = "week";
    pub const PERIOD_MONTH: &str = "month";
    pub const PERIOD_YEAR: &str = "year";
    pub const PERIOD_ALL: &str = "all";
}

pub use strings::*;

#[cfg(feature = "ja")]
pub fn owes(amount: impl std::fmt::Display) -> String {
    format!("{amount} 支払う")
}

#[cfg(feature = "ja")]
pub fn gets(amount: impl std::fmt::Display) -> String {
    format!("{amount} 受け取る")
}

#[cfg(feature = "ja")]
pub fn split_total(total: impl std::fmt::Display, members: usize) -> String {
    format!("合計 {total} を {members} 人で清算")
}

#[cfg(feature = "en")]
pub fn owes(amount: impl std::fmt::Display) -> String {
    format!("Owes {amount}")
}

#[cfg(feature = "en")]
pub fn gets(amount: impl std::fmt::Display) -> String {
    format!("Gets {amount}")
}

#[cfg(feature = "en")]
pub fn split_total(total: impl std::fmt::Display, members: usize) -> String {
    format!("Splitting {total} between {members} members")
}

#[cfg(not(any(feature = "ja", feature = "en")))]
pub fn owes(amount: impl std::fmt::Display) -> String {
    format!("Owes {amount}")
}

#[cfg(not(any(feature = "ja", feature = "en")))]
pub fn gets(amount: impl std::fmt::Display) -> String {
    format!("Gets {amount}")
}

#[cfg(not(any(feature = "ja", feature = "en")))]
pub fn split_total(total: impl std::fmt::Display, members: usize) -> String {
    format!("Splitting {total} between {members} members")
}

#[cfg(feature = "ja")]
pub fn record_not_found(kind: &str, id: u64) -> String {
    format!("{kind} {id} が見つかりません")
}

#[cfg(feature = "ja")]
pub fn negative_amount(amount: impl std::fmt::Display) -> String {
    format!("金額は0以上にしてください: {amount}")
}

#[cfg(feature = "ja")]
pub fn storage_failed(detail: impl std::fmt::Display) -> String {
    format!("データファイルのエラー: {detail}")
}

#[cfg(feature = "en")]
pub fn record_not_found(kind: &str, id: u64) -> String {
    format!("{kind} {id} not found")
}

#[cfg(feature = "en")]
pub fn negative_amount(amount: impl std::fmt::Display) -> String {
    format!("Amount must not be negative: {amount}")
}

#[cfg(feature = "en")]
pub fn storage_failed(detail: impl std::fmt::Display) -> String {
    format!("Data file error: {detail}")
}

#[cfg(not(any(feature = "ja", feature = "en")))]
pub fn record_not_found(kind: &str, id: u64) -> String {
    format!("{kind} {id} not found")
}

#[cfg(not(any(feature = "ja", feature = "en")))]
pub fn negative_amount(amount: impl std::fmt::Display) -> String {
    format!("Amount must not be negative: {amount}")
}

#[cfg(not(any(feature = "ja", feature = "en")))]
pub fn storage_failed(detail: impl std::fmt::Display) -> String {
    format!("Data file error: {detail}")
}

#[cfg(feature = "ja")]
pub fn too_precise(amount: impl std::fmt::Display) -> String {
    format!("金額は小数点以下2桁までにしてください: {amount}")
}

#[cfg(feature = "ja")]
pub fn amount_too_large(amount: impl std::fmt::Display) -> String {
    format!("金額が上限を超えています: {amount}")
}

#[cfg(feature = "en")]
pub fn too_precise(amount: impl std::fmt::Display) -> String {
    format!("Amount must not have more than two decimal places: {amount}")
}

#[cfg(feature = "en")]
pub fn amount_too_large(amount: impl std::fmt::Display) -> String {
    format!("Amount exceeds the maximum: {amount}")
}

#[cfg(not(any(feature = "ja", feature = "en")))]
pub fn too_precise(amount: impl std::fmt::Display) -> String {
    format!("Amount must not have more than two decimal places: {amount}")
}

#[cfg(not(any(feature = "ja", feature = "en")))]
pub fn amount_too_large(amount: impl std::fmt::Display) -> String {
    format!("Amount exceeds the maximum: {amount}")
}

pub struct ReportHeading {
    period: &'static str,
    count: usize,
}

pub fn report_heading(period: &'static str, count: usize) -> ReportHeading {
    ReportHeading { period, count }
}

#[cfg(feature = "ja")]
impl std::fmt::Display for ReportHeading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "レポート ({}): 支出 {} 件", self.period, self.count)
    }
}

#[cfg(not(feature = "ja"))]
impl std::fmt::Display for ReportHeading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let plural = if self.count == 1 { "" } else { "s" };
        write!(
            f,
            "Report ({}): {} expense{plural}",
            self.period, self.count
        )
    }
}
