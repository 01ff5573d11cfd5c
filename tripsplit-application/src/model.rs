use serde::{Deserialize, Serialize};
use tripsplit_domain::{Expense, ExpenseId, Group, GroupId, Member, MemberId};

pub const DEFAULT_CATEGORIES: [&str; 7] = [
    "Food & Dining",
    "Transportation",
    "Accommodation",
    "Entertainment",
    "Shopping",
    "Activities",
    "Other",
];

/// Everything the application knows, as one value.
///
/// Replaced wholesale on every action and persisted as a single snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub groups: Vec<Group>,
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            expenses: Vec::new(),
            groups: Vec::new(),
            members: Vec::new(),
            categories: default_categories(),
        }
    }
}

fn default_categories() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(|c| (*c).to_owned()).collect()
}

impl AppState {
    pub fn expense(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|expense| expense.id == id)
    }

    pub fn member(&self, id: MemberId) -> Option<&Member> {
        self.members.iter().find(|member| member.id == id)
    }

    pub fn group(&self, id: GroupId) -> Option<&Group> {
        self.groups.iter().find(|group| group.id == id)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    AddExpense(Expense),
    UpdateExpense(Expense),
    DeleteExpense(ExpenseId),
    AddGroup(Group),
    UpdateGroup(Group),
    DeleteGroup(GroupId),
    AddMember(Member),
    UpdateMember(Member),
    DeleteMember(MemberId),
    LoadData(AppState),
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::AddExpense(_) => "add_expense",
            Action::UpdateExpense(_) => "update_expense",
            Action::DeleteExpense(_) => "delete_expense",
            Action::AddGroup(_) => "add_group",
            Action::UpdateGroup(_) => "update_group",
            Action::DeleteGroup(_) => "delete_group",
            Action::AddMember(_) => "add_member",
            Action::UpdateMember(_) => "update_member",
            Action::DeleteMember(_) => "delete_member",
            Action::LoadData(_) => "load_data",
        }
    }
}
