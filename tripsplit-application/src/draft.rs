use crate::error::DraftError;
use chrono::{DateTime, NaiveDate, Utc};
use tripsplit_domain::{Expense, ExpenseId, Group, GroupId, Location, Member, MemberId, Money};

/// User input for an expense before it has an id.
#[derive(Clone, Debug, PartialEq)]
pub struct ExpenseDraft {
    pub description: String,
    pub amount: Money,
    pub category: String,
    pub date: NaiveDate,
    pub paid_by: Option<String>,
    pub split_with: Vec<String>,
    pub location: Option<Location>,
    pub receipt: Option<String>,
    pub notes: String,
}

impl ExpenseDraft {
    pub fn new(
        description: impl Into<String>,
        amount: Money,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            description: description.into(),
            amount,
            category: category.into(),
            date,
            paid_by: None,
            split_with: Vec::new(),
            location: None,
            receipt: None,
            notes: String::new(),
        }
    }

    pub fn paid_by(mut self, payer: impl Into<String>) -> Self {
        self.paid_by = Some(payer.into());
        self
    }

    pub fn validate(&self) -> Result<(), DraftError> {
        if self.description.trim().is_empty() {
            return Err(DraftError::MissingDescription);
        }
        if self.category.trim().is_empty() {
            return Err(DraftError::MissingCategory);
        }
        if self.amount.is_negative() {
            return Err(DraftError::NegativeAmount(self.amount.to_string()));
        }
        if self.amount.has_sub_cent_digits() {
            return Err(DraftError::TooPrecise(self.amount.as_decimal().to_string()));
        }
        if self.amount > Money::MAX_EXPENSE {
            return Err(DraftError::AmountTooLarge(self.amount.to_string()));
        }
        Ok(())
    }

    pub fn into_expense(
        self,
        id: ExpenseId,
        timestamp: Option<DateTime<Utc>>,
    ) -> Result<Expense, DraftError> {
        self.validate()?;
        Ok(Expense {
            id,
            description: self.description.trim().to_owned(),
            amount: self.amount,
            category: self.category,
            date: self.date,
            paid_by: self.paid_by.filter(|payer| !payer.is_empty()),
            split_with: self.split_with,
            location: self.location,
            receipt: self.receipt,
            notes: self.notes,
            timestamp,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemberDraft {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl MemberDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn into_member(self, id: MemberId) -> Result<Member, DraftError> {
        let name = require_name(&self.name)?;
        Ok(Member {
            id,
            name,
            email: self.email.filter(|email| !email.is_empty()),
            phone: self.phone.filter(|phone| !phone.is_empty()),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GroupDraft {
    pub name: String,
    pub description: Option<String>,
}

impl GroupDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    pub fn into_group(self, id: GroupId) -> Result<Group, DraftError> {
        let name = require_name(&self.name)?;
        Ok(Group {
            id,
            name,
            description: self.description.filter(|d| !d.is_empty()),
        })
    }
}

fn require_name(name: &str) -> Result<String, DraftError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(DraftError::MissingName);
    }
    Ok(name.to_owned())
}

impl From<&Expense> for ExpenseDraft {
    fn from(expense: &Expense) -> Self {
        Self {
            description: expense.description.clone(),
            amount: expense.amount,
            category: expense.category.clone(),
            date: expense.date,
            paid_by: expense.paid_by.clone(),
            split_with: expense.split_with.clone(),
            location: expense.location.clone(),
            receipt: expense.receipt.clone(),
            notes: expense.notes.clone(),
        }
    }
}

impl From<&Member> for MemberDraft {
    fn from(member: &Member) -> Self {
        Self {
            name: member.name.clone(),
            email: member.email.clone(),
            phone: member.phone.clone(),
        }
    }
}

impl From<&Group> for GroupDraft {
    fn from(group: &Group) -> Self {
        Self {
            name: group.name.clone(),
            description: group.description.clone(),
        }
    }
}
