use crate::cli::{
    Command, ExpenseAddArgs, ExpenseCommand, ExpenseDetails, ExpenseListArgs, ExpenseUpdateArgs,
    GroupArgs, GroupCommand, LocationsArgs, MemberArgs, MemberCommand, MemberUpdateArgs,
    ReportArgs, SplitArgs,
};
use anyhow::Result;
use chrono::NaiveDate;
use tripsplit_application::{
    DashboardSummary, ExpenseDraft, ExpenseQuery, ExpenseStore, GroupDraft, IdGenerator,
    MemberDraft, RecordKind, ReportBuilder, SplitSummaryService, StateRepository, StoreError,
    location_groups,
};
use tripsplit_domain::{ExpenseId, GroupId, Location, MemberId};
use tripsplit_presentation::{ExpensePresenter, ReportPresenter, SettlementPresenter};

/// Runs one command against the store and returns what should be printed.
pub fn execute<R, G>(
    command: Command,
    store: &mut ExpenseStore<R, G>,
    today: NaiveDate,
) -> Result<String>
where
    R: StateRepository,
    G: IdGenerator,
{
    match command {
        Command::Expense(command) => expense(command, store, today),
        Command::Member(command) => member(command, store),
        Command::Group(command) => group(command, store),
        Command::Split(args) => Ok(split(args, store)),
        Command::Report(args) => Ok(report(args, store, today)),
        Command::Dashboard => Ok(ReportPresenter::render_dashboard(
            &DashboardSummary::from_state(store.state(), today),
        )),
        Command::Locations(args) => Ok(locations(args, store)),
    }
}

fn expense<R, G>(
    command: ExpenseCommand,
    store: &mut ExpenseStore<R, G>,
    today: NaiveDate,
) -> Result<String>
where
    R: StateRepository,
    G: IdGenerator,
{
    match command {
        ExpenseCommand::Add(args) => {
            let ExpenseAddArgs {
                description,
                amount,
                category,
                date,
                paid_by,
                details,
            } = args;
            let mut draft =
                ExpenseDraft::new(description, amount, category, date.unwrap_or(today));
            draft.paid_by = paid_by;
            apply_details(&mut draft, details);

            let id = store.add_expense(draft)?;
            Ok(format!("Added expense {id}"))
        }
        ExpenseCommand::List(args) => Ok(list_expenses(args, store)),
        ExpenseCommand::Update(args) => {
            let id = ExpenseId(args.id);
            let existing = store.state().expense(id).ok_or(StoreError::NotFound {
                kind: RecordKind::Expense,
                id: id.0,
            })?;
            let draft = merge_expense(ExpenseDraft::from(existing), args);

            store.update_expense(id, draft)?;
            Ok(format!("Updated expense {id}"))
        }
        ExpenseCommand::Delete { id } => {
            store.delete_expense(ExpenseId(id))?;
            Ok(format!("Deleted expense {id}"))
        }
    }
}

fn merge_expense(mut draft: ExpenseDraft, args: ExpenseUpdateArgs) -> ExpenseDraft {
    let ExpenseUpdateArgs {
        id: _,
        description,
        amount,
        category,
        date,
        paid_by,
        details,
    } = args;
    if let Some(description) = description {
        draft.description = description;
    }
    if let Some(amount) = amount {
        draft.amount = amount;
    }
    if let Some(category) = category {
        draft.category = category;
    }
    if let Some(date) = date {
        draft.date = date;
    }
    if let Some(paid_by) = paid_by {
        draft.paid_by = Some(paid_by);
    }
    apply_details(&mut draft, details);
    draft
}

fn apply_details(draft: &mut ExpenseDraft, details: ExpenseDetails) {
    if !details.split_with.is_empty() {
        draft.split_with = details.split_with;
    }
    if let Some(address) = details.address {
        draft.location = (!address.is_empty()).then(|| Location {
            address,
            lat: details.lat.unwrap_or_default(),
            lng: details.lng.unwrap_or_default(),
        });
    }
    if let Some(receipt) = details.receipt {
        draft.receipt = Some(receipt).filter(|receipt| !receipt.is_empty());
    }
    if let Some(notes) = details.notes {
        draft.notes = notes;
    }
}

fn list_expenses<R, G>(args: ExpenseListArgs, store: &ExpenseStore<R, G>) -> String
where
    R: StateRepository,
    G: IdGenerator,
{
    let query = ExpenseQuery {
        search: args.search,
        category: args.category,
        sort: args.sort.into(),
    };
    ExpensePresenter::render_expenses(&query.run(&store.state().expenses))
}

fn member<R, G>(command: MemberCommand, store: &mut ExpenseStore<R, G>) -> Result<String>
where
    R: StateRepository,
    G: IdGenerator,
{
    match command {
        MemberCommand::Add(MemberArgs { name, email, phone }) => {
            let draft = MemberDraft { name, email, phone };
            let id = store.add_member(draft)?;
            Ok(format!("Added member {id}"))
        }
        MemberCommand::List => Ok(ExpensePresenter::render_members(&store.state().members)),
        MemberCommand::Update { id, member } => {
            let id = MemberId(id);
            let existing = store.state().member(id).ok_or(StoreError::NotFound {
                kind: RecordKind::Member,
                id: id.0,
            })?;
            let MemberUpdateArgs { name, email, phone } = member;
            let mut draft = MemberDraft::from(existing);
            if let Some(name) = name {
                draft.name = name;
            }
            if email.is_some() {
                draft.email = email;
            }
            if phone.is_some() {
                draft.phone = phone;
            }

            store.update_member(id, draft)?;
            Ok(format!("Updated member {id}"))
        }
        MemberCommand::Delete { id } => {
            store.delete_member(MemberId(id))?;
            Ok(format!("Deleted member {id}"))
        }
    }
}

fn group<R, G>(command: GroupCommand, store: &mut ExpenseStore<R, G>) -> Result<String>
where
    R: StateRepository,
    G: IdGenerator,
{
    match command {
        GroupCommand::Add(GroupArgs { name, description }) => {
            let id = store.add_group(GroupDraft { name, description })?;
            Ok(format!("Added group {id}"))
        }
        GroupCommand::List => Ok(ExpensePresenter::render_groups(&store.state().groups)),
        GroupCommand::Update {
            id,
            name,
            description,
        } => {
            let id = GroupId(id);
            let existing = store.state().group(id).ok_or(StoreError::NotFound {
                kind: RecordKind::Group,
                id: id.0,
            })?;
            let mut draft = GroupDraft::from(existing);
            if let Some(name) = name {
                draft.name = name;
            }
            if description.is_some() {
                draft.description = description;
            }

            store.update_group(id, draft)?;
            Ok(format!("Updated group {id}"))
        }
        GroupCommand::Delete { id } => {
            store.delete_group(GroupId(id))?;
            Ok(format!("Deleted group {id}"))
        }
    }
}

fn split<R, G>(args: SplitArgs, store: &ExpenseStore<R, G>) -> String
where
    R: StateRepository,
    G: IdGenerator,
{
    let service = SplitSummaryService::default();
    let available = service.available(store.state());

    let selected: Vec<String> = if args.names.is_empty() {
        available.iter().map(|participant| participant.name.clone()).collect()
    } else {
        for name in &args.names {
            if !available.iter().any(|participant| &participant.name == name) {
                tracing::warn!(name = %name, "Selected name is neither a member nor a payer");
            }
        }
        args.names
    };

    let summary = service.summarize(store.state(), &selected);
    let settlement = SettlementPresenter::render(&summary).to_text();
    if available.is_empty() {
        return settlement;
    }
    let available = SettlementPresenter::build_available_table(&available);
    format!("{available}\n\n{settlement}")
}

fn report<R, G>(args: ReportArgs, store: &ExpenseStore<R, G>, today: NaiveDate) -> String
where
    R: StateRepository,
    G: IdGenerator,
{
    let report = ReportBuilder::build(&store.state().expenses, args.period.into(), today);
    ReportPresenter::render(&report)
}

fn locations<R, G>(args: LocationsArgs, store: &ExpenseStore<R, G>) -> String
where
    R: StateRepository,
    G: IdGenerator,
{
    let groups = location_groups(&store.state().expenses, args.category.as_deref());
    ReportPresenter::render_locations(&groups)
}
