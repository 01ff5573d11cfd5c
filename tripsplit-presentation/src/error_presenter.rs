use tripsplit_application::{DraftError, RecordKind, StoreError};
use tripsplit_i18n as i18n;

pub fn format_store_error(error: &StoreError) -> String {
    match error {
        StoreError::Draft(draft) => format_draft_error(draft),
        StoreError::NotFound { kind, id } => i18n::record_not_found(record_label(*kind), *id),
        StoreError::Repository(source) => i18n::storage_failed(source),
    }
}

pub fn format_draft_error(error: &DraftError) -> String {
    match error {
        DraftError::MissingDescription => i18n::MISSING_DESCRIPTION.to_owned(),
        DraftError::MissingCategory => i18n::MISSING_CATEGORY.to_owned(),
        DraftError::MissingName => i18n::MISSING_NAME.to_owned(),
        DraftError::NegativeAmount(amount) => i18n::negative_amount(amount),
        DraftError::TooPrecise(amount) => i18n::too_precise(amount),
        DraftError::AmountTooLarge(amount) => i18n::amount_too_large(amount),
    }
}

fn record_label(kind: RecordKind) -> &'static str {
    match kind {
        RecordKind::Expense => i18n::EXPENSE,
        RecordKind::Member => i18n::MEMBER,
        RecordKind::Group => i18n::GROUP,
    }
}
