//! Record-to-summary rendering shared by all three endpoints.

use typeahead_core::{Record, Summary};
use typeahead_store::ModelSource;

/// Render one record through its source's display hooks.
///
/// The record is first narrowed via [`ModelSource::specific`], then titled
/// with the source's label override when it yields one, falling back to the
/// stored title. Rendering never fails; a record the store returned is always
/// presentable.
pub fn render_record(source: &dyn ModelSource, record: Record) -> Summary {
    let specific = source.specific(record);
    let title = source
        .label(&specific)
        .unwrap_or_else(|| specific.title.clone());
    Summary::new(specific.id, title)
}

/// Render a batch of records, preserving store order.
pub fn render_records(source: &dyn ModelSource, records: Vec<Record>) -> Vec<Summary> {
    records
        .into_iter()
        .map(|record| render_record(source, record))
        .collect()
}
