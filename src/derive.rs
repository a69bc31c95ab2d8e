use chrono::Datelike;

use crate::data::Dataset;

/// Fills in the fields derived from the stay interval: `days_lived` as whole
/// days between start and end, and `year` from the start date.
///
/// Runs once per dataset before registration. Idempotent, since both fields
/// are pure functions of the parsed dates; an empty dataset is a no-op.
pub fn augment(dataset: &mut Dataset) {
    for record in dataset.records_mut() {
        record.days_lived = (record.end_date - record.start_date).num_days();
        record.year = record.start_date.year();
    }
}
