use crate::fields::{DerivedFieldSet, FieldMapping, WritePolicy};
use crate::record::Record;

/// Write derived values into a record under the per-role policies.
///
/// A write is skipped when the role has no destination, the destination
/// is not one of the record's fields, the derived value is empty, or
/// the policy rejects it. Returns true iff at least one field was
/// actually written.
pub fn apply(
    record: &mut dyn Record,
    derived: &DerivedFieldSet,
    mapping: &dyn FieldMapping,
) -> bool {
    let mut changed = false;

    for (role, value) in derived.iter() {
        let Some(dest) = mapping.destination(*role) else {
            continue;
        };
        if !record.has_field(dest) {
            tracing::debug!(field = dest, "destination missing from record, skipping");
            continue;
        }
        if value.is_empty() {
            continue;
        }

        let write = match role.policy() {
            WritePolicy::FillIfEmpty => record.get(dest).is_none_or(str::is_empty),
            WritePolicy::ReplaceIfDifferent => record.get(dest) != Some(value.as_str()),
        };
        if write {
            record.set(dest, value);
            changed = true;
        }
    }

    changed
}
