use crate::models::MeetingRecord;

/// Order by weekday, then room, then start time (unknown start sorts as 0).
/// The sort is stable, so equal keys keep their input order.
pub fn sort_records(records: &mut [MeetingRecord]) {
    records.sort_by_key(|r| (r.weekday.index(), r.room, r.sort_minutes()));
}
