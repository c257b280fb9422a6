/// Outcome of appending a record: the year that was resolved and the stored rate
#[derive(Debug, Clone, PartialEq)]
pub struct AddedRecord {
    pub year: i64,
    pub u5mr: f64,
}

/// Outcome of a range delete
#[derive(Debug, Clone, PartialEq)]
pub struct DeletedRange {
    pub deleted: u64,
    pub start_year: i64,
    pub end_year: i64,
}
