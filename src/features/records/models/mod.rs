mod record;

pub use record::{AddedRecord, DeletedRange};
