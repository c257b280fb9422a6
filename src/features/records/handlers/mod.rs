pub mod record_handler;

pub use record_handler::{
    __path_add_next_year, __path_delete_range, __path_update_record, add_next_year,
    delete_range, update_record,
};
