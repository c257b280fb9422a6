//! U5MR record maintenance.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/record/add` | Append the year after a country's latest record |
//! | POST | `/record/update` | Change the rate of an existing (country, year) |
//! | POST | `/record/delete` | Remove a country's records in an inclusive year range |
//!
//! `(country_id, year)` is unique in `U5MR_Records`; the constraint, not the
//! application, is what rejects a duplicate year.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::RecordService;
