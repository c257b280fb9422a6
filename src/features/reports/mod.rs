//! Read-only U5MR reports.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/report/1` | Yearly history of one country, newest first |
//! | POST | `/report/2` | Countries of a sub-region in a year, lowest rate first |
//! | POST | `/report/3` | Sub-region averages within a region in a year |
//! | POST | `/search` | Countries matching a keyword, 2023 figures only |
//! | POST | `/report/8` | Five highest rates in a year, ranked |
//!
//! Results render as `<table>` fragments; an empty result renders the
//! endpoint's own "no data" sentence rather than an error.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::ReportService;
