//! Reference data lookups feed the dashboard's dropdowns.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/countries` | Countries ordered by name |
//! | GET | `/api/subregions` | Sub-regions ordered by name |
//! | GET | `/api/years` | Distinct record years, newest first |
//! | GET | `/api/regions` | Regions ordered by name |
//!
//! Each endpoint answers with `<option>` elements, led by an empty-valued
//! placeholder. A store failure answers with the bare text `Error`.

pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::LookupService;
