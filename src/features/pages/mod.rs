//! Dashboard document and its static assets.
//!
//! `GET /` serves the index document; any other unmatched path is looked up
//! under the static directory.

pub mod routes;
