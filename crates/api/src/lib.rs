//! `gauchorecords-api` — HTTP surface of the student-records service.

pub mod app;
pub mod context;
pub mod middleware;
