//! Backend access for the page.

pub mod api;
