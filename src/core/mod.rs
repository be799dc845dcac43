//! Menu logic: dishes, the catalog, validation, statistics and filtering.

pub mod catalog;
pub mod controller;
pub mod course;
pub mod dish;
pub mod filter;
pub mod seed;
pub mod stats;
pub mod validator;
