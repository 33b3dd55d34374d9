#![doc = "The `taskdock` library crate."]
#![doc = ""]
#![doc = "Contains the configuration, data access, validation, error handling, and"]
#![doc = "routing for the taskdock API. The binary (`main.rs`) wires these together"]
#![doc = "into the running server."]

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod security;
pub mod store;
pub mod validation;
