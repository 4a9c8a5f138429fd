//! Model Context Protocol gateway exposing the Wrike v4 REST API as tools.

pub mod api;
pub mod cli;
pub mod clients;
pub mod core;
pub mod domain;
pub mod infra;
pub mod tools;
