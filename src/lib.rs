pub mod canvas;
pub mod config;
pub mod error;
pub mod handlers;
pub mod ics;
pub mod routes;
pub mod shutdown;
pub mod startup;
