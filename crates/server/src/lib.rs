//! HTTP surface: public page routes plus the key-guarded admin API.

pub mod admin;
pub mod children;
pub mod errors;
pub mod pages;
pub mod routes;
pub mod startup;
pub mod state;

pub use startup::run;
