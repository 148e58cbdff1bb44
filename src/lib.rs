pub mod app_state;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod services;

#[cfg(test)]
pub mod test_utils;
