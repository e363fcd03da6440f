pub mod config;
pub mod google;
pub mod twilio;
pub mod webhook;
