pub mod ports;
pub mod event_bus;
pub mod request;
pub mod session;
pub mod transcript;
pub mod history;
pub mod translation;
pub mod controller;
pub mod stubs;
pub mod workflow;

#[cfg(test)]
mod tests;
