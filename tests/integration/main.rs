#[path = "../common/mod.rs"]
mod common;

mod flight_tests;
