// Unit test modules for robert
//
// Each source file has a corresponding test file that focuses on behavior
// verification. HTTP round trips live in the integration tests under tests/.

pub mod config;
pub mod types;
