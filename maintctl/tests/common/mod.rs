//! Shared test utilities: the mock management server.

// Allow unused helpers - not every test file uses the whole fixture
#![allow(dead_code)]

pub mod mock_server;

pub use mock_server::MockManagementServer;
