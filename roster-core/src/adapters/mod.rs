//! Adapter implementations
//!
//! Adapters implement the port traits with concrete technologies:
//! - randomuser.me HTTP client for the UserSource port
//! - Seeded offline generator for demo mode and tests

pub mod demo;
pub mod randomuser;

#[cfg(test)]
pub mod randomuser_mock;
