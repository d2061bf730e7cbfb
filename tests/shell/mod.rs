//! Shell session tests.

pub mod common;
pub mod dispatch_test;
pub mod help_test;
pub mod registration_test;
