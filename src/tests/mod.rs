//! Binary-side test suites exercising the library through its public API.

mod cli_tests;
