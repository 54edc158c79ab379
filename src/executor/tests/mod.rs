//! Executor tests

mod capture_tests;
mod helpers;
mod kube_config_tests;
