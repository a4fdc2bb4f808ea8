//! Store module tests
//!
//! - StoreManager load/persist/backup tests
//! - StoreTransaction begin/commit tests
//! - Import/export tests

mod import_export_tests;
mod store_manager_tests;
mod transaction_tests;
