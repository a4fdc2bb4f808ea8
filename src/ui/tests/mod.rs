//! UI layer tests
//!
//! These run without a display: they exercise the Controller and the pure
//! helpers of the components.

mod backup_dialog_tests;
