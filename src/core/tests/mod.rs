//! Core module tests
//!
//! Contains test suites for core functionality:
//! - Collection mutation tests (add, edit, delete, reorder, swap)
//! - Board tests (modes, edit dialog, drag and drop)
//! - Input validation tests
//! - View model tests
