//! Config module tests
//!
//! Loads real files from temporary directories through ConfigManager.
