//! API module
//!
//! Contains HTTP request handlers for the activity catalog endpoints

pub mod activities;
