//! # UI Module
//!
//! Plain-text rendering of a scale report. Every writer takes any
//! `io::Write` so the output can be captured in tests.

pub mod catalog;
pub mod notes;
pub mod strings;
