//! Earnings ticker engine
//!
//! This crate classifies calendar days against a user's weekly work schedule and
//! a public-holiday calendar, counts the effective workdays of a month, finds the
//! next day off and computes how much pay has accrued so far today.
//!
//! The calculation core is pure and synchronous. The [`api`] module wraps it in a
//! small JSON-over-HTTP surface and [`config`] loads the schedule and holiday data
//! from disk.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
