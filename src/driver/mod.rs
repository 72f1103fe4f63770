//! Top-level driver module.
//!
//! This module contains the dispatch loop that consumes one top-level
//! unit at a time (a definition, an extern declaration, or a bare
//! expression) and hands each completed value to a [`Handler`]. It
//! implements the front end's error recovery: after a reported failure
//! the driver advances exactly one token and resumes dispatch.
//!
//! [`Handler`]: driver::Handler

pub mod driver;

#[cfg(test)]
mod tests;
