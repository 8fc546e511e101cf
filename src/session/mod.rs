//! Interactive generation session.
//!
//! Collects the run parameters through a [`Prompter`](crate::prompt::Prompter)
//! and hands the resulting job to the variation engine.

mod runner;

pub use runner::{SessionError, SessionSettings, run_session};
