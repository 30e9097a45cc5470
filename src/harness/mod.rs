//! The perturbation sequence: which files get rewritten, in what order, with what pauses.

pub(crate) mod config;
pub(crate) mod plan;
pub(crate) mod runner;
pub(crate) mod settings;
