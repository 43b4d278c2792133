//! clips: ephemeral, name-addressed text sharing over HTTP.

pub mod bootstrap;
pub mod cli;
pub mod web;
