//! Open-loop motion generators.

pub mod sweep;
