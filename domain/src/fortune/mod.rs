//! Fortune entities, fixed tables, and reply post-processing

pub mod entities;
pub mod parsing;
pub mod tables;
