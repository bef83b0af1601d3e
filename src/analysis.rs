//! Query analysis types shared with the host pipeline.

pub mod token;
