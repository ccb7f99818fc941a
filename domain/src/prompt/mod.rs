//! Prompt templates for the pipeline flows

pub mod template;
