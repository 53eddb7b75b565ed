//! modelgraph library — reflects domain-model type descriptors into a
//! directed reference graph and renders it as diagram markup.

pub mod adapters;
pub mod cli;
pub mod domain;
