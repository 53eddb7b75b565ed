pub mod attributes;
pub mod builder;
pub mod edge;
pub mod filter;
pub mod graph;
pub mod model;
pub mod node;
pub mod ports;
pub mod resolver;
