//! Protoboard — breadboard circuit documents for hobbyist electronics.
//!
//! This crate holds the data model consumed by the placement and routing
//! engine in `protoboard-layout`:
//!
//! - [`schema`] — serde types for circuit documents (components, nets, board)
//! - [`circuit`] — document lifecycle operations (add/remove with net pruning)
//! - [`catalog`] — built-in part templates for common through-hole parts

pub mod catalog;
pub mod circuit;
pub mod schema;

pub use schema::{
    BoardConfig, BoardKind, Circuit, Component, ComponentKind, Facing, Footprint, Net, NetNode,
    Pin, PinKind, SchemaError,
};
