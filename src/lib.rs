//! # lsystem-builder
//!
//! An engine-agnostic crate that expands L-System grammars and interprets the
//! result as turtle-graphics spawn commands.
//!
//! It decouples the *Grammar* (axiom + rewrite rules) from the *Structure*
//! (the instantiated object tree): [`LSystemBuilder`] walks the expanded
//! symbol string and drives a [`Host`] capability that game engines,
//! simulators, or offline bakers implement to actually create instances.

pub mod builder;
pub mod grammar;
pub mod turtle;

pub use builder::*;
pub use grammar::*;
pub use turtle::*;
