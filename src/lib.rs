//! Header compiler core for tolc
//!
//! A header compiler turns Java sources into class files that describe only
//! the API shape of each class: no method bodies are compiled. This crate
//! holds the two pieces every stage of that pipeline shares:
//!
//! - **ast**: the immutable syntax tree and its [`ast::Visitor`] contract
//! - **codegen**: the per-class [`codegen::ConstantPool`] and its serialization
//! - **model**: constant, operator and modifier types referenced by the tree
//!
//! ## Flow
//!
//! ```text
//! Parser → ast::CompUnit → passes (Visitor) → emitter → ConstantPool → bytes
//! ```
//!
//! Parsing, resolution and the rest of the class-file writer live outside
//! this crate.

pub mod ast;
pub mod codegen;
pub mod error;
pub mod model;

pub use error::{Error, Result};
