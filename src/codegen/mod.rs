//! Class-file constant handling
//!
//! - **constpool**: per-class constant pool builder
//! - **writer**: serialization of pool entries into class-file bytes

pub mod constpool;
pub mod writer;

pub use constpool::{ConstantPool, Entry, EntryKind, Value};
pub use writer::{modified_utf8, ClassfileWritable};
