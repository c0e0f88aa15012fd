//! Trait-based serialization for classfile structures

use std::io::Write;

use super::constpool::{ConstantPool, Entry, Value};
use crate::error::{Error, Result};

/// An object which can be written into a classfile.
pub trait ClassfileWritable {
    /// Writes the bytes of this object into the given buffer.
    ///
    /// # Arguments
    ///
    /// * `buffer` - classfile byte-buffer into which this object should be written
    fn write_to_classfile<W: Write>(&self, buffer: &mut W) -> Result<()>;

    /// Writes the bytes of this object into a newly created buffer.
    fn to_classfile_bytes(&self) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        self.write_to_classfile(&mut buffer)?;
        Ok(buffer)
    }
}

impl ClassfileWritable for Entry {
    fn write_to_classfile<W: Write>(&self, buffer: &mut W) -> Result<()> {
        buffer.write_all(&[self.kind().tag()])?;
        match self.value() {
            Value::Utf8(text) => {
                let bytes = modified_utf8(text);
                let len = u16::try_from(bytes.len()).map_err(|_| Error::Utf8TooLong { len: bytes.len() })?;
                buffer.write_all(&len.to_be_bytes())?;
                buffer.write_all(&bytes)?;
            }
            Value::Index(index) => buffer.write_all(&index.to_be_bytes())?,
            Value::Integer(value) => buffer.write_all(&value.to_be_bytes())?,
            Value::Float(value) => {
                // NaN payloads are not preserved
                let bits = if value.is_nan() { f32::NAN.to_bits() } else { value.to_bits() };
                buffer.write_all(&bits.to_be_bytes())?;
            }
            Value::Long(value) => buffer.write_all(&value.to_be_bytes())?,
            Value::Double(value) => {
                let bits = if value.is_nan() { f64::NAN.to_bits() } else { value.to_bits() };
                buffer.write_all(&bits.to_be_bytes())?;
            }
        }
        Ok(())
    }
}

impl ClassfileWritable for ConstantPool {
    /// Writes `constant_pool_count` followed by every entry.
    fn write_to_classfile<W: Write>(&self, buffer: &mut W) -> Result<()> {
        log::debug!(
            "writing constant pool: count={} entries={}",
            self.next_entry(),
            self.len()
        );
        buffer.write_all(&self.next_entry().to_be_bytes())?;
        for entry in self.constants() {
            entry.write_to_classfile(buffer)?;
        }
        Ok(())
    }
}

/// Encodes text in the class file's modified UTF-8 (JVMS 4.4.7).
///
/// NUL takes two bytes and supplementary characters are written as a pair of
/// three-byte surrogates.
pub fn modified_utf8(text: &str) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(text.len());
    for unit in text.encode_utf16() {
        match unit {
            0x0001..=0x007f => bytes.push(unit as u8),
            0x0000 | 0x0080..=0x07ff => {
                bytes.push(0xc0 | (unit >> 6) as u8);
                bytes.push(0x80 | (unit & 0x3f) as u8);
            }
            _ => {
                bytes.push(0xe0 | (unit >> 12) as u8);
                bytes.push(0x80 | ((unit >> 6) & 0x3f) as u8);
                bytes.push(0x80 | (unit & 0x3f) as u8);
            }
        }
    }
    bytes
}
