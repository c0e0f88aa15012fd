//! Constant pool builder, used when writing class files
//!
//! One pool is built per class file. Each distinct constant is stored once
//! and keeps the index it was first given. Indices start at 1; `long` and
//! `double` entries take up two indices (JVMS 4.4.5) but only one record in
//! [`ConstantPool::constants`].

use std::collections::HashMap;

/// Constant pool entry kinds, with their JVMS Table 4.4-A tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    ClassInfo,
    String,
    Integer,
    Double,
    Float,
    Long,
    Utf8,
}

impl EntryKind {
    /// The tag byte that starts this kind's `cp_info` structure.
    pub fn tag(self) -> u8 {
        match self {
            EntryKind::Utf8 => 1,
            EntryKind::Integer => 3,
            EntryKind::Float => 4,
            EntryKind::Long => 5,
            EntryKind::Double => 6,
            EntryKind::ClassInfo => 7,
            EntryKind::String => 8,
        }
    }

    /// The number of pool indices an entry of this kind takes up.
    pub fn width(self) -> u16 {
        match self {
            EntryKind::ClassInfo
            | EntryKind::String
            | EntryKind::Integer
            | EntryKind::Utf8
            | EntryKind::Float => 1,
            EntryKind::Long | EntryKind::Double => 2,
        }
    }
}

/// The payload of a pool entry.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Utf8(String),
    /// Index of the backing utf8 entry, for class-info and string entries.
    Index(u16),
    Integer(i32),
    Float(f32),
    Long(i64),
    Double(f64),
}

/// A constant pool entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    kind: EntryKind,
    value: Value,
}

impl Entry {
    fn new(kind: EntryKind, value: Value) -> Self {
        Self { kind, value }
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

/// Dedup key with the boxed floating-point equality of the class-file
/// platform: every NaN is one value, and `0.0` differs from `-0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct FloatKey(u32);

impl From<f32> for FloatKey {
    fn from(value: f32) -> Self {
        if value.is_nan() {
            FloatKey(f32::NAN.to_bits())
        } else {
            FloatKey(value.to_bits())
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct DoubleKey(u64);

impl From<f64> for DoubleKey {
    fn from(value: f64) -> Self {
        if value.is_nan() {
            DoubleKey(f64::NAN.to_bits())
        } else {
            DoubleKey(value.to_bits())
        }
    }
}

/// A constant pool under construction.
#[derive(Debug)]
pub struct ConstantPool {
    /// The next available entry index.
    next_entry: u16,

    utf8_pool: HashMap<String, u16>,
    class_info_pool: HashMap<u16, u16>,
    string_pool: HashMap<u16, u16>,
    integer_pool: HashMap<i32, u16>,
    long_pool: HashMap<i64, u16>,
    float_pool: HashMap<FloatKey, u16>,
    double_pool: HashMap<DoubleKey, u16>,

    constants: Vec<Entry>,
}

impl ConstantPool {
    pub fn new() -> Self {
        Self {
            next_entry: 1,
            utf8_pool: HashMap::new(),
            class_info_pool: HashMap::new(),
            string_pool: HashMap::new(),
            integer_pool: HashMap::new(),
            long_pool: HashMap::new(),
            float_pool: HashMap::new(),
            double_pool: HashMap::new(),
            constants: Vec::new(),
        }
    }

    /// Adds a `CONSTANT_Utf8_info` entry.
    pub fn utf8(&mut self, value: &str) -> u16 {
        if let Some(&index) = self.utf8_pool.get(value) {
            return index;
        }
        let index = self.insert(Entry::new(EntryKind::Utf8, Value::Utf8(value.to_string())));
        self.utf8_pool.insert(value.to_string(), index);
        index
    }

    /// Adds a `CONSTANT_Class_info` entry for a binary name like `java/lang/Object`.
    pub fn class_info(&mut self, value: &str) -> u16 {
        let existing = self.utf8_pool.get(value).copied();
        if let Some(index) = existing.and_then(|utf8| self.class_info_pool.get(&utf8)) {
            return *index;
        }
        self.ensure_space(EntryKind::ClassInfo, existing.is_none());
        let utf8 = self.utf8(value);
        let index = self.insert(Entry::new(EntryKind::ClassInfo, Value::Index(utf8)));
        self.class_info_pool.insert(utf8, index);
        index
    }

    /// Adds a `CONSTANT_String_info` entry.
    pub fn string(&mut self, value: &str) -> u16 {
        let existing = self.utf8_pool.get(value).copied();
        if let Some(index) = existing.and_then(|utf8| self.string_pool.get(&utf8)) {
            return *index;
        }
        self.ensure_space(EntryKind::String, existing.is_none());
        let utf8 = self.utf8(value);
        let index = self.insert(Entry::new(EntryKind::String, Value::Index(utf8)));
        self.string_pool.insert(utf8, index);
        index
    }

    /// Adds a `CONSTANT_Integer_info` entry.
    pub fn integer(&mut self, value: i32) -> u16 {
        if let Some(&index) = self.integer_pool.get(&value) {
            return index;
        }
        let index = self.insert(Entry::new(EntryKind::Integer, Value::Integer(value)));
        self.integer_pool.insert(value, index);
        index
    }

    /// Adds a `CONSTANT_Long_info` entry, which takes two indices.
    pub fn long_value(&mut self, value: i64) -> u16 {
        if let Some(&index) = self.long_pool.get(&value) {
            return index;
        }
        let index = self.insert(Entry::new(EntryKind::Long, Value::Long(value)));
        self.long_pool.insert(value, index);
        index
    }

    /// Adds a `CONSTANT_Double_info` entry, which takes two indices.
    pub fn double_value(&mut self, value: f64) -> u16 {
        let key = DoubleKey::from(value);
        if let Some(&index) = self.double_pool.get(&key) {
            return index;
        }
        let index = self.insert(Entry::new(EntryKind::Double, Value::Double(value)));
        self.double_pool.insert(key, index);
        index
    }

    /// Adds a `CONSTANT_Float_info` entry.
    pub fn float_value(&mut self, value: f32) -> u16 {
        let key = FloatKey::from(value);
        if let Some(&index) = self.float_pool.get(&key) {
            return index;
        }
        let index = self.insert(Entry::new(EntryKind::Float, Value::Float(value)));
        self.float_pool.insert(key, index);
        index
    }

    /// Checks that an entry of `kind`, plus its backing utf8 entry when
    /// `with_utf8` is set, still fits, so that a failed insertion adds nothing.
    ///
    /// # Panics
    ///
    /// If the entries would push `constant_pool_count` past `u16::MAX`.
    fn ensure_space(&self, kind: EntryKind, with_utf8: bool) -> u16 {
        let width = kind.width() + if with_utf8 { EntryKind::Utf8.width() } else { 0 };
        match self.next_entry.checked_add(width) {
            Some(next) => next,
            None => panic!(
                "constant pool overflow: cannot add {:?} entry at index {}",
                kind, self.next_entry
            ),
        }
    }

    /// # Panics
    ///
    /// If the entry would push `constant_pool_count` past `u16::MAX`.
    fn insert(&mut self, entry: Entry) -> u16 {
        let index = self.next_entry;
        let next = self.ensure_space(entry.kind(), false);
        log::trace!("constant pool: #{} = {:?} {:?}", index, entry.kind(), entry.value());
        self.constants.push(entry);
        self.next_entry = next;
        index
    }

    /// The entries in insertion order.
    ///
    /// A position in this slice is not an entry's index once a wide entry
    /// precedes it; use [`ConstantPool::entries`] to pair entries with indices.
    pub fn constants(&self) -> &[Entry] {
        &self.constants
    }

    /// Entries paired with their assigned indices.
    pub fn entries(&self) -> impl Iterator<Item = (u16, &Entry)> + '_ {
        self.constants.iter().scan(1u16, |next, entry| {
            let index = *next;
            *next = next.wrapping_add(entry.kind().width());
            Some((index, entry))
        })
    }

    /// The entry at an assigned index. Index 0 and the second slot of a wide
    /// entry hold nothing.
    pub fn get(&self, index: u16) -> Option<&Entry> {
        self.entries()
            .take_while(|(i, _)| *i <= index)
            .find(|(i, _)| *i == index)
            .map(|(_, entry)| entry)
    }

    /// The next index to be assigned; also the class file's `constant_pool_count`.
    pub fn next_entry(&self) -> u16 {
        self.next_entry
    }

    /// The number of entries, counting each wide entry once.
    pub fn len(&self) -> usize {
        self.constants.len()
    }

    /// Whether no entry has been added yet.
    pub fn is_empty(&self) -> bool {
        self.constants.is_empty()
    }
}

impl Default for ConstantPool {
    fn default() -> Self {
        Self::new()
    }
}
