//! Value types shared by syntax-tree nodes: constant kinds, constant values,
//! operators, modifiers and type-declaration kinds.

use std::collections::BTreeSet;
use std::fmt;

/// The type of a constant: a primitive or `String`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ConstTypeKind {
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    Char,
    Float,
    Double,
    String,
}

impl ConstTypeKind {
    pub fn is_primitive(self) -> bool {
        !matches!(self, ConstTypeKind::String)
    }

    /// Source spelling of the type.
    pub fn keyword(self) -> &'static str {
        match self {
            ConstTypeKind::Boolean => "boolean",
            ConstTypeKind::Byte => "byte",
            ConstTypeKind::Short => "short",
            ConstTypeKind::Int => "int",
            ConstTypeKind::Long => "long",
            ConstTypeKind::Char => "char",
            ConstTypeKind::Float => "float",
            ConstTypeKind::Double => "double",
            ConstTypeKind::String => "String",
        }
    }
}

impl fmt::Display for ConstTypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A constant value, as carried by a literal.
#[derive(Debug, Clone, PartialEq)]
pub enum Const {
    Boolean(bool),
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    /// A UTF-16 code unit.
    Char(u16),
    Float(f32),
    Double(f64),
    String(String),
}

impl Const {
    pub fn kind(&self) -> ConstTypeKind {
        match self {
            Const::Boolean(_) => ConstTypeKind::Boolean,
            Const::Byte(_) => ConstTypeKind::Byte,
            Const::Short(_) => ConstTypeKind::Short,
            Const::Int(_) => ConstTypeKind::Int,
            Const::Long(_) => ConstTypeKind::Long,
            Const::Char(_) => ConstTypeKind::Char,
            Const::Float(_) => ConstTypeKind::Float,
            Const::Double(_) => ConstTypeKind::Double,
            Const::String(_) => ConstTypeKind::String,
        }
    }
}

impl fmt::Display for Const {
    /// Renders the value as a source literal.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Const::Boolean(v) => write!(f, "{}", v),
            Const::Byte(v) => write!(f, "{}", v),
            Const::Short(v) => write!(f, "{}", v),
            Const::Int(v) => write!(f, "{}", v),
            Const::Long(v) => write!(f, "{}L", v),
            Const::Char(v) => {
                f.write_str("'")?;
                write_escaped(f, *v, '\'')?;
                f.write_str("'")
            }
            Const::Float(v) => {
                if v.is_nan() {
                    f.write_str("(0.0f / 0.0f)")
                } else if v.is_infinite() {
                    write!(f, "({}1.0f / 0.0f)", if *v < 0.0 { "-" } else { "" })
                } else {
                    write!(f, "{:?}f", v)
                }
            }
            Const::Double(v) => {
                if v.is_nan() {
                    f.write_str("(0.0 / 0.0)")
                } else if v.is_infinite() {
                    write!(f, "({}1.0 / 0.0)", if *v < 0.0 { "-" } else { "" })
                } else {
                    write!(f, "{:?}", v)
                }
            }
            Const::String(v) => {
                f.write_str("\"")?;
                for unit in v.encode_utf16() {
                    write_escaped(f, unit, '"')?;
                }
                f.write_str("\"")
            }
        }
    }
}

/// Writes one UTF-16 code unit as it would appear inside a literal quoted
/// with `quote`. Anything outside printable ASCII becomes `\uXXXX`.
fn write_escaped(f: &mut fmt::Formatter<'_>, unit: u16, quote: char) -> fmt::Result {
    match unit {
        0x08 => f.write_str("\\b"),
        0x09 => f.write_str("\\t"),
        0x0a => f.write_str("\\n"),
        0x0c => f.write_str("\\f"),
        0x0d => f.write_str("\\r"),
        0x5c => f.write_str("\\\\"),
        0x20..=0x7e => {
            let c = char::from(unit as u8);
            if c == quote {
                write!(f, "\\{}", c)
            } else {
                write!(f, "{}", c)
            }
        }
        _ => write!(f, "\\u{:04x}", unit),
    }
}

/// Operators that may appear in constant expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorKind {
    PostIncr,
    PostDecr,
    PreIncr,
    PreDecr,
    UnaryPlus,
    Neg,
    BitwiseComp,
    Not,
    Mult,
    Divide,
    Modulo,
    Plus,
    Minus,
    ShiftLeft,
    ShiftRight,
    UnsignedShiftRight,
    LessThan,
    GreaterThan,
    LessThanEq,
    GreaterThanEq,
    Equal,
    NotEqual,
    BitwiseAnd,
    BitwiseXor,
    BitwiseOr,
    And,
    Or,
    Ternary,
    Assign,
}

impl OperatorKind {
    pub fn symbol(self) -> &'static str {
        use OperatorKind::*;
        match self {
            PostIncr | PreIncr => "++",
            PostDecr | PreDecr => "--",
            UnaryPlus | Plus => "+",
            Neg | Minus => "-",
            BitwiseComp => "~",
            Not => "!",
            Mult => "*",
            Divide => "/",
            Modulo => "%",
            ShiftLeft => "<<",
            ShiftRight => ">>",
            UnsignedShiftRight => ">>>",
            LessThan => "<",
            GreaterThan => ">",
            LessThanEq => "<=",
            GreaterThanEq => ">=",
            Equal => "==",
            NotEqual => "!=",
            BitwiseAnd => "&",
            BitwiseXor => "^",
            BitwiseOr => "|",
            And => "&&",
            Or => "||",
            Ternary => "?",
            Assign => "=",
        }
    }

    /// Binding strength, higher binds tighter (JLS 15).
    pub fn precedence(self) -> u8 {
        use OperatorKind::*;
        match self {
            PostIncr | PostDecr => 14,
            PreIncr | PreDecr | UnaryPlus | Neg | BitwiseComp | Not => 13,
            Mult | Divide | Modulo => 12,
            Plus | Minus => 11,
            ShiftLeft | ShiftRight | UnsignedShiftRight => 10,
            LessThan | GreaterThan | LessThanEq | GreaterThanEq => 9,
            Equal | NotEqual => 8,
            BitwiseAnd => 7,
            BitwiseXor => 6,
            BitwiseOr => 5,
            And => 4,
            Or => 3,
            Ternary => 2,
            Assign => 1,
        }
    }

    /// Whether the operator is written after its operand.
    pub fn is_postfix(self) -> bool {
        matches!(self, OperatorKind::PostIncr | OperatorKind::PostDecr)
    }
}

impl fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Declaration modifiers, in canonical source order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Modifier {
    Public,
    Protected,
    Private,
    Abstract,
    // Java 8: default interface method
    Default,
    Static,
    Final,
    Transient,
    Volatile,
    Synchronized,
    Native,
    Strictfp,
}

impl Modifier {
    pub fn keyword(self) -> &'static str {
        match self {
            Modifier::Public => "public",
            Modifier::Protected => "protected",
            Modifier::Private => "private",
            Modifier::Abstract => "abstract",
            Modifier::Default => "default",
            Modifier::Static => "static",
            Modifier::Final => "final",
            Modifier::Transient => "transient",
            Modifier::Volatile => "volatile",
            Modifier::Synchronized => "synchronized",
            Modifier::Native => "native",
            Modifier::Strictfp => "strictfp",
        }
    }

    /// The class-file access flag (JVMS 4.1, 4.5, 4.6). `default` has none.
    pub fn access_flag(self) -> u16 {
        match self {
            Modifier::Public => 0x0001,
            Modifier::Private => 0x0002,
            Modifier::Protected => 0x0004,
            Modifier::Static => 0x0008,
            Modifier::Final => 0x0010,
            Modifier::Synchronized => 0x0020,
            Modifier::Volatile => 0x0040,
            Modifier::Transient => 0x0080,
            Modifier::Native => 0x0100,
            Modifier::Abstract => 0x0400,
            Modifier::Strictfp => 0x0800,
            Modifier::Default => 0,
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Combined access flags for a modifier set.
pub fn access_flags(mods: &BTreeSet<Modifier>) -> u16 {
    mods.iter().fold(0, |flags, m| flags | m.access_flag())
}

/// The kind of a type declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TyKind {
    Class,
    Interface,
    Enum,
    Annotation,
}

impl TyKind {
    pub fn keyword(self) -> &'static str {
        match self {
            TyKind::Class => "class",
            TyKind::Interface => "interface",
            TyKind::Enum => "enum",
            TyKind::Annotation => "@interface",
        }
    }
}
