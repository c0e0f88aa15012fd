//! Syntax tree for the header compiler
//!
//! The tree covers only what a header compilation needs: type uses, the
//! constant expressions that can appear in field initializers and annotation
//! values, and the declarations that make up a type's API shape. Method
//! bodies are never represented.
//!
//! Nodes are immutable once built. Passes traverse them through the
//! [`Visitor`] trait, which has one operation per dispatch slot.

mod nodes;
mod visitor;
mod printer;

pub use nodes::*;
pub use visitor::*;
pub use printer::*;

/// Discriminator for the concrete node shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    WildTy,
    ArrTy,
    PrimTy,
    VoidTy,
    ClassTy,
    Literal,
    TypeCast,
    Unary,
    Binary,
    ConstVarName,
    ClassLiteral,
    Assign,
    Conditional,
    ArrayInit,
    CompUnit,
    ImportDecl,
    VarDecl,
    MethDecl,
    Anno,
    AnnoExpr,
    TyDecl,
    TyParam,
    PkgDecl,
}

/// Node trait that all tree nodes implement
pub trait Node {
    /// The shape of this node.
    fn kind(&self) -> Kind;

    /// Invoke the visitor operation for this node's shape.
    fn accept<I, V: Visitor<I> + ?Sized>(&self, visitor: &mut V, input: I) -> V::Output;
}
