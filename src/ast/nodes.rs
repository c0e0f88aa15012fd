use std::collections::BTreeSet;

use super::{Kind, Node, Visitor};
use crate::model::{Const, ConstTypeKind, Modifier, OperatorKind, TyKind};

/// Implements [`Node`] for a shape that dispatches to its own visitor operation.
macro_rules! impl_node {
    ($($node:ident => $visit:ident),* $(,)?) => {
        $(
            impl Node for $node {
                fn kind(&self) -> Kind {
                    Kind::$node
                }

                fn accept<I, V: Visitor<I> + ?Sized>(&self, visitor: &mut V, input: I) -> V::Output {
                    visitor.$visit(self, input)
                }
            }
        )*
    };
}

/// Implements [`Node`] for a sum type by forwarding to the wrapped shape.
macro_rules! impl_node_forward {
    ($enum:ident { $($variant:ident),* $(,)? }) => {
        impl Node for $enum {
            fn kind(&self) -> Kind {
                match self {
                    $($enum::$variant(node) => node.kind(),)*
                }
            }

            fn accept<I, V: Visitor<I> + ?Sized>(&self, visitor: &mut V, input: I) -> V::Output {
                match self {
                    $($enum::$variant(node) => node.accept(visitor, input),)*
                }
            }
        }
    };
}

macro_rules! impl_from {
    ($enum:ident { $($variant:ident($node:ty)),* $(,)? }) => {
        $(
            impl From<$node> for $enum {
                fn from(node: $node) -> Self {
                    $enum::$variant(node)
                }
            }
        )*
    };
}

// Types

/// A type use.
#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    Wild(WildTy),
    Arr(ArrTy),
    Prim(PrimTy),
    Void(VoidTy),
    Class(ClassTy),
}

impl Type {
    /// Builds an array of `elem` with `dim` dimensions.
    ///
    /// Arrays of arrays fold into a single [`ArrTy`], and a zero dimension
    /// yields `elem` itself.
    pub fn array(elem: Type, dim: u32) -> Type {
        if dim == 0 {
            return elem;
        }
        match elem {
            Type::Arr(inner) => {
                let total = inner.dim.saturating_add(dim);
                Type::Arr(ArrTy { elem: inner.elem, dim: total })
            }
            other => Type::Arr(ArrTy::new(other, dim)),
        }
    }
}

impl_node_forward!(Type { Wild, Arr, Prim, Void, Class });
impl_from!(Type {
    Wild(WildTy),
    Arr(ArrTy),
    Prim(PrimTy),
    Void(VoidTy),
    Class(ClassTy),
});

/// A wildcard type, possibly with an upper or lower bound.
///
/// Callers are expected to set at most one bound. Nothing here checks that.
#[derive(Debug, Clone, PartialEq)]
pub struct WildTy {
    upper: Option<Box<Type>>,
    lower: Option<Box<Type>>,
}

impl WildTy {
    pub fn new(upper: Option<Type>, lower: Option<Type>) -> Self {
        Self {
            upper: upper.map(Box::new),
            lower: lower.map(Box::new),
        }
    }

    /// The `extends` bound.
    pub fn upper(&self) -> Option<&Type> {
        self.upper.as_deref()
    }

    /// The `super` bound.
    pub fn lower(&self) -> Option<&Type> {
        self.lower.as_deref()
    }
}

/// An array type.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrTy {
    elem: Box<Type>,
    dim: u32,
}

impl ArrTy {
    pub fn new(elem: Type, dim: u32) -> Self {
        Self { elem: Box::new(elem), dim }
    }

    /// The element type of the array.
    ///
    /// This is never another array when built by [`Type::array`];
    /// multi-dimensional arrays are a single `ArrTy` with `dim > 1`.
    pub fn elem(&self) -> &Type {
        &self.elem
    }

    pub fn dim(&self) -> u32 {
        self.dim
    }
}

/// A primitive type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrimTy {
    kind: ConstTypeKind,
}

impl PrimTy {
    pub fn new(kind: ConstTypeKind) -> Self {
        Self { kind }
    }

    pub fn tykind(&self) -> ConstTypeKind {
        self.kind
    }
}

/// The void type, used only for void-returning methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VoidTy;

impl VoidTy {
    pub const INSTANCE: VoidTy = VoidTy;
}

/// A class, enum, interface, or annotation type.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassTy {
    base: Option<Box<ClassTy>>,
    name: String,
    tyargs: Vec<Type>,
}

impl ClassTy {
    pub fn new(base: Option<ClassTy>, name: impl Into<String>, tyargs: Vec<Type>) -> Self {
        Self {
            base: base.map(Box::new),
            name: name.into(),
            tyargs,
        }
    }

    /// The qualifying type, e.g. `Map` in `Map.Entry`.
    pub fn base(&self) -> Option<&ClassTy> {
        self.base.as_deref()
    }

    /// The simple name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tyargs(&self) -> &[Type] {
        &self.tyargs
    }
}

impl_node! {
    WildTy => visit_wild_ty,
    ArrTy => visit_arr_ty,
    PrimTy => visit_prim_ty,
    VoidTy => visit_void_ty,
    ClassTy => visit_class_ty,
}

// Expressions

/// An expression that may appear in a constant or annotation context.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Literal(Literal),
    TypeCast(TypeCast),
    Unary(Unary),
    Binary(Binary),
    ConstVarName(ConstVarName),
    ClassLiteral(ClassLiteral),
    Assign(Assign),
    Conditional(Conditional),
    ArrayInit(ArrayInit),
    AnnoExpr(AnnoExpr),
}

impl_node_forward!(Expression {
    Literal,
    TypeCast,
    Unary,
    Binary,
    ConstVarName,
    ClassLiteral,
    Assign,
    Conditional,
    ArrayInit,
    AnnoExpr,
});
impl_from!(Expression {
    Literal(Literal),
    TypeCast(TypeCast),
    Unary(Unary),
    Binary(Binary),
    ConstVarName(ConstVarName),
    ClassLiteral(ClassLiteral),
    Assign(Assign),
    Conditional(Conditional),
    ArrayInit(ArrayInit),
    AnnoExpr(AnnoExpr),
});

/// A JLS 3.10 literal.
#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    kind: ConstTypeKind,
    value: Const,
}

impl Literal {
    pub fn new(kind: ConstTypeKind, value: Const) -> Self {
        Self { kind, value }
    }

    pub fn tykind(&self) -> ConstTypeKind {
        self.kind
    }

    pub fn value(&self) -> &Const {
        &self.value
    }
}

/// A JLS 15.16 cast expression.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeCast {
    ty: Type,
    expr: Box<Expression>,
}

impl TypeCast {
    pub fn new(ty: Type, expr: Expression) -> Self {
        Self { ty, expr: Box::new(expr) }
    }

    pub fn ty(&self) -> &Type {
        &self.ty
    }

    pub fn expr(&self) -> &Expression {
        &self.expr
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Unary {
    expr: Box<Expression>,
    op: OperatorKind,
}

impl Unary {
    pub fn new(expr: Expression, op: OperatorKind) -> Self {
        Self { expr: Box::new(expr), op }
    }

    pub fn expr(&self) -> &Expression {
        &self.expr
    }

    pub fn op(&self) -> OperatorKind {
        self.op
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Binary {
    lhs: Box<Expression>,
    rhs: Box<Expression>,
    op: OperatorKind,
}

impl Binary {
    pub fn new(lhs: Expression, rhs: Expression, op: OperatorKind) -> Self {
        Self {
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
            op,
        }
    }

    pub fn lhs(&self) -> &Expression {
        &self.lhs
    }

    pub fn rhs(&self) -> &Expression {
        &self.rhs
    }

    pub fn op(&self) -> OperatorKind {
        self.op
    }
}

/// A (possibly qualified) name that refers to a constant variable.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstVarName {
    name: Vec<String>,
}

impl ConstVarName {
    pub fn new(name: Vec<String>) -> Self {
        Self { name }
    }

    pub fn name(&self) -> &[String] {
        &self.name
    }
}

/// A JLS 15.8.2 class literal, e.g. `String.class`.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassLiteral {
    ty: Type,
}

impl ClassLiteral {
    pub fn new(ty: Type) -> Self {
        Self { ty }
    }

    pub fn ty(&self) -> &Type {
        &self.ty
    }
}

/// An assignment, as used for `name = value` annotation arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct Assign {
    name: String,
    expr: Box<Expression>,
}

impl Assign {
    pub fn new(name: impl Into<String>, expr: Expression) -> Self {
        Self {
            name: name.into(),
            expr: Box::new(expr),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn expr(&self) -> &Expression {
        &self.expr
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Conditional {
    cond: Box<Expression>,
    iftrue: Box<Expression>,
    iffalse: Box<Expression>,
}

impl Conditional {
    pub fn new(cond: Expression, iftrue: Expression, iffalse: Expression) -> Self {
        Self {
            cond: Box::new(cond),
            iftrue: Box::new(iftrue),
            iffalse: Box::new(iffalse),
        }
    }

    pub fn cond(&self) -> &Expression {
        &self.cond
    }

    pub fn iftrue(&self) -> &Expression {
        &self.iftrue
    }

    pub fn iffalse(&self) -> &Expression {
        &self.iffalse
    }
}

/// A JLS 10.6 array initializer, e.g. `{A, B}` in an annotation value.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayInit {
    exprs: Vec<Expression>,
}

impl ArrayInit {
    pub fn new(exprs: Vec<Expression>) -> Self {
        Self { exprs }
    }

    pub fn exprs(&self) -> &[Expression] {
        &self.exprs
    }
}

/// An annotation in expression position, e.g. nested inside another
/// annotation's arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnoExpr {
    value: Anno,
}

impl AnnoExpr {
    pub fn new(value: Anno) -> Self {
        Self { value }
    }

    pub fn value(&self) -> &Anno {
        &self.value
    }
}

impl Node for AnnoExpr {
    fn kind(&self) -> Kind {
        Kind::AnnoExpr
    }

    // Shares the annotation's dispatch slot.
    fn accept<I, V: Visitor<I> + ?Sized>(&self, visitor: &mut V, input: I) -> V::Output {
        visitor.visit_anno(&self.value, input)
    }
}

impl_node! {
    Literal => visit_literal,
    TypeCast => visit_type_cast,
    Unary => visit_unary,
    Binary => visit_binary,
    ConstVarName => visit_const_var_name,
    ClassLiteral => visit_class_literal,
    Assign => visit_assign,
    Conditional => visit_conditional,
    ArrayInit => visit_array_init,
}

// Declarations

/// A JLS 7.3 compilation unit.
#[derive(Debug, Clone, PartialEq)]
pub struct CompUnit {
    pkg: Option<PkgDecl>,
    imports: Vec<ImportDecl>,
    decls: Vec<TyDecl>,
    file: String,
}

impl CompUnit {
    pub fn new(
        pkg: Option<PkgDecl>,
        imports: Vec<ImportDecl>,
        decls: Vec<TyDecl>,
        file: impl Into<String>,
    ) -> Self {
        Self {
            pkg,
            imports,
            decls,
            file: file.into(),
        }
    }

    pub fn pkg(&self) -> Option<&PkgDecl> {
        self.pkg.as_ref()
    }

    pub fn imports(&self) -> &[ImportDecl] {
        &self.imports
    }

    pub fn decls(&self) -> &[TyDecl] {
        &self.decls
    }

    /// Identifier of the source the unit was parsed from.
    pub fn file(&self) -> &str {
        &self.file
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImportDecl {
    name: Vec<String>,
    is_static: bool,
}

impl ImportDecl {
    pub fn new(name: Vec<String>, is_static: bool) -> Self {
        Self { name, is_static }
    }

    pub fn name(&self) -> &[String] {
        &self.name
    }

    pub fn is_static(&self) -> bool {
        self.is_static
    }
}

/// A field declaration or formal method parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl {
    mods: BTreeSet<Modifier>,
    annos: Vec<Anno>,
    ty: Type,
    name: String,
    init: Option<Expression>,
}

impl VarDecl {
    pub fn new(
        mods: BTreeSet<Modifier>,
        annos: Vec<Anno>,
        ty: Type,
        name: impl Into<String>,
        init: Option<Expression>,
    ) -> Self {
        Self {
            mods,
            annos,
            ty,
            name: name.into(),
            init,
        }
    }

    pub fn mods(&self) -> &BTreeSet<Modifier> {
        &self.mods
    }

    pub fn annos(&self) -> &[Anno] {
        &self.annos
    }

    pub fn ty(&self) -> &Type {
        &self.ty
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn init(&self) -> Option<&Expression> {
        self.init.as_ref()
    }
}

/// A method or constructor declaration. Constructors have no return type.
#[derive(Debug, Clone, PartialEq)]
pub struct MethDecl {
    mods: BTreeSet<Modifier>,
    annos: Vec<Anno>,
    typarams: Vec<TyParam>,
    ret: Option<Type>,
    name: String,
    params: Vec<VarDecl>,
    exntys: Vec<ClassTy>,
    default_value: Option<Expression>,
}

impl MethDecl {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        mods: BTreeSet<Modifier>,
        annos: Vec<Anno>,
        typarams: Vec<TyParam>,
        ret: Option<Type>,
        name: impl Into<String>,
        params: Vec<VarDecl>,
        exntys: Vec<ClassTy>,
        default_value: Option<Expression>,
    ) -> Self {
        Self {
            mods,
            annos,
            typarams,
            ret,
            name: name.into(),
            params,
            exntys,
            default_value,
        }
    }

    pub fn mods(&self) -> &BTreeSet<Modifier> {
        &self.mods
    }

    pub fn annos(&self) -> &[Anno] {
        &self.annos
    }

    pub fn typarams(&self) -> &[TyParam] {
        &self.typarams
    }

    pub fn ret(&self) -> Option<&Type> {
        self.ret.as_ref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn params(&self) -> &[VarDecl] {
        &self.params
    }

    /// The `throws` clause.
    pub fn exntys(&self) -> &[ClassTy] {
        &self.exntys
    }

    /// The `default` value of an annotation element.
    pub fn default_value(&self) -> Option<&Expression> {
        self.default_value.as_ref()
    }
}

/// A JLS 9.7 annotation.
#[derive(Debug, Clone, PartialEq)]
pub struct Anno {
    name: Vec<String>,
    args: Vec<Expression>,
}

impl Anno {
    pub fn new(name: Vec<String>, args: Vec<Expression>) -> Self {
        Self { name, args }
    }

    pub fn name(&self) -> &[String] {
        &self.name
    }

    pub fn args(&self) -> &[Expression] {
        &self.args
    }
}

/// A top-level or member type declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct TyDecl {
    mods: BTreeSet<Modifier>,
    annos: Vec<Anno>,
    name: String,
    typarams: Vec<TyParam>,
    xtnds: Option<ClassTy>,
    impls: Vec<ClassTy>,
    members: Vec<Tree>,
    tykind: TyKind,
}

impl TyDecl {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        mods: BTreeSet<Modifier>,
        annos: Vec<Anno>,
        name: impl Into<String>,
        typarams: Vec<TyParam>,
        xtnds: Option<ClassTy>,
        impls: Vec<ClassTy>,
        members: Vec<Tree>,
        tykind: TyKind,
    ) -> Self {
        Self {
            mods,
            annos,
            name: name.into(),
            typarams,
            xtnds,
            impls,
            members,
            tykind,
        }
    }

    pub fn mods(&self) -> &BTreeSet<Modifier> {
        &self.mods
    }

    pub fn annos(&self) -> &[Anno] {
        &self.annos
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn typarams(&self) -> &[TyParam] {
        &self.typarams
    }

    pub fn xtnds(&self) -> Option<&ClassTy> {
        self.xtnds.as_ref()
    }

    pub fn impls(&self) -> &[ClassTy] {
        &self.impls
    }

    /// Fields, methods and member types, in declaration order.
    pub fn members(&self) -> &[Tree] {
        &self.members
    }

    pub fn tykind(&self) -> TyKind {
        self.tykind
    }
}

/// A JLS 4.4 type variable declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct TyParam {
    name: String,
    bounds: Vec<Type>,
}

impl TyParam {
    pub fn new(name: impl Into<String>, bounds: Vec<Type>) -> Self {
        Self {
            name: name.into(),
            bounds,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bounds(&self) -> &[Type] {
        &self.bounds
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PkgDecl {
    name: Vec<String>,
}

impl PkgDecl {
    pub fn new(name: Vec<String>) -> Self {
        Self { name }
    }

    pub fn name(&self) -> &[String] {
        &self.name
    }
}

impl_node! {
    CompUnit => visit_comp_unit,
    ImportDecl => visit_import_decl,
    VarDecl => visit_var_decl,
    MethDecl => visit_meth_decl,
    Anno => visit_anno,
    TyDecl => visit_ty_decl,
    TyParam => visit_ty_param,
    PkgDecl => visit_pkg_decl,
}

/// Any tree node.
#[derive(Debug, Clone, PartialEq)]
pub enum Tree {
    Type(Type),
    Expression(Expression),
    CompUnit(CompUnit),
    ImportDecl(ImportDecl),
    VarDecl(VarDecl),
    MethDecl(MethDecl),
    Anno(Anno),
    TyDecl(TyDecl),
    TyParam(TyParam),
    PkgDecl(PkgDecl),
}

impl_node_forward!(Tree {
    Type,
    Expression,
    CompUnit,
    ImportDecl,
    VarDecl,
    MethDecl,
    Anno,
    TyDecl,
    TyParam,
    PkgDecl,
});
impl_from!(Tree {
    Type(Type),
    Expression(Expression),
    CompUnit(CompUnit),
    ImportDecl(ImportDecl),
    VarDecl(VarDecl),
    MethDecl(MethDecl),
    Anno(Anno),
    TyDecl(TyDecl),
    TyParam(TyParam),
    PkgDecl(PkgDecl),
});
