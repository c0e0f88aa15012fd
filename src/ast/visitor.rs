use super::*;

/// Visitor over tree nodes.
///
/// There is one operation per dispatch slot and none has a default body, so
/// an implementation that misses a shape does not compile. [`AnnoExpr`] has
/// no operation of its own: it dispatches to [`Visitor::visit_anno`] with the
/// wrapped annotation.
///
/// `I` is threaded through each call unchanged; passes that need no input
/// use `()`.
pub trait Visitor<I> {
    type Output;

    // Types
    fn visit_wild_ty(&mut self, wild_ty: &WildTy, input: I) -> Self::Output;
    fn visit_arr_ty(&mut self, arr_ty: &ArrTy, input: I) -> Self::Output;
    fn visit_prim_ty(&mut self, prim_ty: &PrimTy, input: I) -> Self::Output;
    fn visit_void_ty(&mut self, void_ty: &VoidTy, input: I) -> Self::Output;
    fn visit_class_ty(&mut self, class_ty: &ClassTy, input: I) -> Self::Output;

    // Expressions
    fn visit_literal(&mut self, literal: &Literal, input: I) -> Self::Output;
    fn visit_type_cast(&mut self, type_cast: &TypeCast, input: I) -> Self::Output;
    fn visit_unary(&mut self, unary: &Unary, input: I) -> Self::Output;
    fn visit_binary(&mut self, binary: &Binary, input: I) -> Self::Output;
    fn visit_const_var_name(&mut self, const_var_name: &ConstVarName, input: I) -> Self::Output;
    fn visit_class_literal(&mut self, class_literal: &ClassLiteral, input: I) -> Self::Output;
    fn visit_assign(&mut self, assign: &Assign, input: I) -> Self::Output;
    fn visit_conditional(&mut self, conditional: &Conditional, input: I) -> Self::Output;
    fn visit_array_init(&mut self, array_init: &ArrayInit, input: I) -> Self::Output;

    // Declarations
    fn visit_comp_unit(&mut self, comp_unit: &CompUnit, input: I) -> Self::Output;
    fn visit_import_decl(&mut self, import_decl: &ImportDecl, input: I) -> Self::Output;
    fn visit_var_decl(&mut self, var_decl: &VarDecl, input: I) -> Self::Output;
    fn visit_meth_decl(&mut self, meth_decl: &MethDecl, input: I) -> Self::Output;
    fn visit_anno(&mut self, anno: &Anno, input: I) -> Self::Output;
    fn visit_ty_decl(&mut self, ty_decl: &TyDecl, input: I) -> Self::Output;
    fn visit_ty_param(&mut self, ty_param: &TyParam, input: I) -> Self::Output;
    fn visit_pkg_decl(&mut self, pkg_decl: &PkgDecl, input: I) -> Self::Output;
}
