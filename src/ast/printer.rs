use std::fmt;

use super::nodes::*;
use super::visitor::Visitor;
use super::Node;
use crate::model::{Modifier, TyKind};

/// Renders trees back to source-like text, for debugging and test output.
pub struct Pretty {
    indent_level: usize,
    output: String,
}

impl Pretty {
    pub fn new() -> Self {
        Self {
            indent_level: 0,
            output: String::new(),
        }
    }

    pub fn print<N: Node + ?Sized>(&mut self, node: &N) -> String {
        self.output.clear();
        self.emit(node);
        std::mem::take(&mut self.output)
    }

    fn emit<N: Node + ?Sized>(&mut self, node: &N) {
        node.accept(self, ());
    }

    fn indent(&mut self) {
        self.indent_level += 2;
    }

    fn dedent(&mut self) {
        if self.indent_level >= 2 {
            self.indent_level -= 2;
        }
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.output.push(' ');
        }
    }

    fn write(&mut self, s: &str) {
        self.output.push_str(s);
    }

    fn write_name(&mut self, segments: &[String]) {
        let name = segments.join(".");
        self.write(&name);
    }

    fn write_joined<N: Node>(&mut self, nodes: &[N], sep: &str) {
        for (i, node) in nodes.iter().enumerate() {
            if i > 0 {
                self.write(sep);
            }
            self.emit(node);
        }
    }

    /// Annotations and modifiers, each followed by a space.
    fn write_prefix<'a>(&mut self, annos: &[Anno], mods: impl IntoIterator<Item = &'a Modifier>) {
        for anno in annos {
            self.emit(anno);
            self.write(" ");
        }
        for m in mods {
            self.write(m.keyword());
            self.write(" ");
        }
    }

    fn write_typarams(&mut self, typarams: &[TyParam]) {
        if typarams.is_empty() {
            return;
        }
        self.write("<");
        self.write_joined(typarams, ", ");
        self.write(">");
    }

    fn write_member(&mut self, member: &Tree) {
        match member {
            // Both print their own indentation and line ending.
            Tree::MethDecl(_) | Tree::TyDecl(_) => self.emit(member),
            Tree::VarDecl(_) => {
                self.write_indent();
                self.emit(member);
                self.write(";\n");
            }
            _ => {
                self.write_indent();
                self.emit(member);
                self.write("\n");
            }
        }
    }
}

impl Default for Pretty {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders any node with a fresh [`Pretty`].
pub fn pretty<N: Node + ?Sized>(node: &N) -> String {
    Pretty::new().print(node)
}

impl Visitor<()> for Pretty {
    type Output = ();

    fn visit_wild_ty(&mut self, wild_ty: &WildTy, _: ()) {
        self.write("?");
        if let Some(upper) = wild_ty.upper() {
            self.write(" extends ");
            self.emit(upper);
        }
        if let Some(lower) = wild_ty.lower() {
            self.write(" super ");
            self.emit(lower);
        }
    }

    fn visit_arr_ty(&mut self, arr_ty: &ArrTy, _: ()) {
        self.emit(arr_ty.elem());
        for _ in 0..arr_ty.dim() {
            self.write("[]");
        }
    }

    fn visit_prim_ty(&mut self, prim_ty: &PrimTy, _: ()) {
        self.write(prim_ty.tykind().keyword());
    }

    fn visit_void_ty(&mut self, _void_ty: &VoidTy, _: ()) {
        self.write("void");
    }

    fn visit_class_ty(&mut self, class_ty: &ClassTy, _: ()) {
        if let Some(base) = class_ty.base() {
            self.emit(base);
            self.write(".");
        }
        self.write(class_ty.name());
        if !class_ty.tyargs().is_empty() {
            self.write("<");
            self.write_joined(class_ty.tyargs(), ", ");
            self.write(">");
        }
    }

    fn visit_literal(&mut self, literal: &Literal, _: ()) {
        let text = literal.value().to_string();
        self.write(&text);
    }

    fn visit_type_cast(&mut self, type_cast: &TypeCast, _: ()) {
        self.write("(");
        self.emit(type_cast.ty());
        self.write(") ");
        self.emit(type_cast.expr());
    }

    fn visit_unary(&mut self, unary: &Unary, _: ()) {
        self.write("(");
        if unary.op().is_postfix() {
            self.emit(unary.expr());
            self.write(unary.op().symbol());
        } else {
            self.write(unary.op().symbol());
            self.emit(unary.expr());
        }
        self.write(")");
    }

    fn visit_binary(&mut self, binary: &Binary, _: ()) {
        self.write("(");
        self.emit(binary.lhs());
        self.write(" ");
        self.write(binary.op().symbol());
        self.write(" ");
        self.emit(binary.rhs());
        self.write(")");
    }

    fn visit_const_var_name(&mut self, const_var_name: &ConstVarName, _: ()) {
        self.write_name(const_var_name.name());
    }

    fn visit_class_literal(&mut self, class_literal: &ClassLiteral, _: ()) {
        self.emit(class_literal.ty());
        self.write(".class");
    }

    fn visit_assign(&mut self, assign: &Assign, _: ()) {
        self.write(assign.name());
        self.write(" = ");
        self.emit(assign.expr());
    }

    fn visit_conditional(&mut self, conditional: &Conditional, _: ()) {
        self.write("(");
        self.emit(conditional.cond());
        self.write(" ? ");
        self.emit(conditional.iftrue());
        self.write(" : ");
        self.emit(conditional.iffalse());
        self.write(")");
    }

    fn visit_array_init(&mut self, array_init: &ArrayInit, _: ()) {
        self.write("{");
        self.write_joined(array_init.exprs(), ", ");
        self.write("}");
    }

    fn visit_comp_unit(&mut self, comp_unit: &CompUnit, _: ()) {
        if let Some(pkg) = comp_unit.pkg() {
            self.emit(pkg);
            self.write("\n");
        }
        for import in comp_unit.imports() {
            self.emit(import);
        }
        if !comp_unit.imports().is_empty() {
            self.write("\n");
        }
        for decl in comp_unit.decls() {
            self.emit(decl);
        }
    }

    fn visit_import_decl(&mut self, import_decl: &ImportDecl, _: ()) {
        self.write("import ");
        if import_decl.is_static() {
            self.write("static ");
        }
        self.write_name(import_decl.name());
        self.write(";\n");
    }

    fn visit_var_decl(&mut self, var_decl: &VarDecl, _: ()) {
        self.write_prefix(var_decl.annos(), var_decl.mods());
        self.emit(var_decl.ty());
        self.write(" ");
        self.write(var_decl.name());
        if let Some(init) = var_decl.init() {
            self.write(" = ");
            self.emit(init);
        }
    }

    fn visit_meth_decl(&mut self, meth_decl: &MethDecl, _: ()) {
        self.write_indent();
        self.write_prefix(meth_decl.annos(), meth_decl.mods());
        if !meth_decl.typarams().is_empty() {
            self.write_typarams(meth_decl.typarams());
            self.write(" ");
        }
        if let Some(ret) = meth_decl.ret() {
            self.emit(ret);
            self.write(" ");
        }
        self.write(meth_decl.name());
        self.write("(");
        self.write_joined(meth_decl.params(), ", ");
        self.write(")");
        if !meth_decl.exntys().is_empty() {
            self.write(" throws ");
            self.write_joined(meth_decl.exntys(), ", ");
        }
        if let Some(value) = meth_decl.default_value() {
            self.write(" default ");
            self.emit(value);
        }
        self.write(";\n");
    }

    fn visit_anno(&mut self, anno: &Anno, _: ()) {
        self.write("@");
        self.write_name(anno.name());
        if !anno.args().is_empty() {
            self.write("(");
            self.write_joined(anno.args(), ", ");
            self.write(")");
        }
    }

    fn visit_ty_decl(&mut self, ty_decl: &TyDecl, _: ()) {
        self.write_indent();
        self.write_prefix(ty_decl.annos(), ty_decl.mods());
        self.write(ty_decl.tykind().keyword());
        self.write(" ");
        self.write(ty_decl.name());
        self.write_typarams(ty_decl.typarams());
        if let Some(xtnds) = ty_decl.xtnds() {
            self.write(" extends ");
            self.emit(xtnds);
        }
        if !ty_decl.impls().is_empty() {
            // Interfaces list their superinterfaces with `extends`.
            match ty_decl.tykind() {
                TyKind::Interface | TyKind::Annotation => self.write(" extends "),
                TyKind::Class | TyKind::Enum => self.write(" implements "),
            }
            self.write_joined(ty_decl.impls(), ", ");
        }
        self.write(" {\n");
        self.indent();
        for member in ty_decl.members() {
            self.write_member(member);
        }
        self.dedent();
        self.write_indent();
        self.write("}\n");
    }

    fn visit_ty_param(&mut self, ty_param: &TyParam, _: ()) {
        self.write(ty_param.name());
        if !ty_param.bounds().is_empty() {
            self.write(" extends ");
            self.write_joined(ty_param.bounds(), " & ");
        }
    }

    fn visit_pkg_decl(&mut self, pkg_decl: &PkgDecl, _: ()) {
        self.write("package ");
        self.write_name(pkg_decl.name());
        self.write(";\n");
    }
}

macro_rules! impl_display {
    ($($node:ty),* $(,)?) => {
        $(
            impl fmt::Display for $node {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&pretty(self))
                }
            }
        )*
    };
}

impl_display!(
    Tree, Type, Expression, WildTy, ArrTy, PrimTy, VoidTy, ClassTy, Literal, TypeCast, Unary,
    Binary, ConstVarName, ClassLiteral, Assign, Conditional, ArrayInit, AnnoExpr, CompUnit,
    ImportDecl, VarDecl, MethDecl, Anno, TyDecl, TyParam, PkgDecl,
);
