use std::collections::{BTreeSet, HashMap, HashSet};

use tolc_header::ast::*;
use tolc_header::model::{Const, ConstTypeKind, Modifier, OperatorKind, TyKind};

fn names(segments: &[&str]) -> Vec<String> {
    segments.iter().map(|s| s.to_string()).collect()
}

fn int_ty() -> Type {
    PrimTy::new(ConstTypeKind::Int).into()
}

fn object_ty() -> ClassTy {
    ClassTy::new(None, "Object", vec![])
}

fn one() -> Expression {
    Literal::new(ConstTypeKind::Int, Const::Int(1)).into()
}

fn deprecated() -> Anno {
    Anno::new(names(&["Deprecated"]), vec![])
}

/// One node of every shape that has its own visitor operation.
fn every_shape() -> Vec<Tree> {
    let var = VarDecl::new(BTreeSet::new(), vec![], int_ty(), "x", None);
    vec![
        Tree::from(Type::from(WildTy::new(None, None))),
        Type::from(ArrTy::new(int_ty(), 2)).into(),
        int_ty().into(),
        Type::from(VoidTy::INSTANCE).into(),
        Type::from(object_ty()).into(),
        one().into(),
        Expression::from(TypeCast::new(int_ty(), one())).into(),
        Expression::from(Unary::new(one(), OperatorKind::Neg)).into(),
        Expression::from(Binary::new(one(), one(), OperatorKind::Plus)).into(),
        Expression::from(ConstVarName::new(names(&["A", "B"]))).into(),
        Expression::from(ClassLiteral::new(Type::from(object_ty()))).into(),
        Expression::from(Assign::new("value", one())).into(),
        Expression::from(Conditional::new(one(), one(), one())).into(),
        Expression::from(ArrayInit::new(vec![one()])).into(),
        CompUnit::new(None, vec![], vec![], "A.java").into(),
        ImportDecl::new(names(&["java", "util", "List"]), false).into(),
        var.clone().into(),
        MethDecl::new(BTreeSet::new(), vec![], vec![], None, "m", vec![var], vec![], None).into(),
        deprecated().into(),
        TyDecl::new(BTreeSet::new(), vec![], "A", vec![], None, vec![], vec![], TyKind::Class).into(),
        TyParam::new("T", vec![]).into(),
        PkgDecl::new(names(&["p"])).into(),
    ]
}

/// Records which operation ran and the input it received.
#[derive(Default)]
struct Recorder {
    calls: Vec<(&'static str, u32)>,
    annos: Vec<Anno>,
}

impl Recorder {
    fn record(&mut self, op: &'static str, input: u32) -> u32 {
        self.calls.push((op, input));
        input * 10
    }
}

impl Visitor<u32> for Recorder {
    type Output = u32;

    fn visit_wild_ty(&mut self, _: &WildTy, input: u32) -> u32 {
        self.record("wild_ty", input)
    }
    fn visit_arr_ty(&mut self, _: &ArrTy, input: u32) -> u32 {
        self.record("arr_ty", input)
    }
    fn visit_prim_ty(&mut self, _: &PrimTy, input: u32) -> u32 {
        self.record("prim_ty", input)
    }
    fn visit_void_ty(&mut self, _: &VoidTy, input: u32) -> u32 {
        self.record("void_ty", input)
    }
    fn visit_class_ty(&mut self, _: &ClassTy, input: u32) -> u32 {
        self.record("class_ty", input)
    }
    fn visit_literal(&mut self, _: &Literal, input: u32) -> u32 {
        self.record("literal", input)
    }
    fn visit_type_cast(&mut self, _: &TypeCast, input: u32) -> u32 {
        self.record("type_cast", input)
    }
    fn visit_unary(&mut self, _: &Unary, input: u32) -> u32 {
        self.record("unary", input)
    }
    fn visit_binary(&mut self, _: &Binary, input: u32) -> u32 {
        self.record("binary", input)
    }
    fn visit_const_var_name(&mut self, _: &ConstVarName, input: u32) -> u32 {
        self.record("const_var_name", input)
    }
    fn visit_class_literal(&mut self, _: &ClassLiteral, input: u32) -> u32 {
        self.record("class_literal", input)
    }
    fn visit_assign(&mut self, _: &Assign, input: u32) -> u32 {
        self.record("assign", input)
    }
    fn visit_conditional(&mut self, _: &Conditional, input: u32) -> u32 {
        self.record("conditional", input)
    }
    fn visit_array_init(&mut self, _: &ArrayInit, input: u32) -> u32 {
        self.record("array_init", input)
    }
    fn visit_comp_unit(&mut self, _: &CompUnit, input: u32) -> u32 {
        self.record("comp_unit", input)
    }
    fn visit_import_decl(&mut self, _: &ImportDecl, input: u32) -> u32 {
        self.record("import_decl", input)
    }
    fn visit_var_decl(&mut self, _: &VarDecl, input: u32) -> u32 {
        self.record("var_decl", input)
    }
    fn visit_meth_decl(&mut self, _: &MethDecl, input: u32) -> u32 {
        self.record("meth_decl", input)
    }
    fn visit_anno(&mut self, anno: &Anno, input: u32) -> u32 {
        self.annos.push(anno.clone());
        self.record("anno", input)
    }
    fn visit_ty_decl(&mut self, _: &TyDecl, input: u32) -> u32 {
        self.record("ty_decl", input)
    }
    fn visit_ty_param(&mut self, _: &TyParam, input: u32) -> u32 {
        self.record("ty_param", input)
    }
    fn visit_pkg_decl(&mut self, _: &PkgDecl, input: u32) -> u32 {
        self.record("pkg_decl", input)
    }
}

#[test]
fn each_shape_reaches_its_own_operation_once() {
    let shapes = every_shape();
    let mut recorder = Recorder::default();

    for (i, tree) in shapes.iter().enumerate() {
        let out = tree.accept(&mut recorder, i as u32);
        assert_eq!(out, i as u32 * 10, "output of {:?}", tree.kind());
    }

    assert_eq!(recorder.calls.len(), 22);
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for (op, _) in &recorder.calls {
        *counts.entry(*op).or_default() += 1;
    }
    assert_eq!(counts.len(), 22);
    assert!(counts.values().all(|&n| n == 1));

    // inputs arrive untouched and in order
    let inputs: Vec<u32> = recorder.calls.iter().map(|(_, input)| *input).collect();
    assert_eq!(inputs, (0..22).collect::<Vec<_>>());
}

#[test]
fn kinds_are_distinct_per_shape() {
    let mut kinds: HashSet<Kind> = every_shape().iter().map(|t| t.kind()).collect();
    let anno_expr: Expression = AnnoExpr::new(deprecated()).into();
    kinds.insert(anno_expr.kind());
    assert_eq!(kinds.len(), 23);
    assert!(kinds.contains(&Kind::AnnoExpr));
}

#[test]
fn anno_expr_dispatches_as_its_annotation() {
    let anno = Anno::new(names(&["a", "Tag"]), vec![one()]);
    let expr = Expression::from(AnnoExpr::new(anno.clone()));

    let mut via_expr = Recorder::default();
    let out_expr = expr.accept(&mut via_expr, 3);

    let mut direct = Recorder::default();
    let out_direct = anno.accept(&mut direct, 3);

    assert_eq!(via_expr.calls, vec![("anno", 3)]);
    assert_eq!(via_expr.calls, direct.calls);
    assert_eq!(out_expr, out_direct);
    assert_eq!(via_expr.annos, vec![anno.clone()]);
    assert_eq!(direct.annos, vec![anno]);
    assert_eq!(expr.kind(), Kind::AnnoExpr);
}

#[test]
fn wildcard_with_both_bounds_is_accepted() {
    let wild = WildTy::new(Some(Type::from(object_ty())), Some(int_ty()));
    assert!(wild.upper().is_some());
    assert!(wild.lower().is_some());
    assert_eq!(wild.kind(), Kind::WildTy);
}

#[test]
fn zero_dimension_array_is_its_element() {
    let elem = Type::from(object_ty());
    assert_eq!(Type::array(elem.clone(), 0), elem);
    assert_eq!(Type::array(elem.clone(), 0).kind(), Kind::ClassTy);
    assert_eq!(Type::array(elem, 1).kind(), Kind::ArrTy);
}

/// Collects every constant-variable reference reachable from a node.
#[derive(Default)]
struct ConstRefs {
    found: Vec<String>,
}

impl ConstRefs {
    fn walk<N: Node>(&mut self, nodes: &[N]) {
        for node in nodes {
            node.accept(self, ());
        }
    }
}

impl Visitor<()> for ConstRefs {
    type Output = ();

    fn visit_wild_ty(&mut self, _: &WildTy, _: ()) {}
    fn visit_arr_ty(&mut self, _: &ArrTy, _: ()) {}
    fn visit_prim_ty(&mut self, _: &PrimTy, _: ()) {}
    fn visit_void_ty(&mut self, _: &VoidTy, _: ()) {}
    fn visit_class_ty(&mut self, _: &ClassTy, _: ()) {}
    fn visit_literal(&mut self, _: &Literal, _: ()) {}
    fn visit_type_cast(&mut self, type_cast: &TypeCast, _: ()) {
        type_cast.expr().accept(self, ());
    }
    fn visit_unary(&mut self, unary: &Unary, _: ()) {
        unary.expr().accept(self, ());
    }
    fn visit_binary(&mut self, binary: &Binary, _: ()) {
        binary.lhs().accept(self, ());
        binary.rhs().accept(self, ());
    }
    fn visit_const_var_name(&mut self, name: &ConstVarName, _: ()) {
        self.found.push(name.name().join("."));
    }
    fn visit_class_literal(&mut self, _: &ClassLiteral, _: ()) {}
    fn visit_assign(&mut self, assign: &Assign, _: ()) {
        assign.expr().accept(self, ());
    }
    fn visit_conditional(&mut self, conditional: &Conditional, _: ()) {
        conditional.cond().accept(self, ());
        conditional.iftrue().accept(self, ());
        conditional.iffalse().accept(self, ());
    }
    fn visit_array_init(&mut self, array_init: &ArrayInit, _: ()) {
        self.walk(array_init.exprs());
    }
    fn visit_comp_unit(&mut self, comp_unit: &CompUnit, _: ()) {
        self.walk(comp_unit.decls());
    }
    fn visit_import_decl(&mut self, _: &ImportDecl, _: ()) {}
    fn visit_var_decl(&mut self, var_decl: &VarDecl, _: ()) {
        self.walk(var_decl.annos());
        if let Some(init) = var_decl.init() {
            init.accept(self, ());
        }
    }
    fn visit_meth_decl(&mut self, meth_decl: &MethDecl, _: ()) {
        self.walk(meth_decl.annos());
        self.walk(meth_decl.params());
        if let Some(value) = meth_decl.default_value() {
            value.accept(self, ());
        }
    }
    fn visit_anno(&mut self, anno: &Anno, _: ()) {
        self.walk(anno.args());
    }
    fn visit_ty_decl(&mut self, ty_decl: &TyDecl, _: ()) {
        self.walk(ty_decl.annos());
        self.walk(ty_decl.members());
    }
    fn visit_ty_param(&mut self, _: &TyParam, _: ()) {}
    fn visit_pkg_decl(&mut self, _: &PkgDecl, _: ()) {}
}

fn sample_unit() -> CompUnit {
    let public_static_final: BTreeSet<Modifier> =
        [Modifier::Public, Modifier::Static, Modifier::Final].into_iter().collect();

    let field = VarDecl::new(
        public_static_final,
        vec![],
        int_ty(),
        "SIZE",
        Some(Binary::new(ConstVarName::new(names(&["Other", "BASE"])).into(), one(), OperatorKind::Plus).into()),
    );

    let nested = Anno::new(names(&["Inner"]), vec![ConstVarName::new(names(&["NESTED"])).into()]);
    let element = MethDecl::new(
        BTreeSet::new(),
        vec![],
        vec![],
        Some(int_ty()),
        "limit",
        vec![],
        vec![],
        Some(
            Conditional::new(
                ConstVarName::new(names(&["FLAG"])).into(),
                AnnoExpr::new(nested).into(),
                one(),
            )
            .into(),
        ),
    );

    let class_anno = Anno::new(
        names(&["Config"]),
        vec![Assign::new("value", ArrayInit::new(vec![ConstVarName::new(names(&["A"])).into()]).into()).into()],
    );

    let decl = TyDecl::new(
        BTreeSet::new(),
        vec![class_anno],
        "Sample",
        vec![],
        None,
        vec![],
        vec![field.into(), element.into()],
        TyKind::Class,
    );

    CompUnit::new(Some(PkgDecl::new(names(&["p"]))), vec![], vec![decl], "Sample.java")
}

#[test]
fn traversal_pass_finds_nested_constant_references() {
    let unit = sample_unit();
    let mut refs = ConstRefs::default();
    unit.accept(&mut refs, ());
    assert_eq!(refs.found, vec!["A", "Other.BASE", "FLAG", "NESTED"]);
}

#[test]
fn trees_can_be_traversed_from_several_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Tree>();

    let unit = sample_unit();
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(|| {
                    let mut refs = ConstRefs::default();
                    unit.accept(&mut refs, ());
                    refs.found.len()
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 4);
        }
    });
}
