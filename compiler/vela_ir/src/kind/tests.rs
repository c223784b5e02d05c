#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;

use super::*;
use crate::{BuiltinKinds, Span};

fn builtin_registry() -> (KindRegistry, BuiltinKinds) {
    let mut registry = KindRegistry::new();
    let kinds = BuiltinKinds::register(&mut registry).unwrap();
    registry.initialize();
    (registry, kinds)
}

#[test]
fn ids_are_dense_and_unique() {
    let (registry, kinds) = builtin_registry();
    let mut seen = vec![false; registry.len()];
    for kref in kinds.all() {
        let id = registry.id_of(kref);
        assert!(!id.is_unassigned());
        let i = id.raw() as usize;
        assert!(i < registry.len(), "id out of table bounds");
        assert!(!seen[i], "duplicate id {id:?}");
        seen[i] = true;
    }
    assert!(seen.iter().all(|&s| s), "ids not dense");
}

#[test]
fn preorder_places_descendants_after_ancestors() {
    let (registry, kinds) = builtin_registry();
    for kref in kinds.all() {
        let desc = registry.descriptor(kref);
        for &child in desc.children() {
            assert!(registry.id_of(child).raw() > desc.id().raw());
        }
    }
}

#[test]
fn declaration_order_fixes_exact_ids() {
    // The builtin hierarchy registers in declaration order, so the pre-order
    // ids are pinned. This test exists to catch accidental reordering.
    let (registry, kinds) = builtin_registry();
    assert_eq!(registry.id_of(kinds.node).raw(), 0);
    assert_eq!(registry.id_of(kinds.stmt).raw(), 1);
    assert_eq!(registry.id_of(kinds.expr_stmt).raw(), 2);
    assert_eq!(registry.id_of(kinds.decl).raw(), 7);
    assert_eq!(registry.id_of(kinds.var_decl).raw(), 8);
    assert_eq!(registry.id_of(kinds.expr).raw(), 11);
    assert_eq!(registry.id_of(kinds.literal).raw(), 12);
    assert_eq!(registry.id_of(kinds.assign).raw(), 22);
}

#[test]
fn root_span_covers_whole_table() {
    let (registry, kinds) = builtin_registry();
    let root = registry.descriptor(kinds.node);
    assert_eq!(root.descendant_span() as usize, registry.len() - 1);
}

#[test]
fn leaf_kinds_have_zero_span() {
    let (registry, kinds) = builtin_registry();
    for kref in [kinds.int_lit, kinds.var_decl, kinds.assign, kinds.block] {
        assert_eq!(registry.descriptor(kref).descendant_span(), 0);
    }
}

#[test]
fn subtype_ranges_match_ancestry() {
    let (registry, kinds) = builtin_registry();

    // Positive: every literal is an expr and a node.
    let int_id = registry.id_of(kinds.int_lit);
    assert!(registry.is_a(int_id, kinds.literal));
    assert!(registry.is_a(int_id, kinds.expr));
    assert!(registry.is_a(int_id, kinds.node));
    // A kind is-a itself.
    assert!(registry.is_a(int_id, kinds.int_lit));

    // Negative: statements are not expressions and vice versa.
    let while_id = registry.id_of(kinds.while_stmt);
    assert!(!registry.is_a(while_id, kinds.expr));
    assert!(!registry.is_a(int_id, kinds.stmt));
    assert!(!registry.is_a(int_id, kinds.float_lit));

    // decl is inside the stmt range but not the expr range.
    let class_id = registry.id_of(kinds.class_decl);
    assert!(registry.is_a(class_id, kinds.stmt));
    assert!(registry.is_a(class_id, kinds.decl));
    assert!(!registry.is_a(class_id, kinds.expr));
}

#[test]
fn initialize_is_idempotent() {
    let mut registry = KindRegistry::new();
    let kinds = BuiltinKinds::register(&mut registry).unwrap();
    registry.initialize();

    let ids: Vec<_> = kinds.all().map(|k| registry.id_of(k)).to_vec();
    let spans: Vec<_> = kinds
        .all()
        .map(|k| registry.descriptor(k).descendant_span())
        .to_vec();
    let table_len = registry.len();

    registry.initialize();

    assert_eq!(ids, kinds.all().map(|k| registry.id_of(k)).to_vec());
    assert_eq!(
        spans,
        kinds
            .all()
            .map(|k| registry.descriptor(k).descendant_span())
            .to_vec()
    );
    assert_eq!(table_len, registry.len());
}

#[test]
fn invalid_parent_is_rejected() {
    let mut registry = KindRegistry::new();
    let bogus = {
        // Handle from a different registry; out of range here.
        let mut other = KindRegistry::new();
        let a = other.register("a", None, crate::visitor::dispatch_node).unwrap();
        other.register("b", Some(a), crate::visitor::dispatch_node).unwrap()
    };
    let err = registry
        .register("orphan", Some(bogus), crate::visitor::dispatch_node)
        .unwrap_err();
    assert_eq!(
        err,
        crate::RegisterError::InvalidParent {
            parent: bogus,
            registered: 0
        }
    );
}

#[test]
fn find_by_name() {
    let (registry, kinds) = builtin_registry();
    assert_eq!(registry.find("class_decl"), Some(kinds.class_decl));
    assert_eq!(registry.find("no_such_kind"), None);
}

#[test]
fn node_is_stamped_with_assigned_id() {
    let (registry, kinds) = builtin_registry();
    let node = crate::Node::new(&registry, kinds.call, Span::new(3, 9));
    assert_eq!(node.kind(), registry.id_of(kinds.call));
    assert_eq!(node.span(), Span::new(3, 9));
}

/// Records the name of the handler that fired.
#[derive(Default)]
struct Recorder {
    fired: Option<&'static str>,
}

macro_rules! record {
    ($($method:ident => $name:literal),* $(,)?) => {
        impl crate::NodeVisitor for Recorder {
            $(fn $method(&mut self, _node: &crate::Node) {
                self.fired = Some($name);
            })*
        }
    };
}

record! {
    visit_node => "node",
    visit_stmt => "stmt",
    visit_expr_stmt => "expr_stmt",
    visit_block => "block",
    visit_if => "if",
    visit_while => "while",
    visit_return => "return",
    visit_decl => "decl",
    visit_var_decl => "var_decl",
    visit_func_decl => "func_decl",
    visit_class_decl => "class_decl",
    visit_expr => "expr",
    visit_literal => "literal",
    visit_int_lit => "int_lit",
    visit_float_lit => "float_lit",
    visit_str_lit => "str_lit",
    visit_bool_lit => "bool_lit",
    visit_ident => "ident",
    visit_binary => "binary",
    visit_unary => "unary",
    visit_call => "call",
    visit_member => "member",
    visit_assign => "assign",
}

#[test]
fn dispatch_fires_exactly_the_registered_handler() {
    let (registry, kinds) = builtin_registry();
    for kref in kinds.all() {
        let node = crate::Node::new(&registry, kref, Span::DUMMY);
        let mut recorder = Recorder::default();
        registry.dispatch(&node, &mut recorder);
        assert_eq!(recorder.fired, Some(registry.descriptor(kref).name()));
    }
}

#[test]
fn default_visitor_forwards_to_parent_handler() {
    // A visitor overriding only `visit_expr` still sees every literal.
    struct ExprOnly {
        exprs: usize,
    }
    impl crate::NodeVisitor for ExprOnly {
        fn visit_expr(&mut self, _node: &crate::Node) {
            self.exprs += 1;
        }
    }

    let (registry, kinds) = builtin_registry();
    let mut v = ExprOnly { exprs: 0 };
    for kref in [kinds.int_lit, kinds.binary, kinds.call, kinds.expr] {
        let node = crate::Node::new(&registry, kref, Span::DUMMY);
        registry.dispatch(&node, &mut v);
    }
    assert_eq!(v.exprs, 4);

    // Statement kinds never reach it.
    let stmt = crate::Node::new(&registry, kinds.block, Span::DUMMY);
    registry.dispatch(&stmt, &mut v);
    assert_eq!(v.exprs, 4);
}
