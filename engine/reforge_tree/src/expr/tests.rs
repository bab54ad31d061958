use super::*;
use crate::TypeName;
use pretty_assertions::assert_eq;

#[test]
fn literal_unquoted_strips_string_quotes() {
    assert_eq!(Literal::string("a,b").unquoted(), "a,b");
    assert_eq!(Literal::new("3", LiteralKind::Int).unquoted(), "3");
}

#[test]
fn field_access_source_text_joins_segments() {
    let interner = Interner::new();
    let owner = TypeName::intern("com.app.Constants", &interner);
    let expr = Expr::field_access(
        vec![interner.intern("Constants")],
        interner.intern("SOME_BOOLEAN"),
        Some(Symbol::new(owner, interner.intern("SOME_BOOLEAN"))),
    );
    assert_eq!(expr.source_text(&interner), "Constants.SOME_BOOLEAN");
}

#[test]
fn array_init_source_text_braces_elements() {
    let interner = Interner::new();
    let expr = Expr::ArrayInit(vec![
        Expr::Literal(Literal::string("a")),
        Expr::Literal(Literal::string("b")),
    ]);
    assert_eq!(expr.source_text(&interner), "{\"a\", \"b\"}");
}

#[test]
fn symbol_is_none_for_unresolved_ident() {
    let interner = Interner::new();
    let expr = Expr::ident(interner.intern("x"), None);
    assert_eq!(expr.symbol(), None);
}
