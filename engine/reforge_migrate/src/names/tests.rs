use super::*;
use pretty_assertions::assert_eq;
use reforge_tree::{DeclaredType, FieldDecl, Member, Primitive, Visibility};

fn scope(interner: &Interner) -> TypeName {
    TypeName::intern("com.app.Config", interner)
}

#[test]
fn qualified_anchors_flatten_and_lowercase() {
    let interner = Interner::new();
    let mut names = NameGenerator::new(&interner);
    let name = names.generate(scope(&interner), "Constants.SOME_BOOLEAN", "AsBoolean");
    assert_eq!(interner.resolve(name), "constants__some_booleanAsBoolean");
}

#[test]
fn bare_identifiers_keep_their_casing() {
    let interner = Interner::new();
    let mut names = NameGenerator::new(&interner);
    let name = names.generate(scope(&interner), "someField", "AsArray");
    assert_eq!(interner.resolve(name), "someFieldAsArray");
}

#[test]
fn literal_bases_count_per_file() {
    let interner = Interner::new();
    let mut names = NameGenerator::new(&interner);
    let scope = scope(&interner);
    assert_eq!(
        interner.resolve(names.generate_literal(scope, 0, "AsArray")),
        "literalArg0AsArray"
    );
    assert_eq!(
        interner.resolve(names.generate_literal(scope, 1, "AsArray")),
        "literalArg1AsArray"
    );
}

#[test]
fn existing_fields_force_a_numeric_suffix() {
    let interner = Interner::new();
    let scope = scope(&interner);
    let mut decl = TypeDecl::new(scope);
    decl.members.push(Member::Field(FieldDecl {
        name: interner.intern("someFieldAsArray"),
        ty: DeclaredType::Primitive(Primitive::Int),
        visibility: Visibility::Private,
        initializer: None,
        annotations: Vec::new(),
    }));

    let mut names = NameGenerator::new(&interner);
    names.seed_scope(&decl);
    let name = names.generate(scope, "someField", "AsArray");
    assert_eq!(interner.resolve(name), "someFieldAsArray1");
}

#[test]
fn names_generated_for_other_keys_also_collide() {
    let interner = Interner::new();
    let scope = scope(&interner);
    let mut names = NameGenerator::new(&interner);
    let first = names.generate(scope, "someField", "AsArray");
    let second = names.generate(scope, "someField", "AsArray");
    assert_eq!(interner.resolve(first), "someFieldAsArray");
    assert_eq!(interner.resolve(second), "someFieldAsArray1");
}

#[test]
fn generation_is_deterministic_per_run() {
    let interner = Interner::new();
    let scope = scope(&interner);
    let run = |interner: &Interner| {
        let mut names = NameGenerator::new(interner);
        vec![
            names.generate(scope, "Constants.A", "AsInt"),
            names.generate(scope, "Constants.A", "AsInt"),
            names.generate_literal(scope, 0, "AsArray"),
        ]
        .into_iter()
        .map(|n| interner.resolve(n).to_owned())
        .collect::<Vec<_>>()
    };
    assert_eq!(run(&interner), run(&interner));
}

#[test]
fn scopes_do_not_share_reservations() {
    let interner = Interner::new();
    let a = TypeName::intern("com.app.A", &interner);
    let b = TypeName::intern("com.app.B", &interner);
    let mut names = NameGenerator::new(&interner);
    let in_a = names.generate(a, "someField", "AsArray");
    let in_b = names.generate(b, "someField", "AsArray");
    assert_eq!(interner.resolve(in_a), "someFieldAsArray");
    assert_eq!(interner.resolve(in_b), "someFieldAsArray");
}
