use super::*;
use pretty_assertions::assert_eq;
use std::sync::atomic::{AtomicUsize, Ordering};

fn produced(interner: &Interner, name: &str, kind: MaterializationKind) -> Produced {
    Produced {
        field_name: interner.intern(name),
        kind,
        template: kind.conversion().zip(kind.field_type(interner)).map(
            |(conversion, field_ty)| FieldTemplate {
                field_ty,
                conversion,
            },
        ),
        context: ContextSensitivity::ResolvedLocally,
        anchor: AnchorText {
            written: "someField".to_owned(),
            qualified: "com.app.Config.someField".to_owned(),
        },
        target_scope: TypeName::intern("com.app.Config", interner),
    }
}

#[test]
fn first_symbol_insert_wins() {
    let interner = Interner::new();
    let acc = Accumulator::new();
    let file = Path::new("Config.java");
    let sym = Symbol::new(
        TypeName::intern("com.app.Config", &interner),
        interner.intern("someField"),
    );

    let calls = AtomicUsize::new(0);
    let first = acc.record_symbol(file, sym, MaterializationKind::Int, || {
        calls.fetch_add(1, Ordering::SeqCst);
        produced(&interner, "someFieldAsInt", MaterializationKind::Int)
    });
    let second = acc.record_symbol(file, sym, MaterializationKind::Int, || {
        calls.fetch_add(1, Ordering::SeqCst);
        produced(&interner, "someFieldAsInt1", MaterializationKind::Int)
    });

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(first.field_name, second.field_name);
    assert_eq!(acc.len(), 1);
}

#[test]
fn same_symbol_different_kind_gets_its_own_entry() {
    let interner = Interner::new();
    let acc = Accumulator::new();
    let file = Path::new("Config.java");
    let sym = Symbol::new(
        TypeName::intern("com.app.Config", &interner),
        interner.intern("someField"),
    );

    acc.record_symbol(file, sym, MaterializationKind::List, || {
        produced(&interner, "someFieldAsArray", MaterializationKind::List)
    });
    acc.record_symbol(file, sym, MaterializationKind::Set, || {
        produced(&interner, "someFieldAsArray1", MaterializationKind::Set)
    });
    assert_eq!(acc.len(), 2);
}

#[test]
fn literal_entries_never_merge_across_files() {
    let interner = Interner::new();
    let acc = Accumulator::new();

    acc.record_literal(Path::new("A.java"), "\"a,b\"", || {
        produced(&interner, "literalArg0AsArray", MaterializationKind::List)
    });
    acc.record_literal(Path::new("B.java"), "\"a,b\"", || {
        produced(&interner, "literalArg0AsArray", MaterializationKind::List)
    });

    assert_eq!(acc.len(), 2);
    assert_eq!(acc.literal_count(Path::new("A.java")), 1);
    assert_eq!(acc.literal_count(Path::new("B.java")), 1);
}

#[test]
fn literal_count_ignores_duplicate_text() {
    let interner = Interner::new();
    let acc = Accumulator::new();
    let file = Path::new("A.java");

    acc.record_literal(file, "\"a,b\"", || {
        produced(&interner, "literalArg0AsArray", MaterializationKind::List)
    });
    acc.record_literal(file, "\"a,b\"", || {
        produced(&interner, "literalArg1AsArray", MaterializationKind::List)
    });
    assert_eq!(acc.literal_count(file), 1);
}

#[test]
fn concurrent_contenders_agree_on_the_winner() {
    let interner = Interner::new();
    let acc = Accumulator::new();
    let file = Path::new("Config.java");
    let sym = Symbol::new(
        TypeName::intern("com.app.Config", &interner),
        interner.intern("someField"),
    );

    let winners: Vec<Name> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let acc = &acc;
                let interner = &interner;
                s.spawn(move || {
                    acc.record_symbol(file, sym, MaterializationKind::Int, || {
                        produced(interner, &format!("candidate{i}"), MaterializationKind::Int)
                    })
                    .field_name
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(acc.len(), 1);
    let stored = acc
        .get(&AccumulatorKey::Symbol {
            file: file.to_path_buf(),
            symbol: sym,
            kind: MaterializationKind::Int,
        })
        .unwrap();
    assert!(winners.iter().all(|&name| name == stored.field_name));
}

#[test]
fn entries_for_scope_sorts_by_field_name() {
    let interner = Interner::new();
    let acc = Accumulator::new();
    let file = Path::new("Config.java");
    let scope = TypeName::intern("com.app.Config", &interner);

    for (member, field) in [("zeta", "zetaAsInt"), ("alpha", "alphaAsInt")] {
        let sym = Symbol::new(scope, interner.intern(member));
        acc.record_symbol(file, sym, MaterializationKind::Int, || {
            produced(&interner, field, MaterializationKind::Int)
        });
    }

    let ordered: Vec<&str> = acc
        .entries_for_scope(file, scope, &interner)
        .iter()
        .map(|p| interner.resolve(p.field_name))
        .collect();
    assert_eq!(ordered, vec!["alphaAsInt", "zetaAsInt"]);
}
