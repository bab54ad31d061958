use super::*;
use pretty_assertions::assert_eq;

fn interner() -> Interner {
    Interner::new()
}

#[test]
fn primitives_map_one_to_one() {
    let interner = interner();
    let cases = [
        (Primitive::Boolean, MaterializationKind::Boolean),
        (Primitive::Byte, MaterializationKind::Byte),
        (Primitive::Char, MaterializationKind::Char),
        (Primitive::Short, MaterializationKind::Short),
        (Primitive::Int, MaterializationKind::Int),
        (Primitive::Long, MaterializationKind::Long),
        (Primitive::Float, MaterializationKind::Float),
        (Primitive::Double, MaterializationKind::Double),
    ];
    for (prim, expected) in cases {
        let ty = DeclaredType::Primitive(prim);
        assert_eq!(MaterializationKind::classify(&ty, &interner), expected);
    }
}

#[test]
fn boxed_wrappers_map_to_primitive_kinds() {
    let interner = interner();
    let ty = DeclaredType::named("java.lang.Integer", &interner);
    assert_eq!(
        MaterializationKind::classify(&ty, &interner),
        MaterializationKind::Int
    );
    let ty = DeclaredType::named("java.lang.Character", &interner);
    assert_eq!(
        MaterializationKind::classify(&ty, &interner),
        MaterializationKind::Char
    );
}

#[test]
fn string_passes_through() {
    let interner = interner();
    let ty = DeclaredType::named("java.lang.String", &interner);
    assert_eq!(
        MaterializationKind::classify(&ty, &interner),
        MaterializationKind::PassThroughString
    );
}

#[test]
fn string_containers_classify_by_base() {
    let interner = interner();
    let string = DeclaredType::named("java.lang.String", &interner);

    let list = DeclaredType::Parameterized(
        TypeName::intern("java.util.List", &interner),
        vec![string.clone()],
    );
    assert_eq!(
        MaterializationKind::classify(&list, &interner),
        MaterializationKind::List
    );

    let set = DeclaredType::Parameterized(
        TypeName::intern("java.util.Set", &interner),
        vec![string.clone()],
    );
    assert_eq!(
        MaterializationKind::classify(&set, &interner),
        MaterializationKind::Set
    );

    let array = DeclaredType::Array(Box::new(string));
    assert_eq!(
        MaterializationKind::classify(&array, &interner),
        MaterializationKind::Array
    );
}

#[test]
fn non_string_containers_are_unsupported() {
    let interner = interner();
    let int_list = DeclaredType::Parameterized(
        TypeName::intern("java.util.List", &interner),
        vec![DeclaredType::named("java.lang.Integer", &interner)],
    );
    assert_eq!(
        MaterializationKind::classify(&int_list, &interner),
        MaterializationKind::Unsupported
    );

    let int_array = DeclaredType::Array(Box::new(DeclaredType::Primitive(Primitive::Int)));
    assert_eq!(
        MaterializationKind::classify(&int_array, &interner),
        MaterializationKind::Unsupported
    );
}

#[test]
fn enums_and_arbitrary_types_are_unsupported() {
    let interner = interner();
    let ty = DeclaredType::named("com.app.Mode", &interner);
    assert_eq!(
        MaterializationKind::classify(&ty, &interner),
        MaterializationKind::Unsupported
    );
}

#[test]
fn container_kinds_share_array_materialization() {
    let interner = interner();
    for kind in [
        MaterializationKind::List,
        MaterializationKind::Array,
        MaterializationKind::Set,
    ] {
        assert_eq!(kind.field_suffix(), Some("AsArray"));
        assert_eq!(kind.conversion(), Some("{}.split(\",\")"));
        assert!(kind.field_type(&interner).is_some());
    }
}

#[test]
fn pass_through_and_unsupported_have_no_materialization() {
    let interner = interner();
    for kind in [
        MaterializationKind::PassThroughString,
        MaterializationKind::Unsupported,
    ] {
        assert_eq!(kind.holder_case(), None);
        assert_eq!(kind.field_suffix(), None);
        assert_eq!(kind.conversion(), None);
        assert_eq!(kind.field_type(&interner), None);
    }
}

#[test]
fn holder_cases_follow_the_family_naming() {
    assert_eq!(MaterializationKind::Byte.holder_case(), Some("DefaultByte"));
    assert_eq!(MaterializationKind::Char.holder_case(), Some("DefaultChar"));
    assert_eq!(
        MaterializationKind::Short.holder_case(),
        Some("DefaultShort")
    );
    assert_eq!(MaterializationKind::Int.holder_case(), Some("Int"));
}
