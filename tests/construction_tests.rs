mod common;

use common::{label, p, points, xs, Item};
use typed_collection::{CollectionError, Options, TypeTag, TypedCollection};

#[test]
fn test_no_type_given_fails() {
    let err = TypedCollection::<Item>::from_elements(vec![]).unwrap_err();
    assert_eq!(err, CollectionError::Configuration);
    assert_eq!(err.to_string(), "no type given");

    let err = TypedCollection::<Item>::with_options(Options::new()).unwrap_err();
    assert_eq!(err, CollectionError::Configuration);
}

#[test]
fn test_options_only_starts_empty() {
    let collection = TypedCollection::<Item>::with_options(Options::new().element_type("Point")).unwrap();

    assert_eq!(collection.len(), 0);
    assert!(collection.is_empty());
    assert_eq!(collection.element_type(), &TypeTag::new("Point"));
}

#[test]
fn test_length_is_read_only() {
    let mut collection = points(&[1, 2]);

    let err = collection.set_len(5).unwrap_err();
    assert_eq!(err, CollectionError::ImmutableProperty { property: "length" });
    assert!(err.to_string().starts_with("read only"));
    assert_eq!(collection.len(), 2);
}

#[test]
fn test_seed_elements_kept_in_order() {
    let collection = points(&[1, 2, 3]);

    assert_eq!(collection.len(), 3);
    assert_eq!(xs(&collection), vec![1, 2, 3]);
}

#[test]
fn test_type_inferred_from_first_element() {
    let collection = points(&[7]);
    assert_eq!(collection.element_type().name(), "Point");
    // Written back so derivatives inherit it.
    assert_eq!(collection.options().element_type, Some(TypeTag::new("Point")));
}

#[test]
fn test_mixed_seed_fails() {
    let err = TypedCollection::from_elements(vec![p(1), p(2), label("three")]).unwrap_err();

    assert_eq!(
        err,
        CollectionError::TypeMismatch {
            expected: TypeTag::new("Point"),
            found: TypeTag::new("Label"),
            position: 2,
        }
    );
    assert!(err.to_string().starts_with("invalid type"));
}

#[test]
fn test_seed_not_matching_explicit_type_fails() {
    let err = TypedCollection::new(vec![p(1), p(2)], Options::new().element_type("Label")).unwrap_err();
    assert!(err.is_type_mismatch());
}

#[test]
fn test_accept_checks_type() {
    let collection = points(&[1]);

    assert_eq!(collection.accept(&[p(2)], false), Ok(true));
    assert_eq!(collection.accept(&[p(2), p(3)], false), Ok(true));
    assert_eq!(collection.accept(&[label("a")], false), Ok(false));
    assert_eq!(collection.accept(&[p(2), label("a")], false), Ok(false));
    assert_eq!(collection.accept(&[], true), Ok(true));

    let err = collection.accept(&[label("a")], true).unwrap_err();
    assert!(err.is_type_mismatch());

    // Stops at the first failure.
    let err = collection.accept(&[p(2), label("a"), label("b")], true).unwrap_err();
    match err {
        CollectionError::TypeMismatch { position, .. } => assert_eq!(position, 1),
        other => panic!("unexpected error: {other:?}"),
    }

    assert_eq!(collection.len(), 1);
}

#[test]
fn test_element_type_fixed_after_construction() {
    let mut collection = points(&[1]);
    collection.options_mut().element_type = Some(TypeTag::new("Label"));

    assert_eq!(collection.element_type(), &TypeTag::new("Point"));
    assert!(collection.push(vec![label("no")]).is_err());
    assert!(collection.push(vec![p(2)]).is_ok());
}

#[test]
fn test_scalar_collections() {
    let numbers = TypedCollection::from_elements(vec![3_i32, 1, 2]).unwrap();
    assert_eq!(numbers.element_type().name(), "i32");

    let words = TypedCollection::<String>::with_options(Options::new().element_type(TypeTag::of::<String>())).unwrap();
    assert_eq!(words.accept(&["a".to_string()], false), Ok(true));
}

#[test]
fn test_type_tag_from_config() {
    let tag: TypeTag = serde_json::from_str("\"Point\"").unwrap();
    let collection = TypedCollection::<Item>::with_options(Options::new().element_type(tag)).unwrap();

    assert!(collection.accept(&[p(1)], false).unwrap());
    assert_eq!(serde_json::to_string(collection.element_type()).unwrap(), "\"Point\"");
}
