use super::Shape;

#[test]
fn scalar_constructor() {
    let shape = Shape::scalar("42");
    assert_eq!(shape, Shape::Scalar("42".to_string()));
    assert!(shape.is_scalar());
}

#[test]
fn record_constructor_takes_str_names() {
    let shape = Shape::record(
        "Point",
        [("x", Shape::scalar("1")), ("y", Shape::scalar("2"))],
    );
    assert_eq!(
        shape,
        Shape::Record {
            type_name: "Point".to_string(),
            fields: vec![
                ("x".to_string(), Shape::Scalar("1".to_string())),
                ("y".to_string(), Shape::Scalar("2".to_string())),
            ],
        }
    );
}

#[test]
fn record_with_no_fields() {
    let shape = Shape::record("Unit", Vec::<(&str, Shape)>::new());
    assert_eq!(
        shape,
        Shape::Record {
            type_name: "Unit".to_string(),
            fields: vec![],
        }
    );
    assert!(!shape.is_scalar());
}
