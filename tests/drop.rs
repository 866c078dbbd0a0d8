use tablewright::prelude::*;

#[test]
fn drop_single_name() {
    assert_eq!(Schema::drop("users").unwrap(), "DROP TABLE users;");
    assert_eq!(
        Schema::drop_if_exists("users").unwrap(),
        "DROP TABLE IF EXISTS users;"
    );
    assert_eq!(Schema::truncate("users").unwrap(), "TRUNCATE TABLE users;");
}

#[test]
fn drop_list_of_names() {
    assert_eq!(
        Schema::drop(["a", "b"]).unwrap(),
        " DROP TABLE a;  DROP TABLE b; "
    );
    assert_eq!(
        Schema::drop_if_exists(vec!["a", "b"]).unwrap(),
        " DROP TABLE IF EXISTS a;  DROP TABLE IF EXISTS b; "
    );
}

#[test]
fn truncate_owned_names() {
    let names = ["logs", "events"].map(String::from);
    assert_eq!(
        Schema::truncate(names).unwrap(),
        " TRUNCATE TABLE logs;  TRUNCATE TABLE events; "
    );
}

#[test]
fn runtime_borrowed_name() {
    let table = String::from("sessions");
    assert_eq!(
        Schema::drop(table.as_str()).unwrap(),
        "DROP TABLE sessions;"
    );
}

#[test]
fn one_element_list_is_still_a_list() {
    assert_eq!(Schema::drop(["only"]).unwrap(), " DROP TABLE only; ");
    assert!(Names::from(["only"]).is_list());
}

#[test]
fn empty_list_is_an_error() {
    let empty: [&str; 0] = [];
    assert_eq!(
        Schema::drop(empty).unwrap_err(),
        SchemaError::EmptyTableList
    );
    assert_eq!(
        Schema::truncate(Vec::<String>::new()).unwrap_err(),
        SchemaError::EmptyTableList
    );
}
