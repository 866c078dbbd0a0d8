#![cfg(feature = "toml")]

use tablewright::prelude::*;
use tablewright::ConfigError;

#[test]
fn toml_config_drives_create() {
    let config = SchemaConfig::from_toml_str(
        r#"
engine = "MyISAM"
charset = "utf8mb4"
"#,
    )
    .unwrap();

    let sql = Schema::create_with(&config, "notes", |t| {
        t.text("body");
        Ok(())
    })
    .unwrap();
    assert_eq!(
        sql,
        "CREATE TABLE notes (`body` text(255) NOT NULL) ENGINE = MyISAM default charset=utf8mb4;"
    );
}

#[test]
fn toml_parse_error() {
    let err = SchemaConfig::from_toml_str("engine = [").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(_)));
}
