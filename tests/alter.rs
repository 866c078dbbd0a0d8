use tablewright::prelude::*;

#[test]
fn alter_renders_one_statement_per_action() {
    let sql = Schema::alter("users", |a| {
        a.add(|t| {
            t.string("nickname").nullable();
            t.int("team_id").references("teams.id")?;
            Ok(())
        })?;
        a.modify(|t| {
            t.string("email").size(191);
            Ok(())
        })?;
        a.drop_column("legacy").drop_index("email_idx");
        a.add_index("unique", "email_idx", ["email"])?;
        a.rename("members");
        Ok(())
    })
    .unwrap();

    assert_eq!(
        sql,
        "ALTER TABLE users ADD COLUMN `nickname` varchar(100) NULL; \
         ALTER TABLE users ADD COLUMN `team_id` int(11) NOT NULL; \
         ALTER TABLE users ADD FOREIGN KEY (`team_id`) REFERENCES `teams` (`id`); \
         ALTER TABLE users MODIFY `email` varchar(191) NOT NULL; \
         ALTER TABLE users DROP COLUMN `legacy`; \
         ALTER TABLE users DROP INDEX `email_idx`; \
         ALTER TABLE users ADD INDEX UNIQUE `email_idx` (`email`); \
         ALTER TABLE users RENAME TO members;"
    );
}

#[test]
fn drop_column_list_keeps_input_order() {
    let mut alter = Alter::new();
    alter.drop_column(["b", "a"]);

    let actions = alter.results().unwrap();
    assert_eq!(
        actions,
        [
            AlterAction::DropColumn { name: "b".into() },
            AlterAction::DropColumn { name: "a".into() },
        ]
    );
}

#[test]
fn modify_several_fields_splits_statements() {
    let statements = Schema::alter_statements("t", |a| {
        a.modify_column(|t| {
            t.int("a").unsigned();
            t.int("b").default("1");
            Ok(())
        })?;
        Ok(())
    })
    .unwrap();

    assert_eq!(
        statements,
        [
            "ALTER TABLE t MODIFY COLUMN `a` unsigned int(11) NOT NULL;",
            "ALTER TABLE t MODIFY COLUMN `b` int(11) DEFAULT 1 NOT NULL;"
        ]
    );
}

#[test]
fn change_single_field() {
    let sql = Schema::alter("t", |a| {
        a.change(
            |t| {
                t.int("x").nullable();
                Ok(())
            },
            "y",
        )?;
        Ok(())
    })
    .unwrap();

    assert_eq!(sql, "ALTER TABLE t CHANGE `x` `y` int(11) NULL;");
}

#[test]
fn change_several_fields_needs_matching_list() {
    let err = Schema::alter("t", |a| {
        a.change(
            |t| {
                t.int("x");
                t.int("y");
                Ok(())
            },
            "z",
        )?;
        Ok(())
    })
    .unwrap_err();
    assert_eq!(err, SchemaError::NamesNotList(2));

    let err = Schema::alter("t", |a| {
        a.change(
            |t| {
                t.int("x");
                t.int("y");
                Ok(())
            },
            ["p", "q", "r"],
        )?;
        Ok(())
    })
    .unwrap_err();
    assert_eq!(
        err,
        SchemaError::NameCountMismatch {
            fields: 2,
            names: 3
        }
    );
}

#[test]
fn index_kind_validation() {
    let err = Schema::alter("t", |a| {
        a.add_index("btree", "i", "a")?;
        Ok(())
    })
    .unwrap_err();
    assert_eq!(err, SchemaError::InvalidIndexType("btree".to_string()));

    let err = Schema::alter("t", |a| {
        a.add_index("SPATIAL", "geo", ["lat", "lng"])?;
        Ok(())
    })
    .unwrap_err();
    assert_eq!(err, SchemaError::SpatialIndexColumns(2));
}

#[test]
fn drop_primary_and_add_primary() {
    let sql = Schema::alter("t", |a| {
        a.drop_primary();
        a.add(|t| {
            t.big_int("uid").unsigned().primary_key()?;
            Ok(())
        })?;
        Ok(())
    })
    .unwrap();

    assert_eq!(
        sql,
        "ALTER TABLE t DROP PRIMARY KEY; \
         ALTER TABLE t ADD COLUMN `uid` unsigned bigint(25) NOT NULL; \
         ALTER TABLE t ADD PRIMARY KEY (`uid`);"
    );
}

#[test]
fn empty_alter_is_an_error() {
    assert_eq!(
        Schema::alter("t", |_| Ok(())).unwrap_err(),
        SchemaError::EmptyAlterActions
    );
}

#[test]
fn keys_inside_column_rewrites_are_rejected() {
    let err = Schema::alter("t", |a| {
        a.modify(|t| {
            t.int("x").unique().references("users.id")?.primary_key()?;
            Ok(())
        })?;
        Ok(())
    })
    .unwrap_err();
    assert_eq!(err, SchemaError::KeysNotAllowed("modify"));

    let err = Schema::alter("t", |a| {
        a.change(
            |t| {
                t.string("e").unique();
                Ok(())
            },
            "email",
        )?;
        Ok(())
    })
    .unwrap_err();
    assert_eq!(err, SchemaError::KeysNotAllowed("change"));
}

#[test]
fn index_needs_columns() {
    let err = Schema::alter("t", |a| {
        a.add_index("index", "i", Vec::<String>::new())?;
        Ok(())
    })
    .unwrap_err();
    assert_eq!(err, SchemaError::EmptyIndexColumns("i".to_string()));
}
