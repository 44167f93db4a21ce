use pretty_assertions::assert_eq;
use tablewright_core::schema::{
    ColumnDefault, ColumnDescriptor, ColumnSet, Generated, MoveTarget, Virtuality,
};
use tablewright_core::Error;
use tablewright_sql::{diff, Serializer, Statement};

fn varchar(name: &str) -> ColumnDescriptor {
    ColumnDescriptor {
        ty: "VARCHAR".into(),
        spec: "255".into(),
        collation: "utf8mb4_general_ci".into(),
        ..ColumnDescriptor::named(name)
    }
}

fn int(name: &str) -> ColumnDescriptor {
    ColumnDescriptor {
        ty: "INT".into(),
        spec: "11".into(),
        ..ColumnDescriptor::named(name)
    }
}

fn serialize_clause(clause: tablewright_sql::stmt::ChangeColumn) -> String {
    Serializer::mysql().serialize(&Statement::alter_table("articles", vec![clause], false))
}

#[test]
fn no_clause_when_nothing_differs() {
    let original = varchar("title");
    let desired = original.clone();

    assert!(diff::build_clause(&original, &desired).is_none());
}

#[test]
fn clause_when_a_single_field_differs() {
    let original = varchar("title");
    let mut desired = original.clone();
    desired.comment = "headline".into();

    let clause = diff::build_clause(&original, &desired).unwrap();
    assert_eq!(
        serialize_clause(clause),
        "ALTER TABLE `articles` CHANGE `title` `title` VARCHAR(255) \
         CHARACTER SET utf8mb4 COLLATE utf8mb4_general_ci NOT NULL COMMENT 'headline';"
    );
}

#[test]
fn rename_addresses_the_original_name() {
    let original = varchar("title");
    let mut desired = original.clone();
    desired.name = "headline".into();

    let clause = diff::build_clause(&original, &desired).unwrap();
    assert_eq!(clause.orig_name, "title");
    assert_eq!(
        serialize_clause(clause),
        "ALTER TABLE `articles` CHANGE `title` `headline` VARCHAR(255) \
         CHARACTER SET utf8mb4 COLLATE utf8mb4_general_ci NOT NULL;"
    );
}

#[test]
fn numeric_defaults_render_unquoted() {
    let original = int("views");
    let mut desired = original.clone();
    desired.default = ColumnDefault::UserDefined("0".into());

    let clause = diff::build_clause(&original, &desired).unwrap();
    assert_eq!(
        serialize_clause(clause),
        "ALTER TABLE `articles` CHANGE `views` `views` INT(11) NOT NULL DEFAULT 0;"
    );
}

#[test]
fn text_defaults_render_quoted_and_escaped() {
    let original = varchar("state");
    let mut desired = original.clone();
    desired.default = ColumnDefault::UserDefined("it's new".into());

    let clause = diff::build_clause(&original, &desired).unwrap();
    assert_eq!(
        serialize_clause(clause),
        "ALTER TABLE `articles` CHANGE `state` `state` VARCHAR(255) \
         CHARACTER SET utf8mb4 COLLATE utf8mb4_general_ci NOT NULL DEFAULT 'it\\'s new';"
    );
}

#[test]
fn null_default_requires_nullability() {
    let original = varchar("subtitle");
    let mut desired = original.clone();
    desired.nullable = true;
    desired.default = ColumnDefault::Null;

    let clause = diff::build_clause(&original, &desired).unwrap();
    assert_eq!(
        serialize_clause(clause),
        "ALTER TABLE `articles` CHANGE `subtitle` `subtitle` VARCHAR(255) \
         CHARACTER SET utf8mb4 COLLATE utf8mb4_general_ci NULL DEFAULT NULL;"
    );

    // Not nullable: the NULL default is suppressed rather than emitted
    // as invalid SQL.
    let mut desired = original.clone();
    desired.default = ColumnDefault::Null;
    let clause = diff::build_clause(&original, &desired).unwrap();
    assert_eq!(
        serialize_clause(clause),
        "ALTER TABLE `articles` CHANGE `subtitle` `subtitle` VARCHAR(255) \
         CHARACTER SET utf8mb4 COLLATE utf8mb4_general_ci NOT NULL;"
    );
}

#[test]
fn now_marker_default_renders_bare() {
    let original = ColumnDescriptor {
        ty: "TIMESTAMP".into(),
        ..ColumnDescriptor::named("updated_at")
    };
    let mut desired = original.clone();
    desired.default = ColumnDefault::CurrentTimestamp;
    desired.attribute = "on update CURRENT_TIMESTAMP".into();

    let clause = diff::build_clause(&original, &desired).unwrap();
    assert_eq!(
        serialize_clause(clause),
        "ALTER TABLE `articles` CHANGE `updated_at` `updated_at` TIMESTAMP \
         on update CURRENT_TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP;"
    );
}

#[test]
fn generated_columns_render_expression_and_no_default() {
    let original = varchar("full_name");
    let mut desired = original.clone();
    desired.collation = String::new();
    desired.nullable = true;
    desired.default = ColumnDefault::UserDefined("ignored".into());
    desired.generated = Some(Generated {
        virtuality: Virtuality::Virtual,
        expression: "concat(first,' ',last)".into(),
    });

    let clause = diff::build_clause(&original, &desired).unwrap();
    assert_eq!(
        serialize_clause(clause),
        "ALTER TABLE `articles` CHANGE `full_name` `full_name` VARCHAR(255) \
         AS (concat(first,' ',last)) VIRTUAL NULL;"
    );
}

#[test]
fn stored_generation_keyword_follows_the_flavor() {
    let mut def = int("total");
    def.generated = Some(Generated {
        virtuality: Virtuality::Stored,
        expression: "price * quantity".into(),
    });
    let stmt = Statement::alter_table(
        "orders",
        vec![tablewright_sql::stmt::ChangeColumn::new(def)],
        false,
    );

    assert_eq!(
        Serializer::mysql().serialize(&stmt),
        "ALTER TABLE `orders` CHANGE `total` `total` INT(11) \
         AS (price * quantity) STORED NOT NULL;"
    );
    assert_eq!(
        Serializer::mariadb().serialize(&stmt),
        "ALTER TABLE `orders` CHANGE `total` `total` INT(11) \
         AS (price * quantity) PERSISTENT NOT NULL;"
    );
}

#[test]
fn move_targets_render_last() {
    let original = int("views");
    let mut desired = original.clone();
    desired.position = Some(MoveTarget::First);

    let clause = diff::build_clause(&original, &desired).unwrap();
    assert_eq!(
        serialize_clause(clause),
        "ALTER TABLE `articles` CHANGE `views` `views` INT(11) NOT NULL FIRST;"
    );

    let mut desired = original.clone();
    desired.position = Some(MoveTarget::After("id".into()));
    let clause = diff::build_clause(&original, &desired).unwrap();
    assert_eq!(
        serialize_clause(clause),
        "ALTER TABLE `articles` CHANGE `views` `views` INT(11) NOT NULL AFTER `id`;"
    );
}

#[test]
fn combined_statement_joins_clauses_and_appends_the_online_hint() {
    let originals = [varchar("title"), int("views")];
    let mut desired_title = originals[0].clone();
    desired_title.nullable = true;
    let mut desired_views = originals[1].clone();
    desired_views.spec = "10".into();

    let clauses = vec![
        diff::build_clause(&originals[0], &desired_title).unwrap(),
        diff::build_clause(&originals[1], &desired_views).unwrap(),
    ];
    let sql = Serializer::mysql().serialize(&Statement::alter_table("articles", clauses, true));

    assert_eq!(
        sql,
        "ALTER TABLE `articles` \
         CHANGE `title` `title` VARCHAR(255) CHARACTER SET utf8mb4 COLLATE utf8mb4_general_ci NULL, \
         CHANGE `views` `views` INT(10) NOT NULL, \
         ALGORITHM=INPLACE, LOCK=NONE;"
    );
}

#[test]
fn build_clauses_rejects_unknown_original_names() {
    let originals = ColumnSet::from_columns([varchar("title")]).unwrap();
    let mut ghost = varchar("ghost");
    ghost.orig_name = "missing".into();
    let desired = ColumnSet::from_columns([ghost]).unwrap();

    let err = diff::build_clauses(&originals, &desired).unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
    assert!(err.to_string().contains("unknown original column `missing`"));
}

#[test]
fn build_clauses_skips_unchanged_columns() {
    let originals = ColumnSet::from_columns([varchar("title"), int("views")]).unwrap();
    let mut desired_views = int("views");
    desired_views.comment = "cached".into();
    let desired = ColumnSet::from_columns([varchar("title"), desired_views]).unwrap();

    let clauses = diff::build_clauses(&originals, &desired).unwrap();
    assert_eq!(clauses.len(), 1);
    assert_eq!(clauses[0].orig_name, "views");
}
