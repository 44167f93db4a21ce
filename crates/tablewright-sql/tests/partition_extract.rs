use pretty_assertions::assert_eq;
use tablewright_core::schema::PartitionDescriptor;
use tablewright_sql::{
    extract::try_extract_partitions, extract_partitions, Serializer, Statement,
};

const RANGE_DEFINITION: &str = "CREATE TABLE `logs` (\n  \
     `id` int NOT NULL,\n  `body` text\n) ENGINE=InnoDB\n\
     /*!50100 PARTITION BY RANGE (id)\n\
     (PARTITION p0 VALUES LESS THAN (10) ENGINE = InnoDB,\n \
     PARTITION p1 VALUES LESS THAN (20) ENGINE = InnoDB,\n \
     PARTITION p2 VALUES LESS THAN MAXVALUE ENGINE = InnoDB) */";

#[test]
fn range_definition_round_trips() {
    let descriptor = extract_partitions(RANGE_DEFINITION);

    assert_eq!(descriptor.scheme.method, "RANGE");
    assert_eq!(descriptor.scheme.expression, "id");
    assert_eq!(descriptor.scheme.count, 3);
    assert!(descriptor.can_have_subpartitions());
    assert!(descriptor.values_enabled());

    let names: Vec<_> = descriptor
        .partitions
        .iter()
        .map(|slot| slot.name.as_str())
        .collect();
    assert_eq!(names, ["p0", "p1", "p2"]);
    assert_eq!(descriptor.partitions[0].value_type, "LESS THAN");
    assert_eq!(descriptor.partitions[0].value, "10");
    assert_eq!(descriptor.partitions[1].value, "20");

    // The catch-all slot carries the marker in its value-type and no
    // value expression.
    assert!(descriptor.partitions[2].value_type.ends_with(" MAXVALUE"));
    assert_eq!(descriptor.partitions[2].value, "");
    assert_eq!(descriptor.partitions[0].options.engine, "InnoDB");

    // Reconstructed as executable DDL.
    let sql = Serializer::mysql().serialize(&Statement::partition_by("logs", descriptor));
    assert_eq!(
        sql,
        "ALTER TABLE `logs` PARTITION BY RANGE (id) \
         (PARTITION `p0` VALUES LESS THAN (10) ENGINE = InnoDB, \
         PARTITION `p1` VALUES LESS THAN (20) ENGINE = InnoDB, \
         PARTITION `p2` VALUES LESS THAN MAXVALUE ENGINE = InnoDB);"
    );
}

#[test]
fn no_partition_clause_yields_the_empty_descriptor() {
    let descriptor =
        extract_partitions("CREATE TABLE `plain` (\n  `id` int NOT NULL\n) ENGINE=InnoDB");
    assert!(descriptor.is_empty());
    assert_eq!(descriptor, PartitionDescriptor::default());
}

#[test]
fn malformed_clauses_resolve_to_not_partitioned() {
    let text = "CREATE TABLE `t` (`id` int) PARTITION BY RANGE (id";
    assert!(try_extract_partitions(text).is_err());
    assert!(extract_partitions(text).is_empty());
}

#[test]
fn hash_with_declared_count_synthesizes_default_slots() {
    let descriptor = extract_partitions(
        "CREATE TABLE `t` (`id` int)\n/*!50100 PARTITION BY HASH (id)\nPARTITIONS 4 */",
    );

    assert_eq!(descriptor.scheme.method, "HASH");
    assert_eq!(descriptor.scheme.count, 4);
    assert!(!descriptor.values_enabled());
    assert!(!descriptor.can_have_subpartitions());

    let names: Vec<_> = descriptor
        .partitions
        .iter()
        .map(|slot| slot.name.as_str())
        .collect();
    assert_eq!(names, ["p0", "p1", "p2", "p3"]);
    assert!(descriptor.partitions.iter().all(|slot| slot.options.is_empty()));

    // Count-only methods reconstruct without a slot list.
    let sql = Serializer::mysql().serialize(&Statement::partition_by("t", descriptor));
    assert_eq!(sql, "ALTER TABLE `t` PARTITION BY HASH (id) PARTITIONS 4;");
}

#[test]
fn linear_key_method_token_spans_words() {
    let descriptor =
        extract_partitions("CREATE TABLE `t` (`id` int) PARTITION BY LINEAR KEY (id) PARTITIONS 2");
    assert_eq!(descriptor.scheme.method, "LINEAR KEY");
    assert_eq!(descriptor.scheme.expression, "id");
    assert_eq!(descriptor.scheme.count, 2);
}

#[test]
fn subpartitions_recurse_with_synthesized_defaults() {
    let definition = "CREATE TABLE `sales` (`id` int, `sold_at` date)\n\
         /*!50100 PARTITION BY RANGE (YEAR(sold_at))\n\
         SUBPARTITION BY HASH (id)\n\
         SUBPARTITIONS 2\n\
         (PARTITION p0 VALUES LESS THAN (2024)\n \
         (SUBPARTITION s0 ENGINE = InnoDB, SUBPARTITION s1 ENGINE = InnoDB),\n \
         PARTITION p1 VALUES LESS THAN MAXVALUE) */";

    let descriptor = extract_partitions(definition);

    assert_eq!(descriptor.scheme.method, "RANGE");
    assert_eq!(descriptor.scheme.expression, "YEAR(sold_at)");
    assert_eq!(descriptor.scheme.count, 2);

    let sub = descriptor.subscheme.as_ref().unwrap();
    assert_eq!(sub.method, "HASH");
    assert_eq!(sub.expression, "id");
    assert_eq!(sub.count, 2);

    // Declared subpartition slots keep their names; undeclared positions
    // synthesize `<parent>_s<j>`.
    let p0: Vec<_> = descriptor.partitions[0]
        .subpartitions
        .iter()
        .map(|slot| slot.name.as_str())
        .collect();
    assert_eq!(p0, ["s0", "s1"]);

    let p1: Vec<_> = descriptor.partitions[1]
        .subpartitions
        .iter()
        .map(|slot| slot.name.as_str())
        .collect();
    assert_eq!(p1, ["p1_s0", "p1_s1"]);
}

#[test]
fn slot_options_strip_quotes() {
    let definition = "CREATE TABLE `t` (`id` int) PARTITION BY LIST (id) \
         (PARTITION p0 VALUES IN (1,2,3) ENGINE = InnoDB \
         COMMENT = 'hot rows' DATA DIRECTORY = '/var/data' INDEX DIRECTORY = '/var/index' \
         MIN_ROWS = 10 MAX_ROWS = 1000 TABLESPACE = ts1 NODEGROUP = 7)";

    let descriptor = extract_partitions(definition);
    assert_eq!(descriptor.scheme.method, "LIST");
    assert_eq!(descriptor.scheme.count, 1);

    let slot = &descriptor.partitions[0];
    assert_eq!(slot.value_type, "IN");
    assert_eq!(slot.value, "1,2,3");
    assert_eq!(slot.options.engine, "InnoDB");
    assert_eq!(slot.options.comment, "hot rows");
    assert_eq!(slot.options.data_directory, "/var/data");
    assert_eq!(slot.options.index_directory, "/var/index");
    assert_eq!(slot.options.min_rows, "10");
    assert_eq!(slot.options.max_rows, "1000");
    assert_eq!(slot.options.tablespace, "ts1");
    assert_eq!(slot.options.node_group, "7");
}

#[test]
fn parenthesized_boundary_marker_counts_as_catch_all() {
    let descriptor = extract_partitions(
        "CREATE TABLE `t` (`id` int) PARTITION BY RANGE (id) \
         (PARTITION p0 VALUES LESS THAN (MAXVALUE))",
    );
    assert_eq!(descriptor.partitions[0].value_type, "LESS THAN MAXVALUE");
    assert_eq!(descriptor.partitions[0].value, "");
}

#[test]
fn remove_partitioning_statement_renders() {
    let sql = Serializer::mysql().serialize(&Statement::remove_partitioning("logs"));
    assert_eq!(sql, "ALTER TABLE `logs` REMOVE PARTITIONING;");
}
