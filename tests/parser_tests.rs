use mysql_settings_diff::parser::{parse_categories, parse_dump};

/// Trimmed-down `mysqld --version --help` output
const SAMPLE_DUMP: &str = "\
mysqld  Ver 5.5.60-0+deb8u1 for debian-linux-gnu on x86_64
Starting mysqld daemon with databases from /var/lib/mysql

Default options are read from the following files in the given order:
/etc/my.cnf /etc/mysql/my.cnf ~/.my.cnf
--------------------------------- -----------------------------
abort-slave-event-count           0
allow-suspicious-udfs             FALSE
auto-increment-increment          1
basedir                           /usr
binlog-row-event-max-size         8192

To see what values a running MySQL server is using, type
'mysqladmin variables' instead of 'mysqld --verbose --help'.
";

#[test]
fn test_parse_sample_dump() {
    let set = parse_dump(SAMPLE_DUMP);

    assert_eq!(set.len(), 5);
    assert_eq!(set["abort-slave-event-count"].value, "0");
    assert_eq!(set["allow-suspicious-udfs"].value, "FALSE");
    assert_eq!(set["basedir"].value, "/usr");
}

#[test]
fn test_parse_is_idempotent() {
    assert_eq!(parse_dump(SAMPLE_DUMP), parse_dump(SAMPLE_DUMP));
}

#[test]
fn test_dump_without_marker_is_empty() {
    let text = "some header\nkey value\nother value\n";
    assert!(parse_dump(text).is_empty());
}

#[test]
fn test_blank_line_ends_region_for_good() {
    let text = "\
header
---------
key1  1
key2  2

key3  3
---------
key4  4
";
    let set = parse_dump(text);

    // Nothing after the first blank line counts, not even a second marker.
    assert_eq!(set.len(), 2);
    assert!(set.contains_key("key1"));
    assert!(set.contains_key("key2"));
    assert!(!set.contains_key("key3"));
    assert!(!set.contains_key("key4"));
}

#[test]
fn test_marker_immediately_followed_by_blank_yields_empty_set() {
    let text = "header\n---------\n\nkey1  1\n";
    assert!(parse_dump(text).is_empty());
}

#[test]
fn test_duplicate_names_last_write_wins() {
    let text = "---------\nkey1  old\nkey1  new\n";
    let set = parse_dump(text);

    assert_eq!(set.len(), 1);
    assert_eq!(set["key1"].value, "new");
}

#[test]
fn test_value_keeps_internal_whitespace() {
    let text = "---------\noptimizer-switch  index_merge=on, index_merge_union=on\n";
    let set = parse_dump(text);

    assert_eq!(
        set["optimizer-switch"].value,
        "index_merge=on, index_merge_union=on"
    );
}

#[test]
fn test_setting_without_value_column_gets_empty_value() {
    let text = "---------\nlog-error\n";
    let set = parse_dump(text);

    assert_eq!(set["log-error"].value, "");
}

#[test]
fn test_whitespace_only_line_ends_region() {
    let text = "---------\nkey1  1\n   \nkey2  2\n";
    let set = parse_dump(text);

    assert_eq!(set.len(), 1);
}

#[test]
fn test_categories_full_rows() {
    let text = "\
connect-timeout;connect_timeout;s;Network
key-buffer-size;key_buffer_size;bytes;Buffers
";
    let table = parse_categories(text).unwrap();

    assert_eq!(table.len(), 2);
    let record = &table["connect-timeout"];
    assert_eq!(record.cnf_param_name, "connect_timeout");
    assert_eq!(record.unit.as_deref(), Some("s"));
    assert_eq!(record.category.as_deref(), Some("Network"));
}

#[test]
fn test_categories_optional_fields_independent() {
    let table = parse_categories("a;param_a\nb;param_b;ms\n").unwrap();

    let a = &table["a"];
    assert_eq!(a.unit, None);
    assert_eq!(a.category, None);

    let b = &table["b"];
    assert_eq!(b.unit.as_deref(), Some("ms"));
    assert_eq!(b.category, None);
}

#[test]
fn test_categories_blank_lines_skipped() {
    let table = parse_categories("\na;param_a\n\nb;param_b\n\n").unwrap();
    assert_eq!(table.len(), 2);
}

#[test]
fn test_categories_extra_fields_ignored() {
    let table = parse_categories("a;param_a;ms;Network;stray;more\n").unwrap();
    assert_eq!(table["a"].category.as_deref(), Some("Network"));
}

#[test]
fn test_categories_crlf_tolerated() {
    let table = parse_categories("a;param_a;ms;Network\r\nb;param_b\r\n").unwrap();
    assert_eq!(table["a"].category.as_deref(), Some("Network"));
    assert_eq!(table["b"].cnf_param_name, "param_b");
}

#[test]
fn test_category_row_without_param_name_fails() {
    let err = parse_categories("a;param_a\nlonely-name\n").unwrap_err();
    assert!(err.to_string().contains("row 2"));
}

#[test]
fn test_category_row_with_empty_name_fails() {
    assert!(parse_categories(";param_a\n").is_err());
}
