//! Property Invariant Tests
//!
//! Tests for table-definition property rules:
//! - Only allow-listed keywords are accepted
//! - Namespaced keys route to their sub-collection
//! - Compaction thresholds are consistent (max == 0 disables the check)
//! - Typed accessors parse or fail naming the key
//! - Validation is deterministic

use cfprops::cli::{parse_request, validate_properties};
use cfprops::config::ValidatorConfig;
use cfprops::properties::{
    Keywords, PropertyDefinitions, PropertyError, TableOptions, DEFAULT_COMPRESSION_CLASS,
};
use cfprops::types::DataType;
use serde_json::json;
use std::collections::HashMap;
use std::fs;
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn defs_from(entries: &[(&str, &str)]) -> PropertyDefinitions {
    let mut defs = PropertyDefinitions::new();
    for (name, value) in entries {
        defs.add_property(*name, *value);
    }
    defs
}

fn write_config(value: serde_json::Value) -> (TempDir, std::path::PathBuf) {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("cfprops.json");
    fs::write(&path, value.to_string()).unwrap();
    (tmp, path)
}

// =============================================================================
// Allow-list Tests
// =============================================================================

/// Every unknown key fails validation.
#[test]
fn test_unknown_keys_fail() {
    for key in ["bogus_option", "Comment", "comment ", "weird:thing", "compaction:foo", ""] {
        let result = defs_from(&[(key, "x")]).validate();
        assert!(
            matches!(result, Err(PropertyError::InvalidConfiguration(_))),
            "key {:?} should be rejected",
            key
        );
    }
}

/// A single bogus key is named in the error.
#[test]
fn test_bogus_option_named() {
    let err = defs_from(&[("bogus_option", "x")]).validate().unwrap_err();
    assert!(err.to_string().contains("bogus_option"));
}

/// With several bogus keys, the reported one is one of them.
#[test]
fn test_multiple_bogus_keys_report_a_member() {
    let err = defs_from(&[("alpha", "1"), ("beta", "2"), ("comment", "ok")])
        .validate()
        .unwrap_err();
    let message = err.message();
    assert!(message.contains("alpha") || message.contains("beta"));
}

/// All recognized keywords pass together.
#[test]
fn test_all_recognized_keywords_pass() {
    let defs = defs_from(&[
        ("comment", "everything"),
        ("read_repair_chance", "0.2"),
        ("dclocal_read_repair_chance", "0.1"),
        ("gc_grace_seconds", "100"),
        ("min_compaction_threshold", "2"),
        ("max_compaction_threshold", "16"),
        ("replicate_on_write", "true"),
        ("compaction_strategy_class", "LeveledCompactionStrategy"),
        ("caching", "ALL"),
        ("bloom_filter_fp_chance", "0.001"),
    ]);
    assert!(defs.validate().is_ok());
}

/// Obsolete keywords are tolerated and stay readable.
#[test]
fn test_obsolete_keywords_tolerated() {
    let keywords = Keywords::with_obsolete(&["memtable_operations_in_millions"]);
    let defs = defs_from(&[("memtable_operations_in_millions", "0.3"), ("comment", "c")]);

    let result = defs.validate_with(&keywords, &ValidatorConfig::default());
    assert!(result.is_ok());
    assert_eq!(defs.get("memtable_operations_in_millions"), Some("0.3"));
    assert!(defs.has_property("memtable_operations_in_millions"));
}

// =============================================================================
// Namespace Routing Tests
// =============================================================================

/// Compaction options are stored under their suffix only.
#[test]
fn test_compaction_option_routing() {
    let defs = defs_from(&[("compaction_strategy_options:bucket_low", "0.5")]);

    assert_eq!(
        defs.compaction_strategy_options().get("bucket_low").map(String::as_str),
        Some("0.5")
    );
    assert!(!defs.has_property("compaction_strategy_options:bucket_low"));
    assert!(defs.validate().is_ok());
}

/// Namespaced maps never hold full namespaced names.
#[test]
fn test_namespaced_maps_hold_suffixes() {
    let defs = defs_from(&[
        ("compaction_strategy_options:min_sstable_size", "50"),
        ("compression_parameters:chunk_length_kb", "32"),
    ]);

    for key in defs
        .compaction_strategy_options()
        .keys()
        .chain(defs.compression_parameters().keys())
    {
        assert!(!key.starts_with("compaction_strategy_options"));
        assert!(!key.starts_with("compression_parameters"));
    }
}

/// Compression parameters are seeded even with no input.
#[test]
fn test_compression_never_empty() {
    let defs = PropertyDefinitions::new();
    assert!(!defs.compression_parameters().is_empty());
    assert_eq!(
        defs.compression_parameters().get("sstable_compression").map(String::as_str),
        Some(DEFAULT_COMPRESSION_CLASS)
    );
}

/// Bulk ingestion matches single-key ingestion.
#[test]
fn test_add_all_matches_add_property() {
    let mut input = HashMap::new();
    input.insert("comment", "bulk");
    input.insert("compaction_strategy_options:bucket_high", "1.5");
    input.insert("compression_parameters:sstable_compression", "");

    let mut bulk = PropertyDefinitions::new();
    bulk.add_all(input.clone());

    let mut single = PropertyDefinitions::new();
    for (k, v) in input {
        single.add_property(k, v);
    }

    assert_eq!(bulk.properties(), single.properties());
    assert_eq!(
        bulk.compaction_strategy_options(),
        single.compaction_strategy_options()
    );
    assert_eq!(bulk.compression_parameters(), single.compression_parameters());
}

// =============================================================================
// Compaction Threshold Tests
// =============================================================================

/// min > max fails unless max is 0.
#[test]
fn test_min_greater_than_max() {
    for (min, max) in [(5, 4), (33, 32), (2, 1), (100, -1)] {
        let (min_s, max_s) = (min.to_string(), max.to_string());
        let defs = defs_from(&[
            ("min_compaction_threshold", min_s.as_str()),
            ("max_compaction_threshold", max_s.as_str()),
        ]);
        assert!(defs.validate().is_err(), "min={} max={}", min, max);
    }
}

/// max == 0 disables the ordering check for any min.
#[test]
fn test_zero_max_exempt() {
    for min in [0, 1, 4, 32, 1000] {
        let min_s = min.to_string();
        let defs = defs_from(&[
            ("min_compaction_threshold", min_s.as_str()),
            ("max_compaction_threshold", "0"),
        ]);
        assert!(defs.validate().is_ok(), "min={}", min);
    }
}

/// Threshold scenario: explicit 4/32 passes, min 40 alone fails.
#[test]
fn test_threshold_scenarios() {
    let ok = defs_from(&[
        ("min_compaction_threshold", "4"),
        ("max_compaction_threshold", "32"),
    ]);
    assert!(ok.validate().is_ok());

    let bad = defs_from(&[("min_compaction_threshold", "40")]);
    assert!(bad.validate().is_err());
}

/// Max alone below the default min fails.
#[test]
fn test_max_alone_below_default_min() {
    assert!(defs_from(&[("max_compaction_threshold", "3")]).validate().is_err());
    assert!(defs_from(&[("max_compaction_threshold", "4")]).validate().is_ok());
}

/// Validation is deterministic.
#[test]
fn test_validation_is_deterministic() {
    let defs = defs_from(&[("min_compaction_threshold", "10"), ("max_compaction_threshold", "5")]);
    let first = defs.validate().unwrap_err();
    for _ in 0..100 {
        assert_eq!(defs.validate().unwrap_err(), first);
    }
}

// =============================================================================
// Typed Accessor Tests
// =============================================================================

/// Integers and doubles read back what was written.
#[test]
fn test_numeric_round_trip() {
    for v in [0, 1, -1, 42, i32::MAX, i32::MIN] {
        let raw = v.to_string();
        let defs = defs_from(&[("gc_grace_seconds", raw.as_str())]);
        assert_eq!(defs.get_int("gc_grace_seconds", None).unwrap(), Some(v));
    }
    for v in [0.0, 0.1, 0.5, 1.0, 1e-6] {
        let raw = v.to_string();
        let defs = defs_from(&[("read_repair_chance", raw.as_str())]);
        assert_eq!(defs.get_double("read_repair_chance", None).unwrap(), Some(v));
    }
}

/// Non-numeric values fail naming the key.
#[test]
fn test_non_numeric_fails_naming_key() {
    let defs = defs_from(&[("gc_grace_seconds", "soon"), ("read_repair_chance", "often")]);

    let err = defs.get_int("gc_grace_seconds", Some(1)).unwrap_err();
    assert!(err.message().contains("gc_grace_seconds"));

    let err = defs.get_double("read_repair_chance", Some(0.1)).unwrap_err();
    assert!(err.message().contains("read_repair_chance"));
}

/// Booleans are true exactly for 1/true/yes in any case.
#[test]
fn test_boolean_truth_set() {
    for value in ["1", "true", "TRUE", "True", "yes", "YES", "yEs"] {
        assert!(defs_from(&[("replicate_on_write", value)]).get_boolean("replicate_on_write", false));
    }
    for value in ["0", "false", "no", "y", "on", "", "truthy"] {
        assert!(!defs_from(&[("replicate_on_write", value)]).get_boolean("replicate_on_write", true));
    }
    let empty = PropertyDefinitions::new();
    assert!(empty.get_boolean("replicate_on_write", true));
}

// =============================================================================
// Type Resolution Tests
// =============================================================================

/// Short names resolve through the alias table; canonical names pass through.
#[test]
fn test_type_resolution() {
    assert_eq!(PropertyDefinitions::parse_type("bigint").unwrap(), DataType::Long);
    assert_eq!(PropertyDefinitions::parse_type("timestamp").unwrap(), DataType::Date);
    assert_eq!(
        PropertyDefinitions::parse_type("ReversedType(Int32Type)").unwrap(),
        DataType::Reversed(Box::new(DataType::Int32))
    );
}

/// Unresolvable types surface as InvalidConfiguration.
#[test]
fn test_type_resolution_failure() {
    for name in ["notatype", "CompositeType(", "int("] {
        let result = PropertyDefinitions::parse_type(name);
        assert!(matches!(result, Err(PropertyError::InvalidConfiguration(_))), "{}", name);
    }
}

// =============================================================================
// Configuration Tests
// =============================================================================

/// Config file overrides threshold defaults and the seeded codec.
#[test]
fn test_config_file_overrides() {
    let (_tmp, path) = write_config(json!({
        "default_max_compaction_threshold": 64,
        "default_compression_class": "org.apache.cassandra.io.compress.DeflateCompressor"
    }));
    let config = ValidatorConfig::load(&path).unwrap();

    let mut defs = PropertyDefinitions::with_config(&config);
    defs.add_property("min_compaction_threshold", "40");

    assert!(defs.validate_with(Keywords::builtin(), &config).is_ok());
    let options = TableOptions::from_definitions(&defs, &config).unwrap();
    assert_eq!(options.max_compaction_threshold, 64);
    assert_eq!(
        options.compression_parameters.get("sstable_compression").unwrap(),
        "org.apache.cassandra.io.compress.DeflateCompressor"
    );
}

/// Missing or invalid config files are rejected.
#[test]
fn test_config_file_errors() {
    let tmp = TempDir::new().unwrap();
    assert!(ValidatorConfig::load(&tmp.path().join("missing.json")).is_err());

    let (_tmp, path) = write_config(json!({"default_min_compaction_threshold": "four"}));
    assert!(ValidatorConfig::load(&path).is_err());
}

// =============================================================================
// End-to-end Request Tests
// =============================================================================

/// A JSON request flows through to table options.
#[test]
fn test_request_to_table_options() {
    let request = json!({
        "comment": "clicks",
        "gc_grace_seconds": 7200,
        "compaction_strategy_options:bucket_low": "0.5",
        "compression_parameters:chunk_length_kb": 64
    });
    let pairs = parse_request(&request.to_string()).unwrap();
    let options = validate_properties(pairs, &ValidatorConfig::default()).unwrap();

    assert_eq!(options.comment, "clicks");
    assert_eq!(options.gc_grace_seconds, 7200);
    assert_eq!(options.compaction_strategy_options.get("bucket_low").unwrap(), "0.5");
    assert_eq!(options.compression_parameters.get("chunk_length_kb").unwrap(), "64");
}

/// A bogus request is rejected with the offending key.
#[test]
fn test_request_rejected() {
    let pairs = parse_request(r#"{"bogus_option": "x"}"#).unwrap();
    let err = validate_properties(pairs, &ValidatorConfig::default()).unwrap_err();
    assert!(err.message().contains("bogus_option"));
}

/// Integral JSON floats are accepted where integers are expected.
#[test]
fn test_request_integral_floats_accepted() {
    let pairs = parse_request(
        r#"{"gc_grace_seconds": 1e3, "min_compaction_threshold": 4.0, "compression_parameters:chunk_length_kb": 64.0}"#,
    )
    .unwrap();
    let options = validate_properties(pairs, &ValidatorConfig::default()).unwrap();

    assert_eq!(options.gc_grace_seconds, 1000);
    assert_eq!(options.min_compaction_threshold, 4);
    assert_eq!(options.compression_parameters.get("chunk_length_kb").unwrap(), "64");
}

/// Non-finite or out-of-range chances are rejected end to end.
#[test]
fn test_request_chance_out_of_range_rejected() {
    for value in ["NaN", "inf", "1.5"] {
        let pairs = vec![("read_repair_chance".to_string(), value.to_string())];
        let err = validate_properties(pairs, &ValidatorConfig::default()).unwrap_err();
        assert!(err.message().contains("read_repair_chance"), "{}", value);
    }
}
