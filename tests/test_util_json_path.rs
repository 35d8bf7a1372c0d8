use intentd::utils::json_path::{get_path, get_str};
use serde_json::json;

#[test]
fn traverses_objects_and_arrays() {
    let tree = json!({
        "inputs": [
            {"payload": {"commands": [{"execution": [{"command": "noop"}]}]}}
        ]
    });

    let value = get_str(&tree, "inputs.0.payload.commands.0.execution.0.command");

    assert_eq!(value, Some("noop"));
}

#[test]
fn missing_key_yields_none() {
    let tree = json!({"inputs": [{"payload": {}}]});

    assert!(get_path(&tree, "inputs.0.payload.commands.0").is_none());
}

#[test]
fn index_out_of_range_yields_none() {
    let tree = json!({"inputs": []});

    assert!(get_path(&tree, "inputs.0").is_none());
}

#[test]
fn non_numeric_index_over_array_yields_none() {
    let tree = json!({"inputs": [1, 2, 3]});

    assert!(get_path(&tree, "inputs.first").is_none());
}

#[test]
fn scalar_segment_yields_none() {
    let tree = json!({"command": "noop"});

    assert!(get_path(&tree, "command.nested").is_none());
}

#[test]
fn non_string_leaf_yields_none_for_get_str() {
    let tree = json!({"command": 7});

    assert_eq!(get_path(&tree, "command"), Some(&json!(7)));
    assert!(get_str(&tree, "command").is_none());
}
