//! Strict per-mount field removal

use super::test_utils::object;
use factprune::{clean_list, clean_value, PruneError, MOUNTS_KEY, MOUNT_FIELDS};
use serde_json::{json, Value};

fn full_mount(device: &str) -> Value {
    json!({
        "device": device,
        "block_available": 1,
        "block_used": 2,
        "inode_available": 3,
        "inode_used": 4,
        "size_available": 5,
    })
}

#[test]
fn test_size_available_removed_device_kept() {
    let mut facts = object(json!({"mounts": [{"size_available": 1, "device": "/dev/sda1"}]}));
    clean_list(&mut facts, MOUNTS_KEY, &["size_available"]).unwrap();
    assert_eq!(facts["mounts"], json!([{"device": "/dev/sda1"}]));
}

#[test]
fn test_all_fixed_fields_removed() {
    let mut facts = object(json!({"mounts": [full_mount("/dev/sda1"), full_mount("/dev/sdb1")]}));
    clean_list(&mut facts, MOUNTS_KEY, MOUNT_FIELDS).unwrap();
    assert_eq!(
        facts["mounts"],
        json!([{"device": "/dev/sda1"}, {"device": "/dev/sdb1"}])
    );
}

#[test]
fn test_missing_size_available_is_fatal() {
    let mut broken = full_mount("/dev/sdb1");
    broken.as_object_mut().unwrap().remove("size_available");

    let err = clean_value(json!({"mounts": [full_mount("/dev/sda1"), broken]})).unwrap_err();
    match err {
        PruneError::MissingField {
            list_key,
            index,
            field,
        } => {
            assert_eq!(list_key, "mounts");
            assert_eq!(index, 1);
            assert_eq!(field, "size_available");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_absent_mounts_is_fatal() {
    let err = clean_value(json!({"hostname": "web01"})).unwrap_err();
    assert_eq!(err.to_string(), "List key not found: mounts");
}
