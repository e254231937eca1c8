//! Shared fixtures

use serde_json::{json, Map, Value};
use std::path::{Path, PathBuf};

/// A realistic `ansible_facts` dump taken at one point in time.
pub fn host_facts(uptime: u64, epoch: &str) -> Value {
    json!({
        "_facts_gathered": true,
        "ansible_local": {"app": {"version": "1.2.3"}},
        "architecture": "x86_64",
        "date_time": {
            "date": "2020-09-13",
            "day": "13",
            "epoch": epoch,
            "hour": "12",
            "iso8601": "2020-09-13T12:26:40Z",
            "iso8601_basic": "20200913T122640000000",
            "iso8601_basic_short": "20200913T122640",
            "iso8601_micro": "2020-09-13T12:26:40.000000Z",
            "minute": "26",
            "month": "09",
            "second": "40",
            "time": "12:26:40",
            "tz": "UTC",
            "tz_offset": "+0000",
            "weekday": "Sunday",
            "weekday_number": "0",
            "weeknumber": "36",
            "year": "2020"
        },
        "env": {
            "HOME": "/root",
            "LANG": "C.UTF-8",
            "PWD": "/home/admin",
            "SUDO_COMMAND": "/bin/sh -c echo BECOME-SUCCESS",
            "SUDO_GID": "1000",
            "SUDO_UID": "1000",
            "SUDO_USER": "admin"
        },
        "hostname": "web01",
        "memfree_mb": 812,
        "memory_mb": {
            "nocache": {"free": 1500, "used": 500},
            "real": {"free": 812, "total": 2000, "used": 1188},
            "swap": {"cached": 0, "free": 1023, "total": 1023, "used": 0}
        },
        "memtotal_mb": 2000,
        "mounts": [
            {
                "block_available": 1000,
                "block_size": 4096,
                "block_total": 2000,
                "block_used": 1000,
                "device": "/dev/sda1",
                "fstype": "ext4",
                "inode_available": 500,
                "inode_total": 1000,
                "inode_used": 500,
                "mount": "/",
                "options": "rw,relatime",
                "size_available": 4096000,
                "size_total": 8192000,
                "uuid": "0d3c1e4b"
            },
            {
                "block_available": 10,
                "block_size": 1024,
                "block_total": 100,
                "block_used": 90,
                "device": "/dev/sda2",
                "fstype": "ext2",
                "inode_available": 20,
                "inode_total": 30,
                "inode_used": 10,
                "mount": "/boot",
                "options": "rw",
                "size_available": 10240,
                "size_total": 102400,
                "uuid": "9a8b7c6d"
            }
        ],
        "uptime_seconds": uptime
    })
}

pub fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {}", other),
    }
}

pub fn write_json(dir: &Path, name: &str, value: &Value) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, serde_json::to_string_pretty(value).unwrap()).unwrap();
    path
}
