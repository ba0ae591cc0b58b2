use crate::conf::overlay::{OverlaySource, overlay};
use pretty_assertions::assert_eq;
use std::collections::HashMap;

/// Source answering only with the exact type it stores.
#[derive(Default)]
struct MapSource {
    strings: HashMap<&'static str, &'static str>,
    integers: HashMap<&'static str, i64>,
    booleans: HashMap<&'static str, bool>,
}

impl OverlaySource for MapSource {
    fn string(&self, key: &str) -> Option<String> {
        self.strings.get(key).map(|s| s.to_string())
    }

    fn integer(&self, key: &str) -> Option<i64> {
        self.integers.get(key).copied()
    }

    fn boolean(&self, key: &str) -> Option<bool> {
        self.booleans.get(key).copied()
    }
}

#[test]
fn overlay_writes_present_values_of_each_kind() {
    // Arrange
    let mut source = MapSource::default();
    source.strings.insert("addr", ":8080");
    source.integers.insert("port", 8443);
    source.booleans.insert("flag", true);

    let mut addr = String::from(":5912");
    let mut port = 0i64;
    let mut flag = false;

    // Act
    let wrote = [
        overlay(&source, "addr", &mut addr),
        overlay(&source, "port", &mut port),
        overlay(&source, "flag", &mut flag),
    ];

    // Assert
    assert_eq!(wrote, [true, true, true]);
    assert_eq!(addr, ":8080");
    assert_eq!(port, 8443);
    assert!(flag);
}

#[test]
fn overlay_is_noop_when_key_is_absent() {
    // Arrange
    let source = MapSource::default();
    let mut addr = String::from(":5912");
    let mut local_auth = true;

    // Act
    let wrote_addr = overlay(&source, "addr", &mut addr);
    let wrote_auth = overlay(&source, "local-auth", &mut local_auth);

    // Assert
    assert!(!wrote_addr);
    assert!(!wrote_auth);
    assert_eq!(addr, ":5912");
    assert!(local_auth);
}

#[test]
fn overlay_is_noop_on_type_mismatch() {
    // Arrange
    let mut source = MapSource::default();
    source.strings.insert("local-auth", "maybe");
    let mut local_auth = true;

    // Act
    let wrote = overlay(&source, "local-auth", &mut local_auth);

    // Assert
    assert!(!wrote);
    assert!(local_auth);
}
