//! Conditional "set only if provided" writes shared by every layer.
//!
//! A layer exposes its values through [`OverlaySource`]. [`overlay`] writes a
//! destination slot only when the source answers with a value of the slot's
//! type, so an absent or mistyped key at any layer leaves earlier layers intact.

/// A layer that can answer typed lookups by key.
///
/// Each lookup returns `None` when the layer has no value for `key` or when the
/// value cannot be read as the requested type.
pub trait OverlaySource {
    fn string(&self, key: &str) -> Option<String>;
    fn integer(&self, key: &str) -> Option<i64>;
    fn boolean(&self, key: &str) -> Option<bool>;
}

/// Value kinds a layer can overlay: strings, integers and booleans.
pub trait OverlayValue: Sized + sealed::Sealed {
    fn lookup<S: OverlaySource + ?Sized>(source: &S, key: &str) -> Option<Self>;
}

impl OverlayValue for String {
    fn lookup<S: OverlaySource + ?Sized>(source: &S, key: &str) -> Option<Self> {
        source.string(key)
    }
}

impl OverlayValue for i64 {
    fn lookup<S: OverlaySource + ?Sized>(source: &S, key: &str) -> Option<Self> {
        source.integer(key)
    }
}

impl OverlayValue for bool {
    fn lookup<S: OverlaySource + ?Sized>(source: &S, key: &str) -> Option<Self> {
        source.boolean(key)
    }
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for String {}
    impl Sealed for i64 {}
    impl Sealed for bool {}
}

/// Overwrites `slot` with the source's value for `key`, if it has one.
///
/// Returns whether the slot was written.
pub fn overlay<S, T>(source: &S, key: &str, slot: &mut T) -> bool
where
    S: OverlaySource + ?Sized,
    T: OverlayValue,
{
    match T::lookup(source, key) {
        Some(value) => {
            *slot = value;
            true
        }
        None => false,
    }
}
