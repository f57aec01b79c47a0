use lazy_static::lazy_static;
use std::collections::HashMap;

lazy_static! {
    // Single-character signatures, the D-Bus basic types.
    static ref SINGLE_SIG_MAP: HashMap<&'static str, &'static str> = HashMap::from([
        ("y", "u8"),
        ("b", "bool"),
        ("n", "i16"),
        ("q", "u16"),
        ("i", "i32"),
        ("u", "u32"),
        ("x", "i64"),
        ("t", "u64"),
        ("d", "f64"),
        ("s", "String"),
        ("o", "zvariant::OwnedObjectPath"),
        ("v", "zvariant::OwnedValue"),
        ("h", "zvariant::OwnedFd"),
    ]);

    // Arrays of basic types.
    static ref DOUBLE_SIG_MAP: HashMap<&'static str, &'static str> = HashMap::from([
        ("ay", "Vec<u8>"),
        ("ai", "Vec<i32>"),
        ("au", "Vec<u32>"),
        ("at", "Vec<u64>"),
        ("as", "Vec<String>"),
        ("ao", "Vec<zvariant::OwnedObjectPath>"),
    ]);

    // Container shapes that show up in real interfaces, matched verbatim.
    // No structural parsing of nested container syntax happens here.
    static ref COMPLEX_SIG_MAP: HashMap<&'static str, &'static str> = HashMap::from([
        ("a{ss}", "HashMap<String, String>"),
        ("a{sv}", "HashMap<String, zvariant::OwnedValue>"),
        ("aa{ss}", "Vec<HashMap<String, String>>"),
        ("a(sa{sv})", "HashMap<String, HashMap<String, zvariant::OwnedValue>>"),
    ]);
}

/// Type name used for any signature outside the three tables.
pub const FALLBACK_TYPE: &str = "zvariant::OwnedValue";

/// Resolves a D-Bus type signature to the Rust type name the generated
/// bindings use for it.
///
/// Lookups are exact, case-sensitive string matches, tried in order of
/// signature complexity; the first hit wins. A signature absent from every
/// table resolves to [`FALLBACK_TYPE`] instead of failing, so callers never
/// have to handle an error here.
pub fn map_signature(sig: &str) -> &'static str {
    if let Some(&ty) = SINGLE_SIG_MAP.get(sig) {
        return ty;
    }
    if let Some(&ty) = DOUBLE_SIG_MAP.get(sig) {
        return ty;
    }
    if let Some(&ty) = COMPLEX_SIG_MAP.get(sig) {
        return ty;
    }
    FALLBACK_TYPE
}
