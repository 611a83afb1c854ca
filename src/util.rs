// SPDX-FileCopyrightText: 2026 Tim Quelch <tim@tquelch.com>
//
// SPDX-License-Identifier: GPL-3.0-only

pub fn pascal_case(token: impl AsRef<str>) -> String {
    token
        .as_ref()
        .split('_')
        .filter(|part| !part.is_empty())
        .map(capitalise)
        .collect()
}

pub fn camel_case(token: impl AsRef<str>) -> String {
    let pascal = pascal_case(token);
    let mut chars = pascal.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Insert a string field only when the provider actually returned a value,
/// so absent SDK options read as absent wire fields.
pub fn insert_str(
    map: &mut serde_json::Map<String, serde_json::Value>,
    field: &str,
    value: Option<impl Into<String>>,
) {
    if let Some(value) = value {
        map.insert(field.to_owned(), serde_json::Value::String(value.into()));
    }
}

fn capitalise(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
