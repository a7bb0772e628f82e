//! Translation of stored input values into Solidity literals.

/// Engine flag telling the config engine to leave a numeric field untouched.
pub const KEEP_CURRENT: &str = "EngineFlags.KEEP_CURRENT";

/// Engine flag telling the config engine to leave a string field untouched.
pub const KEEP_CURRENT_STRING: &str = "EngineFlags.KEEP_CURRENT_STRING";

/// Numbers are rendered as typed; `_` separators are valid Solidity.
pub fn number_or_keep_current(value: &str) -> String {
    if value.is_empty() {
        KEEP_CURRENT.to_string()
    } else {
        value.to_string()
    }
}

/// Convert a human percent into basis points with a `_` before the two
/// decimal places (`10.64` → `10_64`, `6` → `6_00`).
pub fn percent_to_sol(value: &str) -> String {
    let (int, frac) = value.split_once('.').unwrap_or((value, ""));
    format!("{}_{:0<2}", int, frac)
}

pub fn percent_or_keep_current(value: &str) -> String {
    if value.is_empty() {
        KEEP_CURRENT.to_string()
    } else {
        percent_to_sol(value)
    }
}

/// Single quoted string literal.
pub fn string_literal(value: &str) -> String {
    format!("'{}'", value.replace('\\', "\\\\").replace('\'', "\\'"))
}

pub fn string_or_keep_current(value: &str) -> String {
    if value.is_empty() {
        KEEP_CURRENT_STRING.to_string()
    } else {
        string_literal(value)
    }
}

/// `Type({ field: value, ... })` with fields on their own lines, closing
/// brace at `indent`.
pub fn struct_literal(ty: &str, fields: &[(&str, String)], indent: usize) -> String {
    let pad = " ".repeat(indent);
    let mut out = format!("{}({{\n", ty);
    for (ix, (name, value)) in fields.iter().enumerate() {
        let sep = if ix + 1 < fields.len() { "," } else { "" };
        out.push_str(&format!("{}  {}: {}{}\n", pad, name, value, sep));
    }
    out.push_str(&format!("{}}})", pad));
    out
}

/// A `public pure override` function that allocates an array of `element`,
/// fills it with `items` and returns it. Zero items still render a
/// complete function returning an empty array.
pub fn array_function(name: &str, element: &str, var: &str, items: &[String]) -> String {
    let mut out = format!(
        "  function {}() public pure override returns ({}[] memory) {{\n",
        name, element
    );
    out.push_str(&format!(
        "    {}[] memory {} = new {}[]({});\n\n",
        element,
        var,
        element,
        items.len()
    ));
    for (ix, item) in items.iter().enumerate() {
        out.push_str(&format!("    {}[{}] = {};\n\n", var, ix, item));
    }
    out.push_str(&format!("    return {};\n  }}", var));
    out
}
