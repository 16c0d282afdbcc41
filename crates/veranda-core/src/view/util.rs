//! Attribute handling helpers shared by rendering and mounting.

/// HTML boolean attributes that should only be set when the value is truthy.
///
/// The presence of a boolean attribute alone makes it active, regardless of
/// its value: `<button disabled="false">` is still disabled. Rendering must
/// therefore drop the attribute entirely for falsy values.
pub const BOOLEAN_ATTRS: &[&str] = &[
	"allowfullscreen",
	"async",
	"autofocus",
	"autoplay",
	"checked",
	"controls",
	"default",
	"defer",
	"disabled",
	"formnovalidate",
	"hidden",
	"inert",
	"ismap",
	"itemscope",
	"loop",
	"multiple",
	"muted",
	"nomodule",
	"novalidate",
	"open",
	"playsinline",
	"readonly",
	"required",
	"reversed",
	"selected",
	"truespeed",
];

/// Checks if a boolean attribute value should result in the attribute being set.
///
/// Empty strings, `"false"` and `"0"` are falsy; everything else is truthy.
pub fn is_boolean_attr_truthy(value: &str) -> bool {
	!value.is_empty() && value != "false" && value != "0"
}
