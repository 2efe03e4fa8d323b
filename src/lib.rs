//! Line-oriented parser for `.ini` configs:
//! `[group]` headers, `key = value` parameters (values optionally `"quoted"`),
//! `;` comments and blank lines.
//!
//! Parse events are reported either to an [`IniHandler`](trait.IniHandler.html)
//! ([`IniParser::parse`](struct.IniParser.html#method.parse))
//! or pulled from an iterator ([`IniParser::events`](struct.IniParser.html#method.events)).
//! With the `map` feature, [`IniMap`](struct.IniMap.html) collects the parameters into a `<group>.<key>` map.

mod ini;

pub use ini::*;
