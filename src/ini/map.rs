use {
    crate::*,
    std::{
        collections::{btree_map, BTreeMap},
        io::BufRead,
    },
};

/// Flat string map populated from an `.ini` config.
///
/// Parameters are keyed by `<group>.<key>` (`.<key>` for parameters before the first group header);
/// later duplicate keys overwrite earlier ones.
/// Syntax errors are collected in source order and never stop the parser.
#[derive(Clone, Default, Debug)]
pub struct IniMap {
    map: BTreeMap<String, String>,
    errors: Vec<IniError>,
}

impl IniMap {
    /// Creates a new empty map.
    pub fn new() -> Self {
        Default::default()
    }

    /// Creates a new map from the `.ini` config `string`.
    /// Syntax errors, if any, are available via [`errors`](#method.errors).
    pub fn from_ini(string: &str) -> Self {
        let mut map = Self::new();

        // The map never rejects parameters and a `&str` source is always valid UTF-8.
        let result = map.load(IniParser::new(string));
        debug_assert!(result.is_ok());

        map
    }

    /// Creates a new map from the `.ini` config read from the `reader`.
    ///
    /// # Errors
    ///
    /// Returns [`Io`](enum.IniParseError.html#variant.Io) if a line could not be read.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, IniParseError> {
        let mut map = Self::new();
        map.load(IniParser::from_reader(reader))?;
        Ok(map)
    }

    /// Runs the `parser`, adding the parameters / errors to the map.
    ///
    /// # Errors
    ///
    /// Returns [`Io`](enum.IniParseError.html#variant.Io) if a line could not be read.
    pub fn load<R: BufRead>(&mut self, parser: IniParser<R>) -> Result<(), IniParseError> {
        parser.parse(self).map(|_| ())
    }

    /// Returns the value for the `<group>.<key>` `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.map.get(key).map(String::as_str)
    }

    /// Returns the value for the `<group>.<key>` `key` parsed as an integer,
    /// or `None` if the key is missing or its value is not an integer.
    pub fn get_int(&self, key: &str) -> Option<i64> {
        self.get(key)?.parse().ok()
    }

    /// Returns the value for the `<group>.<key>` `key` parsed as a float,
    /// or `None` if the key is missing or its value is not a number.
    pub fn get_float(&self, key: &str) -> Option<f64> {
        self.get(key)?.parse().ok()
    }

    /// Returns the value for the `<group>.<key>` `key` parsed as a boolean
    /// (`true` / `false`, `on` / `off`, `yes` / `no`, `1` / `0`, case-insensitive),
    /// or `None` if the key is missing or its value is not a boolean.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        let value = self.get(key)?;

        const TRUE: [&str; 4] = ["true", "on", "yes", "1"];
        const FALSE: [&str; 4] = ["false", "off", "no", "0"];

        if TRUE.iter().any(|t| value.eq_ignore_ascii_case(t)) {
            Some(true)
        } else if FALSE.iter().any(|f| value.eq_ignore_ascii_case(f)) {
            Some(false)
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterates over the `(<group>.<key>, value)` pairs, ordered by key.
    pub fn iter(&self) -> IniMapIter<'_> {
        IniMapIter(self.map.iter())
    }

    /// Returns the syntax errors encountered while parsing, in source order.
    pub fn errors(&self) -> &[IniError] {
        &self.errors
    }

    /// Clears the parameters and errors.
    pub fn reset(&mut self) {
        self.map.clear();
        self.errors.clear();
    }
}

impl IniHandler for IniMap {
    fn on_error(&mut self, line: u32, error: IniErrorKind) -> bool {
        self.errors.push(IniError { line, error });
        true
    }

    fn on_parameter(&mut self, group: &str, key: &str, value: &str) -> bool {
        self.map.insert(format!("{}.{}", group, key), value.into());
        true
    }
}

/// Iterator over the `(<group>.<key>, value)` pairs of an [`IniMap`](struct.IniMap.html).
pub struct IniMapIter<'m>(btree_map::Iter<'m, String, String>);

impl<'m> Iterator for IniMapIter<'m> {
    type Item = (&'m str, &'m str);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<'m> IntoIterator for &'m IniMap {
    type Item = (&'m str, &'m str);
    type IntoIter = IniMapIter<'m>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
