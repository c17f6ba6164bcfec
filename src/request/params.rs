//! Sources of request parameters.

use std::{
    borrow::Borrow,
    collections::{BTreeMap, HashMap},
    hash::{BuildHasher, Hash},
};

use bitflags::bitflags;

/// A flat, string keyed source of request parameters.
pub trait Params {
    /// Return the value for `key`, if present.
    fn get(&self, key: &str) -> Option<&str>;
}

impl<P: Params + ?Sized> Params for &P {
    fn get(&self, key: &str) -> Option<&str> {
        (**self).get(key)
    }
}

impl<K, V, S> Params for HashMap<K, V, S>
where
    K: Borrow<str> + Hash + Eq,
    V: AsRef<str>,
    S: BuildHasher,
{
    fn get(&self, key: &str) -> Option<&str> {
        HashMap::get(self, key).map(|v| v.as_ref())
    }
}

impl<K, V> Params for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
    V: AsRef<str>,
{
    fn get(&self, key: &str) -> Option<&str> {
        BTreeMap::get(self, key).map(|v| v.as_ref())
    }
}

/// Parameters decoded from an `application/x-www-form-urlencoded` query
/// string. When a key is repeated the first value is used.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Decode a query string. Anything up to and including the first `?` is
    /// ignored, so a full URL can be passed as well.
    pub fn parse(query: &str) -> Self {
        let query = query.split_once('?').map_or(query, |(_, query)| query);
        let pairs = form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect();
        Self { pairs }
    }

    /// Returns true if no parameters were decoded.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl Params for QueryParams {
    fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

bitflags! {
    /// The recognized keys present in a set of parameters.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Keys: u8 {
        /// `format`
        const FORMAT = 1 << 0;
        /// `formatValue`
        const FORMAT_VALUE = 1 << 1;
        /// `size`
        const SIZE = 1 << 2;
        /// `download`
        const DOWNLOAD = 1 << 3;
        /// `extension`
        const EXTENSION = 1 << 4;
    }
}

impl Keys {
    /// The parameter name of every recognized key.
    pub const NAMES: [(Keys, &'static str); 5] = [
        (Keys::FORMAT, "format"),
        (Keys::FORMAT_VALUE, "formatValue"),
        (Keys::SIZE, "size"),
        (Keys::DOWNLOAD, "download"),
        (Keys::EXTENSION, "extension"),
    ];

    /// Collect the recognized keys present in `params`, including keys with
    /// an empty value.
    pub fn present_in(params: &impl Params) -> Self {
        Self::NAMES
            .iter()
            .filter(|(_, name)| params.get(name).is_some())
            .fold(Keys::empty(), |keys, (key, _)| keys | *key)
    }
}
