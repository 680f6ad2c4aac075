use std::ops::Deref;
use std::str::FromStr;

use smallvec::SmallVec;

/// Path parameters captured by a dynamic route, in capture order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Params {
    buf: SmallVec<[(Box<str>, String); 4]>,
}

impl Params {
    pub fn new() -> Self {
        Self {
            buf: SmallVec::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.buf
            .iter()
            .find_map(|(k, v)| if &**k == name { Some(v.as_str()) } else { None })
    }

    pub fn parse<T: FromStr>(&self, name: &str) -> Option<Result<T, T::Err>> {
        self.get(name).map(T::from_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.buf.iter().map(|(k, v)| (&**k, v.as_str()))
    }

    // a repeated name keeps the last value, at its first position
    pub(super) fn insert(&mut self, name: &str, value: &str) {
        match self.buf.iter_mut().find(|(k, _)| &**k == name) {
            Some((_, v)) => {
                v.clear();
                v.push_str(value);
            }
            None => self.buf.push((name.into(), value.to_owned())),
        }
    }
}

impl Deref for Params {
    type Target = [(Box<str>, String)];
    fn deref(&self) -> &Self::Target {
        &self.buf
    }
}

impl IntoIterator for Params {
    type Item = (Box<str>, String);
    type IntoIter = smallvec::IntoIter<[(Box<str>, String); 4]>;
    fn into_iter(self) -> Self::IntoIter {
        self.buf.into_iter()
    }
}
