use internment::Intern;
use std::{
    cmp::Ordering,
    fmt::{self, Debug, Display, Formatter},
};

/// An object identifier such as `C1`, `P1` or `SFO`. Names are interned, so
/// they are cheap to copy, hash and compare.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Name(Intern<String>);

impl Name {
    pub fn new(name: &str) -> Self {
        Self(Intern::new(name.to_string()))
    }

    #[inline(always)]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<&str> for Name {
    fn from(value: &str) -> Self {
        Name::new(value)
    }
}

impl From<&String> for Name {
    fn from(value: &String) -> Self {
        Name::new(value)
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialOrd for Name {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Name {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl Display for Name {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Debug for Name {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
