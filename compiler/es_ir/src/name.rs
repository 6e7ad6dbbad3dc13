//! Shared identifier text.

use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

/// An identifier, operator or method name.
///
/// Names are produced by the lexer and flow unchanged into terms, method
/// tables and field tables, so cloning must be cheap: the text lives in an
/// `Rc<str>`. Lookups in tables keyed by `Name` accept a plain `&str`
/// through the [`Borrow`] impl.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(Rc<str>);

impl Name {
    #[inline]
    pub fn new(text: &str) -> Self {
        Name(Rc::from(text))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The setter name paired with this property name (`x` -> `x=`).
    pub fn setter(&self) -> Name {
        let mut text = String::with_capacity(self.0.len() + 1);
        text.push_str(&self.0);
        text.push('=');
        Name::from(text)
    }
}

impl Deref for Name {
    type Target = str;

    #[inline]
    fn deref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Name {
    #[inline]
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Name {
    #[inline]
    fn from(text: &str) -> Self {
        Name::new(text)
    }
}

impl From<String> for Name {
    #[inline]
    fn from(text: String) -> Self {
        Name(Rc::from(text))
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", &*self.0)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
