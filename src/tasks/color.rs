use std::fmt;
use std::borrow::Borrow;
use std::marker::PhantomData;

use ansi_term::Style;

// hack for type inference issues
pub fn paint<T>(style: Style, value: T) -> Wrapper<T, T>
{ gpaint(style, value) }

pub fn gpaint<U, T>(style: Style, value: U) -> Wrapper<U, T>
{ Wrapper { style, value, _target: PhantomData } }

/// A wrapper for colorizing the `Display` of a value.
///
/// It has two parameters so that it can `borrow()` `U` as `T` when it wants to.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Wrapper<U, T=U> {
    style: Style,
    value: U,
    _target: PhantomData<T>,
}

impl<U, T> fmt::Display for Wrapper<U, T>
where
    U: Borrow<T>,
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.style.prefix())?;
        T::fmt(self.value.borrow(), f)?;
        write!(f, "{}", self.style.suffix())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ansi_term::Colour;

    #[test]
    fn plain_style_adds_nothing() {
        assert_eq!(paint(Style::default(), 42).to_string(), "42");
    }

    #[test]
    fn colored_value_is_wrapped() {
        let s = gpaint::<_, &str>(Colour::Green.bold(), "ok").to_string();
        assert!(s.starts_with("\x1b["), "{:?}", s);
        assert!(s.contains("ok"));
        assert!(s.ends_with("\x1b[0m"), "{:?}", s);
    }
}
