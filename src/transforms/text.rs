use crate::error::Result;
use crate::string_utils::{to_upper, trim_whitespace, unbracket_tag};
use crate::transforms::Transform;

/// Removes leading and trailing whitespace
#[derive(Debug, Default)]
pub struct Trim;

impl Trim {
    pub fn new() -> Self {
        Self
    }
}

impl Transform for Trim {
    fn transform(&self, text: &str) -> Result<String> {
        Ok(trim_whitespace(text).to_string())
    }
}

/// Converts the text to upper case
#[derive(Debug, Default)]
pub struct Upper;

impl Upper {
    pub fn new() -> Self {
        Self
    }
}

impl Transform for Upper {
    fn transform(&self, text: &str) -> Result<String> {
        Ok(to_upper(text))
    }
}

/// Strips angle brackets, turning `<div>` into `div`
#[derive(Debug, Default)]
pub struct Unbracket;

impl Unbracket {
    pub fn new() -> Self {
        Self
    }
}

impl Transform for Unbracket {
    fn transform(&self, text: &str) -> Result<String> {
        Ok(unbracket_tag(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim() {
        assert_eq!(Trim::new().transform("\t cat \n").unwrap(), "cat");
    }

    #[test]
    fn test_upper() {
        assert_eq!(Upper::new().transform("abc é").unwrap(), "ABC É");
    }

    #[test]
    fn test_unbracket() {
        assert_eq!(Unbracket::new().transform("<a>").unwrap(), "a");
    }
}
