//! Whitespace-separated field reader shared by the text loaders.

use std::str::{FromStr, SplitWhitespace};

use lumen_math::Vec3;

use crate::error::{ParseError, ParseResult};

/// Cursor over the fields of one record line.
pub(crate) struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    pub fn new(line: &'a str) -> Self {
        Self {
            inner: line.split_whitespace(),
        }
    }

    /// Next raw field, failing with `MissingField` at end of line.
    pub fn word(&mut self, field: &'static str) -> ParseResult<&'a str> {
        self.inner.next().ok_or(ParseError::MissingField(field))
    }

    pub fn number<T: FromStr>(&mut self, field: &'static str) -> ParseResult<T> {
        let value = self.word(field)?;
        value.parse().map_err(|_| ParseError::InvalidNumber {
            field,
            value: value.to_string(),
        })
    }

    pub fn vec3(&mut self, field: &'static str) -> ParseResult<Vec3> {
        Ok(Vec3::new(
            self.number(field)?,
            self.number(field)?,
            self.number(field)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_read_fields_in_order() {
        let mut tokens = Tokens::new("  sphere 1 -2.5 3e1\tmetal ");
        assert_eq!(tokens.word("type").unwrap(), "sphere");
        assert_eq!(tokens.vec3("center").unwrap(), Vec3::new(1.0, -2.5, 30.0));
        assert_eq!(tokens.word("material").unwrap(), "metal");
        assert!(matches!(tokens.word("albedo"), Err(ParseError::MissingField("albedo"))));
    }

    #[test]
    fn test_tokens_report_missing_and_invalid() {
        let mut tokens = Tokens::new("4 abc");
        assert_eq!(tokens.number::<u32>("width").unwrap(), 4);
        assert!(matches!(
            tokens.number::<f32>("radius"),
            Err(ParseError::InvalidNumber { field: "radius", .. })
        ));
        assert!(matches!(
            tokens.number::<f32>("fuzz"),
            Err(ParseError::MissingField("fuzz"))
        ));
    }
}
