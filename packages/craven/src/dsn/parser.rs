use crate::dsn::{Dsn, ParsedDsn, Protocol};
use crate::error::{DsnError, DsnField, MAX_FIELD_LEN};

/// Sequential DSN parser.
///
/// Fields are extracted strictly left to right:
/// `protocol "://" public_key ":" private_key "@" host "/" path`,
/// where the last `/`-separated segment of the path is the project id.
pub struct DsnParser<'a> {
    input: &'a str,
    position: usize,
}

impl<'a> DsnParser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    /// Parses and validates the complete DSN
    pub fn parse(&mut self) -> Result<ParsedDsn, DsnError> {
        if self.input.is_empty() {
            return Ok(ParsedDsn::Empty);
        }

        // 1. Structural extraction
        let protocol = self.read_until(':', DsnField::Protocol)?;
        self.expect("://")?;

        let public_key = self.read_until(':', DsnField::PublicKey)?;
        self.expect(":")?;

        let private_key = self.read_until('@', DsnField::PrivateKey)?;
        self.expect("@")?;

        let host = self.read_until('/', DsnField::Host)?;

        let path = self.read_to_end(DsnField::Path)?;
        let (path_prefix, project_id) = split_project_id(path)?;

        // 2. Field validation, first failure wins
        let protocol = Protocol::from_scheme(protocol).ok_or(DsnError::UnknownProtocol)?;
        if public_key.is_empty() {
            return Err(DsnError::MissingPublicKey);
        }
        if private_key.is_empty() {
            return Err(DsnError::MissingPrivateKey);
        }
        if host.is_empty() {
            return Err(DsnError::MissingHost);
        }

        Ok(ParsedDsn::Configured(Dsn {
            protocol,
            public_key: public_key.to_string(),
            private_key: private_key.to_string(),
            host: host.to_string(),
            path_prefix: path_prefix.to_string(),
            project_id,
        }))
    }

    /// Reads up to (not including) `delimiter`.
    /// A missing delimiter is a syntax error, whatever the field length.
    fn read_until(&mut self, delimiter: char, field: DsnField) -> Result<&'a str, DsnError> {
        let rest = self.remaining();
        let end = rest.find(delimiter).ok_or(DsnError::SyntaxError)?;
        let value = &rest[..end];

        check_length(value, field)?;
        self.position += end;

        Ok(value)
    }

    fn read_to_end(&mut self, field: DsnField) -> Result<&'a str, DsnError> {
        let value = self.remaining();

        check_length(value, field)?;
        self.position = self.input.len();

        Ok(value)
    }

    /// Consumes `literal`, failing with a syntax error if it is not next
    fn expect(&mut self, literal: &str) -> Result<(), DsnError> {
        if !self.remaining().starts_with(literal) {
            return Err(DsnError::SyntaxError);
        }
        self.position += literal.len();
        Ok(())
    }

    fn remaining(&self) -> &'a str {
        &self.input[self.position..]
    }
}

fn check_length(value: &str, field: DsnField) -> Result<(), DsnError> {
    if value.chars().count() > MAX_FIELD_LEN {
        return Err(DsnError::FieldTooLong {
            field,
            max: MAX_FIELD_LEN,
        });
    }
    Ok(())
}

/// Splits `/a/b/42` into (`/a/b/`, 42)
fn split_project_id(path: &str) -> Result<(&str, u32), DsnError> {
    // The path always starts with '/'
    let last_slash = path.rfind('/').ok_or(DsnError::SyntaxError)?;
    let (prefix, segment) = path.split_at(last_slash + 1);

    if segment.is_empty() {
        return Err(DsnError::SyntaxError);
    }
    if !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DsnError::MissingProjectId);
    }

    let project_id = segment
        .parse::<u32>()
        .map_err(|_| DsnError::MissingProjectId)?;

    Ok((prefix, project_id))
}
