use std::borrow::Cow;

use crate::error::PayloadError;
use crate::event::escape::escape_double_quotes;

/// A single error event, ready to be rendered as the store JSON body.
///
/// `file` and `function` are taken as-is (they normally come from
/// `file!()` and the enclosing function path); only the message is escaped.
#[derive(Debug, Clone)]
pub struct EventPayload<'a> {
    pub file: &'a str,
    pub line: u32,
    pub function: &'a str,
    message: Cow<'a, str>,
}

impl<'a> EventPayload<'a> {
    pub fn new(
        file: &'a str,
        line: u32,
        function: &'a str,
        message: &'a str,
    ) -> Result<Self, PayloadError> {
        Ok(Self {
            file,
            line,
            function,
            message: escape_double_quotes(message)?,
        })
    }

    /// The message after quote escaping
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Renders the fixed single-frame event body
    pub fn to_json(&self) -> String {
        format!(
            concat!(
                "{{\"culprit\":\"{function}\"",
                ",\"stacktrace\":{{\"frames\":[",
                "{{\"filename\":\"{file}\"",
                ",\"function\":\"{function}\"",
                ",\"module\":\"{function}\"",
                ",\"lineno\":{line}}}]}}",
                ",\"message\":\"{message}\"}}"
            ),
            function = self.function,
            file = self.file,
            line = self.line,
            message = self.message,
        )
    }
}
