use std::fmt;

/// Hides its contents from `Debug` output.
///
/// Connection strings carry credentials, so anything holding one is wrapped in
/// this type before it can end up in a log line.
#[derive(Clone, PartialEq, Eq)]
pub struct Redacted<T>(T);

impl<T> From<T> for Redacted<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T> std::ops::Deref for Redacted<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> fmt::Debug for Redacted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<redacted>")
    }
}
