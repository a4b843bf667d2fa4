//! Placeholder for an OUT bind in `RETURNING ... INTO`.

use std::fmt;

/// Marks a bind position that receives the value of `column_name`.
///
/// Callers recognise it by type; two markers for the same column are not
/// considered equal.
#[derive(Debug, Clone)]
pub struct ReturningHelper {
    pub column_name: String,
}

impl ReturningHelper {
    pub fn new(column_name: impl Into<String>) -> Self {
        Self {
            column_name: column_name.into(),
        }
    }
}

impl fmt::Display for ReturningHelper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[object ReturningHelper:{}]", self.column_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let marker = ReturningHelper::new("my_col");
        assert_eq!(marker.column_name, "my_col");
        assert_eq!(marker.to_string(), "[object ReturningHelper:my_col]");
    }

    #[test]
    fn test_display_keeps_name_verbatim() {
        assert_eq!(
            format!("{}", ReturningHelper::new("Weird Name:1")),
            "[object ReturningHelper:Weird Name:1]"
        );
    }
}
