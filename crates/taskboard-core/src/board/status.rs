//! Status banner state

/// The single message shown above the board; a new one replaces the old
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Status {
    #[default]
    None,
    Error(String),
    Success(String),
}

impl Status {
    pub fn error(text: impl Into<String>) -> Self {
        Status::Error(text.into())
    }

    pub fn success(text: impl Into<String>) -> Self {
        Status::Success(text.into())
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Status::None => None,
            Status::Error(text) | Status::Success(text) => Some(text.as_str()),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Status::Error(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_and_kind() {
        assert_eq!(Status::None.text(), None);
        assert!(Status::error("Delete failed.").is_error());
        assert_eq!(Status::success("Task created!").text(), Some("Task created!"));
        assert!(!Status::success("Task created!").is_error());
    }
}
