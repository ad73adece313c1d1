use thiserror::Error;

/// Everything that can go wrong when building or walking a [`Chain`](crate::Chain).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A text source could not produce any text. Reported by whatever reads the text, since a
    /// chain accepts any string.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Text was requested from a chain that was built without any words.
    #[error("invalid state: no words available to generate from")]
    InvalidState,
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(
            Error::InvalidInput("could not read data/eggs.txt".to_string()).to_string(),
            "invalid input: could not read data/eggs.txt"
        );
        assert_eq!(
            Error::InvalidState.to_string(),
            "invalid state: no words available to generate from"
        );
    }
}
