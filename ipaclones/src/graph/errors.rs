/// Error raised while loading an IPA clones dump.
///
/// Any malformed line aborts the build; no partial graph is ever returned.
#[derive(Debug)]
pub enum FormatError {
    /// The dump file could not be read.
    Io(std::io::Error),
    /// A line matched no known record layout (bad tag, field count or
    /// marker literal).
    UnrecognizedLine {
        /// Identity of the dump the line came from.
        origin: String,
        /// The offending line, verbatim.
        line: String,
    },
    /// The optimization field of a clone record held an unknown token.
    UnknownOptimization {
        /// Identity of the dump the record came from.
        origin: String,
        /// The unrecognized token.
        token: String,
    },
    /// A numeric field could not be parsed as an integer.
    InvalidInteger {
        /// Identity of the dump the record came from.
        origin: String,
        /// Which field failed to parse.
        field: &'static str,
        /// The offending line, verbatim.
        line: String,
    },
}

impl std::fmt::Display for FormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {e}"),
            Self::UnrecognizedLine { origin, line } => {
                write!(f, "unrecognized input line in IPA clones \"{origin}\": {line}")
            }
            Self::UnknownOptimization { origin, token } => {
                write!(f, "unrecognized optimization \"{token}\" in IPA clones \"{origin}\"")
            }
            Self::InvalidInteger {
                origin,
                field,
                line,
            } => {
                write!(f, "invalid {field} in IPA clones \"{origin}\": {line}")
            }
        }
    }
}

impl std::error::Error for FormatError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for FormatError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
