use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-assigned record identifier.
///
/// The backend owns the identifier space, so it is kept opaque: whatever JSON
/// kind the server sends (number or string) is what goes back on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Id {
    Number(i64),
    Text(String),
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Id::Number(n) => write!(f, "{n}"),
            Id::Text(s) => f.write_str(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_json_kind() {
        let numeric: Id = serde_json::from_str("7").unwrap();
        let textual: Id = serde_json::from_str("\"a-7\"").unwrap();

        assert_eq!(numeric, Id::Number(7));
        assert_eq!(textual, Id::Text("a-7".to_string()));
        assert_eq!(serde_json::to_string(&numeric).unwrap(), "7");
        assert_eq!(serde_json::to_string(&textual).unwrap(), "\"a-7\"");
    }
}
