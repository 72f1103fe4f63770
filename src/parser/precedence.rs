use std::collections::HashMap;

/// Precedence reported for anything that cannot act as an infix operator.
pub const NOT_AN_OPERATOR: i32 = -1;

/// Operator precedence configuration.
///
/// Maps a punctuation character to a positive binding strength. The table
/// is owned by the embedding application and only borrowed by the parser,
/// so the usable operator set is decided entirely outside the grammar.
/// Absent entries and non-positive strengths mean "not an infix operator".
#[derive(Debug, Clone, Default)]
pub struct PrecedenceTable {
    strengths: HashMap<char, i32>,
}

impl PrecedenceTable {
    pub fn new() -> PrecedenceTable {
        PrecedenceTable {
            strengths: HashMap::new(),
        }
    }

    /// Registers `op` with the given binding strength.
    pub fn set(&mut self, op: char, strength: i32) {
        self.strengths.insert(op, strength);
    }

    /// Looks up the precedence of `op`, or [`NOT_AN_OPERATOR`].
    ///
    /// Non-ASCII characters are never operators, whatever the table says.
    pub fn precedence(&self, op: char) -> i32 {
        if !op.is_ascii() {
            return NOT_AN_OPERATOR;
        }

        match self.strengths.get(&op) {
            Some(&strength) if strength > 0 => strength,
            _ => NOT_AN_OPERATOR,
        }
    }
}

impl FromIterator<(char, i32)> for PrecedenceTable {
    fn from_iter<T: IntoIterator<Item = (char, i32)>>(iter: T) -> Self {
        PrecedenceTable {
            strengths: iter.into_iter().collect(),
        }
    }
}
