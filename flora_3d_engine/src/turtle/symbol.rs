//! Command-string symbols accepted by the plant turtle.

/// Kind of a command-string symbol.
///
/// One concrete turtle, one symbol enum: the geometry symbols select a
/// primitive from the library, the others drive the turtle transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    /// Deploy the stem primitive, create a bone, advance the turtle (`S`)
    Stem,
    /// Deploy the leaf primitive riding the latest bone (`L`)
    Leaf,
    /// Deploy the flower primitive riding the latest bone (`F`)
    Flower,
    /// Tilt the turtle left about its local lateral axis (`-`)
    TiltLeft,
    /// Tilt the turtle right about its local lateral axis (`+`)
    TiltRight,
    /// Save the turtle transform on the stack (`[`)
    Push,
    /// Restore the most recently saved transform (`]`)
    Pop,
}

impl Symbol {
    /// Parse a command character. Returns None for characters outside the
    /// accepted alphabet.
    pub fn from_char(c: char) -> Option<Symbol> {
        match c {
            'S' => Some(Symbol::Stem),
            'L' => Some(Symbol::Leaf),
            'F' => Some(Symbol::Flower),
            '-' => Some(Symbol::TiltLeft),
            '+' => Some(Symbol::TiltRight),
            '[' => Some(Symbol::Push),
            ']' => Some(Symbol::Pop),
            _ => None,
        }
    }

    /// The character this symbol is written as.
    pub fn to_char(self) -> char {
        match self {
            Symbol::Stem => 'S',
            Symbol::Leaf => 'L',
            Symbol::Flower => 'F',
            Symbol::TiltLeft => '-',
            Symbol::TiltRight => '+',
            Symbol::Push => '[',
            Symbol::Pop => ']',
        }
    }

    /// Whether this symbol deploys a primitive from the library.
    pub fn is_geometry(self) -> bool {
        matches!(self, Symbol::Stem | Symbol::Leaf | Symbol::Flower)
    }
}

#[cfg(test)]
#[path = "symbol_tests.rs"]
mod tests;
