/// ## Keyword spellings
///
/// The grammar is fixed but the words spelling it are not. Each `Dialect`
/// maps every `Word` and `Operator` to exactly one distinct token.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Word {
    If,
    Then,
    Else,
    EndIf,
    While,
    Do,
    EndWhile,
    Assign,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Plus,
    Minus,
    Multiply,
    Less,
    Greater,
}

impl Word {
    pub const ALL: [Word; 8] = [
        Word::If,
        Word::Then,
        Word::Else,
        Word::EndIf,
        Word::While,
        Word::Do,
        Word::EndWhile,
        Word::Assign,
    ];
}

impl Operator {
    pub const ALL: [Operator; 5] = [
        Operator::Plus,
        Operator::Minus,
        Operator::Multiply,
        Operator::Less,
        Operator::Greater,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    Doggo,
    English,
}

impl Default for Dialect {
    fn default() -> Dialect {
        Dialect::Doggo
    }
}

impl Dialect {
    pub fn word(self, word: Word) -> &'static str {
        use Word::*;
        match self {
            Dialect::Doggo => match word {
                If => "RUF?",
                Then => "VUH",
                Else => "ROWH",
                EndIf => "ARRUF",
                While => "GRRR",
                Do => "BOW",
                EndWhile => "BORF",
                Assign => "AWOO",
            },
            Dialect::English => match word {
                If => "IF",
                Then => "THEN",
                Else => "ELSE",
                EndIf => "ENDIF",
                While => "WHILE",
                Do => "DO",
                EndWhile => "ENDWHILE",
                Assign => "ASSIGN",
            },
        }
    }

    pub fn operator_str(self, op: Operator) -> &'static str {
        use Operator::*;
        match self {
            Dialect::Doggo => match op {
                Plus => "WOOF",
                Minus => "BARK",
                Multiply => "ARF",
                Less => "YIP",
                Greater => "YAP",
            },
            Dialect::English => match op {
                Plus => "+",
                Minus => "-",
                Multiply => "*",
                Less => "<",
                Greater => ">",
            },
        }
    }

    pub fn operator(self, s: &str) -> Option<Operator> {
        Operator::ALL
            .iter()
            .copied()
            .find(|op| self.operator_str(*op) == s)
    }

    pub fn is_reserved(self, s: &str) -> bool {
        Word::ALL.iter().any(|w| self.word(*w) == s) || self.operator(s).is_some()
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Dialect::Doggo => write!(f, "doggo"),
            Dialect::English => write!(f, "english"),
        }
    }
}

impl std::str::FromStr for Dialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Dialect, String> {
        match s.to_ascii_lowercase().as_str() {
            "doggo" => Ok(Dialect::Doggo),
            "english" => Ok(Dialect::English),
            _ => Err(format!("unknown dialect '{}' (expected doggo or english)", s)),
        }
    }
}
