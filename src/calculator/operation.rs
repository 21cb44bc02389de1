//! Binary operators understood by the calculator.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A pending binary operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Operation {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "×")]
    Multiply,
    #[serde(rename = "÷")]
    Divide,
}

impl Operation {
    /// The display symbol for this operator.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operation {
    type Err = Error;

    /// Parse a display symbol, accepting `*` and `/` as keyboard aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Self::Add),
            "-" => Ok(Self::Subtract),
            "×" | "*" => Ok(Self::Multiply),
            "÷" | "/" => Ok(Self::Divide),
            other => Err(Error::UnknownOperation(other.to_string())),
        }
    }
}
