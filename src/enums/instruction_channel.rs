use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

/// Where the JSON-mode instruction is placed in the outgoing model request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstructionChannel {
    /// Sent through the dedicated `systemInstruction` field.
    #[default]
    SystemInstruction,
    /// Sent as a leading user turn ahead of the prompt.
    PrependedTurn,
}

impl InstructionChannel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SystemInstruction => "system",
            Self::PrependedTurn => "prepend",
        }
    }
}

impl fmt::Display for InstructionChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InstructionChannel {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "system" | "system_instruction" => Ok(Self::SystemInstruction),
            "prepend" | "prepended_turn" => Ok(Self::PrependedTurn),
            other => Err(format!("unknown instruction channel '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_spellings() {
        assert_eq!("system".parse::<InstructionChannel>(), Ok(InstructionChannel::SystemInstruction));
        assert_eq!(" Prepended_Turn ".parse::<InstructionChannel>(), Ok(InstructionChannel::PrependedTurn));
        assert!("turn".parse::<InstructionChannel>().is_err());
    }

    #[test]
    fn display_round_trips() {
        for channel in [InstructionChannel::SystemInstruction, InstructionChannel::PrependedTurn] {
            assert_eq!(channel.to_string().parse::<InstructionChannel>(), Ok(channel));
        }
    }
}
