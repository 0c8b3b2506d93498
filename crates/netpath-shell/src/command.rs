//! Tokenizing one line of interactive input into a command

use netpath_core::Status;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The token count matches no command.
    #[error("Invalid arguments")]
    InvalidArguments,

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("invalid weight: {0}")]
    InvalidWeight(String),

    #[error("input line is not valid UTF-8")]
    InvalidEncoding,
}

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Print,
    Reachable,
    Quit,
    SetVertexStatus {
        name: String,
        status: Status,
    },
    DeleteEdge {
        source: String,
        destination: String,
    },
    SetEdgeStatus {
        source: String,
        destination: String,
        status: Status,
    },
    Path {
        source: String,
        destination: String,
    },
    AddEdge {
        source: String,
        destination: String,
        weight: f64,
    },
}

impl Command {
    /// Parse a whitespace-separated line.
    ///
    /// Dispatch is on the token count first. A count no command takes,
    /// including zero, is `InvalidArguments`; a word not valid for the given
    /// count is `UnknownCommand`.
    pub fn parse(line: &str) -> Result<Command, CommandError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let unknown = |word: &str| CommandError::UnknownCommand(word.to_string());

        let command = match tokens[..] {
            [word] => match word {
                "print" => Command::Print,
                "reachable" => Command::Reachable,
                "quit" => Command::Quit,
                _ => return Err(unknown(word)),
            },
            [word, name] => {
                let status = match word {
                    "vertexdown" => Status::Down,
                    "vertexup" => Status::Up,
                    _ => return Err(unknown(word)),
                };
                Command::SetVertexStatus {
                    name: name.to_string(),
                    status,
                }
            }
            [word, source, destination] => {
                let (source, destination) = (source.to_string(), destination.to_string());
                match word {
                    "deleteedge" => Command::DeleteEdge { source, destination },
                    "edgedown" => Command::SetEdgeStatus {
                        source,
                        destination,
                        status: Status::Down,
                    },
                    "edgeup" => Command::SetEdgeStatus {
                        source,
                        destination,
                        status: Status::Up,
                    },
                    "path" => Command::Path { source, destination },
                    _ => return Err(unknown(word)),
                }
            }
            [word, source, destination, weight] => {
                if word != "addedge" {
                    return Err(unknown(word));
                }
                let weight = weight
                    .parse::<f64>()
                    .map_err(|_| CommandError::InvalidWeight(weight.to_string()))?;
                Command::AddEdge {
                    source: source.to_string(),
                    destination: destination.to_string(),
                    weight,
                }
            }
            _ => return Err(CommandError::InvalidArguments),
        };

        Ok(command)
    }
}
