use crate::world::Direction;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Auto,
    Look,
    Help,
    Exit,
    Empty,
    Invalid(String),
}

impl Command {
    pub fn parse(input: &str) -> Command {
        let lower = input.trim().to_lowercase();
        let tokens: Vec<&str> = lower.split_whitespace().collect();

        match tokens.as_slice() {
            [] => Command::Empty,
            ["exit"] | ["quit"] => Command::Exit,
            ["auto"] => Command::Auto,
            ["look"] | ["l"] => Command::Look,
            ["help"] | ["?"] => Command::Help,
            [dir] | ["go", dir] => match dir.parse::<Direction>() {
                Ok(d) => Command::Move(d),
                Err(_) => Command::Invalid(input.trim().to_string()),
            },
            _ => Command::Invalid(input.trim().to_string()),
        }
    }
}
