/// Response for anything the parser cannot make sense of.
pub const UNKNOWN_COMMAND: &str = "неизвестная команда";

/// A single player command, borrowed from the raw input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<'a> {
    Look,
    Go { direction: &'a str },
    Take { item: &'a str },
    Wear { item: &'a str },
    Use { item: &'a str, target: &'a str },
    /// A known verb without enough arguments; carries the prompt to show.
    Incomplete(&'static str),
    Unknown,
}

/// Split on single spaces: the first token is the verb, the rest are
/// arguments in order. Nothing is trimmed or unquoted, so doubled spaces
/// produce empty arguments.
pub fn parse_command(line: &str) -> Command<'_> {
    let mut parts = line.split(' ');
    let Some(verb) = parts.next() else {
        return Command::Unknown;
    };
    let args: Vec<&str> = parts.collect();

    match verb {
        "осмотреться" | "look" => Command::Look,
        "идти" | "go" => match args.as_slice() {
            &[direction, ..] => Command::Go { direction },
            [] => Command::Incomplete("куда идти?"),
        },
        "взять" | "take" => match args.as_slice() {
            &[item, ..] => Command::Take { item },
            [] => Command::Incomplete("что взять?"),
        },
        "надеть" | "wear" => match args.as_slice() {
            &[item, ..] => Command::Wear { item },
            [] => Command::Incomplete("что надеть?"),
        },
        "применить" | "use" => match args.as_slice() {
            &[item, target, ..] => Command::Use { item, target },
            _ => Command::Incomplete("применить что и к чему?"),
        },
        _ => Command::Unknown,
    }
}
