use rgb::RGB8;

/// Fixed header literal every command line must start with. Lines with a
/// different header are somebody else's traffic and are ignored silently.
pub const HEADER: &str = "GB23";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Rainbow,
    Off,
    Colour(RGB8),
    Sunrise,
    Moonlight,
    Brightness(f32),
}

/// Decodes one command line. Returns None for anything that should not change
/// engine state: foreign headers (silent), unknown verbs (logged) and bad
/// arguments (logged, whole command dropped so it can never half-apply).
pub fn parse_line(line: &str) -> Option<Command> {
    let mut tokens = line.trim_end_matches(['\r', '\n']).split(' ');
    if tokens.next() != Some(HEADER) {
        return None;
    }

    let Some(verb) = tokens.next() else {
        log::warn!("Invalid command: missing verb");
        return None;
    };

    match verb {
        "rainbow" => Some(Command::Rainbow),
        "off" => Some(Command::Off),
        "colour" => match parse_colour(&mut tokens) {
            Some(color) => Some(Command::Colour(color)),
            None => {
                log::warn!("Dropping colour command with bad arguments: {line}");
                None
            }
        },
        "sunrise" => Some(Command::Sunrise),
        "moonlight" => Some(Command::Moonlight),
        "brightness" => match tokens.next().and_then(|arg| arg.parse::<f32>().ok()) {
            Some(value) => Some(Command::Brightness(value)),
            None => {
                log::warn!("Dropping brightness command with bad arguments: {line}");
                None
            }
        },
        _ => {
            log::warn!("Invalid command: {verb}");
            None
        }
    }
}

fn parse_colour<'a>(tokens: &mut impl Iterator<Item = &'a str>) -> Option<RGB8> {
    let r = tokens.next()?.parse::<u8>().ok()?;
    let g = tokens.next()?.parse::<u8>().ok()?;
    let b = tokens.next()?.parse::<u8>().ok()?;
    Some(RGB8::new(r, g, b))
}
