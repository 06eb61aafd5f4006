use crate::seat::SeatId;

/// Accepted seat names. Matched after lowercasing and stripping whitespace,
/// so "Rear Left" and "rearleft" are the same token.
const SEAT_ALIASES: &[(&str, SeatId)] = &[
    ("0", SeatId::Driver),
    ("1", SeatId::Driver),
    ("d", SeatId::Driver),
    ("driver", SeatId::Driver),
    ("2", SeatId::FrontPassenger),
    ("p", SeatId::FrontPassenger),
    ("fp", SeatId::FrontPassenger),
    ("front", SeatId::FrontPassenger),
    ("passenger", SeatId::FrontPassenger),
    ("3", SeatId::RearLeft),
    ("rl", SeatId::RearLeft),
    ("rearleft", SeatId::RearLeft),
    ("backleft", SeatId::RearLeft),
    ("4", SeatId::RearRight),
    ("rr", SeatId::RearRight),
    ("rearright", SeatId::RearRight),
    ("backright", SeatId::RearRight),
];

/// Parse a seat token typed by the player.
///
/// Named aliases and the 1-based numbers `1..=4` come first. A plain integer
/// in the host's native range (`-1..=2`) is then passed through as a raw
/// seat index, so `-1` still means the driver. Signs other than a leading
/// `-` and zero padding are rejected.
pub fn parse_seat(token: &str) -> Option<SeatId> {
    let normalized: String = token
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_ascii_lowercase();
    if normalized.is_empty() {
        return None;
    }
    if let Some((_, seat)) = SEAT_ALIASES.iter().find(|(alias, _)| *alias == normalized) {
        return Some(*seat);
    }
    if !is_plain_index(&normalized) {
        return None;
    }
    normalized.parse::<i32>().ok().and_then(SeatId::from_native)
}

/// An optional `-` followed by digits with no leading zero, so "01", "+1"
/// and "-0" are not read as raw indices. A bare "0" never gets here.
fn is_plain_index(token: &str) -> bool {
    let digits = token.strip_prefix('-').unwrap_or(token);
    !digits.is_empty()
        && digits.bytes().all(|b| b.is_ascii_digit())
        && !digits.starts_with('0')
}

/// Every alias that maps to `seat`, for usage text.
pub fn aliases_for(seat: SeatId) -> impl Iterator<Item = &'static str> {
    SEAT_ALIASES
        .iter()
        .filter(move |(_, s)| *s == seat)
        .map(|(alias, _)| *alias)
}
