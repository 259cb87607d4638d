use rgb::RGB8;

use crate::network::{Amount, Distance};

pub const fn get_size_bits<T>() -> usize {
    std::mem::size_of::<T>() * 8
}

pub fn get_distance_str(distance: Distance) -> String {
    format!("{distance} km")
}

// Formats 12345 as "12,345 won".
pub fn get_fare_str(amount: Amount) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("{grouped} won")
}

pub fn get_color_str(color: RGB8) -> String {
    format!("#{:02X}{:02X}{:02X}", color.r, color.g, color.b)
}

// Parses "#RRGGBB" (the leading '#' is optional).
pub fn parse_color(s: &str) -> Option<RGB8> {
    let hex = s.strip_prefix('#').unwrap_or(s);
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(RGB8::new(channel(0)?, channel(2)?, channel(4)?))
}
