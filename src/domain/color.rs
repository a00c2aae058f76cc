use crate::domain::color::Color::{Hex, RGB};
use std::fmt::{Display, Formatter};

#[derive(PartialEq, Clone, Debug)]
pub enum Color {
    RGB(u8, u8, u8),
    Hex(String),
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RGB(r, g, b) => write!(f, "#{:02x}{:02x}{:02x}", r, g, b),
            Hex(value) => write!(f, "{}", value),
        }
    }
}
