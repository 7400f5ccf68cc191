//! Named colors from the d3 category10 palette.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Blue,
    Orange,
    Green,
    Red,
    Purple,
    Brown,
    Pink,
    Gray,
}

impl Color {
    pub const ALL: [Color; 8] = [
        Color::Blue,
        Color::Orange,
        Color::Green,
        Color::Red,
        Color::Purple,
        Color::Brown,
        Color::Pink,
        Color::Gray,
    ];

    pub fn hex(self) -> &'static str {
        match self {
            Self::Blue => "#1f77b4",
            Self::Orange => "#ff7f0e",
            Self::Green => "#2ca02c",
            Self::Red => "#d62728",
            Self::Purple => "#9467bd",
            Self::Brown => "#8C564b",
            Self::Pink => "#e377c2",
            Self::Gray => "#7f7f7f",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hex())
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.hex().to_string()
    }
}
