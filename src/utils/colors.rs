//! ANSI colouring helpers; every function is a no-op when colours are off.

use crate::models::season::Season;
use ansi_term::Colour;

/// Worked minutes colour:
/// \>0 → green
/// \<0 → red
/// 0 → unchanged
pub fn paint_minutes(minutes: i64, text: &str, enabled: bool) -> String {
    if !enabled {
        return text.to_string();
    }

    match minutes {
        m if m > 0 => Colour::Green.paint(text).to_string(),
        m if m < 0 => Colour::Red.paint(text).to_string(),
        _ => text.to_string(),
    }
}

pub fn paint_season(season: Season, text: &str, enabled: bool) -> String {
    if !enabled {
        return text.to_string();
    }

    match season {
        Season::Winter => Colour::Cyan.paint(text).to_string(),
        Season::Summer => Colour::Yellow.paint(text).to_string(),
    }
}

/// Grey out secondary information (clipped values, lunch windows).
pub fn dim(text: &str, enabled: bool) -> String {
    if enabled {
        Colour::Fixed(244).paint(text).to_string()
    } else {
        text.to_string()
    }
}
