use ratatui::style::Color;

use crate::config::PlayerConfig;
use crate::game::PlayerId;

/// Presentation-side view of one contestant: the engine's opaque id plus the
/// display name and color used for rendering.
#[derive(Debug, Clone)]
pub struct PlayerProfile {
    pub id: PlayerId,
    pub name: String,
    pub color: Color,
}

impl PlayerProfile {
    pub fn from_config(id: PlayerId, config: &PlayerConfig) -> Self {
        PlayerProfile {
            id,
            name: config.name.clone(),
            color: parse_color(&config.color),
        }
    }
}

/// Map a config color string onto a terminal color. Unknown names fall back
/// to white rather than failing the whole game over a cosmetic field.
fn parse_color(name: &str) -> Color {
    match name.to_ascii_lowercase().as_str() {
        "red" => Color::Red,
        "yellow" => Color::Yellow,
        "green" => Color::Green,
        "blue" => Color::Blue,
        "magenta" | "purple" => Color::Magenta,
        "cyan" => Color::Cyan,
        "black" => Color::Black,
        "gray" | "grey" => Color::Gray,
        _ => Color::White,
    }
}

/// Find the profile for a player id. The UI only ever holds the two profiles
/// registered with the game, so a lookup cannot miss.
pub fn profile_for<'a>(profiles: &'a [PlayerProfile; 2], id: PlayerId) -> &'a PlayerProfile {
    if profiles[0].id == id {
        &profiles[0]
    } else {
        &profiles[1]
    }
}
