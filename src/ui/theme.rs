//! Theme constants for the Connect-Four GUI

use egui::Color32;

use crate::Player;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(57, 128, 160);
pub const BOARD_BORDER: Color32 = Color32::from_rgb(44, 104, 132);
pub const HOLE: Color32 = Color32::from_rgb(238, 247, 255);
pub const PAGE_BG: Color32 = Color32::from_rgb(238, 247, 255);

// Coin colors, first player red, second player yellow
pub const RED_COIN: Color32 = Color32::from_rgb(206, 84, 84);
pub const RED_COIN_BORDER: Color32 = Color32::from_rgb(185, 67, 67);
pub const YELLOW_COIN: Color32 = Color32::from_rgb(223, 195, 82);
pub const YELLOW_COIN_BORDER: Color32 = Color32::from_rgb(195, 163, 67);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(255, 255, 255);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

// Panel colors
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Timer colors
pub const TIMER_NORMAL: Color32 = Color32::from_rgb(80, 200, 120);
pub const TIMER_WARNING: Color32 = Color32::from_rgb(255, 180, 50);

// Sizes
pub const BOARD_MARGIN: f32 = 16.0;
pub const COIN_RADIUS_RATIO: f32 = 0.42;
pub const COIN_BORDER_WIDTH: f32 = 3.0;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 4.0;

/// Fill and border of a player's coin
pub fn coin_colors(player: Player) -> (Color32, Color32) {
    match player {
        Player::First => (RED_COIN, RED_COIN_BORDER),
        Player::Second => (YELLOW_COIN, YELLOW_COIN_BORDER),
    }
}

/// Faded coin drawn where a hovered column would drop
pub fn hover_preview(player: Player) -> Color32 {
    let (fill, _) = coin_colors(player);
    Color32::from_rgba_unmultiplied(fill.r(), fill.g(), fill.b(), 110)
}

pub fn player_name(player: Player) -> &'static str {
    match player {
        Player::First => "RED",
        Player::Second => "YELLOW",
    }
}
