//! DOM HUD and screen transitions
//!
//! Pure sink: the core pushes values in, nothing is read back. Missing DOM
//! nodes are tolerated silently so a pared-down page still runs.

use wasm_bindgen::JsCast;
use web_sys::Document;

use crate::sim::GameState;

fn set_text(document: &Document, id: &str, value: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_text_content(Some(value));
    }
}

fn set_hidden(document: &Document, id: &str, hidden: bool) {
    if let Some(el) = document.get_element_by_id(id) {
        if hidden {
            let _ = el.class_list().add_1("hidden");
        } else {
            let _ = el.class_list().remove_1("hidden");
        }
    }
}

/// Show the gameplay screen
pub fn show_game_screen(document: &Document) {
    set_hidden(document, "startScreen", true);
    set_hidden(document, "gameScreen", false);
    set_hidden(document, "gameOverScreen", true);
}

/// Show the game-over screen
pub fn show_game_over_screen(document: &Document) {
    set_hidden(document, "gameScreen", true);
    set_hidden(document, "gameOverScreen", false);
}

/// Per-frame HUD update: score, level, crystals, fuel bar
pub fn update_hud(document: &Document, state: &GameState) {
    set_text(document, "score", &state.score.to_string());
    set_text(document, "level", &state.level.to_string());
    set_text(document, "crystals", &state.crystals_collected.to_string());

    let fuel_pct = state.fuel_percentage();
    if let Some(el) = document.get_element_by_id("fuelLevel") {
        if let Some(html) = el.dyn_ref::<web_sys::HtmlElement>() {
            let _ = html.style().set_property("width", &format!("{fuel_pct}%"));
        }
    }

    // Low-fuel warning pulse
    if let Ok(Some(bar)) = document.query_selector(".fuel-bar") {
        if fuel_pct < 25.0 {
            let _ = bar.class_list().add_1("pulse");
        } else {
            let _ = bar.class_list().remove_1("pulse");
        }
    }
}

/// Final stats on the game-over screen
pub fn show_final_stats(document: &Document, state: &GameState, seconds_survived: u64) {
    set_text(document, "finalScore", &state.score.to_string());
    set_text(document, "finalLevel", &state.level.to_string());
    set_text(
        document,
        "finalCrystals",
        &state.crystals_collected.to_string(),
    );
    set_text(document, "timeSurvived", &format!("{seconds_survived}s"));
}
