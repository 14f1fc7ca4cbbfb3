//! Top-level rendering coordinator.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → components → stdout
//! ```

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders the plugin UI to stdout.
///
/// Output is ANSI-styled `print!` calls with absolute cursor positioning.
/// The host clears the pane between frames.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);
    render_viewmodel(&viewmodel, &state.theme, rows, cols);
}

fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    if vm.contact.is_some() {
        components::render_contact_mode(vm, theme, cols, rows);
    } else {
        components::render_listing_mode(vm, theme, cols, rows);
    }
}
