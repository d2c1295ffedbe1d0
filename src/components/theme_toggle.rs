//! Header button cycling the theme preference.

#[cfg(test)]
#[path = "theme_toggle_test.rs"]
mod theme_toggle_test;

use leptos::prelude::*;

use crate::state::theme::ThemePreference;
use crate::util::theme_dom::BrowserThemeResolver;

/// Tooltip describing the current preference and what a click switches to.
pub(crate) fn toggle_title(current: ThemePreference) -> String {
    format!("Tema: {}. Cambiar a {}", current.label(), current.next().label())
}

/// Cycle button whose glyph follows the stored preference.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<RwSignal<BrowserThemeResolver>>();
    let preference = Memo::new(move |_| theme.with(BrowserThemeResolver::preference));

    view! {
        <button
            class="btn header__theme-toggle"
            title=move || toggle_title(preference.get())
            attr:data-theme-preference=move || preference.get().as_str()
            on:click=move |_| {
                theme.update(|t| {
                    t.cycle_preference();
                });
            }
        >
            {move || preference.get().glyph()}
        </button>
    }
}
