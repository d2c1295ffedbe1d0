//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::ClientConfig;
use crate::pages::{
    contact::ContactPage, dashboard::DashboardPage, login::LoginPage, not_found::NotFoundPage,
    payment_failed::PaymentFailedPage, properties::PropertiesPage, property_detail::PropertyDetailPage,
    section::SectionPage,
};
use crate::state::{auth::AuthState, ui::UiState};
use crate::util::theme_dom::browser_theme_resolver;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let auth = RwSignal::new(AuthState { user: None, loading: true });
    let ui = RwSignal::new(UiState::default());
    let theme = RwSignal::new(browser_theme_resolver(&config.theme_storage_key));

    provide_context(config.clone());
    provide_context(auth);
    provide_context(ui);
    provide_context(theme);

    // Stored preference is read and applied client-side only; effects do not
    // run during SSR, and `update` re-renders the toggle after hydration.
    Effect::new(move || {
        theme.update(|t| {
            t.reload();
            t.apply();
        });
    });

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let user = crate::net::api::fetch_current_user(&config).await;
        match &user {
            Some(u) => log::info!("session user {} ({})", u.name, u.role()),
            None => log::debug!("no active session"),
        }
        auth.set(AuthState { user, loading: false });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/rental-ui.css"/>
        <Title text="Rental"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=DashboardPage/>
                <Route path=StaticSegment("properties") view=PropertiesPage/>
                <Route path=(StaticSegment("properties"), ParamSegment("id")) view=PropertyDetailPage/>
                <Route path=StaticSegment("contact") view=ContactPage/>
                <Route path=(StaticSegment("payment"), StaticSegment("failed")) view=PaymentFailedPage/>
                <Route path=StaticSegment("bookings") view=SectionPage/>
                <Route path=StaticSegment("payments") view=SectionPage/>
                <Route path=(StaticSegment("payments"), StaticSegment("crypto")) view=SectionPage/>
                <Route path=StaticSegment("profile") view=SectionPage/>
                <Route path=(StaticSegment("admin"), ParamSegment("section")) view=SectionPage/>
            </Routes>
        </Router>
    }
}
