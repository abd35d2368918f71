//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{A, Route, Router, Routes},
};

use crate::components::toast_host::ToastHost;
use crate::pages::{compose::ComposePage, history::HistoryPage, job_application::JobApplicationPage};
use crate::state::toast::ToastState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
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
/// Provides the toast surface shared by every page and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let toasts = RwSignal::new(ToastState::default());
    provide_context(toasts);

    view! {
        <Stylesheet id="leptos" href="/pkg/mailmage.css"/>
        <Title text="MailMage"/>

        <Router>
            <nav class="app-nav">
                <A href="/">"Job Application"</A>
                <A href="/compose">"Compose"</A>
                <A href="/history">"History"</A>
            </nav>
            <ToastHost/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=JobApplicationPage/>
                    <Route path=StaticSegment("compose") view=ComposePage/>
                    <Route path=StaticSegment("history") view=HistoryPage/>
                </Routes>
            </main>
        </Router>
    }
}
