use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::core::settings::SETTINGS_ELEMENT_ID;
use crate::ui::pages::{
    AgencyPage, BrandPage, ClonePage, CoachingPage, HomePage, MusicPage, NotFoundPage,
    WorkDetailPage,
};
use crate::ui::{provide_site_settings, use_site_settings};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    let settings_json = use_site_settings().to_json();

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
                // read back by the client before the first widget mounts
                <script type="application/json" id=SETTINGS_ELEMENT_ID inner_html=settings_json></script>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // Server gets these from request context, the client from the embedded JSON
    provide_site_settings(use_site_settings());

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/pagecraft.css"/>

        <Title text="Pagecraft"/>

        <Router>
            <Routes fallback=NotFoundPage>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/agency") view=AgencyPage />
                <Route path=path!("/agency/work/:slug") view=WorkDetailPage />
                <Route path=path!("/brand") view=BrandPage />
                <Route path=path!("/music") view=MusicPage />
                <Route path=path!("/clone") view=ClonePage />
                <Route path=path!("/coaching") view=CoachingPage />
            </Routes>
        </Router>
    }
}
