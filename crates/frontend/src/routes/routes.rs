use crate::pages::page_view::PageView;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_params_map;
use leptos_router::path;

/// Slug of the page served at `/`.
pub const HOME_SLUG: &str = "home";

#[component]
fn HomeRoute() -> impl IntoView {
    view! { <PageView slug=Signal::derive(|| HOME_SLUG.to_string()) /> }
}

#[component]
fn SlugRoute() -> impl IntoView {
    let params = use_params_map();
    let slug = Signal::derive(move || params.read().get("slug").unwrap_or_default());

    view! { <PageView slug=slug /> }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <p class="page-status">"Page not found."</p> }>
                <Route path=path!("/") view=HomeRoute />
                <Route path=path!("/:slug") view=SlugRoute />
            </Routes>
        </Router>
    }
}
