use std::sync::Arc;

use contracts::domain::a002_page::PageBundle;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api::fetch_page_bundle;
use crate::blocks::registry::PageEnv;
use crate::blocks::renderer::BlockList;
use crate::shared::fetch_guard::FetchGuard;
use crate::shared::sector::SectorProvider;

#[derive(Clone)]
enum PageState {
    Loading,
    Ready(Arc<PageBundle>),
    NotFound,
    Failed(String),
}

fn set_document_title(title: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if title.is_empty() {
            document.set_title("Cost Atlas");
        } else {
            document.set_title(&format!("{} | Cost Atlas", title));
        }
    }
}

/// Loads one page bundle and renders its blocks inside a fresh sector selection.
#[component]
pub fn PageView(#[prop(into)] slug: Signal<String>) -> impl IntoView {
    let state = RwSignal::new(PageState::Loading);
    let guard = FetchGuard::new();

    on_cleanup({
        let guard = guard.clone();
        move || guard.invalidate()
    });

    Effect::new(move |_| {
        let slug = slug.get();
        let ticket = guard.begin();
        state.set(PageState::Loading);

        let guard = guard.clone();
        spawn_local(async move {
            let result = fetch_page_bundle(&slug).await;
            if !guard.is_current(ticket) {
                log::debug!("Discarding stale response for page {}", slug);
                return;
            }
            match result {
                Ok(Some(bundle)) => {
                    set_document_title(&bundle.page.title);
                    state.set(PageState::Ready(Arc::new(bundle)));
                }
                Ok(None) => state.set(PageState::NotFound),
                Err(e) => {
                    log::error!("Failed to load page {}: {}", slug, e);
                    state.set(PageState::Failed(e.to_string()));
                }
            }
        });
    });

    move || match state.get() {
        PageState::Loading => view! { <p class="page-status">"Loading…"</p> }.into_any(),
        PageState::NotFound => view! { <p class="page-status">"Page not found."</p> }.into_any(),
        PageState::Failed(msg) => view! {
            <p class="page-status page-status--error">"Could not load this page: " {msg}</p>
        }
        .into_any(),
        PageState::Ready(bundle) => {
            let env = PageEnv::new(bundle.localities.clone());
            let blocks = bundle.page.blocks.clone();
            view! {
                <SectorProvider>
                    <BlockList blocks=blocks env=env />
                </SectorProvider>
            }
            .into_any()
        }
    }
}
