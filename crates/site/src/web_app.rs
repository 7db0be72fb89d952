use std::rc::Rc;

use app_bus::AppBus;
use favorites_app::{request_add_favorite, FavoritesApp, LayoutMode};
use leptos::*;
use leptos_meta::*;
use platform_host::PrefsStore;
use platform_host_web::WebPrefsStore;
use system_ui::prelude::*;
use url::Url;

/// Query parameter selecting the tile layout.
const LAYOUT_QUERY_PARAM: &str = "layout";

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    let bus = AppBus::new();
    provide_context(bus.clone());
    let prefs: Rc<dyn PrefsStore> = Rc::new(WebPrefsStore);
    let layout = current_href().as_deref().and_then(layout_from_href);

    view! {
        <Title text="Favorites" />
        <Meta name="description" content="Bookmarked sites, kept in this browser." />

        <main class="site-root">
            <BookmarkThisPage />
            <FavoritesApp prefs bus layout />
        </main>
    }
}

/// Publishes the current page as an add request for whichever favorites view is mounted.
#[component]
pub fn BookmarkThisPage() -> impl IntoView {
    let bus = use_context::<AppBus>();

    let on_click = Callback::new(move |_| {
        let Some(bus) = bus.as_ref() else {
            logging::warn!("bookmark request dropped: no application bus in context");
            return;
        };
        let Some(url) = current_href() else {
            return;
        };
        let title = document().title();
        let name = if title.trim().is_empty() { url.clone() } else { title };
        request_add_favorite(bus, &name, &url, None);
    });

    view! {
        <Button variant=ButtonVariant::Quiet leading_icon=IconName::Plus on_click>
            "Bookmark this page"
        </Button>
    }
}

/// Layout selected by the `layout` query parameter of `href`, if present and recognized.
pub fn layout_from_href(href: &str) -> Option<LayoutMode> {
    let url = Url::parse(href).ok()?;
    let raw = url
        .query_pairs()
        .find(|(key, _)| key == LAYOUT_QUERY_PARAM)
        .map(|(_, value)| value.into_owned())?;
    let layout = LayoutMode::parse(&raw);
    if layout.is_none() {
        logging::warn!("unknown layout `{raw}` ignored");
    }
    layout
}

fn current_href() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window().and_then(|window| window.location().href().ok())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}
