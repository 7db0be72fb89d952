//! Leptos views for the favorites widget.

use std::rc::Rc;

use app_bus::AppBus;
use leptos::*;
use platform_host::{NotificationLevel, PrefsStore};
use serde_json::Value;
use system_ui::prelude::*;
use web_sys::{KeyboardEvent, MouseEvent};

use crate::{
    bus::listen_for_add_requests,
    config::FavoritesConfig,
    form::AddFavoriteForm,
    model::{FavoriteEntry, IconStyle, PRESET_COLORS},
    presentation::{icon_visual, tile_href, IconDisplaySize, IconVisual, LayoutMode},
    store::FavoritesStore,
    toast::{announce, ToastNotifier, ToastRegion, ADDED_MESSAGE},
};

/// Class of the element wrapping the URL input and its suggestions.
const URL_FIELD_CLASS: &str = "favorites-url-field";

#[component]
/// Favorites grid with its add dialog and toast region.
///
/// While mounted, the view also accepts add requests published on `bus`.
pub fn FavoritesApp(
    /// Preference store holding the persisted collection.
    prefs: Rc<dyn PrefsStore>,
    /// Application bus carrying external add requests.
    bus: AppBus,
    /// Launch parameters, deserialized into [`FavoritesConfig`].
    #[prop(optional)]
    launch_params: Value,
    /// Layout override; the configured layout applies when `None`.
    #[prop(optional_no_strip)]
    layout: Option<LayoutMode>,
) -> impl IntoView {
    let config = FavoritesConfig::from_launch_params(&launch_params);
    let layout = layout.unwrap_or(config.layout);
    let store = create_rw_signal(FavoritesStore::load(prefs, config.storage_key.clone()));
    let form = create_rw_signal(AddFavoriteForm::default());
    let notifier = ToastNotifier::new(config.toast_duration_ms);
    let config = store_value(config);

    let subscription = listen_for_add_requests(&bus, store, notifier);
    on_cleanup(move || drop(subscription));

    view! {
        <section
            class="favorites-app"
            data-layout=layout.token()
            aria-labelledby="favorites-heading"
        >
            <header class="favorites-header">
                <Heading id="favorites-heading">"Favorites"</Heading>
                <Button
                    size=ButtonSize::Sm
                    leading_icon=IconName::Plus
                    on_click=Callback::new(move |_| form.update(AddFavoriteForm::open))
                >
                    "Add"
                </Button>
            </header>
            <Show when=move || store.with(FavoritesStore::is_empty)>
                <p class="favorites-empty">"No favorites yet."</p>
            </Show>
            <Grid layout_class="favorites-grid" aria_label="Favorites">
                <For
                    each=move || store.with(|store| store.entries().to_vec())
                    key=|entry| entry.url.clone()
                    children=move |entry| {
                        let url = entry.url.clone();
                        view! {
                            <FavoriteTile
                                entry
                                layout
                                config
                                on_remove=Callback::new(move |_| remove_by_url(store, &url))
                            />
                        }
                    }
                />
            </Grid>
            <AddFavoriteDialog form store notifier />
            <ToastRegion notifier />
        </section>
    }
}

/// Removes the entry currently stored under `url`; positions are looked up at click time.
fn remove_by_url(store: RwSignal<FavoritesStore>, url: &str) {
    store.update(|store| {
        if let Some(index) = store.entries().iter().position(|entry| entry.url == url) {
            store.remove(index);
        }
    });
}

#[component]
fn FavoriteTile(
    entry: FavoriteEntry,
    layout: LayoutMode,
    config: StoredValue<FavoritesConfig>,
    on_remove: Callback<()>,
) -> impl IntoView {
    let visual = config.with_value(|config| icon_visual(&entry, config));
    let padding = match layout {
        LayoutMode::Card => LayoutPadding::Md,
        LayoutMode::Large | LayoutMode::Small => LayoutPadding::Sm,
    };
    let remove_label = format!("Remove {}", entry.name);
    let href = tile_href(&entry.url);

    view! {
        <div class="favorites-tile-slot" role="listitem">
            <Card padding layout_class="favorites-tile">
                <a
                    class="favorites-tile-link"
                    href=href
                    target="_blank"
                    rel="noopener noreferrer"
                    data-layout=layout.token()
                    data-orientation=layout.orientation().token()
                >
                    <span class="favorites-tile-icon">
                        <FavoriteIcon visual />
                    </span>
                    <span class="favorites-tile-label">{entry.name}</span>
                </a>
                <IconButton
                    icon=IconName::Trash
                    aria_label=remove_label
                    layout_class="favorites-tile-remove"
                    on_click=Callback::new(move |_: MouseEvent| on_remove.call(()))
                />
            </Card>
        </div>
    }
}

#[component]
/// Icon slot of a tile; a remote favicon that fails to load is replaced by its letter badge.
pub fn FavoriteIcon(visual: IconVisual) -> impl IntoView {
    let image_failed = create_rw_signal(false);

    move || match visual.clone().resolve(image_failed.get()) {
        IconVisual::Badge(badge) => view! {
            <LetterBadge initial=badge.initial color=badge.color size=badge.size />
        }
        .into_view(),
        IconVisual::LocalAsset { src, alt, size } => view! {
            <img
                class="favorites-icon-image"
                src=src
                alt=alt
                width=size.px().to_string()
                height=size.px().to_string()
                sizes=size.sizes_hint()
                loading="lazy"
            />
        }
        .into_view(),
        IconVisual::RemoteFavicon { src, alt, size, .. } => view! {
            <img
                class="favorites-icon-image"
                src=src
                alt=alt
                width=size.px().to_string()
                height=size.px().to_string()
                loading="lazy"
                referrerpolicy="no-referrer"
                on:error=move |_| image_failed.set(true)
            />
        }
        .into_view(),
    }
}

#[component]
fn LetterBadge(
    #[prop(into)] initial: MaybeSignal<String>,
    #[prop(into)] color: MaybeSignal<String>,
    size: IconDisplaySize,
) -> impl IntoView {
    let px = size.px();
    view! {
        <span
            class="favorites-badge"
            aria-hidden="true"
            style=move || {
                format!(
                    "background-color: {}; width: {px}px; height: {px}px; line-height: {px}px;",
                    color.get()
                )
            }
        >
            {move || initial.get()}
        </span>
    }
}

#[component]
fn AddFavoriteDialog(
    form: RwSignal<AddFavoriteForm>,
    store: RwSignal<FavoritesStore>,
    notifier: ToastNotifier,
) -> impl IntoView {
    let open = Signal::derive(move || form.with(AddFavoriteForm::is_open));
    let name = Signal::derive(move || form.with(|form| form.name().to_string()));
    let url_value = Signal::derive(move || form.with(|form| form.url_field().value().to_string()));
    let suggestions = Signal::derive(move || form.with(|form| form.url_field().suggestions()));
    let icon_style = Signal::derive(move || form.with(AddFavoriteForm::icon_style));
    let icon_color = Signal::derive(move || form.with(|form| form.icon_color().to_string()));
    let preview_initial = Signal::derive(move || form.with(AddFavoriteForm::preview_initial));
    let error = Signal::derive(move || form.with(|form| form.error().map(ToString::to_string)));

    let outside_press_listener = window_event_listener(ev::mousedown, move |ev| {
        if !form.with_untracked(|form| form.url_field().suggestions_open()) {
            return;
        }
        let target = event_target::<web_sys::Element>(&ev);
        let inside = matches!(target.closest(&format!(".{URL_FIELD_CLASS}")), Ok(Some(_)));
        if !inside {
            form.update(AddFavoriteForm::dismiss_suggestions);
        }
    });
    on_cleanup(move || outside_press_listener.remove());

    let submit = move || {
        let mut outcome = None;
        store.update(|store| form.update(|form| outcome = Some(form.submit(store))));
        if let Some(Ok(_)) = outcome {
            announce(&notifier, NotificationLevel::Success, ADDED_MESSAGE);
        }
    };
    let submit_on_enter = Callback::new(move |ev: KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            submit();
        }
    });

    view! {
        <Modal
            open
            id="favorites-add-dialog"
            title="Add favorite"
            layout_class="favorites-dialog"
            on_close=Callback::new(move |_| form.update(AddFavoriteForm::close))
        >
            <Stack gap=LayoutGap::Md>
                <TextField
                    placeholder="Site name"
                    aria_label="Site name"
                    value=name
                    on_input=Callback::new(move |value: String| form.update(|form| form.set_name(value)))
                    on_keydown=submit_on_enter
                />
                <div class=URL_FIELD_CLASS>
                    <TextField
                        placeholder="Site address"
                        aria_label="Site address"
                        value=url_value
                        on_input=Callback::new(move |value: String| {
                            form.update(|form| form.input_url(value))
                        })
                        on_keydown=submit_on_enter
                    />
                    <Show when=move || !suggestions.with(Vec::is_empty)>
                        <CompletionList
                            layout_class="favorites-url-suggestions"
                            aria_label="Address suggestions"
                        >
                            <For
                                each=move || suggestions.get()
                                key=|suggestion| suggestion.url.clone()
                                children=move |suggestion| {
                                    let scheme = suggestion.scheme;
                                    let rest = suggestion
                                        .url
                                        .strip_prefix(scheme.prefix())
                                        .unwrap_or(&suggestion.url)
                                        .to_string();
                                    view! {
                                        <CompletionItem on_click=Callback::new(move |_| {
                                            form.update(|form| form.select_scheme(scheme))
                                        })>
                                            <span class="favorites-url-scheme">{scheme.prefix()}</span>
                                            <span>{rest}</span>
                                        </CompletionItem>
                                    }
                                }
                            />
                        </CompletionList>
                    </Show>
                </div>
                <Cluster gap=LayoutGap::Md layout_class="favorites-icon-style">
                    <ChoiceOption
                        name="favorites-icon-style"
                        checked=Signal::derive(move || icon_style.get() == IconStyle::Api)
                        on_select=Callback::new(move |_| {
                            form.update(|form| form.set_icon_style(IconStyle::Api))
                        })
                    >
                        "Site icon"
                    </ChoiceOption>
                    <ChoiceOption
                        name="favorites-icon-style"
                        checked=Signal::derive(move || icon_style.get() == IconStyle::Text)
                        on_select=Callback::new(move |_| {
                            form.update(|form| form.set_icon_style(IconStyle::Text))
                        })
                    >
                        "Letter icon"
                    </ChoiceOption>
                </Cluster>
                <Show when=move || icon_style.get() == IconStyle::Text>
                    <Stack gap=LayoutGap::Sm layout_class="favorites-color-picker">
                        <Cluster gap=LayoutGap::Sm>
                            {PRESET_COLORS
                                .iter()
                                .map(|preset| {
                                    let value = preset.value;
                                    view! {
                                        <ColorSwatch
                                            color=value
                                            label=preset.name
                                            selected=Signal::derive(move || icon_color.get() == value)
                                            on_click=Callback::new(move |_| {
                                                form.update(|form| {
                                                    form.set_icon_color(value);
                                                })
                                            })
                                        />
                                    }
                                })
                                .collect_view()}
                        </Cluster>
                        <Cluster gap=LayoutGap::Sm layout_class="favorites-color-custom">
                            <LetterBadge
                                initial=preview_initial
                                color=icon_color
                                size=IconDisplaySize::Medium
                            />
                            <ColorField
                                aria_label="Custom color"
                                value=icon_color
                                on_input=Callback::new(move |value: String| {
                                    form.update(|form| {
                                        form.set_icon_color(&value);
                                    })
                                })
                            />
                        </Cluster>
                    </Stack>
                </Show>
                <FieldMessage message=error />
                <Cluster gap=LayoutGap::Sm layout_class="favorites-dialog-actions">
                    <Button on_click=Callback::new(move |_| form.update(AddFavoriteForm::close))>
                        "Cancel"
                    </Button>
                    <Button
                        variant=ButtonVariant::Primary
                        leading_icon=IconName::Check
                        on_click=Callback::new(move |_| submit())
                    >
                        "Add"
                    </Button>
                </Cluster>
            </Stack>
        </Modal>
    }
}
