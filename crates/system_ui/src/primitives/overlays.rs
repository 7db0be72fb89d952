use super::*;

#[component]
/// Dialog overlay rendered only while `open` is true.
///
/// Escape, the close button, and a press on the backdrop itself all call `on_close`; the modal
/// never hides on its own, so the owner's state stays the single source of truth.
pub fn Modal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] id: String,
    #[prop(into)] title: String,
    on_close: Callback<()>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: ChildrenFn,
) -> impl IntoView {
    let title_id = format!("{id}-title");
    view! {
        <Show when=move || open.get()>
            <div
                class="ui-modal-backdrop"
                data-ui-primitive="true"
                data-ui-kind="modal-backdrop"
                on:mousedown=move |ev: MouseEvent| {
                    if ev.target() == ev.current_target() {
                        on_close.call(());
                    }
                }
            >
                <div
                    class=merge_layout_class("ui-modal", layout_class)
                    id=id.clone()
                    role="dialog"
                    aria-modal="true"
                    aria-labelledby=title_id.clone()
                    data-ui-primitive="true"
                    data-ui-kind="modal"
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ev.prevent_default();
                            on_close.call(());
                        }
                    }
                >
                    <header data-ui-slot="header">
                        <h2 id=title_id.clone() data-ui-slot="title">{title.clone()}</h2>
                        <IconButton
                            icon=IconName::Close
                            aria_label="Close"
                            on_click=Callback::new(move |_| on_close.call(()))
                        />
                    </header>
                    <div data-ui-slot="body">{children()}</div>
                </div>
            </div>
        </Show>
    }
}

#[component]
/// Fixed live region that hosts transient toasts.
pub fn ToastStack(children: Children) -> impl IntoView {
    view! {
        <div
            class="ui-toast-stack"
            role="region"
            aria-label="Notifications"
            data-ui-primitive="true"
            data-ui-kind="toast-stack"
        >
            {children()}
        </div>
    }
}

#[component]
/// Single toast message with an optional dismiss control.
pub fn ToastItem(
    tone: ToastTone,
    #[prop(into)] message: String,
    #[prop(optional)] on_dismiss: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div
            class="ui-toast"
            role="status"
            aria-live=tone.live_region()
            data-ui-primitive="true"
            data-ui-kind="toast"
            data-ui-tone=tone.token()
        >
            <span data-ui-slot="message">{message}</span>
            {on_dismiss.map(|on_dismiss| {
                view! {
                    <IconButton
                        icon=IconName::Close
                        aria_label="Dismiss"
                        on_click=Callback::new(move |_| on_dismiss.call(()))
                    />
                }
            })}
        </div>
    }
}
