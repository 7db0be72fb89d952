use super::*;

#[component]
/// Shared card surface.
pub fn Card(
    #[prop(default = LayoutPadding::Md)] padding: LayoutPadding,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <article
            class=merge_layout_class("ui-card", layout_class)
            data-ui-primitive="true"
            data-ui-kind="card"
            data-ui-slot=ui_slot
            data-ui-padding=padding.token()
        >
            {children()}
        </article>
    }
}

#[component]
/// Section heading.
pub fn Heading(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <h2
            class=merge_layout_class("ui-heading", layout_class)
            id=id
            data-ui-primitive="true"
            data-ui-kind="heading"
        >
            {children()}
        </h2>
    }
}

#[component]
/// Inline form error line; renders nothing while `message` is empty.
pub fn FieldMessage(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    move || {
        message.get().map(|text| {
            view! {
                <p
                    class="ui-field-message"
                    role="alert"
                    data-ui-primitive="true"
                    data-ui-kind="field-message"
                    data-ui-tone="error"
                >
                    {text}
                </p>
            }
        })
    }
}
