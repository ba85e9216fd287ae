use leptos::{component, view, IntoView, Children, SignalGet, Signal, store_value, Callback, Callable, web_sys};

/// Full-page backdrop holding a dialog while `is_open` is true
///
/// Clicks on the backdrop itself (not on the dialog) call `on_dismiss`.
#[component]
#[must_use]
pub fn ModalOverlay(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(optional)] on_dismiss: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let children = store_value(children());

    let on_backdrop_click = move |ev: web_sys::MouseEvent| {
        let Some(on_dismiss) = on_dismiss else { return };
        if ev.target() == ev.current_target() {
            on_dismiss.call(());
        }
    };

    view! {
        {move || if is_open.get() {
            view! {
                <div class="modal-overlay" on:click=on_backdrop_click>
                    {children.get_value()}
                </div>
            }.into_view()
        } else {
            ().into_view()
        }}
    }
}
