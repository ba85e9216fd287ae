use leptos::{component, view, IntoView, Children, MaybeSignal, SignalGet, store_value, web_sys};

/// Titled dialog frame with a close button
///
/// Escape pressed inside the dialog closes it as well.
#[component]
pub fn Window(
    #[prop(into)] title: MaybeSignal<String>,
    on_close: impl Fn() + 'static,
    children: Children,
) -> impl IntoView {
    let on_close = store_value(on_close);

    let handle_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.stop_propagation();
            on_close.with_value(|close| close());
        }
    };

    view! {
        <div class="window" role="dialog" on:keydown=handle_keydown>
            <div class="window-header">
                <span class="window-title">{move || title.get()}</span>
                <button
                    class="window-close"
                    title="Close"
                    on:click=move |_| on_close.with_value(|close| close())
                >
                    "×"
                </button>
            </div>
            <div class="window-content">
                {children()}
            </div>
        </div>
    }
}
