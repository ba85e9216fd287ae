use leptos::{component, view, IntoView, ReadSignal, SignalGet, SignalUpdate, WriteSignal, spawn_local};
use gloo_timers::future::TimeoutFuture;
use crate::constants::TOAST_TIMEOUT_MS;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ToastKind {
    #[default]
    Info,
    Error,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub visible: bool,
    /// Bumped on every show so a stale timeout doesn't hide a newer toast
    pub generation: u32,
}

impl Toast {
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Info,
            visible: true,
            generation: 0,
        }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Error,
            visible: true,
            generation: 0,
        }
    }
}

/// Show `toast` and hide it again after `TOAST_TIMEOUT_MS`
pub fn show_toast(set_toast: WriteSignal<Toast>, toast: Toast) {
    let mut generation = 0;
    set_toast.update(|current| {
        generation = current.generation.wrapping_add(1);
        *current = Toast { generation, ..toast };
    });

    spawn_local(async move {
        TimeoutFuture::new(TOAST_TIMEOUT_MS).await;
        set_toast.update(|current| {
            if current.generation == generation {
                current.visible = false;
            }
        });
    });
}

#[component]
#[must_use]
pub fn ToastNotification(toast: ReadSignal<Toast>) -> impl IntoView {
    view! {
        {move || {
            let t = toast.get();
            if t.visible {
                let class = match t.kind {
                    ToastKind::Info => "toast toast-visible",
                    ToastKind::Error => "toast toast-visible toast-error",
                };
                view! {
                    <div class=class role="status">
                        {t.message}
                    </div>
                }.into_view()
            } else {
                view! { <div class="toast"></div> }.into_view()
            }
        }}
    }
}
