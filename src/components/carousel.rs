use leptos::{component, view, IntoView, View, Signal, SignalGet, SignalSet, SignalUpdate, SignalWith, SignalWithUntracked, SignalGetUntracked, create_signal, create_effect, store_value, Callback, Callable, web_sys};
use crate::carousel::{CarouselConfig, Direction};

/// Sliding carousel over `items`
///
/// Slides are rendered by `render`; with lazy loading only the slides near
/// the visible page get content. Clicks inside the slide container are
/// forwarded to `on_click`, controls live in a separate container.
#[component]
pub fn Carousel<T, F>(
    #[prop(into)] items: Signal<Vec<T>>,
    render: F,
    config: CarouselConfig,
    #[prop(optional)] on_click: Option<Callback<web_sys::MouseEvent>>,
) -> impl IntoView
where
    T: Clone + 'static,
    F: Fn(T) -> View + 'static,
{
    let (index, set_index) = create_signal(0usize);
    let drag_start = store_value(None::<i32>);
    let render = store_value(render);

    let padding_style = format!("padding: 0 {}px;", config.edge_padding_px);
    let container_class = config.container.clone();
    let controls_id = config.controls_container.clone();
    let config = store_value(config);

    // Removing slides must not leave the carousel past its last page
    create_effect(move |_| {
        let count = items.with(Vec::len);
        let current = index.get_untracked();
        let clamped = config.with_value(|c| c.clamp_index(current, count));
        if clamped != current {
            set_index.set(clamped);
        }
    });

    let go = move |direction: Direction| {
        let count = items.with_untracked(Vec::len);
        set_index.update(|i| *i = config.with_value(|c| c.go(direction, *i, count)));
    };

    let handle_mouse_down = move |ev: web_sys::MouseEvent| {
        drag_start.set_value(Some(ev.client_x()));
    };

    let handle_mouse_up = move |ev: web_sys::MouseEvent| {
        let Some(start) = drag_start.get_value() else { return };
        drag_start.set_value(None);
        if let Some(direction) = config.with_value(|c| c.drag_direction(ev.client_x() - start)) {
            go(direction);
        }
    };

    let handle_click = move |ev: web_sys::MouseEvent| {
        if let Some(on_click) = on_click {
            on_click.call(ev);
        }
    };

    let track_style = move || {
        config.with_value(|c| {
            format!(
                "display: flex; transform: translateX({}%); transition: transform {}ms ease;",
                c.track_offset_percent(index.get()),
                c.speed_ms
            )
        })
    };

    let slides = move || {
        let current = index.get();
        let all = items.get();
        let count = all.len();
        let slide_style = config.with_value(|c| format!("flex: 0 0 {}%;", c.slide_width_percent()));
        all.into_iter()
            .enumerate()
            .map(|(i, item)| {
                if config.with_value(|c| c.is_loaded(i, current, count)) {
                    view! {
                        <div class="carousel-slide" style=slide_style.clone()>
                            {render.with_value(|r| r(item))}
                        </div>
                    }.into_view()
                } else {
                    view! {
                        <div class="carousel-slide carousel-slide-pending" style=slide_style.clone()></div>
                    }.into_view()
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="carousel" style=padding_style>
            <div
                class=container_class
                style="overflow: hidden;"
                on:click=handle_click
                on:mousedown=handle_mouse_down
                on:mouseup=handle_mouse_up
                on:mouseleave=move |_| drag_start.set_value(None)
            >
                <div class="carousel-track" style=track_style>
                    {slides}
                </div>
            </div>
            <div id=controls_id class="carousel-controls">
                <button class="carousel-prev" title="Previous" on:click=move |_| go(Direction::Prev)>"‹"</button>
                <button class="carousel-next" title="Next" on:click=move |_| go(Direction::Next)>"›"</button>
            </div>
        </div>
    }
}
