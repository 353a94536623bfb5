//! Live slide preview with desktop grid and mobile carousel modes.
//!
//! SYSTEM CONTEXT
//! ==============
//! The slide editor passes its title and bonus box form state as signals.
//! This component never writes them back; persistence stays with the
//! editor's submit handler.
//!
//! DESIGN
//! ======
//! Device mode, carousel index and the countdown clock are local signals.
//! One `PreviewModel` memo combines them with the form state, so a tick only
//! re-renders the cards. In the browser a `Ticker` owned by this component
//! refreshes the clock and is dropped on unmount.

use leptos::prelude::*;
use time::OffsetDateTime;

use crate::components::bonus_box_card::BonusBoxCard;
use crate::config::PreviewConfig;
use crate::state::carousel::CarouselState;
use crate::state::preview::{DeviceMode, PreviewModel};
use crate::state::slide::{BonusBox, MAX_BOXES};
#[cfg(feature = "hydrate")]
use crate::util::ticker::Ticker;

/// Preview of a promotional slide as players would see it.
#[component]
pub fn SlidePreview(
    #[prop(into)] title: Signal<String>,
    #[prop(into)] boxes: Signal<Vec<BonusBox>>,
    #[prop(optional)] config: Option<PreviewConfig>,
    #[prop(optional)] initial_device: DeviceMode,
) -> impl IntoView {
    let config = StoredValue::new(config.unwrap_or_default());
    let device = RwSignal::new(initial_device);
    let carousel = RwSignal::new(CarouselState::new(0, initial_device));
    let now = RwSignal::new(OffsetDateTime::now_utc());

    // Rewind the carousel when the box list or device mode changes.
    Effect::new(move || {
        let total = boxes.with(Vec::len);
        let mode = device.get();
        let mut next = carousel.get_untracked();
        if next.sync(total, mode) {
            carousel.set(next);
        }
    });

    Effect::new(move || {
        let total = boxes.with(Vec::len);
        if total > MAX_BOXES {
            leptos::logging::warn!("slide preview shows {MAX_BOXES} of {total} bonus boxes");
        }
    });

    #[cfg(feature = "hydrate")]
    {
        let tick_interval = config.with_value(PreviewConfig::tick_interval);
        let ticker = Ticker::start(tick_interval, move || now.set(OffsetDateTime::now_utc()));
        on_cleanup(move || drop(ticker));
    }

    let model = Memo::new(move |_| {
        let title = title.get();
        let mode = device.get();
        let current = carousel.get().current();
        let at = now.get();
        boxes.with(|b| config.with_value(|cfg| PreviewModel::build(&title, b, cfg, mode, current, at)))
    });

    let is_mobile = move || device.get() == DeviceMode::Mobile;
    let is_empty = move || model.with(|m| m.cards.is_empty());

    let device_button = move |mode: DeviceMode| {
        view! {
            <button
                class="slide-preview__device"
                class:slide-preview__device--active=move || device.get() == mode
                type="button"
                on:click=move |_| device.set(mode)
            >
                {mode.label()}
            </button>
        }
    };

    let desktop_view = move || {
        view! {
            <div class="slide-preview__grid" style=move || model.with(PreviewModel::grid_style)>
                {move || {
                    model
                        .get()
                        .cards
                        .into_iter()
                        .map(|card| view! { <BonusBoxCard card=card device=DeviceMode::Desktop /> })
                        .collect_view()
                }}
            </div>
        }
    };

    let mobile_view = move || {
        let single = move || model.with(|m| m.slide_count < 2);
        view! {
            <div class="slide-preview__carousel">
                <button
                    class="slide-preview__nav slide-preview__nav--prev"
                    type="button"
                    aria-label="Previous slide"
                    disabled=single
                    on:click=move |_| carousel.update(CarouselState::prev)
                >
                    "‹"
                </button>
                <div class="slide-preview__slide">
                    {move || {
                        model
                            .get()
                            .cards
                            .into_iter()
                            .map(|card| view! { <BonusBoxCard card=card device=DeviceMode::Mobile /> })
                            .collect_view()
                    }}
                </div>
                <button
                    class="slide-preview__nav slide-preview__nav--next"
                    type="button"
                    aria-label="Next slide"
                    disabled=single
                    on:click=move |_| carousel.update(CarouselState::next)
                >
                    "›"
                </button>
                <div class="slide-preview__dots">
                    {move || {
                        let (count, current) = model.with(|m| (m.slide_count, m.current_slide.unwrap_or(0)));
                        (0..count)
                            .map(|i| {
                                let active = i == current;
                                let label = format!("Slide {}", i + 1);
                                view! {
                                    <button
                                        class="slide-preview__dot"
                                        class:slide-preview__dot--active=active
                                        type="button"
                                        aria-label=label
                                        on:click=move |_| carousel.update(|c| c.go_to(i))
                                    ></button>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </div>
        }
    };

    view! {
        <section class="slide-preview" class:slide-preview--mobile=is_mobile>
            <header class="slide-preview__header">
                <h3 class="slide-preview__title">{move || model.with(|m| m.title.clone())}</h3>
                <div class="slide-preview__devices">
                    {device_button(DeviceMode::Desktop)}
                    {device_button(DeviceMode::Mobile)}
                </div>
            </header>
            <Show when=is_empty>
                <div class="slide-preview__empty">"Add a bonus box to see the preview."</div>
            </Show>
            <Show when=move || !is_mobile() fallback=mobile_view>
                {desktop_view()}
            </Show>
        </section>
    }
}
