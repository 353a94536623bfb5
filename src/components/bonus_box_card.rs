//! One bonus box card: background art, rewards, countdown and button.
//!
//! DESIGN
//! ======
//! The card renders a `CardModel` as-is. Image resolution, alignment and
//! countdown math already happened in `state::preview`, so the same card
//! serves both the desktop grid and the mobile carousel.

use leptos::prelude::*;

use crate::components::countdown_badge::CountdownBadge;
use crate::state::preview::{CardModel, DeviceMode};

#[component]
pub fn BonusBoxCard(card: CardModel, #[prop(optional)] device: DeviceMode) -> impl IntoView {
    let style = card.style(device);
    let body_style = card.alignment.style();
    let placeholder = card.is_placeholder();
    let CardModel { index, object_image_url, button, countdown, rewards, .. } = card;
    let has_rewards = !rewards.is_empty();
    let mobile = device == DeviceMode::Mobile;

    view! {
        <article
            class="bonus-box"
            class:bonus-box--placeholder=placeholder
            class:bonus-box--mobile=mobile
            style=style
            data-index=index.to_string()
        >
            {object_image_url.map(|src| view! { <img class="bonus-box__object" src=src alt="" /> })}
            {has_rewards
                .then(|| {
                    view! {
                        <ul class="bonus-box__rewards">
                            {rewards
                                .into_iter()
                                .map(|text| view! { <li class="bonus-box__reward">{text}</li> })
                                .collect_view()}
                        </ul>
                    }
                })}
            <div class="bonus-box__body" style=body_style>
                {countdown.map(|countdown| view! { <CountdownBadge countdown=countdown /> })}
                {button.map(|text| view! { <button class="bonus-box__button" type="button">{text}</button> })}
            </div>
        </article>
    }
}
