//! Days/hours/minutes/seconds readout for one bonus box.

use leptos::prelude::*;

use crate::util::countdown::CountdownValues;

#[component]
pub fn CountdownBadge(countdown: CountdownValues) -> impl IntoView {
    let expired = countdown.is_expired();
    let label = countdown.label();

    view! {
        <div class="countdown" class:countdown--expired=expired aria-label=label>
            {countdown
                .segments()
                .into_iter()
                .map(|(value, unit)| {
                    view! {
                        <span class="countdown__segment">
                            <span class="countdown__value">{value}</span>
                            <span class="countdown__unit">{unit}</span>
                        </span>
                    }
                })
                .collect_view()}
        </div>
    }
}
