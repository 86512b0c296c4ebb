use yew::prelude::*;

use crate::roadmap::{TimelineSide, TIMELINE};

#[function_component(DevelopmentTimeline)]
pub fn development_timeline() -> Html {
    html! {
        <div class="timeline-visualization">
            <h3 class="timeline-title">{"Development Timeline"}</h3>
            <div class="timeline-container">
                { for TIMELINE.iter().enumerate().map(|(index, item)| {
                    let side = TimelineSide::for_index(index).class();
                    html! {
                        <div class={classes!("timeline-item", side)}>
                            <div class={classes!("timeline-content", side)}>
                                <div class="timeline-date">{item.date}</div>
                                <h4 class="timeline-phase">{item.phase}</h4>
                                <p class="timeline-description">{item.description}</p>
                            </div>
                        </div>
                    }
                }) }
            </div>
        </div>
    }
}
