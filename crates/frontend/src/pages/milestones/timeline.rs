use crate::shared::components::card_animated::{stagger, CardAnimated};
use crate::shared::components::ui::Badge;
use crate::shared::icons::icon;
use contracts::domain::Milestone;
use leptos::prelude::*;

/// Vertical timeline, one card per milestone on alternating sides
#[component]
pub fn MilestoneTimeline(milestones: Memo<Vec<Milestone>>) -> impl IntoView {
    view! {
        <ol class="timeline">
            {move || milestones.get().into_iter().enumerate().map(|(i, m)| {
                let side = if i % 2 == 0 { "timeline__item--left" } else { "timeline__item--right" };
                let tone = m.category.color_class();
                view! {
                    <li class=format!("timeline__item {}", side)>
                        <span class=format!("timeline__marker {}", tone) aria-hidden="true">
                            {icon(m.category.icon())}
                        </span>
                        <CardAnimated delay_ms=stagger(i) class="timeline__card">
                            <div class="timeline__meta">
                                <Badge tone=tone>{m.category.display_name()}</Badge>
                                <span class="timeline__date">{icon("calendar")}{m.date.clone()}</span>
                            </div>
                            <h3 class="timeline__title">{m.name.clone()}</h3>
                            {(!m.description.is_empty()).then(|| view! {
                                <p class="timeline__text">{m.description.clone()}</p>
                            })}
                            <span class="timeline__marks">{format!("{} marks", m.marks)}</span>
                        </CardAnimated>
                    </li>
                }
            }).collect_view()}
        </ol>
    }
}
