mod table;
mod timeline;

use crate::shared::components::page_header::SectionHeader;
use crate::shared::components::ui::{Select, Toggle};
use contracts::content;
use contracts::domain::total_marks;
use contracts::state::{MilestoneBoard, ViewMode};
use leptos::prelude::*;
use table::MilestoneTable;
use timeline::MilestoneTimeline;

#[component]
pub fn MilestonesPage() -> impl IntoView {
    let milestones = content::site().milestones.as_slice();
    let board = RwSignal::new(MilestoneBoard::new());

    let visible = Memo::new(move |_| {
        board.with(|b| b.visible(milestones).into_iter().cloned().collect::<Vec<_>>())
    });

    let filter_value = Signal::derive(move || board.with(|b| b.filter_code().to_string()));
    let on_filter = Callback::new(move |code: String| {
        log::debug!("milestone filter -> {}", code);
        board.update(|b| b.set_filter_code(&code));
    });

    let is_table = Signal::derive(move || board.with(|b| b.view_mode() == ViewMode::Table));
    let on_toggle = Callback::new(move |table: bool| {
        let mode = if table { ViewMode::Table } else { ViewMode::Timeline };
        board.update(|b| b.set_view_mode(mode));
    });

    let overall = total_marks(milestones);
    let shown_marks = move || visible.with(|list| total_marks(list.iter()));

    view! {
        <div class="page">
            <SectionHeader
                title="Project Milestones"
                subtitle="Assessments across the research year and the marks each one carries"
                primary=true
            />

            <div class="toolbar">
                <Select
                    value=filter_value
                    on_change=on_filter
                    options=MilestoneBoard::filter_options()
                    aria_label="Filter milestones by type"
                />
                <Toggle checked=is_table on_change=on_toggle off_label="Timeline" on_label="Table" />
                <span class="toolbar__summary">
                    {move || format!("{} of {} marks shown", shown_marks(), overall)}
                </span>
            </div>

            <Show
                when=move || !visible.with(|list| list.is_empty())
                fallback=|| view! { <p class="empty-state">"No milestones in this category."</p> }
            >
                {move || {
                    if is_table.get() {
                        view! { <MilestoneTable milestones=visible /> }.into_any()
                    } else {
                        view! { <MilestoneTimeline milestones=visible /> }.into_any()
                    }
                }}
            </Show>
        </div>
    }
}
