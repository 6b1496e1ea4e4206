use crate::shared::components::ui::Badge;
use contracts::domain::{total_marks, Milestone};
use leptos::prelude::*;

#[component]
pub fn MilestoneTable(milestones: Memo<Vec<Milestone>>) -> impl IntoView {
    view! {
        <div class="table-wrapper">
            <table class="table">
                <thead>
                    <tr>
                        <th>"#"</th>
                        <th>"Milestone"</th>
                        <th>"Type"</th>
                        <th>"Date"</th>
                        <th class="table__cell--numeric">"Marks"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || milestones.get().into_iter().enumerate().map(|(i, m)| view! {
                        <tr>
                            <td>{i + 1}</td>
                            <td>{m.name.clone()}</td>
                            <td>
                                <Badge tone=m.category.color_class()>{m.category.display_name()}</Badge>
                            </td>
                            <td>{m.date.clone()}</td>
                            <td class="table__cell--numeric">{m.marks}</td>
                        </tr>
                    }).collect_view()}
                </tbody>
                <tfoot>
                    <tr>
                        <td colspan="4">"Total"</td>
                        <td class="table__cell--numeric">
                            {move || milestones.with(|list| total_marks(list.iter()))}
                        </td>
                    </tr>
                </tfoot>
            </table>
        </div>
    }
}
