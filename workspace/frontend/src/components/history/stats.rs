use common::SummaryStats;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub summary: SummaryStats,
}

#[function_component(SummaryCards)]
pub fn summary_cards(props: &Props) -> Html {
    let summary = &props.summary;
    let cards = [
        ("Total Predictions", summary.total_predictions.to_string()),
        ("Unique Crops", summary.unique_crops.to_string()),
        ("Unique Fertilizers", summary.unique_fertilizers.to_string()),
        ("Average pH", summary.average_ph_display()),
    ];

    html! {
        <div class="mt-6">
            <h3 class="text-lg font-semibold mb-4">{"Summary Statistics"}</h3>
            <div class="grid grid-cols-1 md:grid-cols-4 gap-4">
                { for cards.into_iter().map(|(title, value)| html! {
                    <div class="stats shadow bg-base-100">
                        <div class="stat">
                            <div class="stat-title">{title}</div>
                            <div class="stat-value text-primary">{value}</div>
                        </div>
                    </div>
                }) }
            </div>
        </div>
    }
}
