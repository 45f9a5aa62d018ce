use analytics::{HistoryAnalytics, NormalizedRecord, SoilParameter};
use std::rc::Rc;
use yew::prelude::*;

/// Soil columns in table order.
const SOIL_COLUMNS: [SoilParameter; 7] = SoilParameter::ALL;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub history: Rc<HistoryAnalytics>,
}

#[function_component(HistoryTable)]
pub fn history_table(props: &Props) -> Html {
    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body overflow-x-auto">
                <table class="table table-zebra table-sm">
                    <thead>
                        <tr>
                            <th>{"Date"}</th>
                            <th>{"Crop"}</th>
                            <th>{"Fertilizer"}</th>
                            { for SOIL_COLUMNS.iter().map(|param| html! { <th>{param.column()}</th> }) }
                        </tr>
                    </thead>
                    <tbody>
                        { for props.history.records().iter().enumerate().map(|(index, record)| row(index, record)) }
                    </tbody>
                </table>
            </div>
        </div>
    }
}

fn row(index: usize, record: &NormalizedRecord) -> Html {
    html! {
        <tr key={index}>
            <td>{&record.prediction_date}</td>
            <td>{record.crop_display()}</td>
            <td>{record.fertilizer_display()}</td>
            { for SOIL_COLUMNS.iter().map(|param| html! { <td>{record.soil.display(*param)}</td> }) }
        </tr>
    }
}
