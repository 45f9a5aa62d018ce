use analytics::Theme;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: String,
    #[prop_or_default]
    pub theme: Theme,
    #[prop_or_default]
    pub on_toggle_theme: Option<Callback<()>>,
    #[prop_or_default]
    pub on_refresh: Option<Callback<()>>,
}

#[function_component(Navbar)]
pub fn navbar(props: &Props) -> Html {
    let refresh_button = props.on_refresh.clone().map(|on_refresh| {
        let onclick = Callback::from(move |_| {
            log::debug!("Refresh requested from navbar");
            on_refresh.emit(());
        });
        html! {
            <button class="btn btn-ghost btn-circle" title="Refresh" {onclick}>
                <i class="fas fa-sync-alt text-xl"></i>
            </button>
        }
    });

    let theme_toggle = props.on_toggle_theme.clone().map(|on_toggle| {
        let onchange = Callback::from(move |_: Event| on_toggle.emit(()));
        html! {
            <label class="swap swap-rotate btn btn-ghost btn-circle">
                <input id="theme-toggle" type="checkbox" checked={props.theme == Theme::Dark} {onchange} />
                <i class="swap-on fill-current fas fa-sun text-xl"></i>
                <i class="swap-off fill-current fas fa-moon text-xl"></i>
            </label>
        }
    });

    html! {
        <div class="navbar bg-base-100 shadow-sm z-40 sticky top-0">
            <div class="flex-none lg:hidden">
                <label aria-label="open sidebar" class="btn btn-square btn-ghost" for="my-drawer">
                    <i class="fas fa-bars text-xl"></i>
                </label>
            </div>
            <div class="flex-1 px-4">
                <h1 class="text-xl font-bold" id="page-title">{ &props.title }</h1>
            </div>
            <div class="flex-none gap-2">
                {refresh_button}
                {theme_toggle}
            </div>
        </div>
    }
}
