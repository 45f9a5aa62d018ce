use analytics::Theme;
use yew::prelude::*;
use super::navbar::Navbar;
use super::sidebar::Sidebar;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
    pub title: String,
    #[prop_or_default]
    pub theme: Theme,
    #[prop_or_default]
    pub on_toggle_theme: Option<Callback<()>>,
    #[prop_or_default]
    pub on_refresh: Option<Callback<()>>,
}

pub fn theme_name(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "light",
        Theme::Dark => "dark",
    }
}

#[function_component(Layout)]
pub fn layout(props: &Props) -> Html {
    html! {
        <div class="drawer lg:drawer-open" data-theme={theme_name(props.theme)}>
            <input id="my-drawer" type="checkbox" class="drawer-toggle" />
            <div class="drawer-content flex flex-col min-h-screen bg-base-200 transition-all duration-300">
                <Navbar
                    title={props.title.clone()}
                    theme={props.theme}
                    on_toggle_theme={props.on_toggle_theme.clone()}
                    on_refresh={props.on_refresh.clone()}
                />
                <main class="flex-1 p-6 overflow-y-auto">
                    { for props.children.iter() }
                </main>
            </div>
            <Sidebar />
        </div>
    }
}
