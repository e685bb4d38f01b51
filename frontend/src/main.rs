use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod content;
mod hooks {
    pub mod carousel;
    pub mod delay;
    pub mod reveal;
    pub mod rotator;
    pub mod scroll;
    pub mod typewriter;
}
mod contact {
    pub mod form;
    pub mod mailer;
}
mod components {
    pub mod about;
    pub mod carousel;
    pub mod client_logos;
    pub mod contact_form;
    pub mod contact_popup;
    pub mod faq;
    pub mod featured_work;
    pub mod footer;
    pub mod gallery_section;
    pub mod hero;
    pub mod navbar;
    pub mod notification;
    pub mod scrolling_gallery;
    pub mod social_overlay;
    pub mod stars;
    pub mod testimonials;
    pub mod video_dialog;
    pub mod vision_mission;
    pub mod why_hire_me;
    pub mod work_card;
}
mod pages {
    pub mod all_events;
    pub mod gallery;
    pub mod home;
    pub mod not_found;
    pub mod work_detail;
}

use components::{
    notification::{ToastHandle, Toaster, Toasts},
    stars::Stars,
};
use pages::{
    all_events::AllEvents,
    gallery::Gallery,
    home::Home,
    not_found::NotFound,
    work_detail::WorkDetail,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/work/:id")]
    WorkDetail { id: String },
    #[at("/all-events")]
    AllEvents,
    #[at("/gallery")]
    Gallery,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::WorkDetail { id } => {
            info!("Rendering Work detail page for {}", id);
            html! { <WorkDetail {id} /> }
        },
        Route::AllEvents => {
            info!("Rendering All Events page");
            html! { <AllEvents /> }
        },
        Route::Gallery => {
            info!("Rendering Gallery page");
            html! { <Gallery /> }
        },
        Route::NotFound => {
            info!("Rendering Not Found page");
            html! { <NotFound /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    let toasts = use_reducer(Toasts::default);

    use_effect_with_deps(
        move |_| {
            config::apply_theme();
            || ()
        },
        (),
    );

    html! {
        <ContextProvider<ToastHandle> context={toasts}>
            <div class={classes!("app-root", config::SITE_THEME.css_class())}>
                <Stars />
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
                <Toaster />
            </div>
        </ContextProvider<ToastHandle>>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting site");
    yew::Renderer::<App>::new().render();
}
