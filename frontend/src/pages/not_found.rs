use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

fn missing_route_message(path: &str) -> String {
    format!("404: no route for {}", path)
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let location = use_location().map(|l| l.path().to_string()).unwrap_or_default();

    // Once per missing path, not once per render
    use_effect_with_deps(
        move |path: &String| {
            log::warn!("{}", missing_route_message(path));
            || ()
        },
        location,
    );

    html! {
        <div class="not-found-page">
            <div>
                <h1>{"404"}</h1>
                <p>{"Oops! Page not found"}</p>
                <Link<Route> to={Route::Home} classes="text-link">{"Return to Home"}</Link<Route>>
            </div>
            <style>
                {r#"
                    .not-found-page {
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        position: relative;
                        z-index: 1;
                    }
                    .not-found-page h1 { font-size: 3rem; margin-bottom: 1rem; }
                    .not-found-page p { font-size: 1.25rem; color: rgba(255, 255, 255, 0.7); margin-bottom: 1rem; }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warning_names_the_missing_path() {
        assert_eq!(missing_route_message("/nowhere"), "404: no route for /nowhere");
    }
}
