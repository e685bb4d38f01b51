use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// `false` until `delay_ms` after mount, then `true` for good.
#[hook]
pub fn use_delayed_flag(delay_ms: u32) -> bool {
    let flag = use_state(|| false);

    {
        let flag = flag.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(delay_ms, move || flag.set(true));
                move || drop(timeout)
            },
            (),
        );
    }

    *flag
}
