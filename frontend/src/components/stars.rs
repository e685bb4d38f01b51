use web_sys::js_sys::Math;
use yew::prelude::*;

const STAR_COUNT: usize = 100;

#[derive(Clone, Debug, PartialEq)]
pub struct Star {
    pub size_px: f64,
    pub left_pct: f64,
    pub top_pct: f64,
    pub twinkle_s: f64,
}

impl Star {
    /// Builds a star from four uniform samples in `[0, 1)`.
    pub fn from_samples(size: f64, left: f64, top: f64, twinkle: f64) -> Self {
        Self {
            size_px: size * 3.0 + 1.0,
            left_pct: left * 100.0,
            top_pct: top * 100.0,
            twinkle_s: twinkle * 3.0 + 2.0,
        }
    }

    fn style(&self) -> String {
        format!(
            "width: {size}px; height: {size}px; left: {}%; top: {}%; animation-duration: {}s;",
            self.left_pct,
            self.top_pct,
            self.twinkle_s,
            size = self.size_px,
        )
    }
}

fn random_sky() -> Vec<Star> {
    (0..STAR_COUNT)
        .map(|_| Star::from_samples(Math::random(), Math::random(), Math::random(), Math::random()))
        .collect()
}

/// Fixed backdrop of twinkling stars behind every page.
#[function_component(Stars)]
pub fn stars() -> Html {
    let sky = use_state(random_sky);

    html! {
        <div class="stars">
            { for sky.iter().map(|star| html! { <div class="star" style={star.style()}></div> }) }
            <style>
                {r#"
                    .stars {
                        position: fixed;
                        inset: 0;
                        pointer-events: none;
                        z-index: 0;
                        overflow: hidden;
                    }
                    @keyframes twinkle {
                        0%, 100% { opacity: 0.2; transform: scale(0.8); }
                        50% { opacity: 1; transform: scale(1); }
                    }
                    .star {
                        position: absolute;
                        background: #fff;
                        border-radius: 50%;
                        box-shadow: 0 0 10px rgba(255, 255, 255, 0.8);
                        animation: twinkle 3s infinite;
                    }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_map_into_ranges() {
        let low = Star::from_samples(0.0, 0.0, 0.0, 0.0);
        assert_eq!(low, Star { size_px: 1.0, left_pct: 0.0, top_pct: 0.0, twinkle_s: 2.0 });

        let high = Star::from_samples(0.5, 0.25, 0.75, 0.5);
        assert_eq!(high.size_px, 2.5);
        assert_eq!(high.left_pct, 25.0);
        assert_eq!(high.top_pct, 75.0);
        assert_eq!(high.twinkle_s, 3.5);
    }
}
