use yew::prelude::*;

/// Which video, if any, a gallery currently has open.
pub type OpenVideo = UseStateHandle<Option<u32>>;

/// Round play badge laid over a video tile.
pub fn play_button(open: &OpenVideo, item_id: u32) -> Html {
    let onclick = {
        let open = open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            open.set(Some(item_id));
        })
    };

    html! {
        <button class="play-overlay" {onclick} aria-label="Play video">
            <span class="play-badge">{"▶"}</span>
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct VideoDialogProps {
    #[prop_or_default]
    pub video_id: Option<AttrValue>,
    pub on_close: Callback<()>,
}

/// Modal frame for a gallery video. There is no embedded player yet; the
/// frame shows a placeholder naming the video.
#[function_component(VideoDialog)]
pub fn video_dialog(props: &VideoDialogProps) -> Html {
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    let label = match &props.video_id {
        Some(id) => format!("Video {} Player Placeholder", id),
        None => "Video Player Placeholder (1280x720px)".to_string(),
    };

    html! {
        <div class="video-dialog-backdrop" onclick={close.clone()}>
            <div class="video-dialog" onclick={keep_open} role="dialog" aria-modal="true">
                <button class="video-dialog-close" onclick={close} aria-label="Close">{"×"}</button>
                <div class="video-frame">
                    <p>{label}</p>
                </div>
            </div>
            <style>
                {r#"
                    .video-dialog-backdrop {
                        position: fixed;
                        inset: 0;
                        z-index: 80;
                        background: rgba(0, 0, 0, 0.8);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 1rem;
                    }
                    .video-dialog {
                        position: relative;
                        width: 100%;
                        max-width: 56rem;
                        padding: 0.25rem;
                        background: #000;
                        border: 1px solid #1f2937;
                        border-radius: 0.5rem;
                    }
                    .video-dialog-close {
                        position: absolute;
                        top: -2.5rem;
                        right: 0;
                        background: none;
                        border: none;
                        color: #fff;
                        font-size: 2rem;
                        cursor: pointer;
                    }
                    .video-frame {
                        aspect-ratio: 16 / 9;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        color: rgba(255, 255, 255, 0.5);
                    }
                "#}
            </style>
        </div>
    }
}
