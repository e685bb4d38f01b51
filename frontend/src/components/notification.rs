use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            ToastKind::Success => "✓",
            ToastKind::Error => "!",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

pub enum ToastAction {
    Push(ToastKind, String),
    Dismiss(u32),
}

/// Transient notifications currently on screen, oldest first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Toasts {
    next_id: u32,
    items: Vec<Toast>,
}

impl Toasts {
    pub fn items(&self) -> &[Toast] {
        &self.items
    }

    pub fn apply(&mut self, action: ToastAction) {
        match action {
            ToastAction::Push(kind, message) => {
                let id = self.next_id;
                self.next_id = self.next_id.wrapping_add(1);
                self.items.push(Toast { id, kind, message });
            }
            ToastAction::Dismiss(id) => self.items.retain(|toast| toast.id != id),
        }
    }
}

impl Reducible for Toasts {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        next.into()
    }
}

pub type ToastHandle = UseReducerHandle<Toasts>;

/// Shared toast list, provided once at the app root.
#[hook]
pub fn use_toasts() -> Option<ToastHandle> {
    use_context::<ToastHandle>()
}

pub fn notify(toasts: &Option<ToastHandle>, kind: ToastKind, message: &str) {
    match toasts {
        Some(toasts) => toasts.dispatch(ToastAction::Push(kind, message.to_string())),
        None => log::warn!("No toast provider for: {}", message),
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
    on_dismiss: Callback<u32>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    {
        let id = props.toast.id;
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(config::TOAST_LIFETIME_MS, move || on_dismiss.emit(id));
                move || drop(timeout)
            },
            id,
        );
    }

    let close = {
        let id = props.toast.id;
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    html! {
        <div class={props.toast.kind.class()} role="status">
            <span class="toast-icon">{props.toast.kind.icon()}</span>
            <span class="toast-message">{props.toast.message.clone()}</span>
            <button class="toast-close" onclick={close} aria-label="Dismiss">{"×"}</button>
        </div>
    }
}

#[function_component(Toaster)]
pub fn toaster() -> Html {
    let toasts = use_toasts();
    let Some(toasts) = toasts else {
        return html! {};
    };

    let on_dismiss = {
        let toasts = toasts.clone();
        Callback::from(move |id: u32| toasts.dispatch(ToastAction::Dismiss(id)))
    };

    html! {
        <div class="toaster">
            <style>
                {r#"
                    .toaster {
                        position: fixed;
                        bottom: 1.5rem;
                        right: 1.5rem;
                        z-index: 100;
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                        max-width: 380px;
                    }
                    @keyframes toastIn {
                        from { transform: translateY(20px); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                    .toast {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        padding: 1rem 1.25rem;
                        border-radius: 12px;
                        background: rgba(17, 24, 39, 0.95);
                        backdrop-filter: blur(10px);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        color: #fff;
                        box-shadow: 0 16px 32px rgba(0, 0, 0, 0.3);
                        animation: toastIn 0.3s ease-out forwards;
                    }
                    .toast-success .toast-icon { color: #22c55e; }
                    .toast-error .toast-icon { color: #ef4444; }
                    .toast-message { flex: 1; font-size: 0.9rem; }
                    .toast-close {
                        background: none;
                        border: none;
                        color: rgba(255, 255, 255, 0.5);
                        cursor: pointer;
                        font-size: 1.1rem;
                    }
                    .toast-close:hover { color: #fff; }
                "#}
            </style>
            { for toasts.items().iter().map(|toast| html! {
                <ToastItem key={toast.id} toast={toast.clone()} on_dismiss={on_dismiss.clone()} />
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_assigns_increasing_ids() {
        let mut toasts = Toasts::default();
        toasts.apply(ToastAction::Push(ToastKind::Success, "a".into()));
        toasts.apply(ToastAction::Push(ToastKind::Error, "b".into()));
        let ids: Vec<u32> = toasts.items().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![0, 1]);
    }

    #[test]
    fn dismiss_removes_only_that_toast() {
        let mut toasts = Toasts::default();
        toasts.apply(ToastAction::Push(ToastKind::Success, "a".into()));
        toasts.apply(ToastAction::Push(ToastKind::Error, "b".into()));
        toasts.apply(ToastAction::Dismiss(0));
        assert_eq!(toasts.items().len(), 1);
        assert_eq!(toasts.items()[0].message, "b");
    }

    #[test]
    fn dismiss_unknown_id_is_harmless() {
        let mut toasts = Toasts::default();
        toasts.apply(ToastAction::Push(ToastKind::Success, "a".into()));
        toasts.apply(ToastAction::Dismiss(42));
        assert_eq!(toasts.items().len(), 1);
    }

    #[test]
    fn each_kind_renders_its_own_style() {
        assert_eq!(ToastKind::Success.class(), "toast toast-success");
        assert_eq!(ToastKind::Error.class(), "toast toast-error");
        assert_ne!(ToastKind::Success.icon(), ToastKind::Error.icon());
    }

    #[test]
    fn notify_without_provider_is_a_noop() {
        notify(&None, ToastKind::Success, "nobody listening");
    }
}
