use gloo_timers::callback::Interval;
use yew::prelude::*;

/// Reveals a fixed string one character per tick.
#[derive(Clone, Debug, PartialEq)]
pub struct Typewriter {
    chars: Vec<char>,
    shown: usize,
    complete: bool,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self { chars: text.chars().collect(), shown: 0, complete: false }
    }

    /// Shows one more character. Completes on the tick that shows the last
    /// one; ticks after that do nothing.
    pub fn tick(&mut self) {
        if self.complete {
            return;
        }
        if self.shown < self.chars.len() {
            self.shown += 1;
        }
        self.complete = self.shown == self.chars.len();
    }

    pub fn text(&self) -> String {
        self.chars[..self.shown].iter().collect()
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn view(&self) -> TypewriterView {
        TypewriterView { text: self.text(), complete: self.is_complete() }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TypewriterView {
    pub text: String,
    pub complete: bool,
}

/// Whether the typing interval should be running.
fn should_tick(enabled: bool, complete: bool) -> bool {
    enabled && !complete
}

/// Types `text` out once per mount, starting when `enabled` turns true.
/// The interval is dropped on completion or unmount, whichever comes first.
#[hook]
pub fn use_typewriter(text: &'static str, interval_ms: u32, enabled: bool) -> TypewriterView {
    let writer = use_mut_ref(|| Typewriter::new(text));
    let view = use_state(TypewriterView::default);

    {
        let complete = view.complete;
        let view = view.clone();
        let writer = writer.clone();
        use_effect_with_deps(
            move |&(enabled, complete)| {
                let interval = should_tick(enabled, complete).then(|| {
                    Interval::new(interval_ms, move || {
                        let mut writer = writer.borrow_mut();
                        writer.tick();
                        view.set(writer.view());
                    })
                });
                move || drop(interval)
            },
            (enabled, complete),
        );
    }

    (*view).clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grows_one_character_per_tick() {
        let mut writer = Typewriter::new("Hi");
        assert_eq!(writer.text(), "");

        writer.tick();
        assert_eq!(writer.text(), "H");
        assert!(!writer.is_complete());

        writer.tick();
        assert_eq!(writer.text(), "Hi");
        assert!(writer.is_complete());
    }

    #[test]
    fn extra_ticks_are_noops() {
        let mut writer = Typewriter::new("Hi");
        for _ in 0..5 {
            writer.tick();
        }
        assert_eq!(writer.text(), "Hi");
        assert!(writer.is_complete());
    }

    #[test]
    fn never_complete_before_full_length() {
        let text = "Transforming Events";
        let mut writer = Typewriter::new(text);
        for _ in 1..text.chars().count() {
            writer.tick();
            assert!(!writer.is_complete());
        }
        writer.tick();
        assert!(writer.is_complete());
    }

    #[test]
    fn counts_characters_not_bytes() {
        let mut writer = Typewriter::new("née");
        writer.tick();
        writer.tick();
        assert_eq!(writer.text(), "né");
    }

    #[test]
    fn ticks_only_while_enabled_and_unfinished() {
        assert!(!should_tick(false, false));
        assert!(should_tick(true, false));
        assert!(!should_tick(true, true));

        let mut writer = Typewriter::new("ok");
        writer.tick();
        assert!(should_tick(true, writer.view().complete));
        writer.tick();
        assert!(!should_tick(true, writer.view().complete));
    }

    #[test]
    fn empty_text_completes_on_first_tick() {
        let mut writer = Typewriter::new("");
        assert!(!writer.is_complete());
        writer.tick();
        assert!(writer.is_complete());
        assert_eq!(writer.view(), TypewriterView { text: String::new(), complete: true });
    }
}
