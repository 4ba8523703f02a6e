//! Delete Button Component
//!
//! Two-click delete control. The first click swaps the label for a
//! confirmation prompt and blocks the default action; a second click within
//! the revert window lets the default action (form submit or link) through.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;

use crate::options::{Appearance, DEFAULT_REVERT_AFTER_MS};
use crate::placeholder::ControlTarget;
use crate::state::{Activation, ControlState};
use crate::timer::{BrowserScheduler, RevertScheduler};

/// Visual output for one state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// Inner markup of the control
    pub markup: String,
    pub class: String,
    /// Empty, or a min-width holding the pre-click size
    pub style: String,
}

/// Inline style pinning the control to `width` pixels or wider.
/// Anchors are inline boxes and ignore min-width unless made inline-block.
fn width_style(target: &ControlTarget, width: u32) -> String {
    match target {
        ControlTarget::Submit => format!("min-width: {}px", width),
        ControlTarget::Link { .. } => format!("display: inline-block; min-width: {}px", width),
    }
}

/// Pure render of the control for the given state
pub fn render(
    state: &ControlState,
    label: &str,
    appearance: &Appearance,
    target: &ControlTarget,
) -> Rendered {
    if !state.is_confirming() {
        return Rendered {
            markup: label.to_string(),
            class: appearance.link_class.clone(),
            style: String::new(),
        };
    }

    Rendered {
        markup: appearance.confirm_label.clone(),
        class: format!("{} {}", appearance.link_class, appearance.armed_class),
        style: state
            .min_width()
            .map(|width| width_style(target, width))
            .unwrap_or_default(),
    }
}

/// Rendered width of the element the click handler is attached to.
/// Uses the bounding box: clientWidth is 0 for inline anchors.
fn measure_width(ev: &MouseEvent) -> Option<u32> {
    let control = ev.current_target()?.dyn_into::<web_sys::Element>().ok()?;
    let width = control.get_bounding_client_rect().width().ceil();
    (width.is_finite() && width >= 0.0).then(|| width as u32)
}

/// Delete control requiring a confirming second click
///
/// # Arguments
/// * `label` - Markup shown while idle (taken from the placeholder)
/// * `target` - Submit button or link carrying the actual delete action
/// * `appearance` - Confirmation label and CSS classes
/// * `revert_after_ms` - How long the control stays armed
/// * `keep_width` - Hold the pre-click width while armed
#[component]
pub fn DeleteButton(
    #[prop(into)] label: String,
    target: ControlTarget,
    #[prop(optional)] appearance: Appearance,
    #[prop(default = DEFAULT_REVERT_AFTER_MS)] revert_after_ms: u32,
    #[prop(default = true)] keep_width: bool,
) -> impl IntoView {
    let state = RwSignal::new(ControlState::new());
    let scheduler = StoredValue::new_local(BrowserScheduler::new(move |token| {
        if state.try_update(|s| s.revert(token)).unwrap_or(false) {
            log::debug!("delete control reverted");
        }
    }));

    // Never let a revert fire against an unmounted control
    on_cleanup(move || {
        scheduler.try_update_value(|sched| {
            if state.try_update_untracked(|s| s.teardown(sched)).is_none() {
                sched.cancel();
            }
        });
    });

    let rendered = {
        let target = target.clone();
        Memo::new(move |_| state.with(|s| render(s, &label, &appearance, &target)))
    };

    let on_click = move |ev: MouseEvent| {
        let width = if keep_width { measure_width(&ev) } else { None };
        let activation = scheduler
            .try_update_value(|sched| {
                state.try_update(|s| s.activate(width, revert_after_ms, sched))
            })
            .flatten();

        if activation == Some(Activation::Armed) {
            ev.prevent_default();
            log::debug!("delete control armed for {}ms", revert_after_ms);
        }
    };

    let class = move || rendered.with(|r| r.class.clone());
    let style = move || rendered.with(|r| r.style.clone());
    let markup = move || rendered.with(|r| r.markup.clone());

    match target {
        ControlTarget::Submit => view! {
            <button type="submit" class=class style=style inner_html=markup on:click=on_click></button>
        }
        .into_any(),
        ControlTarget::Link { href } => view! {
            <a href=href class=class style=style inner_html=markup on:click=on_click></a>
        }
        .into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::ManualScheduler;

    #[test]
    fn test_idle_render_is_stable() {
        let state = ControlState::new();
        let appearance = Appearance::default();

        let first = render(&state, "[delete]", &appearance, &ControlTarget::Submit);
        let second = render(&state, "[delete]", &appearance, &ControlTarget::Submit);

        assert_eq!(first, second);
        assert_eq!(first.markup, "[delete]");
        assert_eq!(first.class, "bt-link");
        assert_eq!(first.style, "");
    }

    #[test]
    fn test_arm_then_revert_scenario() {
        let mut state = ControlState::new();
        let mut timer = ManualScheduler::new();
        let appearance = Appearance::default();

        assert_eq!(state.activate(Some(58), 1000, &mut timer), Activation::Armed);
        let armed = render(&state, "[delete]", &appearance, &ControlTarget::Submit);
        assert_eq!(armed.markup, "[sure?]");
        assert_eq!(armed.class, "bt-link delete-confirm");
        assert_eq!(armed.style, "min-width: 58px");

        let fired = timer.advance(1000).unwrap();
        state.revert(fired);
        let idle = render(&state, "[delete]", &appearance, &ControlTarget::Submit);
        assert_eq!(idle.markup, "[delete]");
        assert_eq!(idle.class, "bt-link");
        assert_eq!(idle.style, "");
    }

    #[test]
    fn test_confirm_within_window_is_not_blocked() {
        let mut state = ControlState::new();
        let mut timer = ManualScheduler::new();

        assert_eq!(state.activate(Some(58), 1000, &mut timer), Activation::Armed);
        timer.advance(500);
        assert_eq!(
            state.activate(Some(58), 1000, &mut timer),
            Activation::ConfirmThrough
        );
    }

    #[test]
    fn test_min_width_not_below_measured() {
        let mut state = ControlState::new();
        let mut timer = ManualScheduler::new();

        state.activate(Some(123), 1000, &mut timer);
        let rendered = render(&state, "[delete]", &Appearance::default(), &ControlTarget::Submit);
        let width: u32 = rendered
            .style
            .trim_start_matches("min-width: ")
            .trim_end_matches("px")
            .parse()
            .unwrap();
        assert!(width >= 123);
    }

    #[test]
    fn test_no_width_when_unmeasured() {
        let mut state = ControlState::new();
        let mut timer = ManualScheduler::new();

        state.activate(None, 1000, &mut timer);
        let rendered = render(&state, "[delete]", &Appearance::default(), &ControlTarget::Submit);
        assert_eq!(rendered.markup, "[sure?]");
        assert_eq!(rendered.style, "");
    }

    #[test]
    fn test_custom_appearance() {
        let mut state = ControlState::new();
        let mut timer = ManualScheduler::new();
        let appearance = Appearance {
            confirm_label: "Really?".into(),
            link_class: "btn".into(),
            armed_class: "btn-armed".into(),
        };

        state.activate(None, 1000, &mut timer);
        let rendered = render(&state, "Delete", &appearance, &ControlTarget::Submit);
        assert_eq!(rendered.markup, "Really?");
        assert_eq!(rendered.class, "btn btn-armed");
    }

    #[test]
    fn test_armed_link_is_inline_block() {
        let mut state = ControlState::new();
        let mut timer = ManualScheduler::new();
        let link = ControlTarget::Link {
            href: "/repo/2/remove".into(),
        };

        state.activate(Some(71), 1000, &mut timer);
        let rendered = render(&state, "[remove]", &Appearance::default(), &link);
        assert!(rendered.style.contains("display: inline-block"));
        assert!(rendered.style.contains("min-width: 71px"));

        let fired = timer.advance(1000).unwrap();
        state.revert(fired);
        assert_eq!(render(&state, "[remove]", &Appearance::default(), &link).style, "");
    }
}
