//! Transient confirmation toast with a cancellable auto-dismiss timer.
//!
//! The timer is never aborted directly. Every visibility transition bumps a
//! generation counter; the spawned dismissal task re-checks the counter
//! after sleeping and only a task from the current generation may invoke
//! `on_close`. Stale tasks, and tasks whose component was torn down, fall
//! through without effect.

use leptos::prelude::*;
use leptos::task;

use crate::config::StorefrontConfig;
use crate::icons::{CircleCheckIcon, CloseIcon};
use crate::timing::sleep;

/// Invalidate any pending dismissal and return the new current generation.
pub fn bump_generation(generation: RwSignal<u64>) -> u64 {
    generation.update(|value| *value = value.saturating_add(1));
    generation.get_untracked()
}

/// Whether a spawned dismissal is still the current one.
///
/// Stale generations and disposed counters both report false.
pub fn is_current(generation: RwSignal<u64>, run_id: u64) -> bool {
    generation.try_get_untracked() == Some(run_id)
}

/// What one effect run does to the dismissal timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerAction {
    /// Visibility unchanged; leave any pending dismissal alone.
    Hold,
    /// Toast hidden; invalidate the pending dismissal.
    Cancel,
    /// Toast shown; invalidate, then arm a fresh dismissal.
    Arm,
}

/// Classify an effect run against the previous visibility.
///
/// `RwSignal` notifies on every write, including writes of the value
/// already held, so only genuine transitions touch the timer. At most one
/// dismissal is pending per visible period.
pub fn timer_action(previous: Option<bool>, visible_now: bool) -> TimerAction {
    if previous == Some(visible_now) {
        TimerAction::Hold
    } else if visible_now {
        TimerAction::Arm
    } else {
        TimerAction::Cancel
    }
}

/// Auto-dismissing notification.
///
/// While `is_visible` is false, nothing is rendered. On each transition to
/// true a one-shot timer of `duration_ms` is armed that invokes `on_close`
/// exactly once, unless visibility drops or the close control is used
/// first. Re-setting `is_visible` to true while already visible does not
/// re-arm the timer, so at most one dismissal is pending per visible
/// period.
#[component]
pub fn Toast(
    /// Message body.
    #[prop(into)]
    message: Signal<String>,
    /// Whether the toast is shown, owned by the parent.
    #[prop(into)]
    is_visible: Signal<bool>,
    /// Invoked when the toast should be hidden, either by the timer or the
    /// close control.
    #[prop(into)]
    on_close: Callback<()>,
    /// Auto-dismiss delay. Falls back to the configured default.
    #[prop(into, optional)]
    duration_ms: Option<u32>,
) -> impl IntoView {
    let config = use_context::<StorefrontConfig>().unwrap_or_default();
    let duration_ms = duration_ms.unwrap_or(config.toast_duration_ms);
    let generation = RwSignal::new(0_u64);

    Effect::new(move |previous: Option<bool>| {
        let visible_now = is_visible.get();
        match timer_action(previous, visible_now) {
            TimerAction::Hold => {}
            TimerAction::Cancel => {
                bump_generation(generation);
            }
            TimerAction::Arm => {
                let run_id = bump_generation(generation);
                task::spawn_local(async move {
                    sleep(duration_ms).await;
                    if is_current(generation, run_id) {
                        on_close.run(());
                    }
                });
            }
        }
        visible_now
    });

    let close = move |_| {
        bump_generation(generation);
        on_close.run(());
    };

    move || {
        is_visible.get().then(|| {
            view! {
                <div class="toast">
                    <div class="toast-body">
                        <CircleCheckIcon size=20 class="toast-icon" />
                        <p class="toast-message">{message.get()}</p>
                        <button class="toast-close" aria-label="Close notification" on:click=close>
                            <CloseIcon size=16 />
                        </button>
                    </div>
                </div>
            }
        })
    }
}
