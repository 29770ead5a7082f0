//! Per-frame input dispatch on the current state.

use crate::core::{MenuStateId, State};
use crate::effects::{Cue, EffectRequest, Effects};
use crate::states::{ActiveOutcome, Entry, MenuContext, MenuState, StateSet};
use crate::widgets::SelectorEvent;

/// Result of dispatching one frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepResult {
    /// The current state did not change
    Stayed,

    /// A confirmed option entered a new state; its entry hook already ran
    Entered { to: MenuStateId, selection: usize },

    /// The current state cancelled back to its origin
    Returned(MenuStateId),

    /// Cancel on the root: leave the menu session
    Exit,
}

/// Run one frame of input on `current`.
///
/// Rules are tried in order and the first match ends the frame: active
/// sub-window, cancel, left/right, then confirm and selector housekeeping.
/// Effect requests are appended to `effects` at the point they are raised.
/// The caller applies the returned result to make a new state current.
pub fn step(
    states: &mut StateSet,
    current: MenuStateId,
    ctx: &mut MenuContext<'_>,
    effects: &mut Effects,
) -> StepResult {
    let state = states.get_mut(current);

    if state.is_active(ctx.windows) {
        return match state.active_window_update(ctx) {
            ActiveOutcome::Continue => StepResult::Stayed,
            ActiveOutcome::Cancel => cancel(state),
        };
    }

    if ctx.input.cancel {
        effects.play(Cue::Cancel);
        if current.is_root() {
            effects.push(EffectRequest::ExitSession);
            state.on_cancel();
            return StepResult::Exit;
        }
        return cancel(state);
    }

    if ctx.input.left {
        state.core_mut().options_mut().input_left();
        return StepResult::Stayed;
    }
    if ctx.input.right {
        state.core_mut().options_mut().input_right();
        return StepResult::Stayed;
    }

    let options = state.core_mut().options_mut();
    if ctx.input.confirm {
        if options.is_option_enabled(options.selection()) {
            effects.play(Cue::Confirm);
        }
        options.input_confirm();
    }
    let event = options.event();
    options.update();

    let mut result = StepResult::Stayed;
    if event == SelectorEvent::Confirm {
        let selection = state.core().selection();
        let target = state.transition_state(selection, ctx.windows);

        // Confirming the way back is a cancel: no entry hook, no cue.
        if target == state.origin() {
            return cancel(state);
        }
        if let Some(to) = target.filter(|to| *to != current) {
            states.get_mut(to).on_entry(
                Entry {
                    from: current,
                    from_selection: selection,
                },
                ctx.windows,
            );
            result = StepResult::Entered { to, selection };
        }
    }

    states.get_mut(current).on_update_state(ctx);
    let now_current = match result {
        StepResult::Entered { to, .. } => to,
        _ => current,
    };
    states
        .get_mut(now_current)
        .core_mut()
        .options_mut()
        .update();

    ctx.refresh_status();
    result
}

fn cancel(state: &mut dyn MenuState) -> StepResult {
    match state.on_cancel() {
        Some(to) => StepResult::Returned(to),
        None => StepResult::Stayed,
    }
}
