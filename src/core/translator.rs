use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    core::{
        msg::{system::SystemMsg, ui::UiMsg, Msg},
        raw_msg::RawMsg,
        state::{ui::Tab, AppState},
    },
    model::{carousel, contact_form, timer, todo_list},
    presentation::config::keybindings::{Action, Scope},
};

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        RawMsg::Resume => vec![Msg::System(SystemMsg::Resume)],

        RawMsg::Key(key) => translate_key_event(key, state),

        RawMsg::TimerTick(_) => vec![Msg::Timer(timer::Message::Ticked)],

        RawMsg::Error(error) => vec![Msg::System(SystemMsg::error("System", error))],

        // Handled by the runner directly
        RawMsg::Tick | RawMsg::Render | RawMsg::Resize(..) => vec![],
    }
}

/// Translates keyboard input to domain events based on current application state.
///
/// Any key press first clears a visible status flash.
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    let mut msgs = Vec::new();
    if state.system.status_bar.message().is_some() {
        msgs.push(Msg::System(SystemMsg::clear_status()));
    }
    msgs.extend(translate_bound_key(key, state));
    msgs
}

fn translate_bound_key(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Bindings that work everywhere, including inside editors
    match key {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Quit)],

        KeyEvent {
            code: KeyCode::Tab, ..
        } => return vec![Msg::Ui(UiMsg::NextTab)],

        KeyEvent {
            code: KeyCode::BackTab,
            ..
        } => return vec![Msg::Ui(UiMsg::PreviousTab)],

        _ => {}
    }

    let tab = state.ui.active_tab;
    match tab {
        // Every field is always being edited, so unbound keys are text
        Tab::Contact => bound_action(Scope::Contact, key, state)
            .or_else(|| global_shortcut(key, state))
            .map(|action| translate_action_to_msg(action, state))
            .unwrap_or_else(|| vec![Msg::Ui(UiMsg::EditorInput(key))]),
        Tab::Todo if state.ui.is_composing() => match global_shortcut(key, state) {
            Some(action) => translate_action_to_msg(action, state),
            None => translate_composer_keys(key),
        },
        _ => bound_action(tab.into(), key, state)
            .or_else(|| bound_action(Scope::Global, key, state))
            .map(|action| translate_action_to_msg(action, state))
            .unwrap_or_default(),
    }
}

fn bound_action(scope: Scope, key: KeyEvent, state: &AppState) -> Option<Action> {
    state.config.config.keybindings.action_for(scope, key)
}

/// Global bindings reachable while typing: only chords with Ctrl or Alt, plain keys stay text
fn global_shortcut(key: KeyEvent, state: &AppState) -> Option<Action> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        bound_action(Scope::Global, key, state)
    } else {
        None
    }
}

/// Key bindings while a new task is being typed
fn translate_composer_keys(key: KeyEvent) -> Vec<Msg> {
    match key.code {
        KeyCode::Enter => vec![Msg::Ui(UiMsg::SubmitComposing)],
        KeyCode::Esc => vec![Msg::Ui(UiMsg::CancelComposing)],
        _ => vec![Msg::Ui(UiMsg::EditorInput(key))],
    }
}

fn translate_action_to_msg(action: Action, state: &AppState) -> Vec<Msg> {
    match action {
        Action::Quit => vec![Msg::System(SystemMsg::Quit)],
        Action::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        Action::NextTab => vec![Msg::Ui(UiMsg::NextTab)],
        Action::PreviousTab => vec![Msg::Ui(UiMsg::PreviousTab)],

        Action::NextImage => vec![Msg::Carousel(carousel::Message::Next)],
        Action::PreviousImage => vec![Msg::Carousel(carousel::Message::Previous)],

        Action::StartTimer => vec![Msg::Timer(timer::Message::Started)],
        Action::StopTimer => vec![Msg::Timer(timer::Message::Stopped)],
        Action::ResetTimer => vec![Msg::Timer(timer::Message::Reset)],

        Action::NewTask => vec![Msg::Ui(UiMsg::StartComposing)],
        Action::SelectNextTask => vec![Msg::Ui(UiMsg::SelectNextTask)],
        Action::SelectPreviousTask => vec![Msg::Ui(UiMsg::SelectPreviousTask)],
        Action::ToggleDone => state
            .selected_task()
            .map(|index| vec![Msg::Todo(todo_list::Message::DoneToggled { index })])
            .unwrap_or_default(),
        Action::RemoveTask => state
            .selected_task()
            .map(|index| vec![Msg::Todo(todo_list::Message::TaskRemoved { index })])
            .unwrap_or_default(),

        Action::SubmitForm => vec![Msg::ContactForm(contact_form::Message::Submitted)],
        Action::NextField => vec![Msg::Ui(UiMsg::NextField)],
        Action::PreviousField => vec![Msg::Ui(UiMsg::PreviousField)],
    }
}
