use crate::{
    core::{
        cmd::Cmd,
        msg::{system::SystemMsg, ui::UiMsg, Msg},
        state::{ui::Tab, AppState},
    },
    model::{
        carousel, contact_form, editor,
        timer::{self, Signal},
        todo_list,
    },
};

const FORM_LABEL: &str = "Form";
const CAROUSEL_LABEL: &str = "Carousel";
const TODO_LABEL: &str = "Todo";

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    let commands = match msg {
        Msg::System(system_msg) => state.system.update(system_msg),
        Msg::Ui(ui_msg) => update_ui(ui_msg, &mut state),
        Msg::ContactForm(message) => update_contact_form(message, &mut state),
        Msg::Carousel(message) => update_carousel(message, &mut state),
        Msg::Timer(message) => update_timer(message, &mut state),
        Msg::Todo(message) => update_todo(message, &mut state),
    };
    (state, commands)
}

fn flash_error(state: &mut AppState, label: &str, error: &impl ToString) -> Vec<Cmd> {
    let message = error.to_string();
    state.system.update(SystemMsg::error(label, message.clone()));
    vec![Cmd::log_error(format!("{label}: {message}"))]
}

fn update_ui(msg: UiMsg, state: &mut AppState) -> Vec<Cmd> {
    match msg {
        UiMsg::NextTab => state.focus_tab(state.ui.active_tab.next()),
        UiMsg::PreviousTab => state.focus_tab(state.ui.active_tab.previous()),
        UiMsg::SelectTab(tab) => state.focus_tab(tab),

        UiMsg::NextField | UiMsg::PreviousField => {
            if state.ui.active_tab != Tab::Contact {
                return vec![];
            }
            let field = state.ui.focused_field;
            state.ui.focused_field = if msg == UiMsg::NextField {
                field.next()
            } else {
                field.previous()
            };
            state.edit_focused_field();
        }

        UiMsg::StartComposing => {
            if state.ui.active_tab == Tab::Todo {
                state.ui.start_task_editor();
            }
        }
        UiMsg::CancelComposing => state.ui.stop_editor(),
        UiMsg::SubmitComposing => {
            if state.ui.active_tab != Tab::Todo || !state.ui.is_composing() {
                return vec![];
            }
            let text = state.ui.editor.content();
            state.ui.stop_editor();
            match state.todo.add_task(text) {
                Some(index) => state.ui.selected_task = Some(index),
                None => {
                    state
                        .system
                        .update(SystemMsg::flash(TODO_LABEL, "Ignored blank task"));
                }
            }
        }

        UiMsg::EditorInput(event) => {
            if !state.ui.is_composing() {
                return vec![];
            }
            state
                .ui
                .editor
                .update(editor::Message::KeyEventReceived { event });
            if state.ui.active_tab == Tab::Contact {
                let field = state.ui.focused_field;
                let value = state.ui.editor.content();
                return update_contact_form(
                    contact_form::Message::FieldChanged { field, value },
                    state,
                );
            }
        }

        UiMsg::SelectNextTask => state.ui.select_next_task(state.todo.len()),
        UiMsg::SelectPreviousTask => state.ui.select_previous_task(state.todo.len()),
    }
    vec![]
}

fn update_contact_form(message: contact_form::Message, state: &mut AppState) -> Vec<Cmd> {
    match state.contact_form.update(message) {
        Ok(None) => vec![],
        Ok(Some(ack)) => {
            state.system.update(SystemMsg::flash(FORM_LABEL, ack.message()));
            if state.ui.active_tab == Tab::Contact {
                state.edit_focused_field();
            }
            vec![Cmd::log_info("contact form submitted")]
        }
        Err(errors) => flash_error(state, FORM_LABEL, &errors),
    }
}

fn update_carousel(message: carousel::Message, state: &mut AppState) -> Vec<Cmd> {
    match state.carousel.update(message) {
        Ok(_) => vec![],
        Err(e) => flash_error(state, CAROUSEL_LABEL, &e),
    }
}

fn update_timer(message: timer::Message, state: &mut AppState) -> Vec<Cmd> {
    let mut commands: Vec<Cmd> = state
        .timer
        .update(message)
        .into_iter()
        .filter_map(|signal| match signal {
            Signal::Started => Some(Cmd::ScheduleTick),
            Signal::Stopped => Some(Cmd::CancelTick),
            Signal::Updated(_) => None,
        })
        .collect();
    // Reset is silent, but any live interval must still go.
    if message == timer::Message::Reset {
        commands.push(Cmd::CancelTick);
    }
    commands
}

fn update_todo(message: todo_list::Message, state: &mut AppState) -> Vec<Cmd> {
    match state.todo.update(message) {
        Ok(()) => {
            state.ui.clamp_selection(state.todo.len());
            vec![]
        }
        Err(e) => flash_error(state, TODO_LABEL, &e),
    }
}
