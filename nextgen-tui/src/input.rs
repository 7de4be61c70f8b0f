//! Keyboard input dispatch: global keys → overlays → view-specific handlers.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{AppState, FormControl, Overlay, View};

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Ctrl+C quits from anywhere.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.running = false;
        return;
    }

    // 2. Overlays consume input first.
    match app.overlay {
        Overlay::Help => {
            app.overlay = Overlay::None;
            return;
        }
        Overlay::ErrorHistory => {
            handle_error_overlay(app, key);
            return;
        }
        Overlay::None => {}
    }

    // 3. View-specific keys.
    match app.view {
        View::Login => handle_login_key(app, key),
        View::Generator => handle_generator_key(app, key),
    }
}

fn handle_error_overlay(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('e') => {
            app.overlay = Overlay::None;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            if app.error_scroll + 1 < app.error_history.len() {
                app.error_scroll += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.error_scroll = app.error_scroll.saturating_sub(1);
        }
        _ => {}
    }
}

fn handle_login_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.running = false,
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            app.login.focus = app.login.focus.toggle();
        }
        KeyCode::Enter => app.submit_login(),
        KeyCode::Backspace => {
            app.login.focused_input().pop();
        }
        KeyCode::Char(c) => app.login.focused_input().push(c),
        _ => {}
    }
}

fn handle_generator_key(app: &mut AppState, key: KeyEvent) {
    // Global generator keys.
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char('?') => {
            app.overlay = Overlay::Help;
            return;
        }
        KeyCode::Char('e') => {
            app.error_scroll = 0;
            app.overlay = Overlay::ErrorHistory;
            return;
        }
        KeyCode::Char('g') => {
            app.trigger_generate();
            return;
        }
        KeyCode::Char('c') => {
            app.copy_selected();
            return;
        }
        KeyCode::Char('y') => {
            app.copy_all();
            return;
        }
        KeyCode::Tab => {
            app.generator.focus = app.generator.focus.next();
            return;
        }
        KeyCode::BackTab => {
            app.generator.focus = app.generator.focus.prev();
            return;
        }
        _ => {}
    }

    if app.generator.focus == FormControl::Signals {
        handle_signal_list_key(app, key);
    } else {
        handle_form_key(app, key);
    }
}

fn handle_form_key(app: &mut AppState, key: KeyEvent) {
    let focus = app.generator.focus;
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.generator.focus = focus.next(),
        KeyCode::Char('k') | KeyCode::Up => app.generator.focus = focus.prev(),
        KeyCode::Char('h') | KeyCode::Left => adjust_control(app, -1),
        KeyCode::Char('l') | KeyCode::Right => adjust_control(app, 1),
        KeyCode::Char(' ') if focus == FormControl::Backtest => {
            let request = &mut app.generator.request;
            request.backtest_filter = !request.backtest_filter;
        }
        KeyCode::Char(c) if focus == FormControl::Count => {
            if let Some(d) = c.to_digit(10) {
                app.generator.push_count_digit(d);
            }
        }
        KeyCode::Backspace if focus == FormControl::Count => app.generator.pop_count_digit(),
        KeyCode::Enter => {
            app.trigger_generate();
        }
        _ => {}
    }
}

fn adjust_control(app: &mut AppState, step: i64) {
    let g = &mut app.generator;
    match g.focus {
        FormControl::Asset => {
            g.request.asset = if step > 0 {
                g.request.asset.next()
            } else {
                g.request.asset.prev()
            };
        }
        FormControl::Count => g.adjust_count(step),
        FormControl::Filter => {
            g.request.direction_filter = if step > 0 {
                g.request.direction_filter.next()
            } else {
                g.request.direction_filter.prev()
            };
        }
        FormControl::Backtest => g.request.backtest_filter = !g.request.backtest_filter,
        FormControl::Generate | FormControl::Signals => {}
    }
}

fn handle_signal_list_key(app: &mut AppState, key: KeyEvent) {
    let len = app.generator.signals.len();
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if app.generator.cursor + 1 < len {
                app.generator.cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            if app.generator.cursor == 0 {
                app.generator.focus = FormControl::Signals.prev();
            } else {
                app.generator.cursor -= 1;
            }
        }
        KeyCode::Home => app.generator.cursor = 0,
        KeyCode::End => app.generator.cursor = len.saturating_sub(1),
        KeyCode::Enter => {
            app.trigger_generate();
        }
        _ => {}
    }
}
