//! Application state: single-owner, main-thread only.
//!
//! All TUI state lives here. The worker thread communicates via channels.

use std::collections::VecDeque;
use std::sync::mpsc::{Receiver, Sender};

use chrono::NaiveDateTime;
use tracing::{info, warn};

use nextgen_core::domain::{clamp_count, MAX_COUNT, MIN_COUNT};
use nextgen_core::{
    format_batch, format_line, AccessGate, GenerationRequest, GeneratorSettings, Signal,
};

use crate::clipboard::Clipboard;
use crate::worker::{WorkerCommand, WorkerResponse};

/// Maximum number of records kept in the error history.
pub const ERROR_HISTORY_CAP: usize = 50;

/// Which screen is shown. Login → Generator is one-way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Login,
    Generator,
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// Error category for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Clipboard,
    Worker,
    Other,
}

impl ErrorCategory {
    pub fn label(self) -> &'static str {
        match self {
            ErrorCategory::Clipboard => "CLIP",
            ErrorCategory::Worker => "WORK",
            ErrorCategory::Other => "ERR",
        }
    }
}

/// An error record for the error history overlay.
#[derive(Debug, Clone)]
pub struct ErrorRecord {
    pub timestamp: NaiveDateTime,
    pub category: ErrorCategory,
    pub message: String,
    pub context: String,
}

/// Focused login field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Username,
    Password,
}

impl LoginField {
    pub fn toggle(self) -> LoginField {
        match self {
            LoginField::Username => LoginField::Password,
            LoginField::Password => LoginField::Username,
        }
    }
}

/// Login view state.
#[derive(Debug)]
pub struct LoginState {
    pub gate: AccessGate,
    pub focus: LoginField,
}

impl LoginState {
    pub fn new() -> Self {
        Self {
            gate: AccessGate::new(),
            focus: LoginField::Username,
        }
    }

    pub fn focused_input(&mut self) -> &mut String {
        match self.focus {
            LoginField::Username => &mut self.gate.username,
            LoginField::Password => &mut self.gate.password,
        }
    }
}

impl Default for LoginState {
    fn default() -> Self {
        Self::new()
    }
}

/// Focusable controls on the generator view, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormControl {
    Asset,
    Count,
    Filter,
    Backtest,
    Generate,
    Signals,
}

impl FormControl {
    const ORDER: [FormControl; 6] = [
        FormControl::Asset,
        FormControl::Count,
        FormControl::Filter,
        FormControl::Backtest,
        FormControl::Generate,
        FormControl::Signals,
    ];

    pub fn index(self) -> usize {
        Self::ORDER.iter().position(|c| *c == self).unwrap_or(0)
    }

    pub fn next(self) -> FormControl {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> FormControl {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    pub fn label(self) -> &'static str {
        match self {
            FormControl::Asset => "Select Asset",
            FormControl::Count => "Number of Signals",
            FormControl::Filter => "Signal Type",
            FormControl::Backtest => "Filter Backtested (95% accuracy)",
            FormControl::Generate => "Generate Signals",
            FormControl::Signals => "Generated Signals",
        }
    }
}

/// Generator view state.
#[derive(Debug)]
pub struct GeneratorState {
    pub request: GenerationRequest,
    pub focus: FormControl,
    pub signals: Vec<Signal>,
    pub cursor: usize,
    pub busy: bool,
    /// Frames drawn while busy; drives the spinner.
    pub spinner_tick: usize,
}

impl GeneratorState {
    pub fn new(request: GenerationRequest) -> Self {
        Self {
            request,
            focus: FormControl::Asset,
            signals: Vec::new(),
            cursor: 0,
            busy: false,
            spinner_tick: 0,
        }
    }

    /// Step the count by `delta`, staying inside the input range.
    pub fn adjust_count(&mut self, delta: i64) {
        let next = (self.request.count as i64 + delta).clamp(MIN_COUNT as i64, MAX_COUNT as i64);
        self.request.count = next as usize;
    }

    /// Append a typed digit to the count, clamped to the input range.
    pub fn push_count_digit(&mut self, digit: u32) {
        let typed = self
            .request
            .count
            .saturating_mul(10)
            .saturating_add(digit as usize);
        // A fresh digit replaces a value that is already at the top of the range.
        let next = if typed > MAX_COUNT { digit as usize } else { typed };
        self.request.count = clamp_count(next);
    }

    /// Drop the last digit of the count (never below the minimum).
    pub fn pop_count_digit(&mut self) {
        self.request.count = clamp_count(self.request.count / 10);
    }

    pub fn selected_signal(&self) -> Option<&Signal> {
        self.signals.get(self.cursor)
    }
}

/// Which overlay (if any) is shown on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Help,
    ErrorHistory,
}

/// Top-level application state.
pub struct AppState {
    // Navigation
    pub view: View,
    pub running: bool,

    // View states
    pub login: LoginState,
    pub generator: GeneratorState,

    // Worker communication
    pub worker_tx: Sender<WorkerCommand>,
    pub worker_rx: Receiver<WorkerResponse>,

    // Platform
    pub clipboard: Box<dyn Clipboard>,
    pub settings: GeneratorSettings,

    // Cross-cutting
    pub status_message: Option<(String, StatusLevel)>,
    pub error_history: VecDeque<ErrorRecord>,
    pub error_scroll: usize,
    pub overlay: Overlay,
}

impl AppState {
    pub fn new(
        worker_tx: Sender<WorkerCommand>,
        worker_rx: Receiver<WorkerResponse>,
        clipboard: Box<dyn Clipboard>,
        settings: GeneratorSettings,
    ) -> Self {
        Self {
            view: View::Login,
            running: true,
            login: LoginState::new(),
            generator: GeneratorState::new(settings.initial_request()),
            worker_tx,
            worker_rx,
            clipboard,
            settings,
            status_message: None,
            error_history: VecDeque::with_capacity(ERROR_HISTORY_CAP),
            error_scroll: 0,
            overlay: Overlay::None,
        }
    }

    /// Push an error to the history, capping at `ERROR_HISTORY_CAP`.
    pub fn push_error(&mut self, category: ErrorCategory, message: String, context: String) {
        let record = ErrorRecord {
            timestamp: chrono::Local::now().naive_local(),
            category,
            message: message.clone(),
            context,
        };
        self.error_history.push_front(record);
        if self.error_history.len() > ERROR_HISTORY_CAP {
            self.error_history.pop_back();
        }
        self.status_message = Some((message, StatusLevel::Error));
    }

    /// Set an info status message.
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    /// Set a warning status message.
    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }

    /// Submit the login form. Switches to the generator view on a match.
    pub fn submit_login(&mut self) {
        if self.login.gate.submit().is_ok() {
            self.view = View::Generator;
            self.login.gate.password.clear();
            self.set_status("Access granted");
        }
    }

    /// Start a generation unless one is already in flight.
    ///
    /// Returns true if a command was sent. The visible list is cleared at
    /// trigger time; results arrive through `handle_worker_response`.
    pub fn trigger_generate(&mut self) -> bool {
        if self.view != View::Generator || self.generator.busy {
            return false;
        }

        let command = WorkerCommand::Generate {
            request: self.generator.request.clone(),
            delay: self.settings.delay(),
        };
        if let Err(e) = self.worker_tx.send(command) {
            self.push_error(
                ErrorCategory::Worker,
                "Signal worker is not running".into(),
                e.to_string(),
            );
            return false;
        }

        info!(
            count = self.generator.request.count,
            asset = %self.generator.request.asset,
            filter = %self.generator.request.direction_filter,
            backtest = self.generator.request.backtest_filter,
            "generation requested"
        );
        self.generator.busy = true;
        self.generator.spinner_tick = 0;
        self.generator.signals.clear();
        self.generator.cursor = 0;
        self.set_status("Generating...");
        true
    }

    pub fn handle_worker_response(&mut self, resp: WorkerResponse) {
        match resp {
            WorkerResponse::Generated { signals, elapsed_ms } => {
                self.generator.busy = false;
                self.generator.cursor = 0;
                let n = signals.len();
                self.generator.signals = signals;
                if n == 0 {
                    self.set_warning("No signals survived the filters");
                } else {
                    self.set_status(format!("Generated {n} signals in {elapsed_ms} ms"));
                }
            }
        }
    }

    /// Copy the selected signal's line to the clipboard.
    pub fn copy_selected(&mut self) {
        let Some(signal) = self.generator.selected_signal() else {
            self.set_warning("Nothing to copy");
            return;
        };
        let text = format_line(signal);
        self.copy_text(&text, "Signal copied to clipboard");
    }

    /// Copy the whole batch to the clipboard.
    pub fn copy_all(&mut self) {
        if self.generator.signals.is_empty() {
            self.set_warning("Nothing to copy");
            return;
        }
        let text = format_batch(&self.generator.signals);
        let n = self.generator.signals.len();
        self.copy_text(&text, format!("{n} signals copied to clipboard"));
    }

    fn copy_text(&mut self, text: &str, success: impl Into<String>) {
        match self.clipboard.write_text(text) {
            Ok(()) => self.set_status(success),
            Err(e) => {
                warn!(error = %e, "clipboard write failed");
                self.push_error(
                    ErrorCategory::Clipboard,
                    "Failed to copy to clipboard".into(),
                    e.to_string(),
                );
            }
        }
    }
}
