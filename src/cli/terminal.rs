//! Terminal implementations of the busy indicator and notifier

use async_trait::async_trait;
use dialoguer::{Password, Select};
use hubref::core::{HubrefError, HubrefResult};
use hubref::di::{BusyIndicator, Notifier};
use hubref::task::{DismissReason, Notification};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Spinner on stderr while a request is in flight
#[derive(Default)]
pub struct SpinnerBusy {
    bar: Mutex<Option<ProgressBar>>,
}

impl SpinnerBusy {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BusyIndicator for SpinnerBusy {
    fn show(&self, message: &str) {
        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
            bar.set_style(style);
        }
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(100));
        if let Ok(mut slot) = self.bar.lock() {
            *slot = Some(bar);
        }
    }

    fn dismiss(&self) {
        if let Some(bar) = self.bar.lock().ok().and_then(|mut slot| slot.take()) {
            bar.finish_and_clear();
        }
    }
}

/// Prints notifications to stderr and, on a terminal, offers the action
///
/// The prompt is abandoned when the notification's duration runs out.
/// Without a terminal nobody can react, so every notification times out
/// immediately.
pub struct TerminalNotifier {
    interactive: bool,
}

impl TerminalNotifier {
    pub fn new(interactive: bool) -> Self {
        Self { interactive }
    }
}

#[async_trait]
impl Notifier for TerminalNotifier {
    async fn notify(&self, notification: &Notification) -> DismissReason {
        eprintln!("✗ {}", notification.message);

        let Some(action) = notification.action.as_ref() else {
            return DismissReason::Timeout;
        };
        if !self.interactive {
            return DismissReason::Timeout;
        }

        let items = vec![action.label().to_string(), "Dismiss".to_string()];
        let prompt = tokio::task::spawn_blocking(move || {
            Select::new().items(&items).default(0).interact_opt()
        });

        match tokio::time::timeout(notification.duration, prompt).await {
            Ok(Ok(Ok(Some(0)))) => DismissReason::Action,
            Ok(_) => DismissReason::Swipe,
            Err(_) => DismissReason::Timeout,
        }
    }

    fn copy_to_clipboard(&self, label: &str, text: &str) {
        println!("--- {} ---", label);
        println!("{}", text);
    }
}

// Trait for user input (for dependency injection in tests)
pub trait UserInput {
    fn prompt_secret(&self, prompt: &str) -> HubrefResult<String>;
}

// Real implementation using dialoguer
pub struct DialoguerInput;

impl UserInput for DialoguerInput {
    fn prompt_secret(&self, prompt: &str) -> HubrefResult<String> {
        Password::new()
            .with_prompt(prompt)
            .interact()
            .map_err(|e| HubrefError::Config(format!("Failed to read input: {}", e)))
    }
}
