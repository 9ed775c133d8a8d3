use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event};
use ratatui::Frame;

use crate::clipboard::ClipboardManager;
use crate::config::AppConfig;
use crate::crypto::{self, EncryptedNote, NoteDraft};
use crate::error::Result;
use crate::field::Starfield;
use crate::ui::screens::home::HomeScreen;
use crate::ui::{Action, Component};

pub struct App {
    config: AppConfig,
    clipboard: ClipboardManager,
    home: HomeScreen,
    /// Pending result channel while an encryption worker is running.
    encrypt_rx: Option<mpsc::Receiver<Result<EncryptedNote>>>,
    running: bool,
    last_frame: Instant,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let clipboard = ClipboardManager::new(config.clipboard_clear_secs);
        let home = HomeScreen::new(config.startup_mode);

        Self {
            config,
            clipboard,
            home,
            encrypt_rx: None,
            running: true,
            last_frame: Instant::now(),
        }
    }

    pub fn run(&mut self, terminal: &mut ratatui::DefaultTerminal) -> io::Result<()> {
        let tick_rate = Duration::from_millis(self.config.tick_rate_ms);

        while self.running {
            // One simulation step per drawn frame, focus flag sampled
            // between frames.
            let dt = Starfield::dt_from_elapsed(self.last_frame.elapsed());
            self.last_frame = Instant::now();
            self.home.step_field(dt);

            terminal.draw(|frame| self.render(frame))?;

            self.poll_encrypt_result();
            self.home.tick();

            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key) => {
                        let action = self.home.handle_key(key);
                        self.handle_action(action);
                    }
                    Event::Mouse(mouse) => {
                        let action = self.home.handle_mouse(mouse);
                        self.handle_action(action);
                    }
                    // A resize is picked up on the next layout pass.
                    _ => {}
                }
            }
        }
        Ok(())
    }

    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.home.update_layout(area);
        self.home.render(frame, area);
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Quit => self.running = false,
            Action::SelectMode(mode) => {
                self.home.set_status(format!("Mode: {mode}"));
            }
            Action::EncryptNote { text, passphrase } => {
                let (tx, rx) = mpsc::channel();
                self.encrypt_rx = Some(rx);
                thread::spawn(move || {
                    let draft = NoteDraft { text, passphrase };
                    let result = crypto::encrypt_note(&draft.text, &draft.passphrase);
                    let _ = tx.send(result);
                });
            }
            Action::CopyPayload(json) => match self.clipboard.copy_and_clear(&json) {
                Ok(()) => self.home.set_status(format!(
                    "Payload copied (clears in {}s)",
                    self.config.clipboard_clear_secs
                )),
                Err(e) => self.home.set_status(format!("Clipboard error: {e}")),
            },
            Action::SetStatus(msg) => self.home.set_status(msg),
        }
    }

    /// Collect a finished encryption worker, if any. Non-blocking; the
    /// frame loop calls this once per frame.
    fn poll_encrypt_result(&mut self) {
        let Some(rx) = self.encrypt_rx.take() else {
            return;
        };

        match rx.try_recv() {
            Ok(Ok(note)) => {
                self.home.journal_panel.set_result(&note);
                self.home.set_status("Encrypted locally".to_string());
            }
            Ok(Err(e)) => {
                self.home.journal_panel.set_error(format!("Encryption failed: {e}"));
            }
            Err(mpsc::TryRecvError::Empty) => self.encrypt_rx = Some(rx),
            Err(mpsc::TryRecvError::Disconnected) => {
                self.home
                    .journal_panel
                    .set_error("Encryption worker exited unexpectedly".to_string());
            }
        }
    }
}
