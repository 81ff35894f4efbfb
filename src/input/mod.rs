mod command_mode;
mod insert_mode;
mod normal_mode;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use notify::{Event as NotifyEvent, RecursiveMode, Watcher};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::time::Duration;

use crate::app::{App, InputMode};

pub fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut ratatui::Terminal<B>,
    mut app: App,
) -> Result<()>
where
    <B as ratatui::backend::Backend>::Error: Send + Sync + 'static,
{
    // Watch the loaded text file so external edits show up live
    let (tx, mut rx): (std::sync::mpsc::Sender<NotifyEvent>, Receiver<NotifyEvent>) =
        mpsc::channel();
    let mut watcher =
        notify::recommended_watcher(move |res: Result<NotifyEvent, notify::Error>| {
            if let Ok(event) = res {
                let _ = tx.send(event);
            }
        })?;

    if let Some(ref path) = app.file_path {
        let _ = watcher.watch(path, RecursiveMode::NonRecursive);
    }

    loop {
        terminal.draw(|f| crate::ui::ui(f, &mut app))?;
        app.update_status();

        // Re-point the watcher when :e or :w FILE changed the path
        if app.file_path_changed {
            drop(watcher);
            let (new_tx, new_rx): (std::sync::mpsc::Sender<NotifyEvent>, Receiver<NotifyEvent>) =
                mpsc::channel();
            watcher =
                notify::recommended_watcher(move |res: Result<NotifyEvent, notify::Error>| {
                    if let Ok(event) = res {
                        let _ = new_tx.send(event);
                    }
                })?;

            if let Some(ref path) = app.file_path {
                let _ = watcher.watch(path, RecursiveMode::NonRecursive);
            }

            rx = new_rx;
            app.file_path_changed = false;
        }

        if app.auto_reload {
            match rx.try_recv() {
                Ok(event) => {
                    if matches!(event.kind, notify::EventKind::Modify(_)) {
                        // Ignore the echo of our own save for a second
                        let should_reload = match app.last_save_time {
                            Some(last_save) => last_save.elapsed() > Duration::from_millis(1000),
                            None => true,
                        };
                        if !app.is_modified && should_reload && app.file_path.is_some() {
                            app.reload_file();
                        }
                    }
                }
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Disconnected) => {}
            }
        }

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                let quit = match app.input_mode {
                    InputMode::Normal => normal_mode::handle_normal_mode(&mut app, key)?,
                    InputMode::Command => command_mode::handle_command_mode(&mut app, key)?,
                    InputMode::Insert => {
                        insert_mode::handle_insert_mode(&mut app, key);
                        false
                    }
                };

                if quit {
                    let _ = app.settings.save();
                    return Ok(());
                }
            }
        }
    }
}
