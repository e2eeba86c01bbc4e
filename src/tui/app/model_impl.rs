//! `Model` trait implementation for the Stargazer TUI application.
//!
//! This module contains the `bubbletea_rs::Model` trait implementation for
//! `SearchApp`, handling initialisation, update dispatch, and view rendering.

use std::any::Any;

use bubbletea_rs::{Cmd, Model};
use unicode_width::UnicodeWidthChar;

use super::SearchApp;
use crate::tui::input::map_key_to_message;
use crate::tui::messages::AppMsg;
use crate::tui::storage;

impl Model for SearchApp {
    fn init() -> (Self, Option<Cmd>) {
        let context = storage::get_app_context();
        let (width, height) = storage::get_initial_terminal_size();
        let model = Self::new(context.gateway, context.initial_criteria)
            .with_telemetry(storage::get_telemetry_sink())
            .with_dimensions(width, height);

        // The viewer query is eager; the repository query waits for a submit.
        let cmd = model.viewer_cmd();
        (model, Some(cmd))
    }

    fn update(&mut self, msg: Box<dyn Any + Send>) -> Option<Cmd> {
        if let Some(app_msg) = msg.downcast_ref::<AppMsg>() {
            return self.handle_message(app_msg);
        }

        if let Some(key_msg) = msg.downcast_ref::<bubbletea_rs::event::KeyMsg>() {
            // Any key closes the help overlay.
            if self.show_help {
                return self.handle_message(&AppMsg::ToggleHelp);
            }
            return map_key_to_message(key_msg).and_then(|mapped| self.handle_message(&mapped));
        }

        if let Some(size_msg) = msg.downcast_ref::<bubbletea_rs::event::WindowSizeMsg>() {
            let resize_msg = AppMsg::WindowResized {
                width: size_msg.width,
                height: size_msg.height,
            };
            return self.handle_message(&resize_msg);
        }

        None
    }

    fn view(&self) -> String {
        if self.show_help {
            return self.normalise_viewport(&self.render_help_overlay());
        }
        self.normalise_viewport(&self.render_main_view())
    }
}

impl SearchApp {
    /// Normalises the rendered frame to terminal dimensions.
    ///
    /// Rows are clamped to one column less than the terminal width to avoid
    /// autowrap and padded with spaces so shorter frames clear stale cells.
    pub(super) fn normalise_viewport(&self, output: &str) -> String {
        let width = usize::from(self.width.max(1));
        let safe_width = width.saturating_sub(1).max(1);
        let height = usize::from(self.height.max(1));

        let mut lines: Vec<String> = output
            .lines()
            .map(|line| pad_or_truncate_line(line, safe_width))
            .collect();
        lines.resize(height, " ".repeat(safe_width));

        let mut frame = lines.join("\n");
        frame.push('\n');
        frame
    }
}

/// Fits `line` into exactly `width` terminal columns.
fn pad_or_truncate_line(line: &str, width: usize) -> String {
    let mut used = 0usize;
    let mut fitted: String = line
        .chars()
        .take_while(|&ch| {
            let next = used.saturating_add(UnicodeWidthChar::width(ch).unwrap_or(0));
            let fits = next <= width;
            if fits {
                used = next;
            }
            fits
        })
        .collect();
    fitted.extend(std::iter::repeat_n(' ', width.saturating_sub(used)));
    fitted
}
