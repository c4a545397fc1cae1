use super::args::{SessionCommand, SessionLine};
use super::print::{
    print_config, print_draft, print_error, print_messages, print_plants, print_record,
};
use clap::{CommandFactory, Parser};
use plantbook::api::{CmdMessage, ConfigAction, PlantbookApi};
use plantbook::config::PlantbookConfig;
use plantbook::error::{PlantbookError, Result};
use plantbook::model::PlantId;
use plantbook::photo::FilePicker;
use plantbook::record_view::{CancelOutcome, RecordView, ViewState};
use plantbook::store::PlantStore;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// One running application: the store (inside the api), display preferences, and the
/// screen currently open, if any.
pub struct Session<S: PlantStore> {
    api: PlantbookApi<S>,
    config: PlantbookConfig,
    screen: Option<RecordView>,
}

impl<S: PlantStore> Session<S> {
    pub fn new(api: PlantbookApi<S>, config: PlantbookConfig) -> Self {
        Self {
            api,
            config,
            screen: None,
        }
    }

    pub fn handle_line(&mut self, line: &str) -> Flow {
        let words: Vec<&str> = line.split_whitespace().collect();
        if words.is_empty() {
            return Flow::Continue;
        }

        let parsed = match SessionLine::try_parse_from(words) {
            Ok(parsed) => parsed,
            Err(err) => {
                let rendered = err.render().to_string();
                print!("{}", rendered);
                if !rendered.ends_with('\n') {
                    println!();
                }
                return Flow::Continue;
            }
        };

        match self.dispatch(parsed.command, free_text(line)) {
            Ok(flow) => flow,
            Err(err) => {
                print_error(&err);
                Flow::Continue
            }
        }
    }

    /// `text` is the line after the command word, used verbatim by `name` and `notes`.
    fn dispatch(&mut self, command: SessionCommand, text: &str) -> Result<Flow> {
        match command {
            SessionCommand::List => self.handle_list()?,
            SessionCommand::Add => self.handle_add(),
            SessionCommand::Open { id } => self.handle_open(id)?,
            SessionCommand::Show => self.handle_show()?,
            SessionCommand::Edit => self.handle_edit()?,
            SessionCommand::Name { words } => {
                let name = if words.is_empty() { "" } else { text };
                self.screen_mut()?.set_name(name)?;
                self.handle_show()?;
            }
            SessionCommand::Notes { words } => {
                let screen = self.screen_mut()?;
                if words.is_empty() {
                    screen.clear_notes()?;
                } else {
                    screen.set_notes(text)?;
                }
                self.handle_show()?;
            }
            SessionCommand::Photo { path, clear } => self.handle_photo(path, clear)?,
            SessionCommand::Save => self.handle_save()?,
            SessionCommand::Cancel => self.handle_cancel()?,
            SessionCommand::Back => self.handle_back()?,
            SessionCommand::Config { key, value } => self.handle_config(key, value)?,
            SessionCommand::Help => {
                let help = SessionLine::command().render_help();
                println!("{}", help);
            }
            SessionCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn handle_list(&self) -> Result<()> {
        let result = self.api.list_plants()?;
        print_plants(&result.listed_plants);
        print_messages(&result.messages);
        Ok(())
    }

    fn handle_add(&mut self) {
        let view = self.api.new_record();
        self.replace_screen(view);
        if let Some(view) = &self.screen {
            if let Some(draft) = view.draft() {
                print_draft(view, draft, &self.config);
            }
        }
    }

    fn handle_open(&mut self, id: PlantId) -> Result<()> {
        let view = self.api.open_record(id)?;
        self.replace_screen(view);
        self.handle_show()
    }

    fn handle_show(&self) -> Result<()> {
        let view = self.screen()?;
        if let Some(draft) = view.draft() {
            print_draft(view, draft, &self.config);
            return Ok(());
        }
        let result = self.api.current(view)?;
        for plant in &result.listed_plants {
            print_record(plant, &self.config);
        }
        Ok(())
    }

    fn handle_edit(&mut self) -> Result<()> {
        let mut view = self.take_screen()?;
        let edited = self.api.edit(&mut view);
        self.screen = Some(view);
        edited?;
        self.handle_show()
    }

    fn handle_photo(&mut self, path: Option<PathBuf>, clear: bool) -> Result<()> {
        if clear {
            self.screen_mut()?.clear_photo()?;
            return self.handle_show();
        }
        let path = path.ok_or_else(|| PlantbookError::Api("Give a photo path or --clear".into()))?;

        let mut picker = FilePicker::new(path, self.config.photo_mode);
        let mut view = self.take_screen()?;
        let changed = self.api.acquire_photo(&mut view, &mut picker);
        self.screen = Some(view);
        if !changed? {
            print_messages(&[CmdMessage::warning(
                "No photo selected; keeping the current one.",
            )]);
        }
        self.handle_show()
    }

    fn handle_save(&mut self) -> Result<()> {
        let mut view = self.take_screen()?;
        let saved = self.api.save(&mut view);
        let state = view.state();
        self.screen = Some(view);
        let result = saved?;
        print_messages(&result.messages);

        if state == ViewState::Created {
            self.screen = None;
            return self.handle_list();
        }
        self.handle_show()
    }

    fn handle_cancel(&mut self) -> Result<()> {
        let mut view = self.take_screen()?;
        let outcome = self.api.cancel(&mut view);
        self.screen = Some(view);
        match outcome? {
            CancelOutcome::Viewing => self.handle_show(),
            CancelOutcome::Closed => {
                self.screen = None;
                self.handle_list()
            }
        }
    }

    fn handle_back(&mut self) -> Result<()> {
        self.replace_screen_with(None);
        self.handle_list()
    }

    fn handle_config(&mut self, key: Option<String>, value: Option<String>) -> Result<()> {
        let action = match (key, value) {
            (None, _) => ConfigAction::ShowAll,
            (Some(key), None) => ConfigAction::ShowKey(key),
            (Some(key), Some(value)) => ConfigAction::Set(key, value),
        };
        let show_all = matches!(action, ConfigAction::ShowAll);

        let result = self.api.config(action)?;
        if let Some(config) = result.config {
            if show_all {
                print_config(&config);
            }
            self.config = config;
        }
        print_messages(&result.messages);
        Ok(())
    }

    fn screen(&self) -> Result<&RecordView> {
        self.screen.as_ref().ok_or_else(no_screen)
    }

    fn screen_mut(&mut self) -> Result<&mut RecordView> {
        self.screen.as_mut().ok_or_else(no_screen)
    }

    fn take_screen(&mut self) -> Result<RecordView> {
        self.screen.take().ok_or_else(no_screen)
    }

    fn replace_screen(&mut self, view: RecordView) {
        self.replace_screen_with(Some(view));
    }

    fn replace_screen_with(&mut self, view: Option<RecordView>) {
        if let Some(old) = self.screen.take() {
            if old.draft().is_some() {
                print_messages(&[CmdMessage::warning("Unsaved changes discarded.")]);
            }
        }
        self.screen = view;
    }
}

fn free_text(line: &str) -> &str {
    let line = line.trim_start();
    match line.find(char::is_whitespace) {
        Some(end) => line[end..].trim_start(),
        None => "",
    }
}

fn no_screen() -> PlantbookError {
    PlantbookError::Api("No plant is open. Use `open <id>` or `add` first.".into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_text_keeps_inner_spacing() {
        assert_eq!(free_text("notes a   b"), "a   b");
        assert_eq!(free_text("  name   Ficus  Lyrata"), "Ficus  Lyrata");
    }

    #[test]
    fn free_text_of_bare_command_is_empty() {
        assert_eq!(free_text("notes"), "");
        assert_eq!(free_text("name   "), "");
    }
}
