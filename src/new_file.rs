use anyhow::Result;

use crate::config::Config;
use crate::context::ActiveContext;
use crate::dialog::{self, Dialogs, NewFileOptions};
use crate::editor::{self, HostEditor};
use crate::ui::TerminalUi;

pub fn run(context: &ActiveContext, config: &Config, relative_to_root: bool) -> Result<()> {
    let mut ui = TerminalUi::new();
    let mut host = HostEditor::new(config);
    let result = Dialogs::new(context, config, &mut ui, &mut host)
        .new_file(&NewFileOptions { relative_to_root });
    if let Some(outcome) = dialog::settle(result, &mut ui)? {
        editor::emit(&outcome)?;
    }
    Ok(())
}
