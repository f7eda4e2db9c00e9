use siocopy::{StageEvent, StageEventSink};

use crate::ui::context::UiContext;
use crate::ui::views::stage::render_event;

/// Prints stage events as they happen
pub struct ConsoleEventSink {
    ui: UiContext,
}

impl ConsoleEventSink {
    pub fn new(ui: UiContext) -> Self {
        Self { ui }
    }
}

impl StageEventSink for ConsoleEventSink {
    fn on_event(&self, event: StageEvent) {
        if let Some(line) = render_event(&event, &self.ui) {
            println!("{}", line);
        }
    }
}
