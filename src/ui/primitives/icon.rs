use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Done,
    Failed,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Done) => theme::icons::DONE,
            (true, Icon::Failed) => theme::icons::FAILED,
            (false, Icon::Done) => theme::icons_ascii::DONE,
            (false, Icon::Failed) => theme::icons_ascii::FAILED,
        }
    }
}
