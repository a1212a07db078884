/// Blocking dialogs used by the editor
pub trait UserPrompt {
    /// Asks a yes/no question; `true` means the user accepted
    fn confirm(&self, message: &str) -> bool;
    fn alert(&self, message: &str);
}

/// Native browser `confirm()` and `alert()` dialogs
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BrowserPrompt;

impl UserPrompt for BrowserPrompt {
    fn confirm(&self, message: &str) -> bool {
        gloo::dialogs::confirm(message)
    }

    fn alert(&self, message: &str) {
        gloo::dialogs::alert(message)
    }
}
