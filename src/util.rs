/// Key binding shown in the help overlay
#[derive(Debug, Clone, Copy)]
pub struct Shortcut {
    pub key: &'static str,
    pub description: &'static str,
}
