use crate::parsing::blots::{Blot, OpWindow};

/// Fallback for operations nothing else claims. Renders as nothing.
#[derive(Debug)]
pub struct NullBlot;

impl NullBlot {
    pub const NAME: &'static str = "null";

    pub fn build(_window: OpWindow<'_>) -> Box<dyn Blot> {
        Box::new(Self)
    }
}

impl Blot for NullBlot {
    fn kind(&self) -> &str {
        Self::NAME
    }

    fn content(&self) -> String {
        String::new()
    }
}
