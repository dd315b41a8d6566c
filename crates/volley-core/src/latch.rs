/// Direction of a content-visibility transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealEvent {
    Show,
    Hide,
}

/// Edge-triggered one-bit latch gating the content reveal.
///
/// Emits once per crossing into or out of the showcase, no matter how many
/// frames are polled on either side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn update(&mut self, in_showcase: bool) -> Option<RevealEvent> {
        match (self.revealed, in_showcase) {
            (false, true) => {
                self.revealed = true;
                Some(RevealEvent::Show)
            }
            (true, false) => {
                self.revealed = false;
                Some(RevealEvent::Hide)
            }
            _ => None,
        }
    }
}
