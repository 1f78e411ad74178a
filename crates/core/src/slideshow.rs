//! Slideshow navigation state.
//!
//! Images are rendered in the background and may finish in any order. The
//! slideshow keeps one slot per image and only ever displays a slot whose
//! text is ready. Positions are 1-based in the public API to match the
//! `< i/n >` footer.

use crate::types::ViewerAction;

/// Render state of one image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot {
    Pending,
    Ready(String),
    Failed,
}

/// What the caller should do after feeding an event in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    None,
    Redraw,
    Quit,
}

#[derive(Debug, Clone)]
pub struct Slideshow {
    slots: Vec<Slot>,
    current: usize,
    started: bool,
}

impl Slideshow {
    pub fn new(len: usize) -> Self {
        Self {
            slots: vec![Slot::Pending; len],
            current: 0,
            started: false,
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// 1-based index of the displayed image.
    pub fn position(&self) -> usize {
        self.current + 1
    }

    /// Index into the original image list of the displayed image.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// True once the first frame has been shown.
    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn slot(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)
    }

    /// Text of the displayed image.
    pub fn current_frame(&self) -> Option<&str> {
        if !self.started {
            return None;
        }
        match self.slots.get(self.current) {
            Some(Slot::Ready(text)) => Some(text),
            _ => None,
        }
    }

    /// Every slot failed; nothing can ever be shown.
    pub fn all_failed(&self) -> bool {
        !self.slots.is_empty() && self.slots.iter().all(|s| *s == Slot::Failed)
    }

    /// Number of slots that are no longer pending.
    pub fn settled(&self) -> usize {
        self.slots.iter().filter(|s| **s != Slot::Pending).count()
    }

    /// Record a finished render.
    pub fn complete(&mut self, index: usize, text: String) -> Transition {
        match self.slots.get_mut(index) {
            Some(slot) => *slot = Slot::Ready(text),
            None => return Transition::None,
        }
        self.try_start()
    }

    /// Record a failed render.
    pub fn fail(&mut self, index: usize) -> Transition {
        match self.slots.get_mut(index) {
            Some(slot) => *slot = Slot::Failed,
            None => return Transition::None,
        }
        self.try_start()
    }

    /// Apply a navigation action.
    ///
    /// Quit is honoured at any time. Navigation is ignored until the first
    /// frame is shown, skips failed images and waits (no-op) when the
    /// neighbouring image is still rendering.
    pub fn apply(&mut self, action: ViewerAction) -> Transition {
        match action {
            ViewerAction::Quit => Transition::Quit,
            _ if !self.started => Transition::None,
            ViewerAction::Next => {
                let target = (self.current + 1..self.slots.len())
                    .find(|&i| self.slots[i] != Slot::Failed);
                self.move_to(target)
            }
            ViewerAction::Prev => {
                let target = (0..self.current)
                    .rev()
                    .find(|&i| self.slots[i] != Slot::Failed);
                self.move_to(target)
            }
        }
    }

    fn move_to(&mut self, target: Option<usize>) -> Transition {
        match target {
            Some(i) if matches!(self.slots[i], Slot::Ready(_)) => {
                self.current = i;
                Transition::Redraw
            }
            _ => Transition::None,
        }
    }

    // The first frame is the first image (in list order) that did not fail.
    fn try_start(&mut self) -> Transition {
        if self.started {
            return Transition::None;
        }
        let Some(first) = self.slots.iter().position(|s| *s != Slot::Failed) else {
            return Transition::None;
        };
        self.current = first;
        if matches!(self.slots[first], Slot::Ready(_)) {
            self.started = true;
            Transition::Redraw
        } else {
            Transition::None
        }
    }
}
