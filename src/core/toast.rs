// Toast stack bookkeeping, independent of the DOM.

use crate::constants::TOAST_DEFAULT_DURATION_MS;
use rand::Rng;
use std::collections::VecDeque;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    #[default]
    Info,
}

impl ToastKind {
    pub fn class_name(self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Info => "info",
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ToastOptions {
    pub id: Option<String>,
    pub duration_ms: Option<u32>,
    pub kind: ToastKind,
    pub max_stack: Option<usize>,
}

impl ToastOptions {
    pub fn kind(kind: ToastKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }
}

/// What the view has to do to show one toast.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastPlan {
    pub id: String,
    pub duration_ms: u32,
    pub class_name: String,
    /// Oldest toast to drop first because the stack is full.
    pub evict: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct ToastStack {
    visible: VecDeque<String>,
}

impl ToastStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.visible.iter().any(|v| v == id)
    }

    pub fn push<R: Rng>(&mut self, options: &ToastOptions, rng: &mut R) -> ToastPlan {
        let id = options
            .id
            .clone()
            .unwrap_or_else(|| format!("toast-{:016x}", rng.gen::<u64>()));

        let evict = match options.max_stack {
            Some(max) if max > 0 && self.visible.len() >= max => self.visible.pop_front(),
            _ => None,
        };

        // a reused id replaces its earlier entry
        self.visible.retain(|v| v != &id);
        self.visible.push_back(id.clone());

        ToastPlan {
            id,
            duration_ms: options.duration_ms.unwrap_or(TOAST_DEFAULT_DURATION_MS),
            class_name: format!("toast {}", options.kind.class_name()),
            evict,
        }
    }

    /// Returns false for ids that are not on the stack.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.visible.len();
        self.visible.retain(|v| v != id);
        self.visible.len() != before
    }
}
