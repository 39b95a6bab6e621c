//! Shared test utilities for integration and unit tests

use std::cell::Cell;
use std::ops::RangeInclusive;
use std::rc::Rc;

use crate::authoring::InlineEditor;
use crate::debug::{
    BoundedIntHandler, DebugItem, DebugItemFlags, DebugPanel, DefaultHandler,
    RenderPipelineStats, ToggleHandler, ValueAccessor,
};

// ============================================================================
// Fake pipeline
// ============================================================================

/// Pipeline stats with counts the test can change between calls
#[derive(Debug, Default)]
pub struct FakePipeline {
    pub atlas_count: Cell<u32>,
    pub shadow_count: Cell<u32>,
}

impl FakePipeline {
    pub fn new(atlas_count: u32, shadow_count: u32) -> Self {
        Self {
            atlas_count: Cell::new(atlas_count),
            shadow_count: Cell::new(shadow_count),
        }
    }
}

impl RenderPipelineStats for FakePipeline {
    fn shadow_atlas_count(&self) -> u32 {
        self.atlas_count.get()
    }

    fn current_shadow_count(&self) -> u32 {
        self.shadow_count.get()
    }
}

// ============================================================================
// Recording editor
// ============================================================================

/// One call made against [`RecordingEditor`]
#[derive(Debug, Clone, PartialEq)]
pub enum EditorCall {
    BeginGroup,
    EndGroup,
    BeginIndent(String),
    EndIndent,
    Toggle(String),
    Dropdown(String),
    Int(String, RangeInclusive<i64>),
    Float(String),
    Label(String, String),
}

/// Inline editor that records calls and can apply one scripted edit
#[derive(Debug, Default)]
pub struct RecordingEditor {
    pub calls: Vec<EditorCall>,
    /// Label to edit, and the value to write into it
    pub edit: Option<(String, ScriptedEdit)>,
}

/// A scripted user edit
#[derive(Debug, Clone, Copy)]
pub enum ScriptedEdit {
    Toggle,
    Select(usize),
    Int(i64),
    Float(f32),
}

impl RecordingEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Editor that will apply `edit` to the control labeled `label`
    pub fn editing(label: &str, edit: ScriptedEdit) -> Self {
        Self {
            calls: Vec::new(),
            edit: Some((label.to_string(), edit)),
        }
    }

    /// Labels of every value control drawn, in order
    pub fn labels(&self) -> Vec<String> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                EditorCall::Toggle(l)
                | EditorCall::Dropdown(l)
                | EditorCall::Int(l, _)
                | EditorCall::Float(l)
                | EditorCall::Label(l, _) => Some(l.clone()),
                _ => None,
            })
            .collect()
    }

    fn take_edit(&mut self, label: &str) -> Option<ScriptedEdit> {
        match &self.edit {
            Some((target, edit)) if target == label => {
                let edit = *edit;
                self.edit = None;
                Some(edit)
            }
            _ => None,
        }
    }
}

impl InlineEditor for RecordingEditor {
    fn vertical_group(&mut self, add_contents: &mut dyn FnMut(&mut dyn InlineEditor)) {
        self.calls.push(EditorCall::BeginGroup);
        add_contents(self);
        self.calls.push(EditorCall::EndGroup);
    }

    fn indented(&mut self, id: &str, add_contents: &mut dyn FnMut(&mut dyn InlineEditor)) {
        self.calls.push(EditorCall::BeginIndent(id.to_string()));
        add_contents(self);
        self.calls.push(EditorCall::EndIndent);
    }

    fn toggle(&mut self, label: &str, value: &mut bool) -> bool {
        self.calls.push(EditorCall::Toggle(label.to_string()));
        match self.take_edit(label) {
            Some(ScriptedEdit::Toggle) => {
                *value = !*value;
                true
            }
            _ => false,
        }
    }

    fn enum_dropdown(&mut self, label: &str, _options: &[String], selected: &mut usize) -> bool {
        self.calls.push(EditorCall::Dropdown(label.to_string()));
        match self.take_edit(label) {
            Some(ScriptedEdit::Select(index)) => {
                *selected = index;
                true
            }
            _ => false,
        }
    }

    fn int_field(&mut self, label: &str, value: &mut i64, range: RangeInclusive<i64>) -> bool {
        self.calls.push(EditorCall::Int(label.to_string(), range));
        match self.take_edit(label) {
            Some(ScriptedEdit::Int(v)) => {
                // Direct text entry is not range-limited
                *value = v;
                true
            }
            _ => false,
        }
    }

    fn float_field(
        &mut self,
        label: &str,
        value: &mut f32,
        _range: Option<RangeInclusive<f32>>,
    ) -> bool {
        self.calls.push(EditorCall::Float(label.to_string()));
        match self.take_edit(label) {
            Some(ScriptedEdit::Float(v)) => {
                *value = v;
                true
            }
            _ => false,
        }
    }

    fn label(&mut self, label: &str, text: &str) {
        self.calls
            .push(EditorCall::Label(label.to_string(), text.to_string()));
    }
}

// ============================================================================
// Panel builders
// ============================================================================

/// Backing storage for the three-item "Lighting" scenario panel
pub struct ScenarioValues {
    pub a: Rc<Cell<bool>>,
    pub b: Rc<Cell<i32>>,
    pub c: Rc<Cell<f32>>,
}

/// Panel "Lighting" with A (toggle), B (bounded 0..=4), C (display-only)
pub fn scenario_panel() -> (DebugPanel, ScenarioValues) {
    let values = ScenarioValues {
        a: Rc::new(Cell::new(false)),
        b: Rc::new(Cell::new(0)),
        c: Rc::new(Cell::new(0.5)),
    };
    let mut panel = DebugPanel::new("Lighting");
    panel.register(DebugItem::new(
        "A",
        ValueAccessor::from_cell(Rc::clone(&values.a)),
        DebugItemFlags::empty(),
        ToggleHandler,
    ));
    panel.register(DebugItem::new(
        "B",
        ValueAccessor::from_cell(Rc::clone(&values.b)),
        DebugItemFlags::empty(),
        BoundedIntHandler::new(0, 4),
    ));
    panel.register(DebugItem::new(
        "C",
        ValueAccessor::from_cell(Rc::clone(&values.c)),
        DebugItemFlags::empty(),
        DefaultHandler,
    ));
    (panel, values)
}

/// Panel of `n` toggles named `item0..item{n-1}`
pub fn toggle_panel(name: &str, n: usize) -> DebugPanel {
    let mut panel = DebugPanel::new(name);
    for i in 0..n {
        panel.register(DebugItem::new(
            &format!("item{}", i),
            ValueAccessor::from_cell(Rc::new(Cell::new(false))),
            DebugItemFlags::empty(),
            ToggleHandler,
        ));
    }
    panel
}
